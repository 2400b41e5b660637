use crate::config::defaults::WheelDefaults;
use crate::domain::ports::DefaultsProvider;
use crate::utils::error::{Result, SpokeError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file layout:
///
/// ```toml
/// [defaults]
/// left_hub_diameter = 45.0
/// rim_diameter = 622.0
/// total_spokes = 32
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: WheelDefaults,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SpokeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SpokeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl DefaultsProvider for TomlConfig {
    fn defaults(&self) -> &WheelDefaults {
        &self.defaults
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.defaults.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_defaults_table() {
        let toml_content = r#"
[defaults]
left_hub_diameter = 45.0
right_hub_diameter = 52.0
rim_diameter = 622.0
total_spokes = 32
crosses_left = 2
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.defaults.left_hub_diameter, 45.0);
        assert_eq!(config.defaults.right_hub_diameter, Some(52.0));
        assert_eq!(config.defaults.rim_diameter, 622.0);
        assert_eq!(config.defaults.total_spokes, 32);
        assert_eq!(config.defaults.crosses_left, 2);
        // untouched keys keep their built-in values
        assert_eq!(config.defaults.hole_diameter, 2.7);
        assert_eq!(config.defaults.crosses_right, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_builtin_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.defaults, WheelDefaults::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SPOKECALC_TEST_ERD", "599.5");

        let toml_content = r#"
[defaults]
rim_diameter = ${SPOKECALC_TEST_ERD}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.defaults.rim_diameter, 599.5);

        std::env::remove_var("SPOKECALC_TEST_ERD");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[defaults\nrim_diameter = ");
        assert!(matches!(result, Err(SpokeError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[defaults]
rim_diameter = -10.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[defaults]
left_dist = 30.5
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.defaults.left_dist, 30.5);
    }
}
