use crate::config::defaults::WheelDefaults;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "spokecalc")]
#[command(about = "Interactive bicycle wheel spoke length calculator")]
pub struct CliConfig {
    /// TOML file overriding the prompt defaults
    #[arg(short, long, env = "SPOKECALC_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults from `--config` when given, otherwise the built-in ones.
    pub fn load_defaults(&self) -> Result<WheelDefaults> {
        let defaults = match &self.config {
            Some(path) => {
                tracing::debug!("Loading defaults from {}", path);
                TomlConfig::from_file(path)?.defaults
            }
            None => WheelDefaults::default(),
        };
        defaults.validate()?;
        Ok(defaults)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
