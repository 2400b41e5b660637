use crate::domain::model::Side;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpokeError {
    #[error("Spoke count on the {side} side must not be zero")]
    ZeroSpokes { side: Side },

    #[error("Negative value under square root on the {side} side: {radicand}")]
    NegativeRoot { side: Side, radicand: f64 },

    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SpokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpokeError::ZeroSpokes { .. }
            | SpokeError::NegativeRoot { .. }
            | SpokeError::NonFinite { .. } => ErrorCategory::Domain,
            SpokeError::InvalidInput { .. } => ErrorCategory::Input,
            SpokeError::ConfigError { .. } | SpokeError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            SpokeError::IoError(_) | SpokeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Domain | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SpokeError::ZeroSpokes { side } => {
                format!("Enter a positive spoke count for the {} side", side)
            }
            SpokeError::NegativeRoot { .. } => {
                "Check that hub, rim and flange distances describe a real wheel".to_string()
            }
            SpokeError::NonFinite { field, .. } => {
                format!("Use a finite number for {}", field)
            }
            SpokeError::InvalidInput { field, .. } => {
                format!("Enter a plain number for {}", field)
            }
            SpokeError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            SpokeError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            SpokeError::IoError(_) => "Check the terminal or file permissions".to_string(),
            SpokeError::SerializationError(_) => "Try the text output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpokeError::ZeroSpokes { side } => {
                format!("The {} side has no spokes, so no length can be computed.", side)
            }
            SpokeError::NegativeRoot { side, .. } => {
                format!("The {} side geometry is impossible; no spoke fits it.", side)
            }
            SpokeError::NonFinite { field, .. } => {
                format!("The value of {} is not a usable number.", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_high_severity() {
        let err = SpokeError::ZeroSpokes { side: Side::Left };
        assert_eq!(err.category(), ErrorCategory::Domain);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("left"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: SpokeError = std::io::Error::other("boom").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }
}
