use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetStoreError {
    #[error("Catalog request to {url} failed with HTTP status {status}")]
    Http { status: u16, url: String },

    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode pet records: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，用於日誌與使用者提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Console,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序結束碼，一律非零
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl PetStoreError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http { .. } | Self::Transport(_) => ErrorCategory::Network,
            Self::Decode(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::Console,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 伺服器暫時性錯誤，稍後重試通常可以恢復
            Self::Http { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::Transport(_) => ErrorSeverity::Medium,
            Self::Http { .. } | Self::Decode(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Http { status, .. } => {
                format!("The pet catalog answered with HTTP {}", status)
            }
            Self::Transport(e) if e.is_timeout() => {
                "The pet catalog did not answer in time".to_string()
            }
            Self::Transport(_) => "Could not reach the pet catalog".to_string(),
            Self::Decode(_) => "The pet catalog returned data that could not be read".to_string(),
            Self::IoError(e) => format!("Console input/output failed: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Http { status, .. } if *status >= 500 => {
                "The catalog service is having trouble, try the command again later"
            }
            Self::Http { .. } => "Check the catalog base URL and status filter",
            Self::Transport(_) => "Check your network connection and the catalog base URL",
            Self::Decode(_) => "Make sure the base URL points at a Petstore-compatible API",
            Self::IoError(_) => "Restart the console",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the command line arguments or config file and start again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PetStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_classification() {
        let server_error = PetStoreError::Http {
            status: 503,
            url: "http://localhost/pet".to_string(),
        };
        assert_eq!(server_error.category(), ErrorCategory::Network);
        assert_eq!(server_error.severity(), ErrorSeverity::Medium);
        assert!(server_error.to_string().contains("503"));

        let not_found = PetStoreError::Http {
            status: 404,
            url: "http://localhost/pet".to_string(),
        };
        assert_eq!(not_found.severity(), ErrorSeverity::High);
        assert_eq!(
            not_found.user_friendly_message(),
            "The pet catalog answered with HTTP 404"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: PetStoreError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.to_string().starts_with("Failed to decode pet records"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = PetStoreError::config("missing [catalog] table");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_severity_exits_non_zero() {
        for severity in [
            ErrorSeverity::Medium,
            ErrorSeverity::High,
            ErrorSeverity::Critical,
        ] {
            assert_ne!(severity.exit_code(), 0, "{:?}", severity);
        }
        assert_eq!(PetStoreError::config("bad").severity().exit_code(), 3);
    }
}
