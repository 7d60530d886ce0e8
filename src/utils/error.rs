use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Content request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content request returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Content document could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Host page is missing mount point '{name}'")]
    MissingMountPoint { name: String },

    #[error("No element matches '{selector}'")]
    ElementNotFound { selector: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Content,
    Configuration,
    Page,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::Http(_) | RenderError::HttpStatus { .. } => ErrorCategory::Network,
            RenderError::Parse(_) => ErrorCategory::Content,
            RenderError::Config { .. }
            | RenderError::InvalidConfigValue { .. }
            | RenderError::MissingConfig { .. } => ErrorCategory::Configuration,
            RenderError::MissingMountPoint { .. } | RenderError::ElementNotFound { .. } => {
                ErrorCategory::Page
            }
            RenderError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 找不到錨點目標只影響一次點擊
            RenderError::ElementNotFound { .. } => ErrorSeverity::Low,
            RenderError::Http(_) | RenderError::HttpStatus { .. } => ErrorSeverity::Medium,
            RenderError::Parse(_)
            | RenderError::Config { .. }
            | RenderError::InvalidConfigValue { .. }
            | RenderError::MissingConfig { .. }
            | RenderError::MissingMountPoint { .. } => ErrorSeverity::High,
            RenderError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RenderError::Http(_) => {
                "Check that the content endpoint is reachable and try again".to_string()
            }
            RenderError::HttpStatus { status } if *status == 404 => {
                "Make sure the content document is published at the configured path".to_string()
            }
            RenderError::HttpStatus { .. } => {
                "The content server rejected the request; check its logs".to_string()
            }
            RenderError::Parse(_) => {
                "Validate the content document: personal, skills, projects and experience are all required"
                    .to_string()
            }
            RenderError::Config { .. } | RenderError::MissingConfig { .. } => {
                "Review the configuration file and command line options".to_string()
            }
            RenderError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            RenderError::MissingMountPoint { name } => {
                format!("Add an element matching '{}' to the host page", name)
            }
            RenderError::ElementNotFound { selector } => {
                format!("Add an element matching '{}' or fix the link", selector)
            }
            RenderError::Io(_) => "Check file permissions and available disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load portfolio content: {}", self),
            ErrorCategory::Content => format!("Portfolio content is malformed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Page => format!("Host page problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_network_medium() {
        let err = RenderError::HttpStatus { status: 404 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("published"));
        assert_eq!(err.to_string(), "Content request returned HTTP status 404");
    }

    #[test]
    fn test_missing_mount_point_names_selector() {
        let err = RenderError::MissingMountPoint {
            name: "#bio".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Page);
        assert!(err.user_friendly_message().contains("#bio"));
        assert!(err.recovery_suggestion().contains("#bio"));
    }

    #[test]
    fn test_parse_error_is_content() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RenderError::from(parse);
        assert_eq!(err.category(), ErrorCategory::Content);
        assert!(err.severity() > ErrorSeverity::Medium);
    }
}
