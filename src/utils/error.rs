use thiserror::Error;

#[derive(Error, Debug)]
pub enum UriError {
    #[error("Invalid {component} '{value}': {reason}")]
    InvalidComponent {
        component: String,
        value: String,
        reason: String,
    },

    #[error("Missing required component: {component}")]
    MissingComponent { component: String },

    #[error("URI '{value}' is not absolute and cannot be converted to a URL")]
    NotAbsolute { value: String },

    #[error("Cannot decode path element '{value}': {reason}")]
    Decode { value: String, reason: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidation { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
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

impl UriError {
    pub fn invalid(component: &str, value: &str, reason: impl Into<String>) -> Self {
        UriError::InvalidComponent {
            component: component.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            UriError::InvalidComponent { .. }
            | UriError::MissingComponent { .. }
            | UriError::NotAbsolute { .. }
            | UriError::Decode { .. }
            | UriError::UrlParse(_) => ErrorCategory::Input,
            UriError::ConfigValidation { .. } => ErrorCategory::Configuration,
            UriError::Io(_) | UriError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            UriError::InvalidComponent { component, .. } => {
                format!("Check the value given for the {}", component)
            }
            UriError::MissingComponent { component } => {
                format!("Provide a value for the {}", component)
            }
            UriError::NotAbsolute { .. } => {
                "Build the URI with a scheme and server, or use it as a relative reference"
                    .to_string()
            }
            UriError::Decode { .. } => {
                "Make sure every %HH sequence encodes valid UTF-8".to_string()
            }
            UriError::UrlParse(_) => "Check the scheme and server for invalid characters".to_string(),
            UriError::Io(_) => "Check that the file exists and is readable".to_string(),
            UriError::Serialization(_) => "Report this as a bug".to_string(),
            UriError::ConfigValidation { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Cannot build URI: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, UriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_component_message() {
        let err = UriError::invalid("scheme", "1http", "must start with a letter");
        assert_eq!(
            err.to_string(),
            "Invalid scheme '1http': must start with a letter"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: UriError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().starts_with("System error"));
    }

    #[test]
    fn test_config_suggestion_names_field() {
        let err = UriError::ConfigValidation {
            field: "endpoint.scheme".to_string(),
            message: "bad".to_string(),
        };
        assert!(err.recovery_suggestion().contains("endpoint.scheme"));
    }
}
