use std::error::Error as StdError;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Every failure the console reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleError {
    // Configuration errors
    /// Invalid config value.
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    /// Config file could not be read or written.
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // The backend answered with an error_message
    /// The backend answered with an `error_message`.
    RequestFailed {
        operation: String,
        error_message: String,
    },

    // Network/API errors
    /// The request never got a usable answer.
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    /// A body or file could not be parsed.
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Lookup errors
    /// No webhook with this id in the collection.
    WebhookNotFound {
        id: u64,
        available: Vec<u64>,
    },

    // Validation errors
    /// A value broke a local constraint.
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    /// I/O or runtime failure.
    SystemError {
        operation: String,
        reason: String,
    },

    // User input errors
    /// Bad input from the user.
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // Multiple errors (for concurrent fetches)
    /// Several errors from concurrent work.
    MultipleErrors {
        errors: Vec<ConsoleError>,
        context: String,
    },
}

impl ConsoleError {
    /// Builds a [`ConsoleError::ConfigurationError`].
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    /// Builds a [`ConsoleError::RequestFailed`].
    pub fn request_failed(operation: &str, error_message: &str) -> Self {
        Self::RequestFailed {
            operation: operation.to_string(),
            error_message: error_message.to_string(),
        }
    }

    /// Builds a [`ConsoleError::NetworkError`].
    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(ToString::to_string),
            status_code,
            reason: reason.to_string(),
        }
    }

    /// Builds a [`ConsoleError::SystemError`].
    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Builds a [`ConsoleError::ParseError`].
    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(ToString::to_string),
        }
    }

    /// Builds a [`ConsoleError::ValidationError`].
    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    /// Builds a [`ConsoleError::UserInputError`].
    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// True for every failure of a backend call, whether the server rejected
    /// it or the request never got an answer.
    pub fn is_request_failure(&self) -> bool {
        match self {
            Self::RequestFailed { .. } | Self::NetworkError { .. } => true,
            Self::MultipleErrors { errors, .. } => errors.iter().all(Self::is_request_failure),
            _ => false,
        }
    }

    /// Whether retrying the same operation can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::RequestFailed { .. } => true,
            Self::NetworkError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::WebhookNotFound { .. } => true,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(Self::is_recoverable),
            _ => false,
        }
    }

    /// Worst severity for `MultipleErrors`.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::RequestFailed { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::WebhookNotFound { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(Self::severity)
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    /// Short text for the page's form error slot.
    pub fn form_message(&self) -> String {
        match self {
            Self::RequestFailed { error_message, .. } => error_message.clone(),
            Self::NetworkError { reason, .. } => reason.clone(),
            Self::MultipleErrors { errors, .. } => {
                errors.iter().map(Self::form_message).collect::<Vec<_>>().join("; ")
            }
            other => other.user_message(),
        }
    }

    /// Full message for the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::RequestFailed { operation, error_message } => {
                format!("Request '{}' failed: {}", operation, error_message)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the backend is reachable and try again");
                msg
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::WebhookNotFound { id, available } => {
                let mut msg = format!("Webhook {} not found", id);
                if !available.is_empty() {
                    let ids: Vec<String> = available.iter().map(ToString::to_string).collect();
                    msg.push_str(&format!("\n💡 Available webhooks: {}", ids.join(", ")));
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    /// Debug rendering for logs.
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Folds several errors into one, or returns the single error unchanged.
    pub fn combine(mut errors: Vec<Self>, context: &str) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::MultipleErrors {
                errors,
                context: context.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ConsoleError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Bad input or a missing record.
    Low,
    /// Backend or parse failure.
    Medium,
    /// Broken config file.
    High,
    /// System failure.
    Critical,
}

impl ErrorSeverity {
    /// Marker printed before the message.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    /// Upper-case label for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &ConsoleError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
