use super::types::MindwellError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Whether the error message may be shown to an API client as-is.
    pub client_visible: bool,
}

impl MindwellError {
    /// Classify this error for logging and for deciding what reaches the client.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Caller mistakes: the message describes their input
            MindwellError::InvalidInput(_) => ErrorClassification {
                error_type: "InvalidInputError",
                client_visible: true,
            },
            MindwellError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                client_visible: true,
            },

            // Operator and backend failures: details stay in the logs
            MindwellError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                client_visible: false,
            },
            MindwellError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                client_visible: false,
            },
            MindwellError::LLMApi(_) => ErrorClassification {
                error_type: "LLMApiError",
                client_visible: false,
            },
            MindwellError::RateLimit(_) => ErrorClassification {
                error_type: "RateLimitError",
                client_visible: false,
            },
            MindwellError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                client_visible: false,
            },
            MindwellError::CompletionFailure(_) => ErrorClassification {
                error_type: "CompletionFailure",
                client_visible: false,
            },
            MindwellError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                client_visible: false,
            },
            MindwellError::Io(_) => ErrorClassification {
                error_type: "IoError",
                client_visible: false,
            },
            MindwellError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                client_visible: false,
            },
            MindwellError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                client_visible: false,
            },
            MindwellError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                client_visible: false,
            },
        }
    }
}
