use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("File '{path}' not found!")]
    InputNotFound { path: String },

    #[error("Input file '{path}' is not valid UTF-8")]
    InvalidInputEncoding { path: String },

    /// Non-2xx answer from the reputation API. `message` mirrors the
    /// `"<code> Client Error: <reason> for url: <url>"` wording.
    #[error("{message}")]
    RemoteRejection {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    #[error("Invalid IP or CIDR: {value}")]
    InvalidTarget { value: String },
}

/// Closed set of per-target failure kinds. Anything else is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ValidationSkip,
    TransportFailure,
    RemoteRejection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            CheckError::InvalidTarget { .. } => Some(FailureKind::ValidationSkip),
            CheckError::RemoteRejection { .. } => Some(FailureKind::RemoteRejection),
            CheckError::TransportError(_) | CheckError::SerializationError(_) => {
                Some(FailureKind::TransportFailure)
            }
            _ => None,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckError::InvalidTarget { .. } => ErrorSeverity::Low,
            CheckError::TransportError(_) | CheckError::RemoteRejection { .. } => {
                ErrorSeverity::Medium
            }
            CheckError::InputNotFound { .. }
            | CheckError::InvalidInputEncoding { .. }
            | CheckError::SerializationError(_) => ErrorSeverity::High,
            CheckError::MissingConfigError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::MissingConfigError { field } if field == "api_key" => {
                "API-Key not set. Please set 'ABUSEIPDB_API_KEY'.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::MissingConfigError { .. } => {
                "Export ABUSEIPDB_API_KEY or pass --api-key"
            }
            CheckError::InvalidConfigValueError { .. } => "Check the command line arguments",
            CheckError::InputNotFound { .. } => "Check the path of the IP list and try again",
            CheckError::InvalidInputEncoding { .. } => "Save the IP list as UTF-8 text",
            CheckError::RemoteRejection { status: 401, .. } => "Verify the API key is valid",
            CheckError::RemoteRejection { status: 429, .. } => {
                "Daily quota exhausted, try again later"
            }
            CheckError::RemoteRejection { .. } | CheckError::TransportError(_) => {
                "Check network connectivity and the API endpoint"
            }
            CheckError::IoError(_) => "Check permissions of the working directory",
            CheckError::SerializationError(_) => "The API returned an unexpected payload",
            CheckError::InvalidTarget { .. } => "Remove ranges and malformed entries",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds() {
        let skip = CheckError::InvalidTarget {
            value: "10.0.0.0/24".to_string(),
        };
        assert_eq!(skip.kind(), Some(FailureKind::ValidationSkip));

        let rejected = CheckError::RemoteRejection {
            status: 422,
            message: "422 Client Error".to_string(),
            detail: None,
        };
        assert_eq!(rejected.kind(), Some(FailureKind::RemoteRejection));
        assert_eq!(rejected.to_string(), "422 Client Error");

        let missing = CheckError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert_eq!(missing.kind(), None);
        assert_eq!(missing.exit_code(), 3);
        assert!(missing.user_friendly_message().contains("ABUSEIPDB_API_KEY"));
    }

    #[test]
    fn test_input_not_found_is_fatal() {
        let err = CheckError::InputNotFound {
            path: "ips.txt".to_string(),
        };
        assert_eq!(err.kind(), None);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "File 'ips.txt' not found!");
    }
}
