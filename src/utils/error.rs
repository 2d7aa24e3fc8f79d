use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid integer in field {field} on line {line}: {value:?}")]
    FieldTypeError {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    FieldType,
    Serialization,
    Config,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(e) if e.is_io_error() => ErrorCategory::Io,
            EtlError::CsvError(_) => ErrorCategory::Parse,
            EtlError::FieldTypeError { .. } => ErrorCategory::FieldType,
            EtlError::SerializationError(_) => ErrorCategory::Serialization,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the input file exists and the path is correct".to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check file permissions for the input and output paths".to_string()
                }
                _ => "Check that the input is readable and the output location is writable"
                    .to_string(),
            },
            EtlError::CsvError(_) => {
                "Make sure the input is valid UTF-8 CSV with balanced quotes".to_string()
            }
            EtlError::FieldTypeError { .. } => {
                "Fix the row in the source file, or pass --lenient-integers to write null instead"
                    .to_string()
            }
            EtlError::SerializationError(_) => "Report this as a bug".to_string(),
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Parse => format!("Input is not well-formed CSV: {}", self),
            ErrorCategory::FieldType => format!("Input contains a bad numeric field: {}", self),
            ErrorCategory::Serialization => format!("Could not encode output: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_error_message() {
        let err = EtlError::FieldTypeError {
            line: 7,
            field: "rating",
            value: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::FieldType);
        assert_eq!(
            err.to_string(),
            "Invalid integer in field rating on line 7: \"abc\""
        );
        assert!(err.user_friendly_message().contains("bad numeric field"));
    }

    #[test]
    fn test_not_found_suggestion() {
        let err = EtlError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.csv",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.recovery_suggestion().contains("input file exists"));
    }
}
