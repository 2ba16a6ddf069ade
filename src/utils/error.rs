use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Roster error in {source_name}: {message}")]
    RosterError { source_name: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Roster,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::ConfigError { .. }
            | DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DirectoryError::CsvError(_)
            | DirectoryError::SerializationError(_)
            | DirectoryError::RosterError { .. } => ErrorCategory::Roster,
            DirectoryError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Roster => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DirectoryError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            DirectoryError::CsvError(_) => {
                "Make sure the CSV header is: id,name,batch,location,profession,avatar".to_string()
            }
            DirectoryError::SerializationError(_) => {
                "Make sure the roster is a JSON array of alumni objects".to_string()
            }
            DirectoryError::ConfigError { .. } | DirectoryError::ConfigValidationError { .. } => {
                "Check the configuration file for syntax errors".to_string()
            }
            DirectoryError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            DirectoryError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            DirectoryError::RosterError { .. } => {
                "Fix the offending roster record and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Roster => format!("Could not load the alumni roster: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Roster | ErrorCategory::Io => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
