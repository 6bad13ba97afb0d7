use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdCodeError {
    #[error("Invalid gender digit: {digit}")]
    InvalidGenderDigit { digit: u8 },

    #[error("Invalid birth sequence number: {sequence}")]
    InvalidSequenceNumber { sequence: u16 },

    #[error("Unable to generate a code for birth year {year}")]
    InvalidYearRange { year: i32 },

    #[error("ID must be exactly 11 characters")]
    InvalidLength { length: usize },

    #[error("ID must only contain 11 digits")]
    NonDigitCharacter,

    #[error("Invalid gender. Must be MALE or FEMALE")]
    InvalidGender { value: String },

    #[error("Invalid birth date format. Must be dd.mm.yyyy")]
    InvalidDateFormat { value: String },

    #[error("Invalid birth date")]
    InvalidDate { value: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-supplied text failed the syntax checks.
    Input,
    /// Well-formed input the codec could not decode or encode.
    Codec,
    Configuration,
    System,
}

impl ErrorCategory {
    /// Process exit status for the binary. Clap already uses 2 for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Input | ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
            ErrorCategory::Codec => 4,
        }
    }
}

impl IdCodeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IdCodeError::InvalidGenderDigit { .. }
            | IdCodeError::InvalidSequenceNumber { .. }
            | IdCodeError::InvalidYearRange { .. } => ErrorCategory::Codec,
            IdCodeError::InvalidLength { .. }
            | IdCodeError::NonDigitCharacter
            | IdCodeError::InvalidGender { .. }
            | IdCodeError::InvalidDateFormat { .. }
            | IdCodeError::InvalidDate { .. } => ErrorCategory::Input,
            IdCodeError::ConfigError { .. } => ErrorCategory::Configuration,
            IdCodeError::IoError(_) | IdCodeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IdCodeError::InvalidGenderDigit { digit } => {
                format!("The first digit '{}' does not encode a gender and century", digit)
            }
            IdCodeError::InvalidSequenceNumber { sequence } => format!(
                "Birth sequence {:03} does not belong to any known maternity hospital",
                sequence
            ),
            IdCodeError::InvalidYearRange { year } => {
                format!("I am not able to generate you an id for the year {}", year)
            }
            IdCodeError::InvalidDate { value } => format!("Invalid birth date: {}", value),
            IdCodeError::ConfigError { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IdCodeError::InvalidGenderDigit { .. } => "The first digit must be between 1 and 8",
            IdCodeError::InvalidSequenceNumber { .. } => {
                "Codes issued before 2013 use sequences 001-700, excluding 020"
            }
            IdCodeError::InvalidYearRange { .. } => "Choose a birth year between 1800 and 2199",
            IdCodeError::InvalidLength { .. } | IdCodeError::NonDigitCharacter => {
                "Pass the code as exactly 11 digits, for example 37605030299"
            }
            IdCodeError::InvalidGender { .. } => "Use MALE or FEMALE",
            IdCodeError::InvalidDateFormat { .. } | IdCodeError::InvalidDate { .. } => {
                "Use a real calendar date written as dd.mm.yyyy, for example 03.05.1976"
            }
            IdCodeError::ConfigError { .. } => "Check the configuration file and command-line flags",
            IdCodeError::IoError(_) => "Check that the file exists and is readable",
            IdCodeError::SerializationError(_) => "This is a bug, please report it",
        }
    }
}

pub type Result<T> = std::result::Result<T, IdCodeError>;
