// ABOUTME: Error type shared by address classification, body encoding and configuration loading
// ABOUTME: Only caller contract violations and malformed configuration are errors; every input text classifies

use thiserror::Error;

/// Errors raised by the classification engine
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// No phone number was supplied at all (as opposed to one holding an empty value)
    #[error("Invalid argument: phone number is required")]
    MissingPhoneNumber,

    /// A character has no GSM 7-bit representation in either table
    #[error("Character {character:?} at position {position} is not in the GSM 7-bit alphabet")]
    Unrepresentable { character: char, position: usize },

    /// A rule set or addressing configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
