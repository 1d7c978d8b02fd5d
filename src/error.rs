//! Error types for the chaotic password generator.

use thiserror::Error;

/// Errors produced while deriving a password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Requested password length is outside the accepted range.
    #[error("Password length {requested} is outside the valid range [{min}, {max}]")]
    InvalidLength {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// The alphabet has no characters, so no candidate can ever be accepted.
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,

    /// Every alphabet character lies outside the 0..=127 candidate range.
    #[error("Alphabet has no character with a code point in 0..=127")]
    UnreachableAlphabet,

    /// The sampling loop hit its iteration cap before filling the password.
    #[error(
        "Sampling stopped after {max_iterations} steps with {produced} of {requested} characters"
    )]
    NonTerminatingSample {
        max_iterations: u64,
        produced: usize,
        requested: usize,
    },

    /// A named secret was absent from the supplied field map.
    #[error("Missing secret field: {0}")]
    MissingField(String),

    /// The generator configuration was rejected.
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}
