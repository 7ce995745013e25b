#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InvalidMessage: {0}")]
    InvalidMessage(String),

    /// A bounded rejection-sampling loop ran out of attempts.
    #[error("Key generation exhausted: no acceptable {what} after {attempts} attempts")]
    KeyGenerationExhausted { what: &'static str, attempts: usize },
    #[error("Length mismatch: message has {message} bits but the key has {key} elements")]
    LengthMismatch { message: usize, key: usize },
    /// Two messages being compared bit by bit differ in length.
    #[error("Message length mismatch: expected {expected} bits, got {actual}")]
    MessageLengthMismatch { expected: usize, actual: usize },
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
}
