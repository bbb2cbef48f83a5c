#[derive(Debug, thiserror::Error)]
pub enum StaurError {
    #[error("at least two identities are required to bind roles, {available} available")]
    InsufficientIdentities { available: usize },

    #[error("invalid address '{0}': expected 0x followed by 40 hex characters")]
    InvalidAddress(String),

    #[error("invalid private key in {var}: {reason}")]
    InvalidPrivateKey { var: &'static str, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("token amount does not fit into 256 bits")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, StaurError>;
