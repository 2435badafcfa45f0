use thiserror::Error;

/// Invalid input coming from configuration, the command line or a lookup by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown view id `{0}`")]
    UnknownView(String),

    #[error("passcode must be exactly 4 ASCII digits")]
    InvalidPasscode,

    #[error("invalid epoch `{value}`: {reason}")]
    InvalidEpoch { value: String, reason: String },

    #[error("interval must be greater than zero")]
    ZeroInterval,

    #[error("invalid key sequence `{0}`")]
    InvalidKeySequence(String),
}
