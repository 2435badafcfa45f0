use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::error::ConfigurationError;

pub const PASSCODE_LEN: usize = 4;

/// Symbols entered so far, at most [`PASSCODE_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasscodeBuffer {
    symbols: String,
}

impl PasscodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the buffer is already full.
    pub fn push(&mut self, symbol: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn len(&self) -> usize {
        self.symbols.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= PASSCODE_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }
}

/// The configured 4-digit code. Kept out of Debug output.
#[derive(Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Passcode(SecretString);

impl Passcode {
    pub fn new(code: &str) -> Result<Self, ConfigurationError> {
        let valid = code.len() == PASSCODE_LEN && code.chars().all(|c| c.is_ascii_digit());
        if !valid {
            return Err(ConfigurationError::InvalidPasscode);
        }
        Ok(Self(SecretString::from(code.to_string())))
    }

    pub fn matches(&self, buffer: &PasscodeBuffer) -> bool {
        self.0.expose_secret() == buffer.as_str()
    }
}

impl TryFrom<String> for Passcode {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Passcode::new(value.trim())
    }
}

impl Default for Passcode {
    fn default() -> Self {
        Self(SecretString::from("2004".to_string()))
    }
}

impl std::fmt::Debug for Passcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passcode(****)")
    }
}
