//! API credential value object
//!
//! Wraps the bearer token in a [`SecretString`] so it is zeroized on drop and
//! redacted from `Debug` output. Credentials are never serialized.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Secret bearer token authorizing a synthesis request
pub struct Credential(SecretString);

impl Credential {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// An empty credential, as held by a fresh form
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Whether the token is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    /// The trimmed token, for use in the `Authorization` header
    pub fn expose_trimmed(&self) -> &str {
        self.0.expose_secret().trim()
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self::new(self.0.expose_secret().to_owned())
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}
