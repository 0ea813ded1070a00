use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("credential token must not be empty")]
    EmptyToken,
}

/// Opaque caller identity forwarded to every upstream telemetry call.
///
/// This service makes no authorization decision of its own; the token is
/// relayed exactly as presented by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn bearer(token: &str) -> Result<Self, CredentialsError> {
        if token.trim().is_empty() {
            return Err(CredentialsError::EmptyToken);
        }
        Ok(Credentials {
            token: token.to_string(),
        })
    }

    /// Value for the outbound `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// The token must not end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(..)")
    }
}
