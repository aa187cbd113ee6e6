use crate::error::CredentialsError;

/// Alpaca API credential pair.
///
/// Construction is the gate: both fields must be non-empty, so an invocation
/// with a blank key can never reach a network call. The pair is supplied per
/// invocation and never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(api_key: String, secret_key: String) -> Result<Self, CredentialsError> {
        if api_key.is_empty() {
            return Err(CredentialsError::MissingCredential("ALPACA_KEY"));
        }
        if secret_key.is_empty() {
            return Err(CredentialsError::MissingCredential("ALPACA_SECRET"));
        }
        Ok(Self {
            api_key,
            secret_key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}
