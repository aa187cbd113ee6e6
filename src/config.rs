use crate::credentials::Credentials;
use crate::error::CredentialsError;
use std::env;

/// Return type tag used by the simulator to decode the script result for
/// local display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnType {
    #[default]
    Uint256,
}

/// What the host hands the script for one invocation: the injected secrets
/// and the tag describing how the returned bytes decode.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub credentials: Credentials,
    pub expected_return_type: ReturnType,
}

impl RequestConfig {
    /// Builds the config from the `ALPACA_KEY` and `ALPACA_SECRET`
    /// environment variables. An unset variable counts as an empty
    /// credential and fails the gate before any network I/O.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let api_key = env::var("ALPACA_KEY").unwrap_or_default();
        let secret_key = env::var("ALPACA_SECRET").unwrap_or_default();
        let credentials = Credentials::new(api_key, secret_key)?;
        Ok(Self {
            credentials,
            expected_return_type: ReturnType::Uint256,
        })
    }
}
