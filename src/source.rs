use crate::api::fetch_portfolio_value;
use crate::credentials::Credentials;
use crate::encode::encode_balance;
use crate::error::SourceError;
use reqwest::Client;
use tracing::info;

/// Runs the full source-script sequence for one invocation: fetch the
/// account's portfolio value, then encode it in cents as a big-endian
/// uint256. Stateless; sequential invocations with the same inputs produce
/// the same bytes.
pub async fn fetch_and_encode(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<[u8; 32], SourceError> {
    let value = fetch_portfolio_value(client, base_url, credentials).await?;
    let encoded = encode_balance(value)?;
    info!("Encoded portfolio balance {} as a uint256 response", value);
    Ok(encoded)
}
