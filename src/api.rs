use crate::{credentials::Credentials, error::FetchError};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const ALPACA_API_BASE_URL: &str = "https://paper-api.alpaca.markets";

/// No timeout is imposed by the API itself; without one a hung connection
/// would stall the invocation indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct AccountResponse {
    data: Option<AccountData>,
}

#[derive(Debug, Deserialize)]
struct AccountData {
    portfolio: Option<Portfolio>,
}

#[derive(Debug, Deserialize)]
struct Portfolio {
    value: Option<Decimal>,
}

/// Builds the HTTP client used for the account call, with the request
/// timeout applied.
pub fn build_client() -> Result<Client, FetchError> {
    client_with_timeout(REQUEST_TIMEOUT)
}

fn client_with_timeout(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(FetchError::from)
}

/// Fetches the account's current portfolio value in whole currency units.
///
/// Issues a single GET to the account endpoint and awaits the one response.
/// The brokerage API is rate-sensitive, so no retry is attempted: network
/// failure, a non-2xx status, a missing `data.portfolio.value` field, or a
/// negative value all fail the invocation.
pub async fn fetch_portfolio_value(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Decimal, FetchError> {
    let url = format!("{}/v2/account", base_url);
    info!("Fetching account snapshot from {:?}", url);
    let response = client
        .get(&url)
        .header("APCA-API-KEY-ID", credentials.api_key())
        .header("APCA-API-SECRET-KEY", credentials.secret_key())
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus(status));
    }

    let account: AccountResponse = response.json().await?;
    debug!("Parsed account response: {:?}", account);
    let value = account
        .data
        .and_then(|data| data.portfolio)
        .and_then(|portfolio| portfolio.value)
        .ok_or(FetchError::MissingPortfolioValue)?;

    // A negative equity must never reach the unsigned encoder.
    if value < Decimal::ZERO {
        return Err(FetchError::InvalidPortfolioValue(value));
    }

    info!("Alpaca Portfolio Balance: ${}", value);
    Ok(value)
}
