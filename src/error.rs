use reqwest::StatusCode;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Missing Alpaca credential '{0}'")]
    MissingCredential(&'static str),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Account endpoint returned status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Account response is missing 'data.portfolio.value'")]
    MissingPortfolioValue,

    #[error("Account reported an invalid portfolio value: {0}")]
    InvalidPortfolioValue(Decimal),
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Cannot encode negative balance: {0}")]
    NegativeBalance(Decimal),

    #[error("Balance {0} does not fit into a uint256")]
    Overflow(Decimal),
}

/// Top-level error for one source-script invocation. Every failure is fatal
/// and propagates unchanged; no partial result is ever returned.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
