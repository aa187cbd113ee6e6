use alpaca_balance_adapter::api::{build_client, ALPACA_API_BASE_URL};
use alpaca_balance_adapter::config::{RequestConfig, ReturnType};
use alpaca_balance_adapter::encode::decode_uint256;
use alpaca_balance_adapter::source::fetch_and_encode;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Local simulator harness: runs the balance source against the paper
/// trading API with credentials taken from the environment (or a `.env`
/// file) and prints the decoded result the way the oracle tooling would.
#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match simulate().await {
        Ok(output) => {
            println!("Response returned by script: {}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Simulation failed: {}", e);
            println!("Error returned by script: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn simulate() -> Result<String, Box<dyn std::error::Error>> {
    let config = RequestConfig::from_env()?;
    let client = build_client()?;
    let response = fetch_and_encode(&client, ALPACA_API_BASE_URL, &config.credentials).await?;

    let output = match config.expected_return_type {
        ReturnType::Uint256 => match decode_uint256(&response) {
            Some(value) => value.to_string(),
            None => format!(
                "0x{}",
                response
                    .iter()
                    .map(|byte| format!("{:02x}", byte))
                    .collect::<String>()
            ),
        },
    };
    Ok(output)
}
