use std::process::ExitCode;

use countryclub::config::AppConfig;
use countryclub::server::{init_tracing, run, StartupError};

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Country club server stopped");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server)?;
    run(config).await
}
