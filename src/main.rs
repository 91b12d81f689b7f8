use anyhow::Context;
use coinwatch::infrastructure::bootstrap;
use coinwatch::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::from_env().context("failed to load configuration") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("coinwatch starting");

    if let Err(e) = bootstrap::run(config).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("coinwatch stopped");
}
