use std::sync::Arc;

use rank_proxy::{
    config::Config,
    error::AppError,
    logging,
    rank::RankLookup,
    riot::{RegionTable, RequestMetrics, RiotClient},
    server,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("💥 {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("💥 {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!("💥 {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    info!("🐙 Starting...");

    let metrics = RequestMetrics::new("riot");
    tokio::spawn(metrics.clone().log_loop());

    let client = RiotClient::new(
        config.riot_api_key.clone(),
        config.riot_api_base_url.clone(),
        config.riot_request_timeout,
        metrics,
    )?;

    let lookup = RankLookup::new(Arc::new(client), RegionTable::default());
    info!("🗺️ Accepted servers: {}", lookup.regions().codes().join(", "));

    server::serve(&config, lookup).await
}
