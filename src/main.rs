use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use pension_quote::config::Config;
use pension_quote::controller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting quote service in {} environment", config.environment);

    controller::serve(&config).await
}
