use puckharvest::config::Config;
use puckharvest::error::Result;
use puckharvest::fetch::HttpFetcher;
use puckharvest::pipeline::Pipeline;
use puckharvest::storage::FileSystemStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new()?;
    let fetcher = HttpFetcher::new(config.http_client.clone());

    let output = Pipeline::new(&fetcher).run(&config.league_url).await?;
    info!(
        "extracted {} teams ({} skipped) and {} players ({} skipped)",
        output.stats.teams,
        output.stats.teams_skipped,
        output.stats.players,
        output.stats.players_skipped
    );

    let store = FileSystemStore::new(&config.data_dir);
    store.save_teams(&output.teams)?;
    store.save_players(&output.players)?;

    info!("Extraction completed successfully!");
    Ok(())
}
