use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub(crate) mod cli;

pub struct Config {
    pub league_url: Url,
    pub data_dir: std::path::PathBuf,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let league_url = Url::parse(&args.league_url)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            league_url,
            data_dir: args.data_dir,
            http_client,
        })
    }
}
