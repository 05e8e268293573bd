use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// League page to start the extraction from
    #[arg(
        long,
        default_value = "https://en.wikipedia.org/wiki/National_Hockey_League"
    )]
    pub league_url: String,

    /// Directory to store output data
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Read timeout per page fetch, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}
