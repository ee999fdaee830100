//! CLI entry point for converting depth maps into autostereograms

use autostereogram::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> autostereogram::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
