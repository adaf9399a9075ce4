//! CLI entry point for the tile generator

use clap::Parser;
use tileforge::io::cli::{Cli, TileRunner};

fn main() -> tileforge::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    TileRunner::new(cli).run().map(|_| ())
}
