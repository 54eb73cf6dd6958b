//! CLI entry point for automated play of the sliding-tile merge puzzle

use clap::Parser;
use tilemerge::io::cli::{Cli, GameRunner};

fn main() -> tilemerge::Result<()> {
    let cli = Cli::parse();
    let mut runner = GameRunner::new(cli);
    runner.process()
}
