//! CLI entry point for stepping through an algorithm

use algoviz::io::cli::{Cli, RunCommand};
use algoviz::io::logging::init_logging;
use clap::Parser;

fn main() -> algoviz::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    RunCommand::new(cli).run()
}
