//! `domkit`: render element descriptions and the bundled exercises to HTML.

mod cli;
mod config;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    if let Err(err) = domkit_logger::init(args.verbosity.level()) {
        eprintln!("failed to set up logging: {err}");
    }

    if let Err(err) = args.run() {
        tracing::error!(error = ?err, "command failed");
        eprintln!("Failed: {err:#}");
        std::process::exit(1);
    }
}
