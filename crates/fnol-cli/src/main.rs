//! fnol - turn a First Notice of Loss document into a routing report.

use clap::Parser;
use fnol_cli::{logging, process, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(e) = process::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
