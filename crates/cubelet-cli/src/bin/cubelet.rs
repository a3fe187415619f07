//! `cubelet` command-line entry point.

use std::{io, process};

use clap::Parser as _;
use cubelet_cli::{Cli, run};

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli, &mut io::stdout().lock()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
