use std::io;

use clap::Parser;
use numera::run_session;

/// numera is an easy to use, interactive calculator for quick real-number
/// arithmetic on the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    // Only --help and --version; the calculator itself takes no arguments.
    Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_session(stdin.lock(), stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
