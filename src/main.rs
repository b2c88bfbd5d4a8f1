//! itemd entry point
//!
//! Parses arguments and dispatches to the CLI module, printing any error to
//! stderr and exiting non-zero. A database that cannot be reached at startup
//! ends the process here, before the listener is bound.

use itemd::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
