use std::process::ExitCode;

use distpack::cli;

fn main() -> ExitCode {
    match cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // {:#} prints the full context chain on one line
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
