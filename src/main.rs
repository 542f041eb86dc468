//! tusk - conversational task management in the terminal

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tusk::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
