use std::env;
use std::process::ExitCode;

mod commands;
mod config;
mod dispatch;
mod output;

use commands::CommandError;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match dispatch::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(error_exit_code(&e))
        }
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Usage(_) => 2,
        CommandError::Context(_) => 3,
        CommandError::Git(_) => 4,
        CommandError::Store(_) => 5,
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Task(_) => 1,
        CommandError::Yaml(_) => 1,
    }
}
