#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;
mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    bootstrap::run()
}
