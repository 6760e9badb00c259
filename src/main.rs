//! todo - categorized todo lists for the terminal

use clap::Parser;
use std::process::ExitCode;
use todo_cli::cli::{self, Cli};

fn main() -> ExitCode {
    if std::env::var("TODO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_cli=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli::run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
