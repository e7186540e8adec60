// File: src/main.rs
//
// Main entry point for the Monkey programming language interpreter.
// Handles command-line argument parsing and dispatches to the
// appropriate subcommand (run or repl).

use clap::{Parser as ClapParser, Subcommand};
use monkey::errors;
use monkey::interpreter::{self, Object};
use monkey::lexer::Lexer;
use monkey::parser::Parser;
use monkey::repl::Repl;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(
    name = "monkey",
    about = "Monkey: a small dynamically-typed language",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[command(arg_required_else_help = true)]
enum Commands {
    /// Run a Monkey script file
    Run {
        /// Path to the .monkey file
        file: PathBuf,
    },

    /// Launch the interactive Monkey REPL
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => {
            let source = match fs::read_to_string(&file) {
                Ok(source) => source,
                Err(err) => {
                    eprintln!("failed to read {}: {}", file.display(), err);
                    return ExitCode::FAILURE;
                }
            };
            run_source(&source)
        }

        Commands::Repl => {
            let mut repl = match Repl::new() {
                Ok(repl) => repl,
                Err(err) => {
                    eprintln!("failed to start REPL: {}", err);
                    return ExitCode::FAILURE;
                }
            };
            match repl.run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("REPL error: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// One-shot script execution: parse, surface diagnostics, evaluate with
/// a fresh environment, and print any non-null result.
fn run_source(source: &str) -> ExitCode {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    if !parser.errors().is_empty() {
        errors::print_parse_errors(parser.errors());
        return ExitCode::FAILURE;
    }

    match interpreter::eval_program(&program, &interpreter::new_env()) {
        Object::Error(message) => {
            errors::print_runtime_error(&message);
            ExitCode::FAILURE
        }
        Object::Null => ExitCode::SUCCESS,
        value => {
            println!("{}", value.inspect());
            ExitCode::SUCCESS
        }
    }
}
