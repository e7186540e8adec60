// File: src/repl.rs
//
// Interactive REPL (Read-Eval-Print Loop) for the Monkey programming
// language. Provides an interactive shell with:
// - Multi-line input for functions and unfinished expressions
// - Command history with up/down arrow navigation
// - Special commands (:help, :vars, :reset, :quit)
// - A persistent environment, so bindings survive across inputs

use crate::errors;
use crate::interpreter::{self, Env, Object};
use crate::lexer::Lexer;
use crate::parser::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// REPL session holding the line editor and the long-lived environment.
pub struct Repl {
    editor: DefaultEditor,
    env: Env,
}

impl Repl {
    /// Creates a new REPL session with a fresh environment.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let editor = DefaultEditor::new()?;
        Ok(Repl { editor, env: interpreter::new_env() })
    }

    fn show_banner(&self) {
        println!("{}", "Monkey REPL".bright_cyan().bold());
        println!(
            "  Type {} for commands, {} to leave.",
            ":help".bright_yellow(),
            ":quit".bright_yellow()
        );
        println!();
    }

    /// Starts the REPL loop. Returns when the user quits or input ends.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.show_banner();

        let mut buffer = String::new();

        loop {
            let prompt = if buffer.is_empty() {
                ">> ".bright_green().to_string()
            } else {
                ".. ".bright_blue().to_string()
            };

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());

                    // Commands are only recognized at the start of an input.
                    if buffer.is_empty() && line.trim_start().starts_with(':') {
                        if self.handle_command(line.trim()) {
                            continue;
                        }
                        break;
                    }

                    buffer.push_str(&line);
                    buffer.push('\n');

                    if is_input_complete(&buffer) {
                        self.eval_input(&buffer);
                        buffer.clear();
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    buffer.clear();
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    eprintln!("{} {}", "error:".bright_red(), err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handles a ':' command. Returns false when the session should end.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            ":help" | ":h" => {
                self.show_help();
                true
            }
            ":quit" | ":q" | ":exit" => false,
            ":vars" | ":v" => {
                self.show_variables();
                true
            }
            ":reset" | ":r" => {
                self.env = interpreter::new_env();
                println!("{}", "environment reset".bright_green());
                true
            }
            _ => {
                println!(
                    "{} unknown command: {}. Type {} for help.",
                    "error:".bright_red(),
                    cmd.bright_yellow(),
                    ":help".bright_yellow()
                );
                true
            }
        }
    }

    fn show_help(&self) {
        println!();
        println!("{}", "Commands:".bright_cyan().bold());
        println!("  {}  show this message", ":help".bright_yellow());
        println!("  {}  list bound names", ":vars".bright_yellow());
        println!("  {}  discard all bindings", ":reset".bright_yellow());
        println!("  {}  leave the REPL", ":quit".bright_yellow());
        println!();
        println!("Leave braces, brackets, or parentheses unclosed to continue");
        println!("input on the next line.");
        println!();
        println!(
            "{} {}",
            "Builtins:".bright_cyan().bold(),
            crate::builtins::names().join(", ")
        );
        println!();
    }

    fn show_variables(&self) {
        let names = self.env.borrow().local_names();
        if names.is_empty() {
            println!("{}", "no bindings".dimmed());
            return;
        }
        for name in names {
            if let Some(value) = self.env.borrow().get(&name) {
                println!("  {} = {}", name.bright_yellow(), value.inspect());
            }
        }
    }

    /// Parses and evaluates one complete input against the session
    /// environment. Parse errors skip evaluation entirely.
    fn eval_input(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }

        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            errors::print_parse_errors(parser.errors());
            return;
        }

        match interpreter::eval_program(&program, &self.env) {
            Object::Error(message) => errors::print_runtime_error(&message),
            // Statements that produce nothing stay silent, so `let`
            // bindings do not echo null.
            Object::Null => {}
            value => println!("{}", value.inspect()),
        }
    }
}

/// Returns true once all brackets, braces, and parentheses are balanced
/// outside of string literals. Drives the multi-line continuation prompt.
fn is_input_complete(input: &str) -> bool {
    let mut depth: i32 = 0;
    let mut in_string = false;

    for c in input.chars() {
        if in_string {
            if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            _ => {}
        }
    }

    !in_string && depth <= 0
}
