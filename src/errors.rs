// File: src/errors.rs
//
// Diagnostic rendering for the Monkey interpreter shell.
// Parse errors travel through the parser as plain strings (see
// parser.rs); runtime errors travel through the evaluator as
// Object::Error values. This module only makes both readable when the
// shell prints them - the two channels are never merged.

use colored::Colorize;

/// Renders a parse-error list as the shell displays it.
pub fn render_parse_errors(errors: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} parse error(s):\n",
        "error:".red().bold(),
        errors.len()
    ));
    for message in errors {
        out.push_str(&format!("  {} {}\n", "-".red(), message));
    }
    out
}

/// Prints parse diagnostics to stderr.
pub fn print_parse_errors(errors: &[String]) {
    eprint!("{}", render_parse_errors(errors));
}

/// Prints a runtime error message (the inside of an Object::Error) to
/// stderr.
pub fn print_runtime_error(message: &str) {
    eprintln!("{} {}", "runtime error:".red().bold(), message);
}
