// File: src/builtins.rs
//
// Built-in native functions for the Monkey programming language.
// The evaluator consults this table only after identifier lookup in the
// environment chain fails, so user bindings can shadow any builtin.

use crate::interpreter::{BuiltinFn, Object, NULL};
use once_cell::sync::Lazy;

static BUILTINS: Lazy<Vec<(&'static str, BuiltinFn)>> = Lazy::new(|| {
    vec![
        ("len", builtin_len as BuiltinFn),
        ("first", builtin_first),
        ("last", builtin_last),
        ("rest", builtin_rest),
        ("push", builtin_push),
        ("puts", builtin_puts),
    ]
});

/// Looks a name up in the builtin table.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|&(registered, f)| Object::Builtin(registered, f))
}

/// The registered builtin names, for diagnostics and the REPL.
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

fn wrong_arg_count(got: usize, want: usize) -> Object {
    Object::Error(format!("wrong number of arguments. got={}, want={}", got, want))
}

/// len(x) - character count of a string or element count of an array.
fn builtin_len(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Str(s) => Object::Integer(s.chars().count() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

/// first(arr) - the first element, or null for an empty array.
fn builtin_first(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(NULL),
        other => Object::Error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// last(arr) - the last element, or null for an empty array.
fn builtin_last(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(NULL),
        other => Object::Error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// rest(arr) - a new array of everything but the first element, or null
/// for an empty array.
fn builtin_rest(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                NULL
            } else {
                Object::array(elements[1..].to_vec())
            }
        }
        other => Object::Error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// push(arr, v) - a new array with v appended. The original array is
/// untouched; Monkey arrays are immutable values.
fn builtin_push(args: Vec<Object>) -> Object {
    if args.len() != 2 {
        return wrong_arg_count(args.len(), 2);
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Object::array(extended)
        }
        other => Object::Error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// puts(...) - writes each argument's display form to stdout on its own
/// line and returns null.
fn builtin_puts(args: Vec<Object>) -> Object {
    for arg in &args {
        println!("{}", arg.inspect());
    }
    NULL
}
