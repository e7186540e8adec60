// File: src/interpreter/mod.rs
//
// Tree-walking evaluator for the Monkey programming language.
// Executes Monkey programs by recursing over the Abstract Syntax Tree.
//
// The evaluator owns all control-flow semantics:
// - runtime errors are Object::Error values that short-circuit the
//   enclosing construct after every sub-evaluation that consumes one
// - `return` wraps its value in Object::Return, which stops block
//   evaluation and is unwrapped again at the program level and at each
//   function-call boundary
// - truthiness: everything except null and false is truthy
// - operator dispatch, indexing, identifier resolution, and closure
//   capture all live here
//
// Evaluation is a plain recursive call tree: single-threaded, no
// suspension, no step limit. A runaway user program exhausts the host
// call stack, which is accepted behavior.

mod environment;
mod value;

pub use environment::Environment;
pub use value::{BuiltinFn, Function, HashKey, HashPair, Object, FALSE, NULL, TRUE};

use crate::ast::{BlockStmt, Expr, Program, Stmt};
use crate::builtins;
use ahash::AHashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an environment frame. Closures and the calls made
/// against them hold the same frame through this alias.
pub type Env = Rc<RefCell<Environment>>;

/// Wraps a fresh global environment for a program or REPL session.
pub fn new_env() -> Env {
    Rc::new(RefCell::new(Environment::new()))
}

fn new_error(message: String) -> Object {
    Object::Error(message)
}

/// Null and false are falsy; every other value is truthy.
fn is_truthy(value: &Object) -> bool {
    !matches!(value, Object::Null | Object::Boolean(false))
}

/// Evaluates a full program. A Return surfacing at this level ends
/// top-level evaluation and is unwrapped to its inner value; an Error is
/// returned as-is.
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = NULL;
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match result {
            Object::Return(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Evaluates a block. Unlike the program level, Return and Error are
/// passed upward unchanged so outer blocks stop too.
fn eval_block(block: &BlockStmt, env: &Env) -> Object {
    let mut result = NULL;
    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(stmt: &Stmt, env: &Env) -> Object {
    match stmt {
        Stmt::Expr(expr) => eval_expression(expr, env),
        Stmt::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.clone(), value.clone());
            // A let statement evaluates to the value it bound.
            value
        }
        Stmt::Return(None) => Object::Return(Box::new(NULL)),
        Stmt::Return(Some(expr)) => {
            let value = eval_expression(expr, env);
            if value.is_error() {
                return value;
            }
            Object::Return(Box::new(value))
        }
    }
}

fn eval_expression(expr: &Expr, env: &Env) -> Object {
    match expr {
        Expr::IntegerLiteral(n) => Object::Integer(*n),
        Expr::BooleanLiteral(b) => Object::boolean(*b),
        Expr::StringLiteral(s) => Object::str(s.clone()),
        Expr::Identifier(name) => eval_identifier(name, env),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(op, right)
        }
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(op, left, right)
        }
        Expr::If { condition, consequence, alternative } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if is_truthy(&condition) {
                eval_block(consequence, env)
            } else if let Some(alt) = alternative {
                eval_block(alt, env)
            } else {
                NULL
            }
        }
        Expr::ArrayLiteral(elements) => match eval_expressions(elements, env) {
            Ok(elements) => Object::array(elements),
            Err(error) => error,
        },
        Expr::HashLiteral(pairs) => eval_hash_literal(pairs, env),
        Expr::Index { object, index } => {
            let object = eval_expression(object, env);
            if object.is_error() {
                return object;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(object, index)
        }
        Expr::FunctionLiteral { params, body } => Object::Function(Rc::new(Function {
            params: params.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        })),
        Expr::Call { function, args } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            match eval_expressions(args, env) {
                Ok(args) => apply_function(function, args),
                Err(error) => error,
            }
        }
    }
}

/// Resolves an identifier against the environment chain first, then the
/// builtin table.
fn eval_identifier(name: &str, env: &Env) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    new_error(format!("identifier not found: {}", name))
}

/// Evaluates an expression list left to right, stopping at the first
/// error. Used for call arguments and array literals.
fn eval_expressions(exprs: &[Expr], env: &Env) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        results.push(value);
    }
    Ok(results)
}

fn eval_prefix_expression(op: &str, right: Object) -> Object {
    match op {
        "!" => Object::boolean(!is_truthy(&right)),
        "-" => match right {
            Object::Integer(n) => Object::Integer(n.wrapping_neg()),
            other => new_error(format!("unknown operator: -{}", other.type_name())),
        },
        other => new_error(format!("unknown operator: {}{}", other, right.type_name())),
    }
}

fn eval_infix_expression(op: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Object::Str(l), Object::Str(r)) if op == "+" => {
            Object::str(format!("{}{}", l, r))
        }
        _ if op == "==" => Object::boolean(left == right),
        _ if op == "!=" => Object::boolean(left != right),
        _ if left.type_name() != right.type_name() => new_error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        )),
        _ => new_error(format!(
            "unknown operator: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        )),
    }
}

fn eval_integer_infix(op: &str, left: i64, right: i64) -> Object {
    match op {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                new_error("division by zero".to_string())
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        "<" => Object::boolean(left < right),
        ">" => Object::boolean(left > right),
        "==" => Object::boolean(left == right),
        "!=" => Object::boolean(left != right),
        _ => new_error(format!("unknown operator: INTEGER {} INTEGER", op)),
    }
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> Object {
    let mut map = AHashMap::with_capacity(pairs.len());
    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return new_error(format!("unusable as hash key: {}", key.type_name()));
        };
        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }
        map.insert(hash_key, HashPair { key, value });
    }
    Object::Hash(Rc::new(map))
}

fn eval_index_expression(object: Object, index: Object) -> Object {
    match (&object, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            // Out-of-range subscripts yield null, not an error.
            if *i < 0 {
                return NULL;
            }
            elements.get(*i as usize).cloned().unwrap_or(NULL)
        }
        (Object::Hash(map), _) => match index.hash_key() {
            Some(key) => map.get(&key).map(|pair| pair.value.clone()).unwrap_or(NULL),
            None => new_error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => new_error(format!(
            "index operator not supported: {}",
            object.type_name()
        )),
    }
}

/// Applies a function object to already-evaluated arguments.
///
/// For a user function: a fresh environment enclosed by the captured one,
/// parameters bound positionally, the body evaluated as a block, and any
/// Return wrapper unwrapped so `return` stays invisible to the caller.
/// For a builtin: the native callback is invoked directly.
fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function(func) => {
            if func.params.len() != args.len() {
                return new_error(format!(
                    "wrong number of arguments: want={}, got={}",
                    func.params.len(),
                    args.len()
                ));
            }
            let mut call_env = Environment::new_enclosed(Rc::clone(&func.env));
            for (param, arg) in func.params.iter().zip(args) {
                call_env.set(param.clone(), arg);
            }
            let result = eval_block(&func.body, &Rc::new(RefCell::new(call_env)));
            match result {
                Object::Return(value) => *value,
                other => other,
            }
        }
        Object::Builtin(_, f) => f(args),
        other => new_error(format!("not a function: {}", other.type_name())),
    }
}
