// File: src/ast.rs
//
// Abstract Syntax Tree (AST) definitions for the Monkey programming language.
// Defines the structure of parsed Monkey programs.
//
// Expressions (Expr) evaluate to values; statements (Stmt) bind names,
// return values, or wrap expressions. Each node renders back to source
// form through Display, with expressions fully parenthesized so that
// operator precedence is visible in the output.

use std::fmt;

/// Represents an expression in Monkey - something that evaluates to a value
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    StringLiteral(String),
    /// Array literal: [1, 2 * 2, "three"]
    ArrayLiteral(Vec<Expr>),
    /// Hash literal: {"one": 1, 2: "two"}. Pairs keep source order for
    /// display; the runtime map does not.
    HashLiteral(Vec<(Expr, Expr)>),
    /// Unary operator application: !x or -x
    Prefix {
        op: String,
        right: Box<Expr>,
    },
    /// Binary operator application: a + b, a == b, ...
    Infix {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },
    /// Collection subscript: arr[0] or hash["key"]
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// if (cond) { ... } else { ... } - an expression, not a statement
    If {
        condition: Box<Expr>,
        consequence: BlockStmt,
        alternative: Option<BlockStmt>,
    },
    /// Anonymous function: fn(x, y) { x + y }
    FunctionLiteral {
        params: Vec<String>,
        body: BlockStmt,
    },
    /// Function application: callee(arg, ...)
    Call {
        function: Box<Expr>,
        args: Vec<Expr>,
    },
}

/// Represents a statement in Monkey - a binding, a return, or an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let {
        name: String,
        value: Expr,
    },
    /// return; is legal and yields null
    Return(Option<Expr>),
    Expr(Expr),
}

/// An ordered sequence of statements between braces. Used by if
/// expressions and function bodies; a function object holds onto its
/// block after the literal that produced it is gone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

/// The root of a parsed source text: the top-level statement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Expr {
    /// The literal text of the token this expression starts with.
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(name) => name.clone(),
            Expr::IntegerLiteral(n) => n.to_string(),
            Expr::BooleanLiteral(b) => b.to_string(),
            Expr::StringLiteral(s) => s.clone(),
            Expr::ArrayLiteral(_) => "[".to_string(),
            Expr::HashLiteral(_) => "{".to_string(),
            Expr::Prefix { op, .. } => op.clone(),
            Expr::Infix { op, .. } => op.clone(),
            Expr::Index { .. } => "[".to_string(),
            Expr::If { .. } => "if".to_string(),
            Expr::FunctionLiteral { .. } => "fn".to_string(),
            Expr::Call { function, .. } => function.token_literal(),
        }
    }
}

impl Stmt {
    /// The literal text of the token this statement starts with.
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let { .. } => "let".to_string(),
            Stmt::Return(_) => "return".to_string(),
            Stmt::Expr(expr) => expr.token_literal(),
        }
    }
}

fn join_displayed<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(sep)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::IntegerLiteral(n) => write!(f, "{}", n),
            Expr::BooleanLiteral(b) => write!(f, "{}", b),
            Expr::StringLiteral(s) => write!(f, "{}", s),
            Expr::ArrayLiteral(elements) => {
                write!(f, "[{}]", join_displayed(elements, ", "))
            }
            Expr::HashLiteral(pairs) => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Expr::Prefix { op, right } => write!(f, "({}{})", op, right),
            Expr::Infix { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Index { object, index } => write!(f, "({}[{}])", object, index),
            Expr::If { condition, consequence, alternative } => {
                write!(f, "if {} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, " else {}", alt)?;
                }
                Ok(())
            }
            Expr::FunctionLiteral { params, body } => {
                write!(f, "fn({}) {}", params.join(", "), body)
            }
            Expr::Call { function, args } => {
                write!(f, "{}({})", function, join_displayed(args, ", "))
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => write!(f, "let {} = {};", name, value),
            Stmt::Return(Some(value)) => write!(f, "return {};", value),
            Stmt::Return(None) => write!(f, "return;"),
            Stmt::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
