// File: src/interpreter/value.rs
//
// Runtime value types for the Monkey programming language.
// Defines all values the evaluator can produce, their display form
// (`inspect`), and the hashable projection used for hash map keys.

use crate::ast::BlockStmt;
use ahash::AHashMap;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::environment::Environment;

/// Signature of a native (built-in) function. Builtins receive their
/// already-evaluated arguments and report failures as `Object::Error`.
pub type BuiltinFn = fn(Vec<Object>) -> Object;

/// A user-defined function: parameter names, body, and the environment
/// captured at the definition site. The body and environment are shared
/// because a function outlives the expression that created it.
#[derive(Debug, Clone)]
pub struct Function {
    pub params: Vec<String>,
    pub body: BlockStmt,
    pub env: Rc<RefCell<Environment>>,
}

/// A key-value entry in a hash object. The original key object is kept
/// alongside the value so `inspect` can render the hash faithfully.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// Runtime values in the Monkey interpreter.
///
/// Collections and strings are reference-counted so cloning a value is
/// cheap. `Return` and `Error` are control-flow signals: the evaluator
/// intercepts both before they can be stored in a collection or passed
/// to a function.
#[derive(Debug, Clone)]
pub enum Object {
    /// 64-bit signed integer
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// String value (reference-counted for cheap cloning)
    Str(Rc<String>),
    /// Array of values
    Array(Rc<Vec<Object>>),
    /// Hash map keyed by the hashable projection of the key object
    Hash(Rc<AHashMap<HashKey, HashPair>>),
    /// User function with captured environment
    Function(Rc<Function>),
    /// Native (built-in) function with its registered name
    Builtin(&'static str, BuiltinFn),
    /// Wrapper carrying a `return` value up through nested blocks
    Return(Box<Object>),
    /// Runtime error carried as a value, short-circuiting evaluation
    Error(String),
    /// The absence of a value
    Null,
}

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

impl Object {
    pub fn str(s: String) -> Self {
        Object::Str(Rc::new(s))
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Rc::new(elements))
    }

    pub fn boolean(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// The type tag used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Str(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(..) => "BUILTIN",
            Object::Return(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Null => "NULL",
        }
    }

    /// The display form shown by the REPL and by `puts`.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(n) => n.to_string(),
            Object::Boolean(b) => b.to_string(),
            Object::Str(s) => s.as_ref().clone(),
            Object::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(|e| e.inspect()).collect();
                format!("[{}]", rendered.join(", "))
            }
            Object::Hash(map) => {
                let rendered: Vec<String> = map
                    .values()
                    .map(|pair| format!("{}: {}", pair.key.inspect(), pair.value.inspect()))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
            Object::Function(func) => {
                format!("fn({}) {{\n{}\n}}", func.params.join(", "), func.body)
            }
            Object::Builtin(name, _) => format!("builtin function {}", name),
            Object::Return(value) => value.inspect(),
            Object::Error(message) => format!("ERROR: {}", message),
            Object::Null => "null".to_string(),
        }
    }

    /// The hashable projection of this value, if its type supports use
    /// as a hash key. Integer, Boolean, and String do; nothing else.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(n) => Some(HashKey::Integer(*n)),
            Object::Boolean(b) => Some(HashKey::Boolean(*b)),
            Object::Str(s) => Some(HashKey::String(Rc::clone(s))),
            _ => None,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Str(a), Object::Str(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, pair)| b.get(key).is_some_and(|other| pair == other))
            }
            // Functions have no structural equality; identity only.
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a, _), Object::Builtin(b, _)) => a == b,
            (Object::Return(a), Object::Return(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Null, Object::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over a byte slice, the structural hash for string keys.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The hashable, equality-comparable projection of a runtime value.
///
/// The 64-bit structural hash is deterministic per kind (integer value,
/// boolean as 0/1, FNV-1a of string bytes), but equality compares the
/// full value: two distinct strings whose FNV hashes collide share a
/// bucket without ever comparing equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<String>),
}

impl HashKey {
    /// The deterministic 64-bit structural hash of this key.
    pub fn hash_value(&self) -> u64 {
        match self {
            HashKey::Integer(n) => *n as u64,
            HashKey::Boolean(b) => u64::from(*b),
            HashKey::String(s) => fnv1a(s.as_bytes()),
        }
    }

    fn kind_tag(&self) -> u8 {
        match self {
            HashKey::Integer(_) => 0,
            HashKey::Boolean(_) => 1,
            HashKey::String(_) => 2,
        }
    }
}

impl Hash for HashKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Kind tag keeps 1, true, and "..." keys from colliding across
        // types even when their structural hashes agree.
        state.write_u8(self.kind_tag());
        state.write_u64(self.hash_value());
    }
}
