use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    interpreter::{
        evaluator::builtin::BuiltinDef,
        value::{
            environment::ScopeId,
            hash::{HashKey, HashPair},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: numbers, booleans,
/// strings, the null value, arrays, hashes, functions (user-defined and
/// builtin), classes and instances. Composite payloads sit behind `Rc` so
/// values clone cheaply and equality between them is identity, matching the
/// language's semantics.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit IEEE-754 decimal.
    Float(f64),
    /// A boolean, printed as `verdad`/`falso`.
    Boolean(bool),
    /// A string of UTF-8 text.
    Str(Rc<str>),
    /// The null value, printed as `nulo`.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured scope.
    Function(Rc<FunctionValue>),
    /// One of the interpreter's built-in functions.
    Builtin(&'static BuiltinDef),
    /// A class: defaults, methods, optional parent.
    Class(Rc<ClassValue>),
    /// An instance of a class.
    Instance(Rc<InstanceValue>),
}

/// A function value: the literal it came from plus the scope it captured.
///
/// Bound methods reuse the same literal with a different scope, so binding a
/// method costs one scope allocation and nothing else.
#[derive(Debug)]
pub struct FunctionValue {
    /// The parsed literal: name, parameters and body.
    pub node: Rc<FunctionLiteral>,
    /// Handle of the captured scope.
    pub env:  ScopeId,
}

/// A class value, produced by evaluating a `clase` literal.
#[derive(Debug)]
pub struct ClassValue {
    /// The class name.
    pub name:       String,
    /// Property defaults, evaluated once in the declaring scope.
    pub properties: HashMap<String, Value>,
    /// Methods by name. Lookup does not follow `parent`.
    pub methods:    HashMap<String, Rc<FunctionValue>>,
    /// The resolved parent class, when declared with `extiende`.
    pub parent:     Option<Rc<ClassValue>>,
}

/// An instance of a class.
#[derive(Debug)]
pub struct InstanceValue {
    /// The class this value instantiates.
    pub class:      Rc<ClassValue>,
    /// The instance's own properties. Dot-assignment writes here.
    pub properties: RefCell<HashMap<String, Value>>,
    /// Handle of the instance's scope, where `esto` is bound.
    pub env:        ScopeId,
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl Value {
    /// The language-level name of this value's type, as used in error
    /// messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "ENTERO",
            Self::Float(_) => "DECIMAL",
            Self::Boolean(_) => "BOOLEANO",
            Self::Str(_) => "TEXTO",
            Self::Null => "NULO",
            Self::Array(_) => "LISTA",
            Self::Hash(_) => "MAPA",
            Self::Function(_) => "FUNCION",
            Self::Builtin(_) => "INCORPORADO",
            Self::Class(_) => "CLASE",
            Self::Instance(_) => "INSTANCIA",
        }
    }

    /// The language's notion of truth: `nulo`, `falso`, zero and the empty
    /// string are false, everything else is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Boolean(false) => false,
            Self::Boolean(true) => true,
            Self::Integer(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Str(value) => !value.is_empty(),
            _ => true,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Equality as the `==`/`!=` operators see it: primitives compare by value,
/// composite values by identity, and mismatched types are never equal.
/// Numeric promotion across `ENTERO`/`DECIMAL` is the evaluator's business,
/// not this impl's.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => std::ptr::eq(*left, *right),
            (Self::Class(left), Self::Class(right)) => Rc::ptr_eq(left, right),
            (Self::Instance(left), Self::Instance(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(true) => write!(f, "verdad"),
            Self::Boolean(false) => write!(f, "falso"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "nulo"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                let parameters = function.node
                                         .parameters
                                         .iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "fun")?;
                if let Some(name) = &function.node.name {
                    write!(f, " {name}")?;
                }
                write!(f, "({parameters}) {{\n{}\n}}", function.node.body)
            },
            Self::Builtin(_) => write!(f, "función incorporada"),
            Self::Class(class) => {
                write!(f, "clase {}", class.name)?;
                if let Some(parent) = &class.parent {
                    write!(f, " hereda {}", parent.name)?;
                }
                write!(f, " {{ ... }}")
            },
            Self::Instance(instance) => write!(f, "instancia de {}", instance.class.name),
        }
    }
}
