#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while a program runs.
///
/// Runtime errors are ordinary values that bubble up through evaluation; the
/// message texts are the user-facing Spanish prose the driver prints behind
/// an `ERROR:` prefix. Type names inside messages are the language's own
/// (`ENTERO`, `TEXTO`, `LISTA`, …).
pub enum RuntimeError {
    /// Looked up a name bound neither in any scope nor in the builtin table.
    IdentifierNotFound {
        /// The unknown name.
        name: String,
    },
    /// Applied an unknown prefix operator to a value.
    UnknownPrefixOperator {
        /// The operator lexeme.
        operator: String,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// Applied an operator two same-typed operands do not support.
    UnknownOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator lexeme.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Mixed two incompatible operand types in an infix operation.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator lexeme.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Integer or decimal division with a zero divisor.
    DivisionByZero,
    /// Integer or decimal modulo with a zero divisor.
    ModuloByZero,
    /// Called a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type name of the called value.
        kind: &'static str,
    },
    /// Used `nuevo` on a value that is not a class.
    NotAClass {
        /// Type name of the offending value.
        kind: &'static str,
    },
    /// Indexed a value that does not support `[ ]`.
    IndexNotSupported {
        /// Type name of the receiver.
        kind: &'static str,
    },
    /// Used a non-hashable value as a hash key.
    UnhashableKey {
        /// Type name of the offending key.
        kind: &'static str,
    },
    /// Accessed a property an instance does not have.
    PropertyNotFound {
        /// The property name.
        property: String,
    },
    /// Accessed a property strings do not have.
    StringPropertyNotFound {
        /// The property name.
        property: String,
    },
    /// Accessed a property arrays do not have.
    ArrayPropertyNotFound {
        /// The property name.
        property: String,
    },
    /// Used dot access on a value without properties.
    PropertyAccessNotSupported {
        /// Type name of the receiver.
        kind: &'static str,
    },
    /// Assigned to an expression that is not an identifier or a property.
    InvalidAssignmentTarget,
    /// Called a builtin with the wrong number of arguments.
    WrongArgumentCount {
        /// Human-readable description of the accepted counts, e.g. `1 o 2`.
        expected: String,
        /// How many arguments were actually passed.
        got:      usize,
    },
    /// Passed a builtin an argument of the wrong type.
    InvalidArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// Type name of the offending argument.
        got:     &'static str,
    },
    /// Any other runtime failure, with a ready-made message.
    Other {
        /// The full message.
        message: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => {
                write!(f, "identificador no encontrado: {name}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "operador de prefijo desconocido: {operator}{operand}")
            },
            Self::UnknownOperator { left, operator, right } => {
                write!(f, "operador desconocido: {left} {operator} {right}")
            },
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "tipo de operando no válido: {left} {operator} {right}")
            },
            Self::DivisionByZero => write!(f, "división por cero"),
            Self::ModuloByZero => write!(f, "módulo por cero"),
            Self::NotAFunction { kind } => write!(f, "no es una función: {kind}"),
            Self::NotAClass { kind } => write!(f, "no es una clase: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "operador de índice no soportado: {kind}")
            },
            Self::UnhashableKey { kind } => {
                write!(f, "clave no utilizable como hash: {kind}")
            },
            Self::PropertyNotFound { property } => {
                write!(f, "propiedad o método no encontrado: {property}")
            },
            Self::StringPropertyNotFound { property } => {
                write!(f, "propiedad no encontrada en string: {property}")
            },
            Self::ArrayPropertyNotFound { property } => {
                write!(f, "propiedad no encontrada en array: {property}")
            },
            Self::PropertyAccessNotSupported { kind } => {
                write!(f, "acceso a propiedad no soportado para: {kind}")
            },
            Self::InvalidAssignmentTarget => write!(f, "objetivo de asignación no válido"),
            Self::WrongArgumentCount { expected, got } => {
                write!(f,
                       "número incorrecto de argumentos: se esperaba {expected}, se obtuvo {got}")
            },
            Self::InvalidArgument { builtin, got } => {
                write!(f, "argumento no válido para '{builtin}': {got}")
            },
            Self::Other { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
