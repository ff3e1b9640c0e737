use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// # Errors
/// Returns `operador de prefijo desconocido` when the operator does not
/// apply to the operand.
pub fn eval_prefix(operator: &str, right: &Value) -> Result<Value, RuntimeError> {
    match operator {
        "!" => Ok(eval_bang(right)),
        "-" => eval_minus(right),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                       operand:  right.type_name(), }),
    }
}

/// Logical NOT.
///
/// Literal-minded rather than truthiness-based: only `falso` and `nulo`
/// negate to `verdad`; every other value, zero and the empty string
/// included, negates to `falso`.
fn eval_bang(right: &Value) -> Value {
    match right {
        Value::Boolean(value) => Value::Boolean(!value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Arithmetic negation. Integers wrap on `i64::MIN`.
fn eval_minus(right: &Value) -> Result<Value, RuntimeError> {
    match right {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        Value::Float(value) => Ok(Value::Float(-value)),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: "-".to_string(),
                                                       operand:  right.type_name(), }),
    }
}
