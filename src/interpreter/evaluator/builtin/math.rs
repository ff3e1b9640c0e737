use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtin::BuiltinResult, value::core::Value},
};

/// Absolute value. Integers stay integers and wrap on `i64::MIN`.
pub fn abs(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_abs())),
        Value::Float(value) => Ok(Value::Float(value.abs())),
        other => Err(RuntimeError::InvalidArgument { builtin: "abs",
                                                     got:     other.type_name(), }),
    }
}

/// Rounds to the nearest whole value; integers pass through.
pub fn redondear(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Integer(value) => Ok(Value::Integer(*value)),
        Value::Float(value) => Ok(Value::Float(value.round())),
        other => Err(RuntimeError::InvalidArgument { builtin: "redondear",
                                                     got:     other.type_name(), }),
    }
}

/// Rounds toward negative infinity; integers pass through.
pub fn piso(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Integer(value) => Ok(Value::Integer(*value)),
        Value::Float(value) => Ok(Value::Float(value.floor())),
        other => Err(RuntimeError::InvalidArgument { builtin: "piso",
                                                     got:     other.type_name(), }),
    }
}

/// Rounds toward positive infinity; integers pass through.
pub fn techo(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Integer(value) => Ok(Value::Integer(*value)),
        Value::Float(value) => Ok(Value::Float(value.ceil())),
        other => Err(RuntimeError::InvalidArgument { builtin: "techo",
                                                     got:     other.type_name(), }),
    }
}

/// `potencia(base, exponente)` through IEEE-754 `powf`.
///
/// When the result is a whole number inside the integer range it collapses
/// back to an integer, so `potencia(2, 10)` is `1024`, not `1024.0`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn potencia(args: &[Value]) -> BuiltinResult {
    let base = as_float(&args[0]).ok_or_else(|| RuntimeError::Other {
        message: format!("primer argumento no válido para 'potencia': {}", args[0].type_name()),
    })?;
    let exponent = as_float(&args[1]).ok_or_else(|| RuntimeError::Other {
        message: format!("segundo argumento no válido para 'potencia': {}", args[1].type_name()),
    })?;

    let result = base.powf(exponent);

    if result == result.floor() && result <= i64::MAX as f64 && result >= i64::MIN as f64 {
        return Ok(Value::Integer(result as i64));
    }

    Ok(Value::Float(result))
}

/// `raiz(valor)` is the square root; `raiz(valor, índice)` the índice-th
/// root. Negative radicands are rejected.
pub fn raiz(args: &[Value]) -> BuiltinResult {
    let value = as_float(&args[0]).ok_or_else(|| RuntimeError::Other {
        message: format!("primer argumento no válido para 'raiz': {}", args[0].type_name()),
    })?;

    if value < 0.0 {
        return Err(RuntimeError::Other {
            message: "no se puede calcular la raíz de un número negativo".to_string(),
        });
    }

    if args.len() == 2 {
        let index = as_float(&args[1]).ok_or_else(|| RuntimeError::Other {
            message: format!("segundo argumento no válido para 'raiz': {}", args[1].type_name()),
        })?;

        if index == 0.0 {
            return Err(RuntimeError::Other {
                message: "el índice de la raíz no puede ser cero".to_string(),
            });
        }

        return Ok(Value::Float(value.powf(1.0 / index)));
    }

    Ok(Value::Float(value.sqrt()))
}

/// Reads a numeric argument as `f64`, promoting integers.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(value) => Some(*value as f64),
        Value::Float(value) => Some(*value),
        _ => None,
    }
}
