use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtin::BuiltinResult, value::core::Value},
};

/// Length of a string (in bytes), array or hash.
#[allow(clippy::cast_possible_wrap)]
pub fn longitud(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Str(text) => Ok(Value::Integer(text.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        Value::Hash(pairs) => Ok(Value::Integer(pairs.len() as i64)),
        other => Err(RuntimeError::InvalidArgument { builtin: "longitud",
                                                     got:     other.type_name(), }),
    }
}

/// Returns a new array with the element appended; the original array is
/// untouched.
pub fn agregar(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::Other {
            message: format!("primer argumento no válido para 'agregar': {}", other.type_name()),
        }),
    }
}

/// Returns a new array without the element at the given index.
pub fn eliminar(args: &[Value]) -> BuiltinResult {
    if let (Value::Array(elements), Value::Integer(index)) = (&args[0], &args[1]) {
        let Ok(index) = usize::try_from(*index) else {
            return Err(RuntimeError::Other { message: "índice fuera de rango".to_string() });
        };
        if index >= elements.len() {
            return Err(RuntimeError::Other { message: "índice fuera de rango".to_string() });
        }

        let mut remaining = Vec::with_capacity(elements.len() - 1);
        remaining.extend(elements[..index].iter().cloned());
        remaining.extend(elements[index + 1..].iter().cloned());
        return Ok(Value::Array(Rc::new(remaining)));
    }

    Err(RuntimeError::Other { message: format!("argumentos no válidos para 'eliminar': {}, {}",
                                               args[0].type_name(),
                                               args[1].type_name()), })
}

/// `rango(inicio, fin)` builds the inclusive integer sequence between the
/// two bounds.
pub fn rango(args: &[Value]) -> BuiltinResult {
    let Value::Integer(start) = args[0] else {
        return Err(RuntimeError::Other {
            message: format!("primer argumento no válido para 'rango': {}", args[0].type_name()),
        });
    };
    let Value::Integer(end) = args[1] else {
        return Err(RuntimeError::Other {
            message: format!("segundo argumento no válido para 'rango': {}", args[1].type_name()),
        });
    };

    if start > end {
        return Err(RuntimeError::Other {
            message: "el inicio no puede ser mayor que el fin".to_string(),
        });
    }

    let elements: Vec<Value> = (start..=end).map(Value::Integer).collect();
    Ok(Value::from(elements))
}
