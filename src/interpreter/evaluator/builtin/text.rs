use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtin::BuiltinResult, value::core::Value},
};

/// Converts any value to its display text.
pub fn texto(args: &[Value]) -> BuiltinResult {
    Ok(Value::from(args[0].to_string()))
}

/// Converts a value to a number. Strings parse as integer first, decimal
/// second; numbers pass through.
pub fn num(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Integer(value) => Ok(Value::Integer(*value)),
        Value::Float(value) => Ok(Value::Float(*value)),
        Value::Str(text) => {
            if let Ok(value) = text.parse::<i64>() {
                return Ok(Value::Integer(value));
            }
            if let Ok(value) = text.parse::<f64>() {
                return Ok(Value::Float(value));
            }
            Err(RuntimeError::Other { message: format!("no se pudo convertir '{text}' a número") })
        },
        other => Err(RuntimeError::InvalidArgument { builtin: "num",
                                                     got:     other.type_name(), }),
    }
}

pub fn mayusculas(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Str(text) => Ok(Value::from(text.to_uppercase())),
        other => Err(RuntimeError::InvalidArgument { builtin: "mayusculas",
                                                     got:     other.type_name(), }),
    }
}

pub fn minusculas(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Str(text) => Ok(Value::from(text.to_lowercase())),
        other => Err(RuntimeError::InvalidArgument { builtin: "minusculas",
                                                     got:     other.type_name(), }),
    }
}

/// Strips leading and trailing whitespace.
pub fn recortar(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Str(text) => Ok(Value::from(text.trim())),
        other => Err(RuntimeError::InvalidArgument { builtin: "recortar",
                                                     got:     other.type_name(), }),
    }
}

/// `contiene(texto, fragmento)` tests substring membership.
pub fn contiene(args: &[Value]) -> BuiltinResult {
    if let (Value::Str(text), Value::Str(fragment)) = (&args[0], &args[1]) {
        return Ok(Value::Boolean(text.contains(fragment.as_ref())));
    }

    Err(RuntimeError::Other { message: format!("argumentos no válidos para 'contiene': {}, {}",
                                               args[0].type_name(),
                                               args[1].type_name()), })
}

/// `reemplazar(texto, viejo, nuevo)` replaces every occurrence.
pub fn reemplazar(args: &[Value]) -> BuiltinResult {
    if let (Value::Str(text), Value::Str(old), Value::Str(new)) = (&args[0], &args[1], &args[2]) {
        return Ok(Value::from(text.replace(old.as_ref(), new)));
    }

    Err(RuntimeError::Other { message: "argumentos no válidos para 'reemplazar'".to_string() })
}

/// `dividir(texto, separador)` splits into an array of strings. An empty
/// separator splits between every character.
pub fn dividir(args: &[Value]) -> BuiltinResult {
    if let (Value::Str(text), Value::Str(separator)) = (&args[0], &args[1]) {
        let parts: Vec<Value> = if separator.is_empty() {
            text.chars().map(|c| Value::from(c.to_string())).collect()
        } else {
            text.split(separator.as_ref()).map(Value::from).collect()
        };
        return Ok(Value::from(parts));
    }

    Err(RuntimeError::Other { message: format!("argumentos no válidos para 'dividir': {}, {}",
                                               args[0].type_name(),
                                               args[1].type_name()), })
}
