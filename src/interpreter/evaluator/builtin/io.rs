use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtin::BuiltinResult, value::core::Value},
};

/// Prints each argument on its own line.
pub fn mostrar(args: &[Value]) -> BuiltinResult {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for arg in args {
        let _ = writeln!(out, "{arg}");
    }
    Ok(Value::Null)
}

/// Reads a line from standard input, without the trailing line break.
pub fn leer(_args: &[Value]) -> BuiltinResult {
    let input = read_line()?;
    Ok(Value::from(input.trim_end_matches(['\r', '\n'])))
}

/// Reads a line from standard input and converts it to a number, integer
/// first and decimal second.
pub fn leer_numero(_args: &[Value]) -> BuiltinResult {
    let input = read_line()?;
    let input = input.trim();

    if let Ok(value) = input.parse::<i64>() {
        return Ok(Value::Integer(value));
    }
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Value::Float(value));
    }

    Err(RuntimeError::Other { message: format!("no se pudo convertir '{input}' a número") })
}

fn read_line() -> Result<String, RuntimeError> {
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|error| RuntimeError::Other {
            message: format!("error al leer entrada: {error}"),
        })?;
    Ok(input)
}
