use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtin::BuiltinResult, value::core::Value},
};

/// The process arguments after the program name, as an array of strings.
pub fn args(_args: &[Value]) -> BuiltinResult {
    let arguments: Vec<Value> = std::env::args().skip(1).map(Value::from).collect();
    Ok(Value::from(arguments))
}

/// Ends the process, with the given integer code or 0.
#[allow(clippy::cast_possible_truncation)]
pub fn salir(args: &[Value]) -> BuiltinResult {
    let code = match args.first() {
        None => 0,
        Some(Value::Integer(code)) => *code as i32,
        Some(other) => {
            return Err(RuntimeError::InvalidArgument { builtin: "salir",
                                                       got:     other.type_name(), });
        },
    };

    std::process::exit(code);
}

/// Reads a `.gaby` file and returns its source text for the caller to feed
/// back into evaluation.
pub fn cargar(args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Str(path) => {
            if !path.ends_with(".gaby") {
                return Err(RuntimeError::Other {
                    message: "el archivo debe tener extensión .gaby".to_string(),
                });
            }

            match std::fs::read_to_string(path.as_ref()) {
                Ok(source) => Ok(Value::from(source)),
                Err(error) => Err(RuntimeError::Other {
                    message: format!("error al leer el archivo: {error}"),
                }),
            }
        },
        other => Err(RuntimeError::InvalidArgument { builtin: "cargar",
                                                     got:     other.type_name(), }),
    }
}
