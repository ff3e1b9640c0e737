use chrono::Local;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::builtin::{BuiltinResult, math},
        value::core::Value,
    },
};

/// The current local time as `AAAA-MM-DD HH:MM:SS`.
pub fn ahora(_args: &[Value]) -> BuiltinResult {
    Ok(Value::from(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()))
}

/// Blocks the interpreter for the given number of seconds; fractions are
/// honored, non-positive durations return at once.
pub fn dormir(args: &[Value]) -> BuiltinResult {
    let Some(seconds) = math::as_float(&args[0]) else {
        return Err(RuntimeError::InvalidArgument { builtin: "dormir",
                                                   got:     args[0].type_name(), });
    };

    if seconds.is_finite() && seconds > 0.0 {
        std::thread::sleep(std::time::Duration::from_secs_f64(seconds));
    }

    Ok(Value::Null)
}
