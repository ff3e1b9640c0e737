use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, environment::ScopeId},
    },
};

impl Context {
    /// Evaluates the short-circuiting `y`/`o` words.
    ///
    /// The right operand is only evaluated when the left one does not decide
    /// the outcome, and the result is the last operand evaluated, not a
    /// coerced boolean.
    pub(crate) fn eval_logical(&mut self,
                               operator: &str,
                               left: &Expression,
                               right: &Expression,
                               scope: ScopeId)
                               -> EvalResult<Value> {
        let left = self.eval(left, scope)?;
        let needs_right = if operator == "y" {
            left.is_truthy()
        } else {
            !left.is_truthy()
        };

        if needs_right {
            self.eval(right, scope)
        } else {
            Ok(left)
        }
    }
}

/// Evaluates an infix operation on two already-evaluated operands.
///
/// Dispatch order: integer pair, decimal pair, mixed numeric pair (the
/// integer side promotes), string pair, then the `==`/`!=` identity
/// fallback; whatever remains is a type mismatch when the operand types
/// differ and an unknown operator when they match.
///
/// # Errors
/// `división por cero` / `módulo por cero` on zero divisors, `tipo de
/// operando no válido` on mixed types, `operador desconocido` otherwise.
#[allow(clippy::cast_precision_loss)]
pub fn eval_infix(operator: &str, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_infix(operator, *l, *r),
        (Value::Float(l), Value::Float(r)) => float_infix(operator, *l, *r),
        (Value::Integer(l), Value::Float(r)) => float_infix(operator, *l as f64, *r),
        (Value::Float(l), Value::Integer(r)) => float_infix(operator, *l, *r as f64),
        (Value::Str(l), Value::Str(r)) => string_infix(operator, l, r),
        _ => match operator {
            "==" => Ok(Value::Boolean(left == right)),
            "!=" => Ok(Value::Boolean(left != right)),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                                 operator: operator.to_string(),
                                                 right:    right.type_name(), })
            },
            _ => Err(RuntimeError::UnknownOperator { left:     left.type_name(),
                                                     operator: operator.to_string(),
                                                     right:    right.type_name(), }),
        },
    }
}

/// Integer arithmetic and comparison, with two's-complement wrapping.
fn integer_infix(operator: &str, left: i64, right: i64) -> Result<Value, RuntimeError> {
    match operator {
        "+" => Ok(Value::Integer(left.wrapping_add(right))),
        "-" => Ok(Value::Integer(left.wrapping_sub(right))),
        "*" => Ok(Value::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Integer(left.wrapping_div(right)))
        },
        "%" => {
            if right == 0 {
                return Err(RuntimeError::ModuloByZero);
            }
            Ok(Value::Integer(left.wrapping_rem(right)))
        },
        "^" => {
            // Exponentiation by repeated multiplication; a negative
            // exponent runs the loop zero times and yields 1.
            let mut result: i64 = 1;
            let mut i: i64 = 0;
            while i < right {
                result = result.wrapping_mul(left);
                i += 1;
            }
            Ok(Value::Integer(result))
        },
        "<" => Ok(Value::Boolean(left < right)),
        ">" => Ok(Value::Boolean(left > right)),
        "==" => Ok(Value::Boolean(left == right)),
        "!=" => Ok(Value::Boolean(left != right)),
        _ => Err(RuntimeError::UnknownOperator { left:     "ENTERO",
                                                 operator: operator.to_string(),
                                                 right:    "ENTERO", }),
    }
}

/// Decimal arithmetic and comparison.
///
/// `%` truncates both operands to integers before taking the remainder, and
/// `^` multiplies while a counter stays below the exponent.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::float_cmp)]
fn float_infix(operator: &str, left: f64, right: f64) -> Result<Value, RuntimeError> {
    match operator {
        "+" => Ok(Value::Float(left + right)),
        "-" => Ok(Value::Float(left - right)),
        "*" => Ok(Value::Float(left * right)),
        "/" => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Float(left / right))
        },
        "%" => {
            if right == 0.0 {
                return Err(RuntimeError::ModuloByZero);
            }
            let divisor = right as i64;
            // A fractional divisor below 1 truncates to 0.
            if divisor == 0 {
                return Err(RuntimeError::ModuloByZero);
            }
            Ok(Value::Float((left as i64 % divisor) as f64))
        },
        "^" => {
            let mut result = 1.0;
            let mut i = 0.0;
            while i < right {
                result *= left;
                i += 1.0;
            }
            Ok(Value::Float(result))
        },
        "<" => Ok(Value::Boolean(left < right)),
        ">" => Ok(Value::Boolean(left > right)),
        "==" => Ok(Value::Boolean(left == right)),
        "!=" => Ok(Value::Boolean(left != right)),
        _ => Err(RuntimeError::UnknownOperator { left:     "DECIMAL",
                                                 operator: operator.to_string(),
                                                 right:    "DECIMAL", }),
    }
}

/// String concatenation and equality.
fn string_infix(operator: &str, left: &str, right: &str) -> Result<Value, RuntimeError> {
    match operator {
        "+" => Ok(Value::from(format!("{left}{right}"))),
        "==" => Ok(Value::Boolean(left == right)),
        "!=" => Ok(Value::Boolean(left != right)),
        _ => Err(RuntimeError::UnknownOperator { left:     "TEXTO",
                                                 operator: operator.to_string(),
                                                 right:    "TEXTO", }),
    }
}
