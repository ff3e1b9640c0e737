use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, environment::ScopeId, hash::HashPair},
    },
};

impl Context {
    /// Builds a hash value from a literal's key/value pairs.
    ///
    /// Keys must be hashable (integer, boolean or string); each key is
    /// checked before its value is evaluated. Later duplicates overwrite
    /// earlier ones.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expression, Expression)],
                                    scope: ScopeId)
                                    -> EvalResult<Value> {
        let mut map = HashMap::new();

        for (key_expression, value_expression) in pairs {
            let key = self.eval(key_expression, scope)?;
            let Some(hash_key) = key.hash_key() else {
                return Err(RuntimeError::UnhashableKey { kind: key.type_name() }.into());
            };

            let value = self.eval(value_expression, scope)?;
            map.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(map)))
    }
}

/// Evaluates an index access on already-evaluated operands.
///
/// Array indices must be integers; out-of-range accesses yield `nulo`, not
/// an error. Hash lookups yield `nulo` for missing keys and reject
/// non-hashable ones.
///
/// # Errors
/// `operador de índice no soportado` for any other receiver, including an
/// array indexed with a non-integer.
pub fn eval_index(left: &Value, index: &Value) -> Result<Value, RuntimeError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(at)) => {
            let element = usize::try_from(*at).ok().and_then(|at| elements.get(at));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), key) => {
            let Some(hash_key) = key.hash_key() else {
                return Err(RuntimeError::UnhashableKey { kind: key.type_name() });
            };
            Ok(pairs.get(&hash_key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name() }),
    }
}
