use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Signal},
        value::{core::Value, environment::ScopeId},
    },
};

impl Context {
    /// Evaluates a call expression: the callee first, then the arguments
    /// left to right, then the application.
    pub(crate) fn eval_call(&mut self,
                            function: &Expression,
                            arguments: &[Expression],
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let callee = self.eval(function, scope)?;
        let arguments = self.eval_expressions(arguments, scope)?;
        self.apply_function(&callee, &arguments)
    }

    /// Evaluates a list of expressions left to right, stopping at the first
    /// error.
    pub(crate) fn eval_expressions(&mut self,
                                   expressions: &[Expression],
                                   scope: ScopeId)
                                   -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(expressions.len());
        for expression in expressions {
            values.push(self.eval(expression, scope)?);
        }
        Ok(values)
    }

    /// Applies a callable to already-evaluated arguments.
    ///
    /// A user function runs its body in a fresh scope enclosing its captured
    /// one, with parameters bound positionally and the missing ones bound to
    /// `nulo`; a trailing `devolver` unwraps here. A builtin has its arity
    /// checked against the table and then runs on the values directly.
    pub(crate) fn apply_function(&mut self,
                                 callee: &Value,
                                 arguments: &[Value])
                                 -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                let call_scope = self.env.enclosed(function.env);
                for (index, parameter) in function.node.parameters.iter().enumerate() {
                    let value = arguments.get(index).cloned().unwrap_or(Value::Null);
                    self.env.set(call_scope, &parameter.value, value);
                }

                match self.eval_block(&function.node.body, call_scope) {
                    Err(Signal::Return(value)) => Ok(value),
                    other => other,
                }
            },
            Value::Builtin(builtin) => {
                if !builtin.arity.accepts(arguments.len()) {
                    return Err(RuntimeError::WrongArgumentCount {
                        expected: builtin.arity.expected(),
                        got:      arguments.len(),
                    }.into());
                }
                Ok((builtin.func)(arguments)?)
            },
            other => Err(RuntimeError::NotAFunction { kind: other.type_name() }.into()),
        }
    }
}
