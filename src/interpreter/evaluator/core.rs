use std::rc::Rc;

use crate::{
    ast::{
        BlockStatement, Expression, ForExpression, Identifier, Program, Statement,
    },
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, index, infix, prefix},
        value::{
            core::{FunctionValue, Value},
            environment::{Environment, ScopeId},
        },
    },
};

/// A non-value outcome that unwinds evaluation.
///
/// `devolver` and runtime failures travel the same road: the error position
/// of the evaluator's `Result`, so `?` propagates both. Call boundaries
/// unwrap `Return`; only `Failure` ever reaches the caller of a program.
#[derive(Debug)]
pub enum Signal {
    /// A `devolver` on its way out of the surrounding function.
    Return(Value),
    /// A runtime error; stops everything up to the top level.
    Failure(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Failure(error)
    }
}

/// Result type used throughout the evaluator.
pub type EvalResult<T> = Result<T, Signal>;

/// Stores the runtime evaluation context.
///
/// Owns the scope arena and drives all evaluation. A `Context` is created
/// once and reused across programs or REPL lines, so bindings persist from
/// one evaluation to the next.
pub struct Context {
    /// The scope arena. Scope 0 is the global scope.
    pub env: Environment,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a fresh context with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new() }
    }

    /// Evaluates a whole program in the global scope.
    ///
    /// A `devolver` at the top level unwraps to its inner value. The result
    /// is the value of the last statement, `nulo` for an empty program.
    ///
    /// # Errors
    /// Returns the first runtime error the program raises.
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let mut result = Value::Null;

        for statement in &program.statements {
            match self.eval_statement(statement, Environment::global()) {
                Ok(value) => result = value,
                Err(Signal::Return(value)) => return Ok(value),
                Err(Signal::Failure(error)) => return Err(error),
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    pub(crate) fn eval_statement(&mut self,
                                 statement: &Statement,
                                 scope: ScopeId)
                                 -> EvalResult<Value> {
        match statement {
            Statement::Var(declaration) => {
                let value = self.eval(&declaration.value, scope)?;
                self.env.set(scope, &declaration.name.value, value.clone());
                Ok(value)
            },
            Statement::Return(statement) => {
                let value = match &statement.value {
                    Some(expression) => self.eval(expression, scope)?,
                    None => Value::Null,
                };
                Err(Signal::Return(value))
            },
            Statement::Expression(statement) => self.eval(&statement.expression, scope),
        }
    }

    /// Evaluates the statements of a block in the given scope.
    ///
    /// Blocks do not open scopes of their own; functions and `para` loops
    /// do. A `devolver` or an error anywhere in the block unwinds through
    /// the `Err` channel untouched.
    pub(crate) fn eval_block(&mut self,
                             block: &BlockStatement,
                             scope: ScopeId)
                             -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in &block.statements {
            result = self.eval_statement(statement, scope)?;
        }
        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main dispatch of the interpreter: every expression
    /// variant is routed to its handler from here.
    pub(crate) fn eval(&mut self, expression: &Expression, scope: ScopeId) -> EvalResult<Value> {
        match expression {
            Expression::Identifier(identifier) => self.eval_identifier(identifier, scope),
            Expression::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expression::Float { value, .. } => Ok(Value::Float(*value)),
            Expression::Str { value, .. } => Ok(Value::from(value.as_str())),
            Expression::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expression::Null { .. } => Ok(Value::Null),
            Expression::Prefix { operator, right, .. } => {
                let right = self.eval(right, scope)?;
                Ok(prefix::eval_prefix(operator, &right)?)
            },
            Expression::Infix { operator, left, right, .. } => {
                if operator == "y" || operator == "o" {
                    return self.eval_logical(operator, left, right, scope);
                }
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                Ok(infix::eval_infix(operator, &left, &right)?)
            },
            Expression::Assign { target, value, .. } => {
                let value = self.eval(value, scope)?;
                self.assign_to(target, value, scope)
            },
            Expression::AssignCompound { operator,
                                         target,
                                         value,
                                         .. } => {
                self.eval_compound_assign(operator, target, value, scope)
            },
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => {
                let condition = self.eval(condition, scope)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, scope)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, scope)
                } else {
                    Ok(Value::Null)
                }
            },
            Expression::While { condition, body, .. } => self.eval_while(condition, body, scope),
            Expression::For(for_expression) => self.eval_for(for_expression, scope),
            Expression::Function(literal) => {
                let function =
                    Value::Function(Rc::new(FunctionValue { node: literal.clone(),
                                                            env:  scope, }));
                // A named literal doubles as a declaration.
                if let Some(name) = &literal.name {
                    self.env.set(scope, name, function.clone());
                }
                Ok(function)
            },
            Expression::Call { function, arguments, .. } => {
                self.eval_call(function, arguments, scope)
            },
            Expression::Array { elements, .. } => {
                let elements = self.eval_expressions(elements, scope)?;
                Ok(Value::Array(Rc::new(elements)))
            },
            Expression::Hash { pairs, .. } => self.eval_hash_literal(pairs, scope),
            Expression::Index { left, index, .. } => {
                let left = self.eval(left, scope)?;
                let index = self.eval(index, scope)?;
                Ok(index::eval_index(&left, &index)?)
            },
            Expression::Dot { object, property, .. } => self.eval_dot(object, property, scope),
            Expression::Class(class) => self.eval_class_literal(class, scope),
            Expression::New { class, arguments, .. } => self.eval_new(class, arguments, scope),
        }
    }

    /// Resolves a name: scope chain first, then the builtin table.
    fn eval_identifier(&mut self, identifier: &Identifier, scope: ScopeId) -> EvalResult<Value> {
        if let Some(value) = self.env.get(scope, &identifier.value) {
            return Ok(value);
        }
        if let Some(builtin) = builtin::lookup(&identifier.value) {
            return Ok(Value::Builtin(builtin));
        }
        Err(RuntimeError::IdentifierNotFound { name: identifier.value.clone() }.into())
    }

    fn eval_while(&mut self,
                  condition: &Expression,
                  body: &BlockStatement,
                  scope: ScopeId)
                  -> EvalResult<Value> {
        let mut result = Value::Null;
        loop {
            let condition = self.eval(condition, scope)?;
            if !condition.is_truthy() {
                break;
            }
            result = self.eval_block(body, scope)?;
        }
        Ok(result)
    }

    /// Evaluates a `para` loop in its own enclosed scope.
    fn eval_for(&mut self, for_expression: &ForExpression, scope: ScopeId) -> EvalResult<Value> {
        let loop_scope = self.env.enclosed(scope);

        if let Some(init) = &for_expression.init {
            self.eval_statement(init, loop_scope)?;
        }

        let mut result = Value::Null;
        loop {
            if let Some(condition) = &for_expression.condition {
                let condition = self.eval(condition, loop_scope)?;
                if !condition.is_truthy() {
                    break;
                }
            }

            result = self.eval_block(&for_expression.body, loop_scope)?;

            if let Some(update) = &for_expression.update {
                self.eval_statement(update, loop_scope)?;
            }
        }
        Ok(result)
    }

    /// Writes `value` through an assignment target.
    ///
    /// Identifier targets write the innermost scope unconditionally, the
    /// same path declarations take. Dot targets write the instance's own
    /// properties.
    fn assign_to(&mut self,
                 target: &Expression,
                 value: Value,
                 scope: ScopeId)
                 -> EvalResult<Value> {
        match target {
            Expression::Identifier(identifier) => {
                self.env.set(scope, &identifier.value, value.clone());
                Ok(value)
            },
            Expression::Dot { object, property, .. } => {
                let receiver = self.eval(object, scope)?;
                match receiver {
                    Value::Instance(instance) => {
                        instance.properties
                                .borrow_mut()
                                .insert(property.value.clone(), value.clone());
                        Ok(value)
                    },
                    other => Err(RuntimeError::PropertyAccessNotSupported {
                        kind: other.type_name(),
                    }.into()),
                }
            },
            _ => Err(RuntimeError::InvalidAssignmentTarget.into()),
        }
    }

    /// Desugars `objetivo op= valor` into read, operate, write.
    ///
    /// The read walks the scope chain like any other use of the target; the
    /// write is the innermost-scope write of plain assignment.
    fn eval_compound_assign(&mut self,
                            operator: &str,
                            target: &Expression,
                            value: &Expression,
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let current = self.eval(target, scope)?;
        let operand = self.eval(value, scope)?;
        let operator = &operator[..operator.len() - 1];
        let result = infix::eval_infix(operator, &current, &operand)?;
        self.assign_to(target, result, scope)
    }
}
