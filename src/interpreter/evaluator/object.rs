use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::{ClassLiteral, Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Signal},
        value::{
            core::{ClassValue, FunctionValue, InstanceValue, Value},
            environment::ScopeId,
        },
    },
};

impl Context {
    /// Evaluates `receptor.propiedad`.
    ///
    /// On an instance the lookup order is own properties, then the class's
    /// methods; a method comes back bound, with `esto` installed in a fresh
    /// scope over the instance's environment. Strings and arrays expose only
    /// `longitud`. Method lookup does not follow the parent class.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn eval_dot(&mut self,
                           object: &Expression,
                           property: &Identifier,
                           scope: ScopeId)
                           -> EvalResult<Value> {
        let receiver = self.eval(object, scope)?;

        match &receiver {
            Value::Instance(instance) => {
                if let Some(value) = instance.properties.borrow().get(&property.value) {
                    return Ok(value.clone());
                }

                if let Some(method) = instance.class.methods.get(&property.value) {
                    let bound_scope = self.env.enclosed(instance.env);
                    let bound =
                        Value::Function(Rc::new(FunctionValue { node: method.node.clone(),
                                                                env:  bound_scope, }));
                    self.env.set(bound_scope, "esto", receiver.clone());
                    return Ok(bound);
                }

                Err(RuntimeError::PropertyNotFound { property: property.value.clone() }.into())
            },
            Value::Str(text) => match property.value.as_str() {
                "longitud" => Ok(Value::Integer(text.len() as i64)),
                _ => Err(RuntimeError::StringPropertyNotFound {
                    property: property.value.clone(),
                }.into()),
            },
            Value::Array(elements) => match property.value.as_str() {
                "longitud" => Ok(Value::Integer(elements.len() as i64)),
                _ => Err(RuntimeError::ArrayPropertyNotFound {
                    property: property.value.clone(),
                }.into()),
            },
            other => {
                Err(RuntimeError::PropertyAccessNotSupported { kind: other.type_name() }.into())
            },
        }
    }

    /// Evaluates a class literal into a class value.
    ///
    /// Property defaults are evaluated once, in the declaring scope. Each
    /// method captures a fresh scope enclosing the declaring one. As a side
    /// effect the class is bound under its own name.
    pub(crate) fn eval_class_literal(&mut self,
                                     class: &ClassLiteral,
                                     scope: ScopeId)
                                     -> EvalResult<Value> {
        let parent = match &class.parent {
            Some(name) => {
                let value = self.env.get(scope, &name.value)
                                .ok_or_else(|| RuntimeError::IdentifierNotFound {
                                    name: name.value.clone(),
                                })?;
                match value {
                    Value::Class(parent) => Some(parent),
                    other => {
                        return Err(RuntimeError::NotAClass { kind: other.type_name() }.into());
                    },
                }
            },
            None => None,
        };

        let mut properties = HashMap::new();
        for property in &class.properties {
            let value = self.eval(&property.value, scope)?;
            properties.insert(property.name.value.clone(), value);
        }

        let mut methods = HashMap::new();
        for method in &class.methods {
            let method_scope = self.env.enclosed(scope);
            methods.insert(method.name.clone().unwrap_or_default(),
                           Rc::new(FunctionValue { node: method.clone(),
                                                   env:  method_scope, }));
        }

        let value = Value::Class(Rc::new(ClassValue { name: class.name.value.clone(),
                                                      properties,
                                                      methods,
                                                      parent }));
        self.env.set(scope, &class.name.value, value.clone());
        Ok(value)
    }

    /// Evaluates `nuevo Clase(argumentos)`.
    ///
    /// The instance gets its own scope with `esto` bound to it and a shallow
    /// copy of the class's property defaults. When the class has a `crear`
    /// method it runs as the constructor: its scope encloses the one the
    /// method captured, `esto` points at the new instance, and positional
    /// arguments bind to its parameters (missing ones stay unbound). The
    /// constructor's return value is discarded; its errors are not.
    pub(crate) fn eval_new(&mut self,
                           class_expression: &Expression,
                           arguments: &[Expression],
                           scope: ScopeId)
                           -> EvalResult<Value> {
        let value = self.eval(class_expression, scope)?;
        let class = match &value {
            Value::Class(class) => class.clone(),
            other => return Err(RuntimeError::NotAClass { kind: other.type_name() }.into()),
        };

        let instance_scope = self.env.enclosed(scope);
        let instance = Value::Instance(Rc::new(InstanceValue {
            class:      class.clone(),
            properties: RefCell::new(class.properties.clone()),
            env:        instance_scope,
        }));
        self.env.set(instance_scope, "esto", instance.clone());

        if let Some(constructor) = class.methods.get("crear") {
            let arguments = self.eval_expressions(arguments, scope)?;

            let constructor_scope = self.env.enclosed(constructor.env);
            self.env.set(constructor_scope, "esto", instance.clone());
            for (index, parameter) in constructor.node.parameters.iter().enumerate() {
                if let Some(argument) = arguments.get(index) {
                    self.env.set(constructor_scope, &parameter.value, argument.clone());
                }
            }

            match self.eval_block(&constructor.node.body, constructor_scope) {
                Ok(_) | Err(Signal::Return(_)) => {},
                Err(failure) => return Err(failure),
            }
        }

        Ok(instance)
    }
}
