use std::{fmt, rc::Rc};

use crate::interpreter::lexer::Token;

/// The root node of the AST: the list of top-level statements of a program
/// or of a REPL line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An identifier: a variable, function, class or property name.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The `IDENT` token this name came from.
    pub token: Token,
    /// The name itself.
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A statement node.
///
/// Statements are the units a program is made of. Blocks are not statements
/// by themselves; they only appear as the bodies of conditionals, loops,
/// functions and classes.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration: `guarda x = 5` or the walrus form `x := 5`.
    /// Both produce this same node.
    Var(VarStatement),
    /// `devolver expr?`
    Return(ReturnStatement),
    /// An expression evaluated for its value.
    Expression(ExpressionStatement),
}

impl Statement {
    /// The token this statement originates from, for diagnostics.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Var(statement) => &statement.token,
            Self::Return(statement) => &statement.token,
            Self::Expression(statement) => &statement.token,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(statement) => write!(f, "{statement}"),
            Self::Return(statement) => write!(f, "{statement}"),
            Self::Expression(statement) => write!(f, "{statement}"),
        }
    }
}

/// A variable declaration binding a name to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStatement {
    /// The `guarda` keyword, or the `:=` token for the walrus form.
    pub token: Token,
    /// The declared name.
    pub name:  Identifier,
    /// The initializer expression.
    pub value: Expression,
}

impl fmt::Display for VarStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both declaration forms print as the keyword form.
        write!(f, "guarda {} = {};", self.name, self.value)
    }
}

/// A `devolver` statement with an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `devolver` keyword.
    pub token: Token,
    /// The returned expression, absent when the statement ends immediately.
    pub value: Option<Expression>,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "devolver ")?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// A statement consisting of a single expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token:      Token,
    /// The expression itself.
    pub expression: Expression,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}

/// A braced sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token:      Token,
    /// The statements inside the braces.
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        write!(f, " }}")
    }
}

/// A C-style `para` loop: three optional sections and a body.
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpression {
    /// The `para` keyword.
    pub token:     Token,
    /// Initialization statement, run once in the loop's own scope.
    pub init:      Option<Statement>,
    /// Loop condition; absent means the loop never stops by itself.
    pub condition: Option<Expression>,
    /// Update statement, run after every iteration.
    pub update:    Option<Statement>,
    /// The loop body.
    pub body:      BlockStatement,
}

impl fmt::Display for ForExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "para (")?;
        // Statements print their own semicolon; only a missing init needs one.
        match &self.init {
            Some(init) => write!(f, "{init} ")?,
            None => write!(f, "; ")?,
        }
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        write!(f, "; ")?;
        if let Some(update) = &self.update {
            write!(f, "{update}")?;
        }
        write!(f, ") {}", self.body)
    }
}

/// A function literal: `fun nombre? (parámetros) { cuerpo }`.
///
/// When a name is present and the literal stands alone as a statement, the
/// evaluator also binds the function under that name.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fun` keyword, or the method's name token inside a class body.
    pub token:      Token,
    /// Optional function name.
    pub name:       Option<String>,
    /// Parameter names, bound positionally at call time.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        let parameters = self.parameters
                             .iter()
                             .map(ToString::to_string)
                             .collect::<Vec<_>>()
                             .join(", ");
        write!(f, "({parameters}) {}", self.body)
    }
}

/// A class literal: name, optional parent, optional interface list,
/// property defaults and methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLiteral {
    /// The `clase` keyword.
    pub token:      Token,
    /// The class name; the class is also bound under it when evaluated.
    pub name:       Identifier,
    /// Parent named after `extiende`, if any.
    pub parent:     Option<Identifier>,
    /// Interfaces named after `implementa`. Recorded, never enforced.
    pub interfaces: Vec<Identifier>,
    /// Property declarations evaluated once as per-class defaults.
    pub properties: Vec<VarStatement>,
    /// Method literals, each carrying its name.
    pub methods:    Vec<Rc<FunctionLiteral>>,
}

impl fmt::Display for ClassLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clase {}", self.name)?;
        if let Some(parent) = &self.parent {
            write!(f, " extiende {parent}")?;
        }
        if !self.interfaces.is_empty() {
            let interfaces = self.interfaces
                                 .iter()
                                 .map(ToString::to_string)
                                 .collect::<Vec<_>>()
                                 .join(", ");
            write!(f, " implementa {interfaces}")?;
        }
        writeln!(f, " {{")?;
        for property in &self.properties {
            writeln!(f, "  {property}")?;
        }
        for method in &self.methods {
            writeln!(f, "  {method}")?;
        }
        write!(f, "}}")
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a name.
    Identifier(Identifier),
    /// An integer literal such as `42`.
    Integer {
        /// The `NUM` token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// A decimal literal such as `3.14`.
    Float {
        /// The `NUM` token.
        token: Token,
        /// The parsed value.
        value: f64,
    },
    /// A string literal.
    Str {
        /// The `STRING` token.
        token: Token,
        /// The bytes between the quotes.
        value: String,
    },
    /// `verdad` or `falso`.
    Boolean {
        /// The keyword token.
        token: Token,
        /// The literal's value.
        value: bool,
    },
    /// `nulo`.
    Null {
        /// The keyword token.
        token: Token,
    },
    /// A prefix operation: `!expr` or `-expr`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator lexeme.
        operator: String,
        /// The operand.
        right:    Box<Expression>,
    },
    /// A binary operation: arithmetic, comparison, equality, `y`/`o`.
    Infix {
        /// The operator token.
        token:    Token,
        /// Left operand.
        left:     Box<Expression>,
        /// The operator lexeme.
        operator: String,
        /// Right operand.
        right:    Box<Expression>,
    },
    /// An assignment: `objetivo = valor`. Valid targets are identifiers and
    /// dot expressions.
    Assign {
        /// The `=` token.
        token:  Token,
        /// What is being assigned to.
        target: Box<Expression>,
        /// The assigned value.
        value:  Box<Expression>,
    },
    /// A compound assignment: `objetivo += valor` and friends.
    AssignCompound {
        /// The compound operator token.
        token:    Token,
        /// The compound lexeme, e.g. `+=`.
        operator: String,
        /// What is being assigned to.
        target:   Box<Expression>,
        /// The right-hand side.
        value:    Box<Expression>,
    },
    /// `si (condición) { … } sino { … }?`
    If {
        /// The `si` keyword.
        token:       Token,
        /// The condition, always parenthesized in source.
        condition:   Box<Expression>,
        /// The branch taken when the condition is truthy.
        consequence: BlockStatement,
        /// The optional `sino` branch.
        alternative: Option<BlockStatement>,
    },
    /// `mientras (condición) { … }`
    While {
        /// The `mientras` keyword.
        token:     Token,
        /// The loop condition.
        condition: Box<Expression>,
        /// The loop body.
        body:      BlockStatement,
    },
    /// `para (inicio; condición; paso) { … }`
    For(Box<ForExpression>),
    /// A function literal.
    Function(Rc<FunctionLiteral>),
    /// A call: `callee(args…)`.
    Call {
        /// The `(` token.
        token:     Token,
        /// The callee expression.
        function:  Box<Expression>,
        /// Evaluated left to right.
        arguments: Vec<Expression>,
    },
    /// `[a, b, c]`
    Array {
        /// The `[` token.
        token:    Token,
        /// Element expressions.
        elements: Vec<Expression>,
    },
    /// `{clave: valor, …}`
    Hash {
        /// The `{` token.
        token: Token,
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Expression, Expression)>,
    },
    /// `receptor[índice]`
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed expression.
        left:  Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
    /// `receptor.propiedad`
    Dot {
        /// The `.` token.
        token:    Token,
        /// The receiver.
        object:   Box<Expression>,
        /// The accessed property name.
        property: Identifier,
    },
    /// A class literal.
    Class(Box<ClassLiteral>),
    /// `nuevo Clase(args…)` — the argument list may be omitted entirely.
    New {
        /// The `nuevo` keyword.
        token:     Token,
        /// The expression naming the class.
        class:     Box<Expression>,
        /// Constructor arguments.
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// The token this expression originates from, for diagnostics.
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::Identifier(identifier) => &identifier.token,
            Self::Integer { token, .. }
            | Self::Float { token, .. }
            | Self::Str { token, .. }
            | Self::Boolean { token, .. }
            | Self::Null { token }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::Assign { token, .. }
            | Self::AssignCompound { token, .. }
            | Self::If { token, .. }
            | Self::While { token, .. }
            | Self::Call { token, .. }
            | Self::Array { token, .. }
            | Self::Hash { token, .. }
            | Self::Index { token, .. }
            | Self::Dot { token, .. }
            | Self::New { token, .. } => token,
            Self::For(for_expression) => &for_expression.token,
            Self::Function(function) => &function.token,
            Self::Class(class) => &class.token,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer { token, .. } | Self::Float { token, .. } => {
                write!(f, "{}", token.literal)
            },
            Self::Str { value, .. } => write!(f, "\"{value}\""),
            Self::Boolean { token, .. } => write!(f, "{}", token.literal),
            Self::Null { .. } => write!(f, "nulo"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::Assign { target, value, .. } => write!(f, "({target} = {value})"),
            Self::AssignCompound { operator,
                                   target,
                                   value,
                                   .. } => write!(f, "({target} {operator} {value})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "si ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " sino {alternative}")?;
                }
                Ok(())
            },
            Self::While { condition, body, .. } => write!(f, "mientras ({condition}) {body}"),
            Self::For(for_expression) => write!(f, "{for_expression}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Call { function, arguments, .. } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
            Self::Array { elements, .. } => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Hash { pairs, .. } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}: {value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::Dot { object, property, .. } => write!(f, "{object}.{property}"),
            Self::Class(class) => write!(f, "{class}"),
            Self::New { class, arguments, .. } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "nuevo {class}({arguments})")
            },
        }
    }
}
