use crate::{
    ast::{
        BlockStatement, ExpressionStatement, ReturnStatement, Statement, VarStatement,
    },
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is a `guarda` declaration, a walrus declaration
    /// (`nombre := expr`), a `devolver`, or an expression used as a
    /// statement. A trailing semicolon is consumed when present.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur().kind {
            TokenKind::Var => self.parse_var_statement().map(Statement::Var),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Ident if self.peek_is(TokenKind::Declare) => self.parse_declare_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `guarda nombre = expresión`.
    pub(crate) fn parse_var_statement(&mut self) -> Option<VarStatement> {
        let token = self.cur().clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.identifier_from_cur();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(VarStatement { token, name, value })
    }

    /// Parses the walrus form `nombre := expresión`, which declares exactly
    /// like `guarda`.
    fn parse_declare_statement(&mut self) -> Option<Statement> {
        let name = self.identifier_from_cur();
        self.next_token();
        let token = self.cur().clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Var(VarStatement { token, name, value }))
    }

    /// Parses `devolver expresión?`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur().clone();
        self.next_token();

        if self.cur_is(TokenKind::Semicolon) {
            return Some(Statement::Return(ReturnStatement { token, value: None }));
        }

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement { token,
                                                 value: Some(value) }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur().clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    /// Parses the statements between `{` and `}`.
    ///
    /// The current token must be the opening brace; on return it is the
    /// closing brace (or end-of-input for an unterminated block).
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur().clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}
