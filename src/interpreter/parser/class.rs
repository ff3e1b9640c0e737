use std::rc::Rc;

use crate::{
    ast::{ClassLiteral, Expression, FunctionLiteral},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a class literal:
    ///
    /// ```text
    ///     clase Nombre extiende Padre implementa I1, I2 {
    ///         guarda propiedad = valor
    ///         crear(x) { … }
    ///         fun metodo() { … }
    ///     }
    /// ```
    ///
    /// The inheritance and interface clauses are optional. Members are
    /// `guarda` property declarations, `fun` method literals, or the bare
    /// `nombre(parámetros) { … }` method form used for constructors; any
    /// other token inside the body is skipped one at a time.
    pub(crate) fn parse_class_literal(&mut self) -> Option<Expression> {
        let token = self.cur().clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.identifier_from_cur();

        let parent = if self.peek_is(TokenKind::Extends) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            Some(self.identifier_from_cur())
        } else {
            None
        };

        let mut interfaces = Vec::new();
        if self.peek_is(TokenKind::Implements) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            interfaces.push(self.identifier_from_cur());

            while self.peek_is(TokenKind::Comma) {
                self.next_token();
                if !self.expect_peek(TokenKind::Ident) {
                    return None;
                }
                interfaces.push(self.identifier_from_cur());
            }
        }

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let mut properties = Vec::new();
        let mut methods = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            match self.cur().kind {
                TokenKind::Function => {
                    if let Some(method) = self.parse_function_literal() {
                        methods.push(method);
                    }
                    self.next_token();
                },
                TokenKind::Var => {
                    if let Some(property) = self.parse_var_statement() {
                        properties.push(property);
                    }
                    self.next_token();
                },
                TokenKind::Ident if self.peek_is(TokenKind::LParen) => {
                    if let Some(method) = self.parse_bare_method() {
                        methods.push(method);
                    }
                    self.next_token();
                },
                _ => self.next_token(),
            }
        }

        Some(Expression::Class(Box::new(ClassLiteral { token,
                                                       name,
                                                       parent,
                                                       interfaces,
                                                       properties,
                                                       methods })))
    }

    /// Parses a method written without the `fun` keyword, e.g.
    /// `crear(nombre) { … }`. The current token is the method's name.
    fn parse_bare_method(&mut self) -> Option<Rc<FunctionLiteral>> {
        let token = self.cur().clone();
        let name = Some(token.literal.clone());

        self.next_token();
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Rc::new(FunctionLiteral { token,
                                       name,
                                       parameters,
                                       body }))
    }

    /// Parses `nuevo Clase(argumentos?)`.
    ///
    /// The class expression is parsed just below call precedence so the
    /// argument list reaches the constructor instead of reading as a call;
    /// dot and index accesses on the class expression still bind first. The
    /// argument list may be omitted entirely.
    pub(crate) fn parse_new_expression(&mut self) -> Option<Expression> {
        let token = self.cur().clone();

        self.next_token();
        let class = Box::new(self.parse_expression(Precedence::Call)?);

        let arguments = if self.peek_is(TokenKind::LParen) {
            self.next_token();
            self.parse_expression_list(TokenKind::RParen)?
        } else {
            Vec::new()
        };

        Some(Expression::New { token, class, arguments })
    }
}
