use std::rc::Rc;

use crate::{
    ast::{Expression, ForExpression, FunctionLiteral, Identifier},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a numeric literal.
    ///
    /// The lexer only reports a number kind; whether the literal is an
    /// integer or a decimal is decided here, by the presence of a `.`.
    pub(crate) fn parse_number_literal(&mut self) -> Option<Expression> {
        let token = self.cur().clone();

        if token.literal.contains('.') {
            match token.literal.parse::<f64>() {
                Ok(value) => Some(Expression::Float { token, value }),
                Err(_) => {
                    self.record(ParseError::InvalidFloat { literal: token.literal.clone(),
                                                           line:    token.line,
                                                           column:  token.column, });
                    None
                },
            }
        } else {
            match token.literal.parse::<i64>() {
                Ok(value) => Some(Expression::Integer { token, value }),
                Err(_) => {
                    self.record(ParseError::InvalidInteger { literal: token.literal.clone(),
                                                             line:    token.line,
                                                             column:  token.column, });
                    None
                },
            }
        }
    }

    pub(crate) fn parse_string_literal(&mut self) -> Expression {
        let token = self.cur().clone();
        let value = token.literal.clone();
        Expression::Str { token, value }
    }

    pub(crate) fn parse_boolean_literal(&mut self) -> Expression {
        let token = self.cur().clone();
        let value = token.kind == TokenKind::True;
        Expression::Boolean { token, value }
    }

    /// Parses `!expr` or `-expr`.
    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur().clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);

        Some(Expression::Prefix { token, operator, right })
    }

    /// Parses `( expr )`.
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `si ( condición ) { … } sino { … }?`.
    ///
    /// The parentheses around the condition are required; the `sino` branch
    /// takes a plain block, not another `si`.
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { token,
                              condition,
                              consequence,
                              alternative })
    }

    /// Parses `mientras ( condición ) { … }`.
    pub(crate) fn parse_while_expression(&mut self) -> Option<Expression> {
        let token = self.cur().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::While { token, condition, body })
    }

    /// Parses `para ( inicio? ; condición? ; paso? ) { … }`.
    ///
    /// All three sections may be empty; an absent condition loops forever.
    pub(crate) fn parse_for_expression(&mut self) -> Option<Expression> {
        let token = self.cur().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.next_token();
        let init = if self.cur_is(TokenKind::Semicolon) {
            None
        } else {
            self.parse_statement()
        };

        if !self.cur_is(TokenKind::Semicolon) && !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }
        self.next_token();

        let condition = if self.cur_is(TokenKind::Semicolon) {
            None
        } else {
            self.parse_expression(Precedence::Lowest)
        };

        if !self.cur_is(TokenKind::Semicolon) && !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }
        self.next_token();

        let update = if self.cur_is(TokenKind::RParen) {
            None
        } else {
            self.parse_statement()
        };

        if !self.cur_is(TokenKind::RParen) && !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::For(Box::new(ForExpression { token,
                                                      init,
                                                      condition,
                                                      update,
                                                      body })))
    }

    /// Parses `fun nombre? ( parámetros ) { … }`.
    pub(crate) fn parse_function_literal(&mut self) -> Option<Rc<FunctionLiteral>> {
        let token = self.cur().clone();

        let name = if self.peek_is(TokenKind::Ident) {
            self.next_token();
            Some(self.cur().literal.clone())
        } else {
            None
        };

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
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

    /// Parses a comma-separated parameter list. The current token must be
    /// the opening parenthesis.
    pub(crate) fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        identifiers.push(self.identifier_from_cur());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            identifiers.push(self.identifier_from_cur());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(identifiers)
    }

    /// Parses `[ elemento, … ]`.
    pub(crate) fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur().clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::Array { token, elements })
    }

    /// Parses `{ clave: valor, … }`.
    pub(crate) fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.cur().clone();
        let mut pairs = Vec::new();

        if self.peek_is(TokenKind::RBrace) {
            self.next_token();
            return Some(Expression::Hash { token, pairs });
        }

        loop {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expression::Hash { token, pairs })
    }
}
