use crate::{
    ast::Expression,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a binary operation. The current token is the operator; the
    /// right operand is parsed at the operator's own precedence, so chains
    /// associate to the left.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur().clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expression::Infix { token,
                                 left: Box::new(left),
                                 operator,
                                 right })
    }

    /// Parses a call argument list. The current token is the `(`.
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur().clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expression::Call { token,
                                function: Box::new(function),
                                arguments })
    }

    /// Parses a comma-separated expression list ending at `end`.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    /// Parses `receptor[índice]`.
    pub(crate) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur().clone();

        self.next_token();
        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expression::Index { token,
                                 left: Box::new(left),
                                 index })
    }

    /// Parses `receptor.propiedad`.
    pub(crate) fn parse_dot_expression(&mut self, object: Expression) -> Option<Expression> {
        let token = self.cur().clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let property = self.identifier_from_cur();

        Some(Expression::Dot { token,
                               object: Box::new(object),
                               property })
    }

    /// Parses `objetivo = valor`.
    ///
    /// The right-hand side is parsed back at the lowest level, so chained
    /// assignments associate to the right. Whether the target is assignable
    /// is the evaluator's judgment, not the grammar's.
    pub(crate) fn parse_assign_expression(&mut self, target: Expression) -> Option<Expression> {
        let token = self.cur().clone();

        self.next_token();
        let value = Box::new(self.parse_expression(Precedence::Lowest)?);

        Some(Expression::Assign { token,
                                  target: Box::new(target),
                                  value })
    }

    /// Parses `objetivo op= valor` for the compound operators.
    pub(crate) fn parse_compound_assign_expression(&mut self,
                                                   target: Expression)
                                                   -> Option<Expression> {
        let token = self.cur().clone();
        let operator = token.literal.clone();

        self.next_token();
        let value = Box::new(self.parse_expression(Precedence::Lowest)?);

        Some(Expression::AssignCompound { token,
                                          operator,
                                          target: Box::new(target),
                                          value })
    }
}
