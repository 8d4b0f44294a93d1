use std::ops::Range;
use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::Semicolon,
    Parse,
    Parser,
};

/// Represents a statement in Tarn.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    /// The expression of a statement.
    pub expr: Expr,

    /// The span of the semicolon that terminates the statement, if any.
    ///
    /// When this is [`None`], the statement is an expression, and will return the value of the
    /// expression. Otherwise, the expression is evaluated for side effects, and the statement
    /// returns the unit value.
    pub semicolon: Option<Range<usize>>,

    /// The region of the source code that this statement was parsed from.
    pub span: Range<usize>,
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Stmt {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let expr = input.try_parse::<Expr>()?;
        let semicolon = match input.try_parse::<Semicolon>() {
            Ok(semi) => Some(semi.span),
            Err(_) => None,
        };
        let stmt_span = if let Some(semicolon) = &semicolon {
            expr.span().start..semicolon.end
        } else {
            expr.span()
        };

        Ok(Stmt {
            expr,
            semicolon,
            span: stmt_span,
        })
    }
}
