use std::ops::Range;
use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::{Break as BreakToken, CloseParen},
    Parse,
    Parser,
};

/// A `break` expression, used to exit a loop, optionally with a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    /// The value to return from the loop.
    pub value: Option<Box<Expr>>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,

    /// The span of the `break` keyword.
    pub break_span: Range<usize>,
}

impl Break {
    /// Returns the span of the `break` expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Break {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let break_token = input.try_parse::<BreakToken>()?;

        // the value is optional; a following `)` belongs to an enclosing expression, and `Expr`
        // would treat it as a stray close parenthesis
        let value = if input.clone().try_parse::<CloseParen>().is_ok() {
            None
        } else {
            match input.try_parse::<Expr>() {
                Ok(expr) => Some(Box::new(expr)),
                Err(err) if err.fatal => return Err(err),
                Err(_) => None,
            }
        };
        let span = if let Some(value) = &value {
            break_token.span.start..value.span().end
        } else {
            break_token.span.clone()
        };

        Ok(Self {
            value,
            span,
            break_span: break_token.span,
        })
    }
}
