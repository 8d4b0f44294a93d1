use std::ops::Range;
use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::{CloseParen, Return as ReturnToken},
    Parse,
    Parser,
};

/// A `return` expression, used to exit a function, optionally with a value. A bare `return`
/// returns `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    /// The value to return from the function.
    pub value: Option<Box<Expr>>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,

    /// The span of the `return` keyword.
    pub return_span: Range<usize>,
}

impl Return {
    /// Returns the span of the `return` expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Return {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let return_token = input.try_parse::<ReturnToken>()?;

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
            return_token.span.start..value.span().end
        } else {
            return_token.span.clone()
        };

        Ok(Self {
            value,
            span,
            return_span: return_token.span,
        })
    }
}
