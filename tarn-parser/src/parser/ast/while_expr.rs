use std::ops::Range;
use crate::parser::{
    ast::{block::Block, expr::Expr},
    error::{kind, Error},
    token::While as WhileToken,
    Parse,
    Parser,
};

/// A `while` loop expression, such as `while i < 3 { i = i + 1 }`. The loop body is executed
/// repeatedly as long as the condition is truthy.
#[derive(Debug, Clone, PartialEq)]
pub struct While {
    /// The condition that must be truthy for the loop body to be executed.
    pub condition: Box<Expr>,

    /// The body of the loop.
    pub body: Block,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,

    /// The span of the `while` keyword.
    pub while_span: Range<usize>,
}

impl While {
    /// Returns the span of the `while` loop expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for While {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let while_token = input.try_parse::<WhileToken>()?;
        let condition = input.try_parse::<Expr>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![while_token.span.clone(), input.span()],
                kind::MissingCondition { keyword: "while" },
            )
        })?;
        let body = input.try_parse::<Block>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![while_token.span.clone(), input.span()],
                kind::MissingBody { keyword: "while" },
            )
        })?;
        let span = while_token.span.start..body.span.end;

        Ok(Self {
            condition: Box::new(condition),
            body,
            span,
            while_span: while_token.span,
        })
    }
}
