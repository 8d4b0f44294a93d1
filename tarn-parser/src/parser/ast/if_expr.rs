use std::ops::Range;
use crate::{
    parser::{
        ast::{block::Block, expr::Expr},
        error::{kind, Error},
        token::{Else, If as IfToken},
        Parse,
        Parser,
    },
    try_parse_catch_fatal,
};

/// An `if` expression, such as `if x > 0 { x } else { 0 }`.
///
/// The condition is evaluated first; if it is truthy, the `then` block is evaluated, otherwise
/// the `else` branch is. An `if` expression with no `else` branch evaluates to `null` when the
/// condition is falsy.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    /// The condition of the `if` expression.
    pub condition: Box<Expr>,

    /// The block to evaluate if the condition is truthy.
    pub then_block: Block,

    /// The branch to evaluate if the condition is falsy. This is either a [`Block`] expression,
    /// or another [`If`] expression (an `else if` chain).
    pub else_expr: Option<Box<Expr>>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,

    /// The span of the `if` keyword.
    pub if_span: Range<usize>,

    /// The span of the `else` keyword.
    pub else_span: Option<Range<usize>>,
}

impl If {
    /// Returns the span of the `if` expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the branch following an `else` keyword, which is either another `if` expression or
    /// a block.
    fn parse_else_branch(input: &mut Parser) -> Result<Expr, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<If>().map(Expr::If));
        input.try_parse::<Block>().map(Expr::Block)
    }
}

impl Parse for If {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let if_token = input.try_parse::<IfToken>()?;
        let condition = input.try_parse::<Expr>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![if_token.span.clone(), input.span()],
                kind::MissingCondition { keyword: "if" },
            )
        })?;
        let then_block = input.try_parse::<Block>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![if_token.span.clone(), input.span()],
                kind::MissingBody { keyword: "if" },
            )
        })?;

        let (else_expr, else_span) = if let Ok(else_token) = input.try_parse::<Else>() {
            let branch = Self::parse_else_branch(input).map_err(|err| if err.fatal {
                err
            } else {
                Error::new_fatal(
                    vec![else_token.span.clone(), input.span()],
                    kind::MissingElseBranch,
                )
            })?;
            (Some(Box::new(branch)), Some(else_token.span))
        } else {
            (None, None)
        };

        let span = if let Some(else_expr) = &else_expr {
            if_token.span.start..else_expr.span().end
        } else {
            if_token.span.start..then_block.span.end
        };

        Ok(Self {
            condition: Box::new(condition),
            then_block,
            else_expr,
            span,
            if_span: if_token.span,
            else_span,
        })
    }
}
