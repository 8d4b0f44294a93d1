use std::ops::Range;
use crate::parser::{
    ast::{expr::Expr, literal::LitSym},
    error::{kind, Error},
    token::Assign as AssignOp,
    Parse,
    Parser,
};

/// An assignment of a variable, such as `x = 1`.
///
/// Assignment is itself an expression, and evaluates to the assigned value; `x = y = 2` assigns
/// `2` to both `x` and `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The variable to assign to.
    pub target: LitSym,

    /// The expression to assign to the target.
    pub value: Box<Expr>,

    /// The region of the source code that this assignment expression was parsed from.
    pub span: Range<usize>,
}

impl Assign {
    /// Returns the span of the assignment expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Assign {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let target = input.try_parse::<LitSym>()?;
        input.try_parse::<AssignOp>()?;

        // the target and operator are committed at this point; a missing value is a hard error,
        // not a cue to reinterpret the source
        let value = input.try_parse::<Expr>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(vec![input.span()], kind::ExpectedExpr { expected: "an expression" })
        })?;

        let span = target.span.start..value.span().end;
        Ok(Self {
            target,
            value: Box::new(value),
            span,
        })
    }
}
