use std::ops::Range;
use crate::parser::{
    ast::stmt::Stmt,
    error::{kind, Error},
    token::{CloseCurly, OpenCurly},
    Parse,
    Parser,
};

/// A block expression. A [`Block`] can contain multiple expressions in the form of statements.
/// The last statement in the block is the return value of the block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The inner statements.
    pub stmts: Vec<Stmt>,

    /// The region of the source code that this [`Block`] was parsed from.
    pub span: Range<usize>,
}

impl Block {
    /// Returns the span of the [`Block`].
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Block {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_curly = input.try_parse::<OpenCurly>()?;

        let mut stmts = Vec::new();
        loop {
            match input.try_parse::<Stmt>() {
                Ok(stmt) => stmts.push(stmt),
                Err(err) if err.fatal => return Err(err),
                Err(_) => break,
            }
        }

        let close_curly = input.try_parse::<CloseCurly>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![open_curly.span.clone()],
                kind::UnclosedCurlyBrace { opening: true },
            )
        })?;

        Ok(Self {
            stmts,
            span: open_curly.span.start..close_curly.span.end,
        })
    }
}
