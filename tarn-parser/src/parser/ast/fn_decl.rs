use std::ops::Range;
use crate::{
    parser::{
        ast::{block::Block, literal::LitSym},
        error::{kind, Error},
        token::{CloseParen, Fn as FnToken, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};

/// A function definition, such as `fn add(a, b) { a + b }`.
///
/// Defining a function introduces it into the current scope under its name; the definition itself
/// evaluates to the unit value. The function body is not evaluated until the function is called.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    /// The name of the function.
    pub name: LitSym,

    /// The parameters of the function.
    pub params: Vec<LitSym>,

    /// The body of the function.
    pub body: Block,

    /// The region of the source code that this function definition was parsed from.
    pub span: Range<usize>,

    /// The span of the `fn` keyword.
    pub fn_span: Range<usize>,
}

impl FnDecl {
    /// Returns the span of the function definition.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for FnDecl {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let fn_token = input.try_parse::<FnToken>()?;
        let name = input.try_parse::<LitSym>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![fn_token.span.clone(), input.span()],
                kind::MissingFunctionName,
            )
        })?;

        let open_paren = input.try_parse::<OpenParen>().map_err(|mut err| {
            err.fatal = true;
            err
        })?;
        // `LitSym` cannot fail fatally, so a failure here just means the parameter list is empty
        let params = input.try_parse_delimited::<LitSym>(TokenKind::Comma).unwrap_or_default();
        input.try_parse::<CloseParen>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![open_paren.span.clone()],
                kind::UnclosedParenthesis { opening: true },
            )
        })?;

        let body = input.try_parse::<Block>().map_err(|err| if err.fatal {
            err
        } else {
            Error::new_fatal(
                vec![fn_token.span.clone(), input.span()],
                kind::MissingBody { keyword: "fn" },
            )
        })?;
        let span = fn_token.span.start..body.span.end;

        Ok(Self {
            name,
            params,
            body,
            span,
            fn_span: fn_token.span,
        })
    }
}
