use std::ops::Range;
use crate::{
    parser::{
        error::{kind, Error},
        token::{False, Float, Int, Name, Null, True},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
    try_parse_catch_fatal,
};

/// A number literal. Integers and floating-point numbers are both supported and represented here
/// as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = input
            .try_parse::<Int>()
            .map(|num| (num.lexeme, num.span))
            .or_else(|_| input.try_parse::<Float>().map(|num| (num.lexeme, num.span)))?;
        Ok(Self {
            // the tokenizer guarantees the lexeme is a valid number
            value: lexeme.parse().unwrap(),
            span,
        })
    }
}

/// A boolean literal, either `true` or `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitBool {
    /// The value of the boolean literal.
    pub value: bool,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitBool {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (value, span) = input
            .try_parse::<True>()
            .map(|token| (true, token.span))
            .or_else(|_| input.try_parse::<False>().map(|token| (false, token.span)))?;
        Ok(Self { value, span })
    }
}

/// A string literal, such as `"hello"`. Escape sequences within the string are resolved while
/// parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct LitStr {
    /// The value of the string literal, with escape sequences resolved.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// Resolves the escape sequences of a string literal, stripping the surrounding quotes. Unknown
/// escape sequences are kept as-is.
fn unescape(lexeme: &str) -> String {
    let inner = &lexeme[1..lexeme.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('"') => value.push('"'),
            Some('\\') => value.push('\\'),
            Some(other) => {
                value.push('\\');
                value.push(other);
            },
            None => value.push('\\'),
        }
    }

    value
}

impl Parse for LitStr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::String => Ok(Self {
                value: unescape(token.lexeme),
                span: token.span,
            }),
            TokenKind::UnterminatedString => Err(Error::new_fatal(
                vec![token.span],
                kind::UnterminatedString,
            )),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::String],
                found: token.kind,
            })),
        }
    }
}

/// The null literal, `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNull {
    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNull {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Null>()?;
        Ok(Self { span: token.span })
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables and functions.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}

/// Represents a literal value in Tarn.
///
/// A literal is any value that is written directly into the source code, such as the number
/// `3.14` or the string `"hello"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal. Integers and floating-point numbers are both supported and represented
    /// here as `f64`.
    Number(LitNum),

    /// A boolean literal, either `true` or `false`.
    Bool(LitBool),

    /// A string literal, such as `"hello"`.
    String(LitStr),

    /// The null literal, `null`.
    Null(LitNull),

    /// A symbol / identifier literal. Symbols are used to represent variables and functions.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Bool(bool_lit) => bool_lit.span.clone(),
            Literal::String(string) => string.span.clone(),
            Literal::Null(null) => null.span.clone(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<LitNum>().map(Literal::Number));
        let _ = try_parse_catch_fatal!(input.try_parse::<LitBool>().map(Literal::Bool));
        let _ = try_parse_catch_fatal!(input.try_parse::<LitStr>().map(Literal::String));
        let _ = try_parse_catch_fatal!(input.try_parse::<LitNull>().map(Literal::Null));

        input.try_parse::<LitSym>().map(Literal::Symbol)
    }
}
