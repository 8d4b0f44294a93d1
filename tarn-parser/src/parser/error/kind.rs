use ariadne::Fmt;
use tarn_attrs::ErrorKind;
use tarn_error::EXPR;
use crate::tokenizer::TokenKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// Expected to see a certain kind of expression here.
///
/// The `expected` field should also contain the word "a" or "an" at the beginning to make the
/// error grammatically correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}", expected),
    labels = [format!("I expected to see {} here", expected)],
)]
pub struct ExpectedExpr {
    /// The kind of expression that was expected.
    pub expected: &'static str,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A string literal was missing its closing quote.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unterminated string",
    labels = ["this string is missing a closing quote"],
    help = format!("add a closing quote `{}` at the end of the string", '"'.fg(EXPR)),
)]
pub struct UnterminatedString;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A curly brace was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed curly brace",
    labels = ["this curly brace is not closed"],
    help = if *opening {
        "add a closing curly brace `}` somewhere after this"
    } else {
        "add an opening curly brace `{` somewhere before this"
    },
)]
pub struct UnclosedCurlyBrace {
    /// Whether the curly brace was an opening curly brace `{`. Otherwise, the curly brace was a
    /// closing curly brace `}`.
    pub opening: bool,
}

/// An `if` or `while` expression was missing its condition.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing the condition of this `{}` expression", keyword),
    labels = [
        format!("this `{}` expression", keyword),
        "I expected to see a condition here".to_string(),
    ],
)]
pub struct MissingCondition {
    /// The keyword that began the expression, either `if` or `while`.
    pub keyword: &'static str,
}

/// An `if`, `while`, or `fn` expression was missing its block.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing the body of this `{}` expression", keyword),
    labels = [
        format!("this `{}` expression", keyword),
        "I expected to see a block here".to_string(),
    ],
)]
pub struct MissingBody {
    /// The keyword that began the expression.
    pub keyword: &'static str,
}

/// An `else` keyword was not followed by a block or another `if` expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing the branch of this `else` keyword",
    labels = [
        "this `else` keyword".to_string(),
        format!("I expected to see a block or another `{}` expression here", "if".fg(EXPR)),
    ],
)]
pub struct MissingElseBranch;

/// A function definition was missing its name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing the name of this function definition",
    labels = ["this function definition", "I expected to see a function name here"],
)]
pub struct MissingFunctionName;

/// The left-hand-side of an assignment was not a valid variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid left-hand-side of assignment operator",
    labels = ["(1) this expression should be a variable name...", "(2) ...to work with this assignment operator"],
    help = "maybe you meant to compare expressions with `==`?",
)]
pub struct InvalidAssignmentLhs;
