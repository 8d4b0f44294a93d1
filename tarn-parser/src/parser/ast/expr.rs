use std::ops::Range;
use crate::{
    parser::{
        ast::{
            assign::Assign,
            binary::Binary,
            block::Block,
            break_expr::Break,
            call::Call,
            fn_decl::FnDecl,
            if_expr::If,
            literal::Literal,
            paren::Paren,
            return_expr::Return,
            unary::Unary,
            while_expr::While,
        },
        error::{kind, Error},
        token::{Assign as AssignToken, CloseParen},
        Parse,
        Parser,
        Precedence,
    },
    try_parse_catch_fatal,
};

/// Represents a general expression in Tarn.
///
/// An expression is any valid piece of code that can be evaluated to produce a value. Expressions
/// can be used as the right-hand side of an assignment, as the argument to a function call, or as
/// a statement of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A block expression, such as `{ x = 1; x + 2 }`.
    Block(Block),

    /// An `if` expression, such as `if x > 0 { x } else { 0 }`.
    If(If),

    /// A `while` loop expression, such as `while i < 3 { i = i + 1 }`.
    While(While),

    /// A `break` expression, such as `break` or `break x`.
    Break(Break),

    /// A `return` expression, such as `return` or `return x`.
    Return(Return),

    /// A function definition, such as `fn add(a, b) { a + b }`.
    FnDecl(FnDecl),

    /// A function call, such as `len("abc")`.
    Call(Call),

    /// A unary operation, such as `-1` or `!true`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// An assignment of a variable, such as `x = 1`.
    Assign(Assign),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Block(block) => block.span(),
            Expr::If(if_expr) => if_expr.span(),
            Expr::While(while_expr) => while_expr.span(),
            Expr::Break(break_expr) => break_expr.span(),
            Expr::Return(return_expr) => return_expr.span(),
            Expr::FnDecl(fn_decl) => fn_decl.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Assign(assign) => assign.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if input.clone().try_parse::<CloseParen>().is_ok() {
            return Err(input.error_fatal(kind::UnclosedParenthesis { opening: false }));
        }

        let _ = try_parse_catch_fatal!(input.try_parse::<If>().map(Self::If));
        let _ = try_parse_catch_fatal!(input.try_parse::<While>().map(Self::While));
        let _ = try_parse_catch_fatal!(input.try_parse::<Break>().map(Self::Break));
        let _ = try_parse_catch_fatal!(input.try_parse::<Return>().map(Self::Return));
        let _ = try_parse_catch_fatal!(input.try_parse::<FnDecl>().map(Self::FnDecl));
        let _ = try_parse_catch_fatal!(input.try_parse::<Block>().map(Self::Block));
        let _ = try_parse_catch_fatal!(input.try_parse::<Assign>().map(Self::Assign));

        let lhs = input.try_parse_with_fn(Unary::parse_or_lower)?;
        let expr = Binary::parse_expr(input, lhs, Precedence::Any)?;

        // a stray `=` after a complete expression means the expression was used as the target of
        // an assignment, which only variable names can be
        if let Ok(assign) = input.clone().try_parse::<AssignToken>() {
            return Err(Error::new_fatal(
                vec![expr.span(), assign.span],
                kind::InvalidAssignmentLhs,
            ));
        }

        Ok(expr)
    }
}

/// Represents a primary expression in Tarn.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `len("abc")`.
    Call(Call),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Call(call) => call.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // function calls can overlap with literals, so we need to try parsing a function call
        // first
        let _ = try_parse_catch_fatal!(input.try_parse::<Call>().map(Self::Call));
        let _ = try_parse_catch_fatal!(input.try_parse::<Literal>().map(Self::Literal));

        input.try_parse::<Paren>().map(Self::Paren)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}
