pub mod ast;
pub mod error;
pub mod token;

use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use tarn_error::ErrorKind;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. **This function panics if the given slice is empty.** The first function that
/// succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for the language. This is the type to use to parse an arbitrary piece of
/// code into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Move the cursor to the previous token. This function is a no-op if the cursor is at the
    /// beginning of the stream.
    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns true if all remaining tokens are whitespace, i.e. there is nothing left to parse.
    pub fn at_eof(&self) -> bool {
        self.tokens[self.cursor..].iter().all(|token| token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    if values.is_empty() {
                        self.cursor = start;
                        return Err(err);
                    } else {
                        return Ok(values);
                    }
                },
            }

            // peek past whitespace for the delimiter
            let mut ahead = self.clone();
            match ahead.next_token() {
                Ok(token) if token.kind == delimiter => {
                    self.cursor = ahead.cursor;
                },
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.at_eof() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }

    /// Attempts to parse values from the given stream of tokens until the stream is exhausted.
    /// This is the entry point for parsing whole programs, which are sequences of statements.
    pub fn try_parse_full_many<T: Parse>(&mut self) -> Result<Vec<T>, Error> {
        let mut values = Vec::new();
        while !self.at_eof() {
            values.push(self.try_parse::<T>()?);
        }
        Ok(values)
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`. For unary
    /// operations, this means `a op op` is evaluated as `(a op) op` (the operators appear to the
    /// right of the operand).
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)` (the operators appear to the
    /// left of the operand).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of logical or (`or`).
    Or,

    /// Precedence of logical and (`and`).
    And,

    /// Precedence of comparisons (`>`, `>=`, `<`, `<=`, `==`, and `!=`).
    Compare,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`), and modulo (`%`), which separate
    /// factors.
    Factor,

    /// Precedence of unary negation (`-`).
    Neg,

    /// Precedence of logical not (`!`).
    Not,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::assign::Assign;
    use ast::binary::Binary;
    use ast::block::Block;
    use ast::break_expr::Break;
    use ast::call::Call;
    use ast::expr::Expr;
    use ast::fn_decl::FnDecl;
    use ast::if_expr::If;
    use ast::literal::{Literal, LitBool, LitNull, LitNum, LitStr, LitSym};
    use ast::paren::Paren;
    use ast::return_expr::Return;
    use ast::stmt::Stmt;
    use ast::unary::Unary;
    use ast::while_expr::While;
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 16.0,
            span: 0..2,
        })));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("3.14");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 3.14,
            span: 0..4,
        })));
    }

    #[test]
    fn literal_bool() {
        let mut parser = Parser::new("false");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Bool(LitBool {
            value: false,
            span: 0..5,
        })));
    }

    #[test]
    fn literal_null() {
        let mut parser = Parser::new("null");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Null(LitNull {
            span: 0..4,
        })));
    }

    #[test]
    fn literal_string() {
        let mut parser = Parser::new(r#""he said \"hi\"""#);
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::String(LitStr {
            value: "he said \"hi\"".to_string(),
            span: 0..16,
        })));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("count");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Symbol(LitSym {
            name: "count".to_string(),
            span: 0..5,
        })));
    }

    #[test]
    fn unary_right_associativity() {
        let mut parser = Parser::new("!-3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 2..3,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 1..2,
                },
                span: 1..3,
            })),
            op: UnaryOp {
                kind: UnaryOpKind::Not,
                span: 0..1,
            },
            span: 0..3,
        }));
    }

    #[test]
    fn binary_left_associativity() {
        let mut parser = Parser::new("3 * x * 5");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 4..5,
                }))),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 6..7,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 5.0,
                span: 8..9,
            }))),
            span: 0..9,
        }));
    }

    #[test]
    fn binary_left_associativity_mix_precedence() {
        let mut parser = Parser::new("3 + 4 * a + b");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Add,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 4.0,
                        span: 4..5,
                    }))),
                    op: BinOp {
                        kind: BinOpKind::Mul,
                        span: 6..7,
                    },
                    rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                        name: "a".to_string(),
                        span: 8..9,
                    }))),
                    span: 4..9,
                })),
                span: 0..9,
            })),
            op: BinOp {
                kind: BinOpKind::Add,
                span: 10..11,
            },
            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "b".to_string(),
                span: 12..13,
            }))),
            span: 0..13,
        }));
    }

    #[test]
    fn logical_precedence() {
        let mut parser = Parser::new("a or b and c");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "a".to_string(),
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Or,
                span: 2..4,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "b".to_string(),
                    span: 5..6,
                }))),
                op: BinOp {
                    kind: BinOpKind::And,
                    span: 7..10,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "c".to_string(),
                    span: 11..12,
                }))),
                span: 5..12,
            })),
            span: 0..12,
        }));
    }

    #[test]
    fn comparison_binds_tighter_than_logic() {
        let mut parser = Parser::new("i < 3 and j >= 0");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "i".to_string(),
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Less,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 4..5,
                }))),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::And,
                span: 6..9,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "j".to_string(),
                    span: 10..11,
                }))),
                op: BinOp {
                    kind: BinOpKind::GreaterEq,
                    span: 12..14,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 0.0,
                    span: 15..16,
                }))),
                span: 10..16,
            })),
            span: 0..16,
        }));
    }

    #[test]
    fn parenthesized() {
        let mut parser = Parser::new("(1 + 2) * x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Paren(Paren {
                expr: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 1.0,
                        span: 1..2,
                    }))),
                    op: BinOp {
                        kind: BinOpKind::Add,
                        span: 3..4,
                    },
                    rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 2.0,
                        span: 5..6,
                    }))),
                    span: 1..6,
                })),
                span: 0..7,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 8..9,
            },
            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 10..11,
            }))),
            span: 0..11,
        }));
    }

    #[test]
    fn assign_to_var() {
        let mut parser = Parser::new("fx = 1 / pi");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Assign(Assign {
            target: LitSym {
                name: "fx".to_string(),
                span: 0..2,
            },
            value: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 1.0,
                    span: 5..6,
                }))),
                op: BinOp {
                    kind: BinOpKind::Div,
                    span: 7..8,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "pi".to_string(),
                    span: 9..11,
                }))),
                span: 5..11,
            })),
            span: 0..11,
        }));
    }

    #[test]
    fn assign_is_right_associative() {
        let mut parser = Parser::new("x = y = 2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Assign(Assign {
            target: LitSym {
                name: "x".to_string(),
                span: 0..1,
            },
            value: Box::new(Expr::Assign(Assign {
                target: LitSym {
                    name: "y".to_string(),
                    span: 4..5,
                },
                value: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 8..9,
                }))),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn function_call() {
        let mut parser = Parser::new("show(1, x)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            name: LitSym {
                name: "show".to_string(),
                span: 0..4,
            },
            args: vec![
                Expr::Literal(Literal::Number(LitNum {
                    value: 1.0,
                    span: 5..6,
                })),
                Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 8..9,
                })),
            ],
            span: 0..10,
            paren_span: 4..10,
        }));
    }

    #[test]
    fn if_else() {
        let mut parser = Parser::new("if x { 1 } else { 2 }");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::If(If {
            condition: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 3..4,
            }))),
            then_block: Block {
                stmts: vec![
                    Stmt {
                        expr: Expr::Literal(Literal::Number(LitNum {
                            value: 1.0,
                            span: 7..8,
                        })),
                        semicolon: None,
                        span: 7..8,
                    },
                ],
                span: 5..10,
            },
            else_expr: Some(Box::new(Expr::Block(Block {
                stmts: vec![
                    Stmt {
                        expr: Expr::Literal(Literal::Number(LitNum {
                            value: 2.0,
                            span: 18..19,
                        })),
                        semicolon: None,
                        span: 18..19,
                    },
                ],
                span: 16..21,
            }))),
            span: 0..21,
            if_span: 0..2,
            else_span: Some(11..15),
        }));
    }

    #[test]
    fn if_without_else() {
        let mut parser = Parser::new("if true { }");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::If(If {
            condition: Box::new(Expr::Literal(Literal::Bool(LitBool {
                value: true,
                span: 3..7,
            }))),
            then_block: Block {
                stmts: vec![],
                span: 8..11,
            },
            else_expr: None,
            span: 0..11,
            if_span: 0..2,
            else_span: None,
        }));
    }

    #[test]
    fn else_if_chain() {
        let mut parser = Parser::new("if a { 1 } else if b { 2 }");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::If(If {
            condition: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "a".to_string(),
                span: 3..4,
            }))),
            then_block: Block {
                stmts: vec![
                    Stmt {
                        expr: Expr::Literal(Literal::Number(LitNum {
                            value: 1.0,
                            span: 7..8,
                        })),
                        semicolon: None,
                        span: 7..8,
                    },
                ],
                span: 5..10,
            },
            else_expr: Some(Box::new(Expr::If(If {
                condition: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "b".to_string(),
                    span: 19..20,
                }))),
                then_block: Block {
                    stmts: vec![
                        Stmt {
                            expr: Expr::Literal(Literal::Number(LitNum {
                                value: 2.0,
                                span: 23..24,
                            })),
                            semicolon: None,
                            span: 23..24,
                        },
                    ],
                    span: 21..26,
                },
                else_expr: None,
                span: 16..26,
                if_span: 16..18,
                else_span: None,
            }))),
            span: 0..26,
            if_span: 0..2,
            else_span: Some(11..15),
        }));
    }

    #[test]
    fn while_loop() {
        let mut parser = Parser::new("while i < 3 { i = i + 1 }");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::While(While {
            condition: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "i".to_string(),
                    span: 6..7,
                }))),
                op: BinOp {
                    kind: BinOpKind::Less,
                    span: 8..9,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 10..11,
                }))),
                span: 6..11,
            })),
            body: Block {
                stmts: vec![
                    Stmt {
                        expr: Expr::Assign(Assign {
                            target: LitSym {
                                name: "i".to_string(),
                                span: 14..15,
                            },
                            value: Box::new(Expr::Binary(Binary {
                                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                                    name: "i".to_string(),
                                    span: 18..19,
                                }))),
                                op: BinOp {
                                    kind: BinOpKind::Add,
                                    span: 20..21,
                                },
                                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                                    value: 1.0,
                                    span: 22..23,
                                }))),
                                span: 18..23,
                            })),
                            span: 14..23,
                        }),
                        semicolon: None,
                        span: 14..23,
                    },
                ],
                span: 12..25,
            },
            span: 0..25,
            while_span: 0..5,
        }));
    }

    #[test]
    fn break_with_value() {
        let mut parser = Parser::new("break 3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Break(Break {
            value: Some(Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 3.0,
                span: 6..7,
            })))),
            span: 0..7,
            break_span: 0..5,
        }));
    }

    #[test]
    fn bare_return() {
        let mut parser = Parser::new("return");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Return(Return {
            value: None,
            span: 0..6,
            return_span: 0..6,
        }));
    }

    #[test]
    fn fn_decl() {
        let mut parser = Parser::new("fn add(a, b) { a + b }");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::FnDecl(FnDecl {
            name: LitSym {
                name: "add".to_string(),
                span: 3..6,
            },
            params: vec![
                LitSym {
                    name: "a".to_string(),
                    span: 7..8,
                },
                LitSym {
                    name: "b".to_string(),
                    span: 10..11,
                },
            ],
            body: Block {
                stmts: vec![
                    Stmt {
                        expr: Expr::Binary(Binary {
                            lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                                name: "a".to_string(),
                                span: 15..16,
                            }))),
                            op: BinOp {
                                kind: BinOpKind::Add,
                                span: 17..18,
                            },
                            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                                name: "b".to_string(),
                                span: 19..20,
                            }))),
                            span: 15..20,
                        }),
                        semicolon: None,
                        span: 15..20,
                    },
                ],
                span: 13..22,
            },
            span: 0..22,
            fn_span: 0..2,
        }));
    }

    #[test]
    fn statements_with_semicolons() {
        let mut parser = Parser::new("x = 1; x + 2");
        let stmts = parser.try_parse_full_many::<Stmt>().unwrap();

        assert_eq!(stmts, vec![
            Stmt {
                expr: Expr::Assign(Assign {
                    target: LitSym {
                        name: "x".to_string(),
                        span: 0..1,
                    },
                    value: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 1.0,
                        span: 4..5,
                    }))),
                    span: 0..5,
                }),
                semicolon: Some(5..6),
                span: 0..6,
            },
            Stmt {
                expr: Expr::Binary(Binary {
                    lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                        name: "x".to_string(),
                        span: 7..8,
                    }))),
                    op: BinOp {
                        kind: BinOpKind::Add,
                        span: 9..10,
                    },
                    rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 2.0,
                        span: 11..12,
                    }))),
                    span: 7..12,
                }),
                semicolon: None,
                span: 7..12,
            },
        ]);
    }

    #[test]
    fn trailing_whitespace_is_fine() {
        let mut parser = Parser::new("1 + 2\n");
        assert!(parser.try_parse_full::<Expr>().is_ok());
    }

    #[test]
    fn unclosed_parenthesis_is_fatal() {
        let mut parser = Parser::new("(1 + 2");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn unterminated_string_is_fatal() {
        let mut parser = Parser::new(r#"x = "oops"#);
        let err = parser.try_parse_full::<Stmt>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(err.spans, vec![4..9]);
    }

    #[test]
    fn assignment_to_non_symbol_is_fatal() {
        let mut parser = Parser::new("1 = 2");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(err.spans, vec![0..1, 2..3]);
    }

    #[test]
    fn missing_loop_body_is_fatal() {
        let mut parser = Parser::new("while i < 3");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
    }
}
