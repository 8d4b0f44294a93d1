//! The abstract syntax tree of the language, along with the [`Parse`](crate::parser::Parse)
//! implementations that build it.

pub mod assign;
pub mod binary;
pub mod block;
pub mod break_expr;
pub mod call;
pub mod expr;
pub mod fn_decl;
pub mod if_expr;
pub mod literal;
pub mod paren;
pub mod return_expr;
pub mod stmt;
pub mod unary;
pub mod while_expr;
