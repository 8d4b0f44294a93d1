//! Implementations of [`Eval`] for every node in the syntax tree.

pub mod assign;
pub mod binary;
pub mod block;
pub mod break_expr;
pub mod call;
pub mod expr;
pub mod fn_decl;
pub mod if_expr;
pub mod literal;
pub mod return_expr;
pub mod stmt;
pub mod unary;
pub mod while_expr;

use crate::{ctxt::Ctxt, error::Error, value::Value};

pub use block::eval_stmts;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error>;
}
