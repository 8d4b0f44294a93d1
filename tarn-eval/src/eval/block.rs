use tarn_parser::parser::ast::{block::Block, stmt::Stmt};
use crate::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

/// Evaluate a sequence of statements in order, producing the value of the last one.
///
/// An empty sequence produces the unit value. A `break` or `return` evaluated by any statement
/// ends the sequence early, carrying that statement's value with it; the corresponding loop or
/// call site is responsible for clearing the flag and consuming the value.
pub fn eval_stmts(stmts: &[Stmt], ctxt: &mut Ctxt) -> Result<Value, Error> {
    if stmts.is_empty() {
        return Ok(Value::Unit);
    }

    for stmt in stmts.iter().take(stmts.len() - 1) {
        let value = stmt.eval(ctxt)?;
        if ctxt.break_loop || ctxt.returning {
            return Ok(value);
        }
    }

    stmts.last().unwrap().eval(ctxt)
}

impl Eval for Block {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        eval_stmts(&self.stmts, ctxt)
    }
}
