use tarn_parser::parser::ast::stmt::Stmt;
use crate::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

impl Eval for Stmt {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let value = self.expr.eval(ctxt)?;
        if self.semicolon.is_some() && !ctxt.break_loop && !ctxt.returning {
            // the semicolon discards the value, unless the statement is unwinding out of an
            // enclosing loop or function; `break 3;` still hands `3` to the loop
            Ok(Value::Unit)
        } else {
            Ok(value)
        }
    }
}
