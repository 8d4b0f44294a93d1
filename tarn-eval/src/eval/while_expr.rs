use tarn_parser::parser::ast::while_expr::While;
use crate::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

/// Drives the loop itself. The loop's value is the value of the last body evaluation, or the
/// unit value if the body never ran.
///
/// Any error, whether from the condition on any test or from the body on any iteration,
/// aborts the loop at once and is returned unchanged. A `break` or `return` evaluated in the
/// condition or body also ends the loop, leaving its flag set for [`While::eval`] and the
/// surrounding call site to consume.
fn eval_iterations(while_expr: &While, ctxt: &mut Ctxt) -> Result<Value, Error> {
    let mut result = Value::Unit;
    loop {
        let condition = while_expr.condition.eval(ctxt)?;
        if ctxt.break_loop || ctxt.returning {
            return Ok(condition);
        }
        if !condition.is_truthy() {
            return Ok(result);
        }

        result = while_expr.body.eval(ctxt)?;
        if ctxt.break_loop || ctxt.returning {
            return Ok(result);
        }
    }
}

impl Eval for While {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        ctxt.loop_depth += 1;
        let result = eval_iterations(self, ctxt);
        ctxt.loop_depth -= 1;

        if ctxt.break_loop {
            // this loop consumes the `break`; enclosing loops keep running
            ctxt.break_loop = false;
        }
        result
    }
}
