use tarn_parser::parser::ast::break_expr::Break;
use crate::{
    ctxt::Ctxt,
    error::{kind::BreakOutsideLoop, Error},
    eval::Eval,
    eval_break,
    value::Value,
};

/// Helper macro to call [`Eval::eval`](crate::eval::Eval::eval), then check if an enclosing loop
/// or function call should be unwound. Errors will also be propogated automatically with the `?`
/// operator.
///
/// The `break_loop` / `returning` flag is left set; the loop or call site that owns the frame is
/// responsible for clearing it and consuming the value.
#[macro_export]
macro_rules! eval_break {
    ($value:expr, $ctxt:expr) => {{
        let value = $value.eval($ctxt)?;
        if $ctxt.break_loop || $ctxt.returning {
            return Ok(value);
        }
        value
    }};
}

impl Eval for Break {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        if ctxt.loop_depth == 0 {
            return Err(Error::new(vec![self.span.clone()], BreakOutsideLoop));
        }

        let value = match &self.value {
            Some(value) => eval_break!(value, ctxt),
            None => Value::Unit,
        };
        ctxt.break_loop = true;
        Ok(value)
    }
}
