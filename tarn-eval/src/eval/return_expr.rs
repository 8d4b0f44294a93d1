use tarn_parser::parser::ast::return_expr::Return;
use crate::{
    ctxt::Ctxt,
    error::{kind::ReturnOutsideFunction, Error},
    eval::Eval,
    eval_break,
    value::Value,
};

impl Eval for Return {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        if ctxt.fn_depth == 0 {
            return Err(Error::new(vec![self.span.clone()], ReturnOutsideFunction));
        }

        let value = match &self.value {
            Some(value) => eval_break!(value, ctxt),
            None => Value::Null,
        };
        ctxt.returning = true;
        Ok(value)
    }
}
