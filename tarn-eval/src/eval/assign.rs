use tarn_parser::parser::ast::assign::Assign;
use crate::{ctxt::Ctxt, error::Error, eval::Eval, eval_break, value::Value};

impl Eval for Assign {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let value = eval_break!(self.value, ctxt);
        ctxt.add_var(&self.target.name, value.clone());
        Ok(value)
    }
}
