use tarn_parser::parser::ast::fn_decl::FnDecl;
use crate::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

impl Eval for FnDecl {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        // the body is stored unevaluated; it only runs when the function is called
        ctxt.add_func(self.name.clone(), self.params.clone(), self.body.clone());
        Ok(Value::Unit)
    }
}
