use tarn_parser::parser::ast::literal::Literal;
use crate::{
    ctxt::Ctxt,
    error::{kind::UndefinedVariable, Error},
    eval::Eval,
    value::Value,
};

impl Eval for Literal {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Literal::Number(num) => Ok(Value::Number(num.value)),
            Literal::Bool(b) => Ok(Value::Boolean(b.value)),
            Literal::String(s) => Ok(Value::String(s.value.clone())),
            Literal::Null(_) => Ok(Value::Null),
            Literal::Symbol(sym) => ctxt.get_var(&sym.name)
                .ok_or_else(|| Error::new(vec![sym.span.clone()], UndefinedVariable {
                    name: sym.name.clone(),
                })),
        }
    }
}
