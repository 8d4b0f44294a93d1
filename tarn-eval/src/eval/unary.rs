use tarn_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::{
    ctxt::Ctxt,
    error::{kind::InvalidUnaryOperation, Error},
    eval::Eval,
    eval_break,
    value::Value,
};

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let operand = eval_break!(self.operand, ctxt);
        match (operand, self.op.kind) {
            (Value::Number(num), UnaryOpKind::Neg) => Ok(Value::Number(-num)),

            // `!` works on every value through its truthiness
            (operand, UnaryOpKind::Not) => Ok(Value::Boolean(!operand.is_truthy())),

            (operand, UnaryOpKind::Neg) => Err(Error::new(
                vec![self.operand.span(), self.op.span.clone()],
                InvalidUnaryOperation {
                    op: self.op.kind,
                    expr_type: operand.typename(),
                },
            )),
        }
    }
}
