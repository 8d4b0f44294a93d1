use tarn_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use crate::{
    ctxt::Ctxt,
    error::{kind::InvalidBinaryOperation, Error},
    eval::Eval,
    eval_break,
    value::Value,
};

/// Builds the error for an operator applied to operands it does not support.
fn invalid_operation(binary: &Binary, left: &'static str, right: &'static str) -> Error {
    Error::new(
        vec![binary.lhs.span(), binary.op.span.clone(), binary.rhs.span()],
        InvalidBinaryOperation {
            op: binary.op.kind,
            left,
            right,
        },
    )
}

/// Evaluates `and` / `or`, skipping the right operand entirely when the left operand already
/// decides the result. The result is always a boolean: the truthiness of the deciding
/// operand, not the operand itself.
fn eval_short_circuit(binary: &Binary, ctxt: &mut Ctxt) -> Result<Value, Error> {
    let left = eval_break!(binary.lhs, ctxt);
    match binary.op.kind {
        BinOpKind::And if !left.is_truthy() => Ok(Value::Boolean(false)),
        BinOpKind::Or if left.is_truthy() => Ok(Value::Boolean(true)),
        _ => {
            let right = eval_break!(binary.rhs, ctxt);
            Ok(Value::Boolean(right.is_truthy()))
        },
    }
}

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        if matches!(self.op.kind, BinOpKind::And | BinOpKind::Or) {
            return eval_short_circuit(self, ctxt);
        }

        let left = eval_break!(self.lhs, ctxt);
        let right = eval_break!(self.rhs, ctxt);
        let value = match (self.op.kind, left, right) {
            // equality is defined for every pair of values; operands of different types are
            // simply never equal
            (BinOpKind::Eq, left, right) => Value::Boolean(left == right),
            (BinOpKind::NotEq, left, right) => Value::Boolean(left != right),

            (op, Value::Number(left), Value::Number(right)) => match op {
                BinOpKind::Mul => Value::Number(left * right),
                BinOpKind::Div => Value::Number(left / right),
                BinOpKind::Mod => Value::Number(left % right),
                BinOpKind::Add => Value::Number(left + right),
                BinOpKind::Sub => Value::Number(left - right),
                BinOpKind::Greater => Value::Boolean(left > right),
                BinOpKind::GreaterEq => Value::Boolean(left >= right),
                BinOpKind::Less => Value::Boolean(left < right),
                BinOpKind::LessEq => Value::Boolean(left <= right),
                _ => return Err(invalid_operation(self, "Number", "Number")),
            },

            (BinOpKind::Add, Value::String(left), Value::String(right)) => {
                Value::String(left + &right)
            },

            (_, left, right) => {
                return Err(invalid_operation(self, left.typename(), right.typename()));
            },
        };
        Ok(value)
    }
}
