use tarn_parser::parser::ast::expr::{Expr, Primary};
use crate::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.expr.eval(ctxt),
            Expr::Block(block) => block.eval(ctxt),
            Expr::If(if_expr) => if_expr.eval(ctxt),
            Expr::While(while_expr) => while_expr.eval(ctxt),
            Expr::Break(break_expr) => break_expr.eval(ctxt),
            Expr::Return(return_expr) => return_expr.eval(ctxt),
            Expr::FnDecl(fn_decl) => fn_decl.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Assign(assign) => assign.eval(ctxt),
        }
    }
}

impl Eval for Primary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Primary::Literal(literal) => literal.eval(ctxt),
            Primary::Paren(paren) => paren.expr.eval(ctxt),
            Primary::Call(call) => call.eval(ctxt),
        }
    }
}
