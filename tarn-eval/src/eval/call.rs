use tarn_parser::parser::ast::{block::Block, call::Call, literal::LitSym};
use crate::{
    ctxt::{Ctxt, Func, MAX_RECURSION_DEPTH},
    error::{
        kind::{MissingArgument, StackOverflow, TooManyArguments, UndefinedFunction},
        Error,
    },
    eval::Eval,
    value::Value,
};

/// Binds the evaluated arguments to the parameters, then evaluates the function body, all
/// within the call's own context.
fn eval_in(
    call: &Call,
    params: &[LitSym],
    body: &Block,
    args: Vec<Value>,
    call_ctxt: &mut Ctxt,
) -> Result<Value, Error> {
    let mut index = 0;
    let mut args = args.into_iter();
    let mut remaining = params.iter();
    loop {
        match (args.next(), remaining.next()) {
            // bind the argument for use in the function body
            (Some(value), Some(param)) => call_ctxt.add_var(&param.name, value),

            // too many arguments were given
            (Some(_), None) => return Err(Error::new(
                call.outer_span().to_vec(),
                TooManyArguments {
                    name: call.name.name.clone(),
                    expected: params.len(),
                    given: call.args.len(),
                },
            )),

            // no argument was given for this parameter
            (None, Some(_)) => return Err(Error::new(
                call.outer_span().to_vec(),
                MissingArgument {
                    name: call.name.name.clone(),
                    index,
                    expected: params.len(),
                    given: call.args.len(),
                },
            )),

            // begin evaluation
            (None, None) => break,
        }

        index += 1;
    }

    body.eval(call_ctxt)
}

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let func = ctxt.get_func(&self.name.name)
            .ok_or_else(|| Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: ctxt.get_similar_funcs(&self.name.name)
                    .into_iter()
                    .map(|name| name.to_string())
                    .collect(),
            }))?
            .clone();

        // the arguments are evaluated in the caller's own context, left to right; their effects
        // belong to the call site, and a `break` or `return` inside an argument must unwind the
        // caller's frame, so the call is abandoned
        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            let value = arg.eval(ctxt)?;
            if ctxt.break_loop || ctxt.returning {
                return Ok(value);
            }
            args.push(value);
        }

        let (params, body) = match func {
            Func::Builtin(builtin) => {
                return builtin.eval(ctxt, args)
                    .map_err(|err| err.into_error(self));
            },
            Func::UserDefined { params, body, .. } => (params, body),
        };

        // the body runs in a clone of the calling context: assignments made inside the function
        // do not leak out, and the function itself is visible through the clone, which is what
        // makes recursion work
        let mut call_ctxt = ctxt.clone();
        call_ctxt.stack_depth += 1;
        call_ctxt.fn_depth += 1;
        // a `while` wrapped around the call must not license a `break` inside the body
        call_ctxt.loop_depth = 0;

        if call_ctxt.stack_depth > MAX_RECURSION_DEPTH {
            // this call site usually sits inside the function definition, not the user's input,
            // so its span is useless for reporting; mark the calling context instead and let the
            // top of the call stack attach the span of the user's own call
            ctxt.max_depth_reached = true;
            return Err(Error::new(vec![], StackOverflow));
        }

        let result = eval_in(self, &params, &body, args, &mut call_ctxt);
        if result.is_err() && call_ctxt.max_depth_reached {
            if ctxt.stack_depth == 0 {
                // we are now at the top level of the call stack, where `self` is the function
                // call the user actually wrote
                return result.map_err(|mut err| {
                    err.spans.extend(self.outer_span());
                    err
                });
            }

            // keep unwinding
            ctxt.max_depth_reached = true;
        }
        result
    }
}
