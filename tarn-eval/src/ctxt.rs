use levenshtein::levenshtein;
use std::{cell::RefCell, collections::HashMap, rc::Rc, sync::Arc};
use tarn_parser::parser::ast::{block::Block, literal::LitSym};
use crate::{builtins::{self, Builtin}, value::Value};

/// The maximum recursion depth of a context. This is used to detect stack overflows.
pub const MAX_RECURSION_DEPTH: usize = 1 << 11;

/// Where output produced by the `show` function is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Write each line to standard output.
    #[default]
    Stdout,

    /// Append each line to an in-memory buffer, retrievable with [`Ctxt::take_output`]. Used by
    /// front ends that render output themselves, and by tests.
    Captured,
}

/// A function available for use in a context.
#[derive(Debug, Clone)]
pub enum Func {
    /// A builtin function.
    Builtin(Arc<dyn Builtin>),

    /// A user-defined function.
    UserDefined {
        /// The name of the function.
        name: LitSym,

        /// The parameters of the function.
        params: Vec<LitSym>,

        /// The body of the function.
        body: Block,
    },
}

impl From<Box<dyn Builtin>> for Func {
    fn from(builtin: Box<dyn Builtin>) -> Self {
        Func::Builtin(builtin.into())
    }
}

/// A context to use when evaluating an expression, containing variables and functions that can be
/// used within the expression.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Value>,

    /// The functions in the context.
    funcs: HashMap<String, Func>,

    /// Where output produced by the `show` function is sent.
    pub output_mode: OutputMode,

    /// The buffer output is appended to in [`OutputMode::Captured`].
    ///
    /// The buffer is shared between clones of the context, so output produced inside a function
    /// call survives the call's scope being discarded.
    captured: Rc<RefCell<String>>,

    /// When true, a `break` expression was evaluated in the current loop. The evaluator should
    /// stop and propogate the value of the `break` expression to the loop.
    pub(crate) break_loop: bool,

    /// When true, a `return` expression was evaluated in the current function body. The evaluator
    /// should stop and propogate the value of the `return` expression to the call site.
    pub(crate) returning: bool,

    /// The number of loops the evaluator is currently inside of, used to reject `break` outside
    /// of a loop. Function bodies reset this to zero; a loop surrounding the call does not
    /// license a `break` within the function.
    pub(crate) loop_depth: usize,

    /// The number of function calls the evaluator is currently inside of, used to reject `return`
    /// outside of a function.
    pub(crate) fn_depth: usize,

    /// The current depth of the stack. This is used to detect stack overflows.
    pub(crate) stack_depth: usize,

    /// Whether the maximum recursion depth was reached while evaluating a function call, used to
    /// attach the span of the user's own call once the error has unwound to the top of the call
    /// stack.
    pub(crate) max_depth_reached: bool,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            funcs: builtins::all()
                .into_iter()
                .map(|builtin| (builtin.name().to_string(), builtin.into()))
                .collect(),
            output_mode: OutputMode::default(),
            captured: Rc::default(),
            break_loop: false,
            returning: false,
            loop_depth: 0,
            fn_depth: 0,
            stack_depth: 0,
            max_depth_reached: false,
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// The empty context does not contain the builtin functions, so it is mostly useful for
    /// testing; consider using the [`Default`] implementation instead.
    pub fn new() -> Ctxt {
        Ctxt {
            funcs: HashMap::new(),
            ..Default::default()
        }
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    /// Add a user-defined function to the context.
    pub fn add_func(&mut self, name: LitSym, params: Vec<LitSym>, body: Block) {
        self.funcs.insert(name.name.clone(), Func::UserDefined { name, params, body });
    }

    /// Get the function with the given name in the context.
    pub fn get_func(&self, name: &str) -> Option<&Func> {
        self.funcs.get(name)
    }

    /// Returns the names of all functions in the context with a name similar to the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&str> {
        self.funcs
            .iter()
            .filter(|(n, _)| levenshtein(n, name) < 2)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Sends a line of output produced by the `show` function to the configured destination.
    pub(crate) fn emit_output(&mut self, line: &str) {
        match self.output_mode {
            OutputMode::Stdout => println!("{}", line),
            OutputMode::Captured => {
                let mut captured = self.captured.borrow_mut();
                captured.push_str(line);
                captured.push('\n');
            },
        }
    }

    /// Takes the output captured so far, leaving the buffer empty.
    ///
    /// Only output produced in [`OutputMode::Captured`] lands in the buffer; in
    /// [`OutputMode::Stdout`] this always returns the empty string.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.captured.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_output_is_shared_between_clones() {
        let mut ctxt = Ctxt::default();
        ctxt.output_mode = OutputMode::Captured;

        ctxt.emit_output("outer");
        let mut clone = ctxt.clone();
        clone.emit_output("inner");
        drop(clone);

        assert_eq!(ctxt.take_output(), "outer\ninner\n");
        assert_eq!(ctxt.take_output(), "");
    }

    #[test]
    fn variables_are_not_shared_between_clones() {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", Value::Number(1.0));

        let mut clone = ctxt.clone();
        clone.add_var("x", Value::Number(2.0));

        assert_eq!(ctxt.get_var("x"), Some(Value::Number(1.0)));
        assert_eq!(clone.get_var("x"), Some(Value::Number(2.0)));
    }

    #[test]
    fn similar_funcs() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_similar_funcs("shov"), vec!["show"]);
        assert!(ctxt.get_similar_funcs("completely_different").is_empty());
    }
}
