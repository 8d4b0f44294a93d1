//! Built-in functions for Tarn.

pub mod error;

use error::BuiltinError;
use std::time::{SystemTime, UNIX_EPOCH};
use crate::{
    ctxt::Ctxt,
    error::kind::{MissingArgument, TooManyArguments, TypeMismatch},
    value::Value,
};

/// A trait implemented by all builtin functions.
pub trait Builtin: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// Evaluates the function. The given arguments have already been evaluated, left to right.
    fn eval(&self, ctxt: &mut Ctxt, args: Vec<Value>) -> Result<Value, BuiltinError>;
}

/// Returns all builtin functions.
pub fn all() -> Vec<Box<dyn Builtin>> {
    vec![
        Box::new(Show),
        Box::new(Clock),
        Box::new(Len),
    ]
}

/// Checks that the number of arguments matches the number the builtin declares.
fn check_arity(name: &'static str, expected: usize, args: &[Value]) -> Result<(), BuiltinError> {
    if args.len() > expected {
        return Err(BuiltinError::TooManyArguments(TooManyArguments {
            name: name.to_string(),
            expected,
            given: args.len(),
        }));
    }

    if args.len() < expected {
        return Err(BuiltinError::MissingArgument(MissingArgument {
            name: name.to_string(),
            index: args.len(),
            expected,
            given: args.len(),
        }));
    }

    Ok(())
}

/// `show(...)` writes the display forms of its arguments, separated by single spaces and followed
/// by a newline, to the context's configured output destination. Accepts any number of arguments
/// and returns `null`.
#[derive(Debug)]
pub struct Show;

impl Builtin for Show {
    fn name(&self) -> &'static str {
        "show"
    }

    fn eval(&self, ctxt: &mut Ctxt, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let line = args.iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        ctxt.emit_output(&line);
        Ok(Value::Null)
    }
}

/// `clock()` returns the number of seconds since the Unix epoch as a `Number`.
#[derive(Debug)]
pub struct Clock;

impl Builtin for Clock {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn eval(&self, _: &mut Ctxt, args: Vec<Value>) -> Result<Value, BuiltinError> {
        check_arity(self.name(), 0, &args)?;
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Ok(Value::Number(elapsed.as_secs_f64()))
    }
}

/// `len(s)` returns the length of a string, in characters.
#[derive(Debug)]
pub struct Len;

impl Builtin for Len {
    fn name(&self) -> &'static str {
        "len"
    }

    fn eval(&self, _: &mut Ctxt, mut args: Vec<Value>) -> Result<Value, BuiltinError> {
        check_arity(self.name(), 1, &args)?;
        match args.remove(0) {
            Value::String(s) => Ok(Value::Number(s.chars().count() as f64)),
            value => Err(BuiltinError::TypeMismatch(TypeMismatch {
                name: self.name().to_string(),
                index: 0,
                expected: "String",
                given: value.typename(),
            })),
        }
    }
}
