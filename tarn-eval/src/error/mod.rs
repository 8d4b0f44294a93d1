//! Error types for the evaluator.
//!
//! Unlike the parser, the evaluator never needs to distinguish recoverable errors from fatal
//! ones, so the shared [`Error`] type is used directly.

pub mod kind;

pub use tarn_error::Error;
