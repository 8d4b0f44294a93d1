//! Error types for the parser.

pub mod kind;

use ariadne::Report;
use std::ops::Range;
use tarn_error::ErrorKind;

/// A general parser error. The error is annotated with spans pointing into the offending source
/// code.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether this error is fatal.
    ///
    /// The parser frequently tries multiple interpretations of an ambiguous piece of source code,
    /// suppressing errors from interpretations that fail. A fatal error indicates the parser is
    /// certain about the interpretation, but found a problem within it; no other interpretations
    /// are attempted and the error is reported to the user as-is.
    pub fatal: bool,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
            fatal: false,
        }
    }

    /// Creates a new fatal error with the given spans and kind.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
            fatal: true,
        }
    }

    /// Build a report from this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}
