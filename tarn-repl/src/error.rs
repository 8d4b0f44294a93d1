use ariadne::Source;
use tarn_eval::error::Error as EvalError;
use tarn_parser::parser::error::Error as ParseError;

/// Utility enum to package errors that can occur while parsing / evaluating.
pub enum Error {
    /// An error that occurred while parsing.
    ParseError(ParseError),

    /// An error that occurred while evaluating.
    EvalError(EvalError),
}

impl Error {
    /// Report the error in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report = match self {
            Self::ParseError(err) => err.build_report("input"),
            Self::EvalError(err) => err.build_report("input"),
        };
        report.eprint(("input", Source::from(input))).unwrap();
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::EvalError(err)
    }
}
