use std::fmt::{Display, Formatter};

/// Represents any value that can be produced by evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A floating-point number.
    Number(f64),

    /// A boolean value.
    Boolean(bool),

    /// A string.
    String(String),

    /// The unit type, analogous to `()` in Rust. It is the result of constructs that have no
    /// meaningful value, such as an empty block, a statement terminated by a semicolon, or a loop
    /// whose body never ran.
    Unit,

    /// The null value, representing the absence of a value. Unlike [`Value::Unit`], `null` is
    /// visible in the language itself as the `null` literal.
    Null,
}

impl Value {
    /// Returns true if this value is truthy.
    ///
    /// Exactly two values are falsy: `null` and `false`. Every other value, including `0`, the
    /// empty string and the unit value, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    /// Returns the name of the type of this value, used in error messages.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
            Value::Unit => "Unit",
            Value::Null => "Null",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Unit => write!(f, "()"),
            Value::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_null_and_false_are_falsy() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());

        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Number(-1.5).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
        assert!(Value::String("false".to_string()).is_truthy());
        assert!(Value::Unit.is_truthy());
    }

    #[test]
    fn display() {
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(16.0).to_string(), "16");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
        assert_eq!(Value::Unit.to_string(), "()");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
