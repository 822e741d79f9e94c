//! Operation selectors
//!
//! Selectors arrive as free text. They are parsed once into a closed set of
//! operations, with a fallback variant that keeps the unrecognized text.

use crate::{CalcError, CalcResult};
use std::fmt;

/// Arithmetic operation selected by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Any selector outside the four known names, as received
    Unsupported(String),
}

impl Operation {
    /// The four operations a selector can name, in display order
    pub const SUPPORTED: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Parse a selector. Matching is exact and case-sensitive.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "add" => Operation::Add,
            "subtract" => Operation::Subtract,
            "multiply" => Operation::Multiply,
            "divide" => Operation::Divide,
            other => Operation::Unsupported(other.to_string()),
        }
    }

    /// The selector text for this operation
    pub fn name(&self) -> &str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Unsupported(raw) => raw,
        }
    }

    /// Infix symbol, if the operation is supported
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Operation::Add => Some("+"),
            Operation::Subtract => Some("-"),
            Operation::Multiply => Some("*"),
            Operation::Divide => Some("/"),
            Operation::Unsupported(_) => None,
        }
    }

    /// Whether the selector named one of the four operations
    pub fn is_supported(&self) -> bool {
        !matches!(self, Operation::Unsupported(_))
    }

    /// Apply the operation to two operands.
    ///
    /// Only two inputs are rejected: a zero divisor for `divide`, and an
    /// unsupported selector. Everything else follows IEEE 754, so overflow
    /// yields an infinity and NaN operands propagate.
    pub fn apply(&self, num1: f64, num2: f64) -> CalcResult<f64> {
        match self {
            Operation::Add => Ok(num1 + num2),
            Operation::Subtract => Ok(num1 - num2),
            Operation::Multiply => Ok(num1 * num2),
            Operation::Divide => {
                // -0.0 == 0.0 holds, NaN == 0.0 does not
                if num2 == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(num1 / num2)
                }
            }
            Operation::Unsupported(_) => Err(CalcError::InvalidOperation),
        }
    }
}

impl From<String> for Operation {
    fn from(selector: String) -> Self {
        match Operation::parse(&selector) {
            Operation::Unsupported(_) => Operation::Unsupported(selector),
            known => known,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
