use thiserror::Error;

/// Error types for an evaluation
///
/// The `Display` text of each variant is the exact message placed in
/// [`Response::error`](crate::Response).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// `divide` with a divisor equal to zero (positive or negative)
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The operation selector is not one of the four known operations
    #[error("Invalid operation")]
    InvalidOperation,

    /// A computation panicked; carries the panic message verbatim
    #[error("{0}")]
    Fault(String),
}

impl CalcError {
    /// Whether this error comes from the dispatch rules rather than a fault
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::DivisionByZero | CalcError::InvalidOperation)
    }
}
