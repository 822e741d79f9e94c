//! # Calc Engine
//!
//! Arithmetic evaluator behind the calculator server and CLI.
//!
//! ## Quick Start
//!
//! ```rust
//! use calc::evaluate;
//!
//! let response = calc::evaluate(4.0, 2.0, "add");
//! assert_eq!(response.result, 6.0);
//! assert!(response.error.is_none());
//!
//! let response = evaluate(5.0, 0.0, "divide");
//! assert_eq!(response.error.as_deref(), Some("Cannot divide by zero"));
//! ```
//!
//! ## Core Concepts
//!
//! ### Operations
//! An operation selector is one of `add`, `subtract`, `multiply` or `divide`,
//! matched case-sensitively. Anything else is kept as
//! [`Operation::Unsupported`] and evaluates to an "Invalid operation" error.
//!
//! ### Responses
//! Every evaluation produces a [`Response`]: a `result` and an optional
//! `error`. Errors never escape as `Err` from [`evaluate`]; they are folded into
//! the response so callers can serialize it as-is.
//!
//! ### Floating point
//! Operands and results are plain `f64`. Infinities and NaN pass through
//! untouched; only an exact zero divisor is rejected.

pub mod error;
pub mod evaluator;
pub mod operation;
pub mod response;

pub use error::CalcError;
pub use evaluator::{evaluate, evaluate_operation, guard};
pub use operation::Operation;
pub use response::Response;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
