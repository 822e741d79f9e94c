//! Request-to-result evaluation
//!
//! Parses the selector, applies the operation, and folds every failure into a
//! [`Response`]. Nothing here escalates: domain errors and faults alike end up
//! in the `error` field.

use crate::{CalcError, CalcResult, Operation, Response};
use std::any::Any;
use std::panic::{self, UnwindSafe};

const UNKNOWN_FAULT: &str = "Unexpected fault";

/// Evaluate `num1 <operation> num2`.
///
/// # Examples
/// ```text
/// evaluate(4, 2, "add")      -> { result: 6, error: null }
/// evaluate(5, 0, "divide")   -> { result: 0, error: "Cannot divide by zero" }
/// evaluate(1, 1, "power")    -> { result: 0, error: "Invalid operation" }
/// ```
pub fn evaluate(num1: f64, num2: f64, operation: &str) -> Response {
    evaluate_operation(num1, num2, &Operation::parse(operation))
}

/// Evaluate with an already parsed selector
pub fn evaluate_operation(num1: f64, num2: f64, operation: &Operation) -> Response {
    Response::from(guard(|| operation.apply(num1, num2)))
}

/// Run a computation, turning a panic into [`CalcError::Fault`].
///
/// The fault carries the panic message when the payload is a string, and a
/// generic message otherwise.
///
/// The process-wide panic hook is left untouched, so the default hook still
/// prints the panic to stderr before it is converted. Callers that need a
/// silent fault path install their own hook.
pub fn guard<F>(computation: F) -> CalcResult<f64>
where
    F: FnOnce() -> CalcResult<f64> + UnwindSafe,
{
    panic::catch_unwind(computation)
        .unwrap_or_else(|payload| Err(CalcError::Fault(fault_message(payload.as_ref()))))
}

fn fault_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_FAULT.to_string()
    }
}
