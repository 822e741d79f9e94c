#![no_main]

use calc::{evaluate, Operation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f64, f64, u8)| {
    let (num1, num2, index) = input;
    let op = Operation::SUPPORTED[index as usize % Operation::SUPPORTED.len()].clone();

    let response = evaluate(num1, num2, op.name());

    match response.error.as_deref() {
        None => {}
        Some("Cannot divide by zero") => {
            assert_eq!(op, Operation::Divide);
            assert_eq!(num2, 0.0);
            assert_eq!(response.result, 0.0);
        }
        Some(other) => panic!("unexpected error: {}", other),
    }
});
