#![no_main]

use calc::evaluate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(selector) = std::str::from_utf8(data) {
        let response = evaluate(6.0, 3.0, selector);

        if !matches!(selector, "add" | "subtract" | "multiply" | "divide") {
            assert_eq!(response.error.as_deref(), Some("Invalid operation"));
        }
    }
});
