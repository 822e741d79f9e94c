use calc::evaluate;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e12..1.0e12f64,
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
    ]
}

fn nonzero_finite() -> impl Strategy<Value = f64> {
    finite().prop_filter("divisor must be nonzero", |b| *b != 0.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_add(a in finite(), b in finite()) {
        let response = evaluate(a, b, "add");
        prop_assert_eq!(response.error, None);
        prop_assert_eq!(response.result, a + b);
    }

    #[test]
    fn prop_subtract(a in finite(), b in finite()) {
        let response = evaluate(a, b, "subtract");
        prop_assert_eq!(response.error, None);
        prop_assert_eq!(response.result, a - b);
    }

    #[test]
    fn prop_multiply(a in finite(), b in finite()) {
        let response = evaluate(a, b, "multiply");
        prop_assert_eq!(response.error, None);
        prop_assert_eq!(response.result, a * b);
    }

    #[test]
    fn prop_divide(a in finite(), b in nonzero_finite()) {
        let response = evaluate(a, b, "divide");
        prop_assert_eq!(response.error, None);
        prop_assert_eq!(response.result, a / b);
    }

    #[test]
    fn prop_divide_by_zero(a in any::<f64>()) {
        let response = evaluate(a, 0.0, "divide");
        prop_assert_eq!(response.error.as_deref(), Some("Cannot divide by zero"));
        prop_assert_eq!(response.result, 0.0);
    }

    #[test]
    fn prop_unknown_selector(
        a in any::<f64>(),
        b in any::<f64>(),
        selector in "[a-zA-Z ]{0,12}",
    ) {
        prop_assume!(!["add", "subtract", "multiply", "divide"].contains(&selector.as_str()));
        let response = evaluate(a, b, &selector);
        prop_assert_eq!(response.error.as_deref(), Some("Invalid operation"));
        prop_assert_eq!(response.result, 0.0);
    }

    #[test]
    fn prop_addition_commutes(a in finite(), b in finite()) {
        prop_assert_eq!(evaluate(a, b, "add"), evaluate(b, a, "add"));
    }
}
