use crate::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Outcome of a single evaluation
///
/// On success `error` is `None` and `result` holds the computed value. On
/// failure `result` is `0.0` and `error` holds the message. `error` is always
/// serialized, as `null` when absent.
///
/// JSON has no literal for infinities or NaN, so those results are written as
/// the strings `"Infinity"`, `"-Infinity"` and `"NaN"` and read back the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(
        serialize_with = "ieee754::serialize",
        deserialize_with = "ieee754::deserialize"
    )]
    pub result: f64,
    pub error: Option<String>,
}

impl Response {
    pub fn success(result: f64) -> Self {
        Self {
            result,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: 0.0,
            error: Some(error.into()),
        }
    }

    /// Get the value, or the error message if the evaluation failed
    pub fn value(&self) -> Result<f64, &str> {
        match &self.error {
            Some(message) => Err(message),
            None => Ok(self.result),
        }
    }
}

impl From<CalcResult<f64>> for Response {
    fn from(outcome: CalcResult<f64>) -> Self {
        match outcome {
            Ok(value) => Response::success(value),
            Err(err) => Response::from(err),
        }
    }
}

impl From<CalcError> for Response {
    fn from(err: CalcError) -> Self {
        Response::failure(err.to_string())
    }
}

/// `f64` as a JSON number, or a string token when it is not finite
mod ieee754 {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";
    const NAN: &str = "NaN";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if *value == f64::INFINITY {
            serializer.serialize_str(INFINITY)
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    struct NumberVisitor;

    impl Visitor<'_> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "a number or one of \"{}\", \"{}\", \"{}\"",
                INFINITY, NEG_INFINITY, NAN
            )
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            match value {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}
