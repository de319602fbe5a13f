//! Uniform response envelope.
//!
//! Every boundary reply, success or failure, uses the same shape:
//! `{success, message, data, errors}`. The HTTP layer (out of scope here)
//! pairs the envelope with [`DomainError::status_code`].

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub data: JsonValue,
    pub errors: Vec<String>,
}

impl Envelope {
    pub fn ok(message: impl Into<String>, data: impl Serialize) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or(JsonValue::Null),
            errors: Vec::new(),
        }
    }

    pub fn err(error: &DomainError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            data: JsonValue::Null,
            errors: vec![error.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_carries_data() {
        let env = Envelope::ok("done", serde_json::json!({"count": 2}));
        assert!(env.success);
        assert_eq!(env.data["count"], 2);
        assert!(env.errors.is_empty());
    }

    #[test]
    fn unauthenticated_envelope_hides_the_cause() {
        let env = Envelope::err(&DomainError::Unauthenticated);
        assert!(!env.success);
        assert_eq!(env.message, "unauthenticated");
        assert_eq!(env.data, JsonValue::Null);
    }
}
