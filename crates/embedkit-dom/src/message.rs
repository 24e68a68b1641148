//! Size Report Messages
//!
//! The embed-size wire contract between an embedded document and its host.

use serde_json::Value;

/// Message tag an embedded document uses to report its desired size
pub const EMBED_SIZE: &str = "embed-size";

/// Desired rendered size reported by the embedded document
///
/// Transient: parsed from one inbound message and consumed immediately by
/// the embed that owns the listener. Dimensions hold whatever the coercion
/// produced, including NaN for garbage input; consumers gate on
/// [`is_truthy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub width: f64,
    pub height: f64,
}

impl SizeReport {
    /// Parse a window message; anything but an embed-size payload is None
    pub fn from_value(data: &Value) -> Option<Self> {
        if data.get("type").and_then(Value::as_str) != Some(EMBED_SIZE) {
            return None;
        }
        Some(Self {
            width: coerce_number(data.get("width")),
            height: coerce_number(data.get("height")),
        })
    }

    /// Wire payload for this report
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "type": EMBED_SIZE,
            "width": self.width,
            "height": self.height,
        })
    }
}

/// Numeric coercion of a message field, matching the platform's Number()
///
/// Numbers pass through, numeric strings parse, null and blank strings
/// coerce to 0, everything else (including a missing field) to NaN.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Some(_) => f64::NAN,
    }
}

/// Platform truthiness for a coerced dimension: false for 0 and NaN
pub fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_report() {
        let data = json!({"type": "embed-size", "width": 600, "height": 450});
        let report = SizeReport::from_value(&data).unwrap();

        assert_eq!(report.width, 600.0);
        assert_eq!(report.height, 450.0);
    }

    #[test]
    fn test_parse_numeric_strings() {
        let data = json!({"type": "embed-size", "width": "600", "height": " 450.5 "});
        let report = SizeReport::from_value(&data).unwrap();

        assert_eq!(report.width, 600.0);
        assert_eq!(report.height, 450.5);
    }

    #[test]
    fn test_foreign_type_ignored() {
        let data = json!({"type": "viewability", "width": 600, "height": 450});
        assert!(SizeReport::from_value(&data).is_none());

        let untagged = json!({"width": 600, "height": 450});
        assert!(SizeReport::from_value(&untagged).is_none());

        assert!(SizeReport::from_value(&json!("embed-size")).is_none());
    }

    #[test]
    fn test_coercion() {
        assert_eq!(coerce_number(Some(&json!(320))), 320.0);
        assert_eq!(coerce_number(Some(&json!("320"))), 320.0);
        assert_eq!(coerce_number(Some(&json!(""))), 0.0);
        assert_eq!(coerce_number(Some(&json!(null))), 0.0);
        assert!(coerce_number(Some(&json!("wide"))).is_nan());
        assert!(coerce_number(None).is_nan());
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(450.0));
        assert!(is_truthy(-1.0));
        assert!(!is_truthy(0.0));
        assert!(!is_truthy(-0.0));
        assert!(!is_truthy(f64::NAN));
    }

    #[test]
    fn test_round_trip() {
        let report = SizeReport { width: 600.0, height: 450.0 };
        assert_eq!(SizeReport::from_value(&report.to_value()), Some(report));
    }
}
