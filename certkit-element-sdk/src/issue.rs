use serde_json::Value;
use tracing::warn;

/// Read-only view over the JSON snapshot attached to one certificate issue.
///
/// The snapshot is produced by the host issuance process; elements only
/// read it. Accessors are tolerant: a missing key, a wrong type, or a
/// snapshot that failed to parse all resolve to `None`, which elements
/// render as the localized error placeholder.
#[derive(Debug, Clone)]
pub struct IssueRecord {
    data: Value,
}

impl IssueRecord {
    /// Wraps raw issue JSON. Malformed input degrades to an empty record
    /// so every field lookup misses; it is never an error.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(data @ Value::Object(_)) => Self { data },
            Ok(_) => {
                warn!("issue snapshot is not a JSON object, treating as empty");
                Self::empty()
            }
            Err(err) => {
                warn!(error = %err, "malformed issue snapshot, treating as empty");
                Self::empty()
            }
        }
    }

    #[must_use]
    pub fn from_value(data: Value) -> Self {
        Self { data }
    }

    /// A record with no fields; every lookup returns `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self { data: Value::Null }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Object(map) => map.is_empty(),
            _ => true,
        }
    }

    /// String field lookup.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Integer field lookup. Accepts a JSON number or a numeric string;
    /// issuance snapshots from older hosts stringify everything.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let value = self.data.get(key)?;
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Field lookup as display text: strings pass through, numbers are
    /// rendered in decimal.
    #[must_use]
    pub fn get_display(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
