use crate::domain::value::text_from_json;
use crate::error::CoreError;
use serde::Deserialize;
use serde_json::Value;

/// One element of a fixture file array. Values stay untyped until an
/// [`Entry`](crate::domain::Entry) is derived from them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub name: Value,
    pub email: Value,
    pub date: Value,
    pub time: Value,
    pub reply: Value,
    pub send: Value,
    pub subject: Value,
}

/// A sender identity remembered for the clustering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

impl Identity {
    pub fn from_record(record: &RawRecord) -> Result<Self, CoreError> {
        Ok(Self {
            email: text_from_json("email", &record.email)?,
            name: text_from_json("name", &record.name)?,
        })
    }

    /// Copies `record` with this identity as its sender.
    pub fn apply_to(&self, record: &RawRecord) -> RawRecord {
        RawRecord {
            name: Value::String(self.name.clone()),
            email: Value::String(self.email.clone()),
            ..record.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> RawRecord {
        serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@x.com",
            "date": "2021,1,1",
            "time": 100,
            "reply": 0,
            "send": 1,
            "subject": "Hi"
        }))
        .expect("record")
    }

    #[test]
    fn missing_key_fails_to_deserialize() {
        let result: Result<RawRecord, _> =
            serde_json::from_value(json!({"name": "Jane", "email": "jane@x.com"}));
        assert!(result.is_err());
    }

    #[test]
    fn extra_keys_are_ignored() {
        let result: Result<RawRecord, _> = serde_json::from_value(json!({
            "name": "Jane", "email": "jane@x.com", "date": "2021,1,1", "time": 1,
            "reply": 0, "send": 0, "subject": "", "folder": "INBOX"
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn apply_to_replaces_only_sender() {
        let identity = Identity {
            email: "bob@y.org".to_string(),
            name: "Bob".to_string(),
        };
        let cloned = identity.apply_to(&record());
        assert_eq!(cloned.name, json!("Bob"));
        assert_eq!(cloned.email, json!("bob@y.org"));
        assert_eq!(cloned.subject, json!("Hi"));
        assert_eq!(cloned.time, json!(100));
    }

    #[test]
    fn identity_requires_text_fields() {
        let mut raw = record();
        raw.name = json!(42);
        assert!(Identity::from_record(&raw).is_err());
    }
}
