use crate::domain::date::parse_date;
use crate::domain::email::split_email;
use crate::domain::record::RawRecord;
use crate::domain::value::{flag_from_json, integer_from_json, text_from_json, FieldValue};
use crate::error::CoreError;

pub const DEFAULT_RECIPIENT_ADDRESS: &str = "john@doe.com";
pub const DEFAULT_RECIPIENT_NAME: &str = "";

/// Field names in the order they are rendered.
pub const ENTRY_FIELDS: [&str; 12] = [
    "sender_name",
    "sender_domain",
    "sender_local_part",
    "year",
    "month",
    "day",
    "timestamp",
    "is_reply",
    "is_send",
    "subject",
    "to_address",
    "to_name",
];

/// The recipient stamped on every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub address: String,
    pub name: String,
}

impl Default for Recipient {
    fn default() -> Self {
        Self {
            address: DEFAULT_RECIPIENT_ADDRESS.to_string(),
            name: DEFAULT_RECIPIENT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub sender_name: String,
    pub sender_domain: String,
    pub sender_local_part: String,
    pub year: u64,
    pub month: u64,
    pub day: u64,
    pub timestamp: u64,
    pub is_reply: bool,
    pub is_send: bool,
    pub subject: String,
    pub to_address: String,
    pub to_name: String,
}

impl Entry {
    pub fn derive(raw: &RawRecord, recipient: &Recipient) -> Result<Self, CoreError> {
        let sender_name = text_from_json("name", &raw.name)?;
        let email = text_from_json("email", &raw.email)?;
        let (local, domain) = split_email(&email)?;
        let date = parse_date(&text_from_json("date", &raw.date)?)?;
        let timestamp = integer_from_json("time", &raw.time)?;
        let is_reply = flag_from_json(&raw.reply);
        let is_send = flag_from_json(&raw.send);
        let subject = text_from_json("subject", &raw.subject)?;

        Ok(Self {
            sender_name,
            sender_domain: domain.to_string(),
            sender_local_part: local.to_string(),
            year: date.year,
            month: date.month,
            day: date.day,
            timestamp,
            is_reply,
            is_send,
            subject,
            to_address: recipient.address.clone(),
            to_name: recipient.name.clone(),
        })
    }

    /// Name/value pairs in [`ENTRY_FIELDS`] order.
    pub fn fields(&self) -> [(&'static str, FieldValue); 12] {
        [
            ("sender_name", FieldValue::Text(self.sender_name.clone())),
            ("sender_domain", FieldValue::Text(self.sender_domain.clone())),
            (
                "sender_local_part",
                FieldValue::Text(self.sender_local_part.clone()),
            ),
            ("year", FieldValue::Integer(self.year)),
            ("month", FieldValue::Integer(self.month)),
            ("day", FieldValue::Integer(self.day)),
            ("timestamp", FieldValue::Integer(self.timestamp)),
            ("is_reply", FieldValue::Boolean(self.is_reply)),
            ("is_send", FieldValue::Boolean(self.is_send)),
            ("subject", FieldValue::Text(self.subject.clone())),
            ("to_address", FieldValue::Text(self.to_address.clone())),
            ("to_name", FieldValue::Text(self.to_name.clone())),
        ]
    }
}
