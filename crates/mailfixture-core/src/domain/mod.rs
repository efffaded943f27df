pub mod date;
pub mod email;
pub mod entry;
pub mod record;
pub mod value;

pub use date::{parse_date, FixtureDate};
pub use email::split_email;
pub use entry::{
    Entry, Recipient, DEFAULT_RECIPIENT_ADDRESS, DEFAULT_RECIPIENT_NAME, ENTRY_FIELDS,
};
pub use record::{Identity, RawRecord};
pub use value::{
    flag_from_json, integer_from_json, json_kind, quote_str, text_from_json, FieldValue,
};
