//! Contact record and insert draft types.

use crate::types::RecordId;

/// Stored contact row, as returned by store queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Store-assigned identifier, never reused.
    pub id: RecordId,
    /// Display name; not unique.
    pub name: String,
    /// Email address, unique across records. A NULL in a legacy table reads as `""`.
    pub email: String,
    /// Phone number, unique across records. A NULL in a legacy table reads as `""`.
    pub phone: String,
    /// Free-form postal address.
    pub address: Option<String>,
}

impl Record {
    /// Column headers used when rendering records.
    pub const HEADERS: [&'static str; 5] = ["ID", "Name", "Email", "Phone", "Address"];

    /// Returns true when any text field contains `keyword`, ignoring ASCII case.
    ///
    /// Mirrors the store's `LIKE` search, so it can serve as a full-scan reference.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_ascii_lowercase();
        [
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.phone.as_str()),
            self.address.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_ascii_lowercase().contains(&needle))
    }
}

/// Insert payload used to create a new [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Optional postal address.
    pub address: Option<String>,
}

impl RecordDraft {
    /// Builds a draft from borrowed field values.
    pub fn new(name: &str, email: &str, phone: &str, address: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.map(str::to_string),
        }
    }
}
