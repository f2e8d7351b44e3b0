use std::fmt;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::{core::store::DuplicateGroup, record::Record};

/// Bordered grid of records with the ID, Name, Email, Phone, Address columns.
///
/// Callers print their own notice for an empty slice; this view always emits a header.
pub struct RecordTable<'a> {
    records: &'a [Record],
}

impl<'a> RecordTable<'a> {
    /// Wraps `records` for display.
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }
}

impl fmt::Display for RecordTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = grid(Record::HEADERS);
        for rec in self.records {
            table.add_row(vec![
                rec.id.to_string(),
                rec.name.clone(),
                rec.email.clone(),
                rec.phone.clone(),
                rec.address.clone().unwrap_or_default(),
            ]);
        }
        write!(f, "{table}")
    }
}

/// Preview of duplicate groups: which id survives and which ids go.
pub struct DuplicateReport<'a> {
    groups: &'a [DuplicateGroup],
}

impl<'a> DuplicateReport<'a> {
    /// Wraps `groups` for display.
    pub fn new(groups: &'a [DuplicateGroup]) -> Self {
        Self { groups }
    }
}

impl fmt::Display for DuplicateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = grid(["Email", "Phone", "Keep", "Remove"]);
        for group in self.groups {
            let remove = group
                .remove
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                group.email.clone().unwrap_or_default(),
                group.phone.clone().unwrap_or_default(),
                group.keep.to_string(),
                remove,
            ]);
        }
        write!(f, "{table}")
    }
}

fn grid<const N: usize>(headers: [&str; N]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.to_vec());
    table
}
