//! Ingestor: turns the raw text of a spreadsheet export into [`Lead`]s.
//!
//! ```text
//! text ──► lines ──► header row ──► ColumnMap
//!                └─► data rows ──► parse_line ──► defaults + normalizer ──► Lead
//! ```
//!
//! Ingestion cannot fail. Missing headers, short rows and unrecognised
//! status/type text all degrade field by field to the `DEFAULT_*` values.

use crate::{
    csv::parse_line,
    header::{ColumnMap, Field},
    normalizer::{normalize_property_type, normalize_status},
    types::{
        Lead, LeadId, DEFAULT_CATEGORY, DEFAULT_CITY, DEFAULT_LOCATION, DEFAULT_NAME,
        DEFAULT_PHONE,
    },
};

/// Parse a whole export into leads, in source row order.
///
/// Blank lines are dropped before the header row is chosen. Text with no
/// non-blank lines yields an empty collection.
pub fn ingest(text: &str) -> Vec<Lead> {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        tracing::debug!("ingest: export is empty");
        return Vec::new();
    };

    let headers: Vec<String> = parse_line(header_line)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();
    let columns = ColumnMap::resolve(&headers);
    tracing::debug!(?headers, ?columns, "ingest: header resolved");

    let leads: Vec<Lead> = lines
        .enumerate()
        .map(|(index, line)| build_lead(LeadId(index), &parse_line(line), &columns))
        .collect();

    tracing::debug!(leads = leads.len(), "ingest: complete");
    leads
}

/// Assemble one lead from a parsed row. Cells beyond the row's end read as
/// empty strings.
pub fn build_lead(id: LeadId, row: &[String], columns: &ColumnMap) -> Lead {
    let get = |field: Field| cell(row, columns, field);

    Lead {
        id,
        name: or_default(get(Field::Name), DEFAULT_NAME),
        phone: or_default(get(Field::Phone), DEFAULT_PHONE),
        location: or_default(get(Field::Location), DEFAULT_LOCATION),
        city: or_default(get(Field::City), DEFAULT_CITY),
        status: normalize_status(get(Field::Status)),
        property_type: normalize_property_type(get(Field::PropertyType)),
        category: or_default(get(Field::Category).trim(), DEFAULT_CATEGORY),
        website: non_empty(get(Field::Website)),
        linkedin: non_empty(get(Field::Linkedin)),
    }
}

fn cell<'a>(row: &'a [String], columns: &ColumnMap, field: Field) -> &'a str {
    columns
        .get(field)
        .and_then(|idx| row.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
