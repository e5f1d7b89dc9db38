//! Export: renders a slice of leads for headless output.
//!
//! Three formats are supported: an aligned plain-text table for humans,
//! JSON lines for tooling, and CSV that [`parse_line`](crate::csv::parse_line)
//! (and therefore the ingestor) reads back.

use crate::{csv::quote_field, types::Lead};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Table,
    Jsonl,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ExportFormat::Table),
            "jsonl" | "json" => Ok(ExportFormat::Jsonl),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown format: {other} (expected table, jsonl or csv)")),
        }
    }
}

const CSV_HEADER: [&str; 10] = [
    "Id", "Name", "Status", "Phone", "Location", "City", "Property Type", "Category",
    "Website", "LinkedIn",
];

/// Render `leads` in the requested format. Output always ends in a newline
/// unless it is empty.
pub fn render(leads: &[&Lead], format: ExportFormat) -> anyhow::Result<String> {
    match format {
        ExportFormat::Table => Ok(render_table(leads)),
        ExportFormat::Jsonl => render_jsonl(leads),
        ExportFormat::Csv => Ok(render_csv(leads)),
    }
}

fn render_jsonl(leads: &[&Lead]) -> anyhow::Result<String> {
    let mut out = String::new();
    for lead in leads {
        out.push_str(&serde_json::to_string(lead)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_csv(leads: &[&Lead]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    for lead in leads {
        let row = [
            lead.id.to_string(),
            lead.name.clone(),
            lead.status.to_string(),
            lead.phone.clone(),
            lead.location.clone(),
            lead.city.clone(),
            lead.property_type.to_string(),
            lead.category.clone(),
            lead.website.clone().unwrap_or_default(),
            lead.linkedin.clone().unwrap_or_default(),
        ];
        let line: Vec<String> = row.iter().map(|v| quote_field(v)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

const TABLE_HEADER: [&str; 6] = ["Id", "Name", "Status", "Phone", "Location", "Category"];

fn render_table(leads: &[&Lead]) -> String {
    if leads.is_empty() {
        return String::new();
    }
    let header = TABLE_HEADER.map(String::from);
    let rows: Vec<[String; 6]> = std::iter::once(header)
        .chain(leads.iter().map(|lead| {
            [
                lead.id.to_string(),
                lead.name.clone(),
                lead.status.to_string(),
                lead.phone.clone(),
                format!("{}, {}", lead.location, lead.city),
                lead.category.clone(),
            ]
        }))
        .collect();

    let mut widths = [0usize; 6];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                let pad = width - cell.chars().count();
                let _ = write!(line, "{cell}{}  ", " ".repeat(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use pretty_assertions::assert_eq;

    const SHEET: &str = "Name,Phone,Location,Status,Category,Website\n\
        \"Acme, Inc\",98765 43210,Indiranagar,contacted,Retail,acme.in\n\
        Bolt,,HSR,,,\n";

    #[test]
    fn format_parses() {
        assert_eq!("JSONL".parse::<ExportFormat>(), Ok(ExportFormat::Jsonl));
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn jsonl_has_one_object_per_lead() {
        let leads = ingest(SHEET);
        let refs: Vec<&Lead> = leads.iter().collect();
        let out = render(&refs, ExportFormat::Jsonl).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "Acme, Inc");
        assert_eq!(first["status"], "Contacted");
        assert_eq!(first["website"], "acme.in");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second.get("website").is_none());
    }

    #[test]
    fn csv_export_reingests_to_the_same_fields() {
        let leads = ingest(SHEET);
        let refs: Vec<&Lead> = leads.iter().collect();
        let out = render(&refs, ExportFormat::Csv).unwrap();
        let again = ingest(&out);
        assert_eq!(again, leads);
    }

    #[test]
    fn table_aligns_columns() {
        let leads = ingest(SHEET);
        let refs: Vec<&Lead> = leads.iter().collect();
        let out = render(&refs, ExportFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Id      Name       Status     Phone"));
        assert!(lines[1].starts_with("lead-0  Acme, Inc  Contacted"));
        assert!(lines[2].starts_with("lead-1  Bolt       New Lead "));
        assert!(lines[0].ends_with("Category"));
        assert_eq!(render(&[], ExportFormat::Table).unwrap(), "");
    }
}
