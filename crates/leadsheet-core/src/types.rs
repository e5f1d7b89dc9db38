//! Core types for leadsheet-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the normalised [`Lead`], its workflow [`LeadStatus`], the
//! [`PropertyType`] discriminant, and the per-session [`LeadId`].

use serde::Serialize;

/// Placeholder used when the sheet has no name for a lead.
pub const DEFAULT_NAME: &str = "Unknown Lead";
/// Placeholder used when the sheet has no phone number for a lead.
pub const DEFAULT_PHONE: &str = "No Phone";
/// Placeholder used when the sheet has no locality for a lead.
pub const DEFAULT_LOCATION: &str = "Unknown Location";
/// Fallback locality when the sheet has no city column or an empty cell.
pub const DEFAULT_CITY: &str = "Bangalore, Karnataka";
/// Sentinel category for rows without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Identifier assigned at ingestion time: the zero-based position of the row
/// among the data rows. Stable only for the lifetime of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadId(pub usize);

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lead-{}", self.0)
    }
}

impl Serialize for LeadId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Stage of a lead in the sales workflow.
///
/// Ingestion only ever produces `NewLead`, `Contacted`, `FollowUp` and
/// `Closed`; `Called` and `NotReceived` are assigned by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LeadStatus {
    #[default]
    NewLead,
    Called,
    Contacted,
    NotReceived,
    FollowUp,
    Closed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::NewLead,
        LeadStatus::Called,
        LeadStatus::Contacted,
        LeadStatus::NotReceived,
        LeadStatus::FollowUp,
        LeadStatus::Closed,
    ];

    /// Outcomes offered once a lead has been called.
    pub const CALL_OUTCOMES: [LeadStatus; 3] = [
        LeadStatus::Contacted,
        LeadStatus::NotReceived,
        LeadStatus::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::NewLead => "New Lead",
            LeadStatus::Called => "Called",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::NotReceived => "Not Received",
            LeadStatus::FollowUp => "Follow Up",
            LeadStatus::Closed => "Closed",
        }
    }

    /// Parse an exact display label or a kebab/snake alias (`not-received`).
    pub fn from_label(s: &str) -> Option<Self> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.label().to_ascii_lowercase() == key)
            .or(match key.as_str() {
                "new" => Some(LeadStatus::NewLead),
                "follow" | "followup" => Some(LeadStatus::FollowUp),
                _ => None,
            })
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LeadStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Kind of property the lead is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Land,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Residential => write!(f, "Residential"),
            PropertyType::Commercial => write!(f, "Commercial"),
            PropertyType::Land => write!(f, "Land"),
        }
    }
}

impl Serialize for PropertyType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A normalised lead produced by the ingestion pipeline.
///
/// Every field other than `website` and `linkedin` is always populated; the
/// ingestor substitutes the `DEFAULT_*` placeholders for missing cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub status: LeadStatus,
    pub phone: String,
    pub location: String,
    pub city: String,
    pub property_type: PropertyType,
    /// Free text taken from the sheet; [`DEFAULT_CATEGORY`] when blank.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Lead {
    /// Copy of this lead with only the status replaced.
    pub fn with_status(&self, status: LeadStatus) -> Self {
        Self { status, ..self.clone() }
    }

    /// Whether the category badge should be shown (hidden for the sentinel).
    pub fn has_category(&self) -> bool {
        !self.category.is_empty() && self.category != DEFAULT_CATEGORY
    }

    pub fn website_href(&self) -> Option<String> {
        self.website.as_deref().map(href)
    }

    pub fn linkedin_href(&self) -> Option<String> {
        self.linkedin.as_deref().map(href)
    }
}

/// Sheet cells often omit the scheme; assume https unless one is present.
pub fn href(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            id: LeadId(3),
            name: "Acme".into(),
            status: LeadStatus::NewLead,
            phone: "9876543210".into(),
            location: "Indiranagar".into(),
            city: DEFAULT_CITY.into(),
            property_type: PropertyType::Residential,
            category: DEFAULT_CATEGORY.into(),
            website: Some("acme.in".into()),
            linkedin: Some("http://linkedin.com/company/acme".into()),
        }
    }

    #[test]
    fn id_displays_with_prefix() {
        assert_eq!(LeadId(0).to_string(), "lead-0");
        assert_eq!(LeadId(42).to_string(), "lead-42");
    }

    #[test]
    fn status_labels_round_trip() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(LeadStatus::from_label("not-received"), Some(LeadStatus::NotReceived));
        assert_eq!(LeadStatus::from_label("follow_up"), Some(LeadStatus::FollowUp));
        assert_eq!(LeadStatus::from_label("new"), Some(LeadStatus::NewLead));
        assert_eq!(LeadStatus::from_label("pending"), None);
    }

    #[test]
    fn with_status_touches_only_status() {
        let before = lead();
        let after = before.with_status(LeadStatus::Closed);
        assert_eq!(after.status, LeadStatus::Closed);
        assert_eq!(Lead { status: LeadStatus::NewLead, ..after }, before);
    }

    #[test]
    fn hrefs_gain_scheme_only_when_missing() {
        let l = lead();
        assert_eq!(l.website_href().as_deref(), Some("https://acme.in"));
        assert_eq!(
            l.linkedin_href().as_deref(),
            Some("http://linkedin.com/company/acme")
        );
    }

    #[test]
    fn other_category_is_hidden() {
        let mut l = lead();
        assert!(!l.has_category());
        l.category = "Retail".into();
        assert!(l.has_category());
    }

    #[test]
    fn serializes_with_display_labels() {
        let json = serde_json::to_value(lead()).unwrap();
        assert_eq!(json["id"], "lead-3");
        assert_eq!(json["status"], "New Lead");
        assert_eq!(json["propertyType"], "Residential");
        assert_eq!(json["city"], "Bangalore, Karnataka");
    }
}
