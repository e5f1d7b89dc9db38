//! Normalizer: maps free-text sheet cells onto the closed [`LeadStatus`] and
//! [`PropertyType`] sets.
//!
//! Both functions are total: unmatched or empty input falls back to the
//! default variant. Checks run in a fixed order and the first hit wins.

use crate::types::{LeadStatus, PropertyType};

/// `close` → Closed, `contact` → Contacted, `follow` → Follow Up, else New Lead.
///
/// Never yields `Called` or `NotReceived`; those are set by the user.
pub fn normalize_status(raw: &str) -> LeadStatus {
    let s = raw.to_lowercase();
    if s.contains("close") {
        LeadStatus::Closed
    } else if s.contains("contact") {
        LeadStatus::Contacted
    } else if s.contains("follow") {
        LeadStatus::FollowUp
    } else {
        LeadStatus::NewLead
    }
}

/// `comm` → Commercial, `land`/`plot` → Land, else Residential.
pub fn normalize_property_type(raw: &str) -> PropertyType {
    let t = raw.to_lowercase();
    if t.contains("comm") {
        PropertyType::Commercial
    } else if t.contains("land") || t.contains("plot") {
        PropertyType::Land
    } else {
        PropertyType::Residential
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
