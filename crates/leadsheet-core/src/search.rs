//! Search layer: the category / status / free-text predicate that derives the
//! visible subset from a lead collection.
//!
//! The predicate short-circuits in a fixed order: category, then status
//! bucket, then text search. Every function here is pure, so recomputing the
//! visible subset with unchanged inputs always yields the same result.

use crate::types::{Lead, LeadStatus};
use std::collections::BTreeSet;

/// Status filter chip. `Contacted` is a merged bucket that also admits
/// `Follow Up` leads; every other chip maps to exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    New,
    Called,
    Contacted,
    NotReceived,
    Closed,
}

/// Command-line and command-bar spellings of each chip.
static STATUS_FILTER_ALIASES: phf::Map<&'static str, StatusFilter> = phf::phf_map! {
    "all" => StatusFilter::All,
    "all-leads" => StatusFilter::All,
    "new" => StatusFilter::New,
    "new-lead" => StatusFilter::New,
    "called" => StatusFilter::Called,
    "contacted" => StatusFilter::Contacted,
    "not-received" => StatusFilter::NotReceived,
    "notreceived" => StatusFilter::NotReceived,
    "closed" => StatusFilter::Closed,
};

impl StatusFilter {
    /// Chips in display order.
    pub const CHIPS: [StatusFilter; 6] = [
        StatusFilter::All,
        StatusFilter::New,
        StatusFilter::Called,
        StatusFilter::Contacted,
        StatusFilter::NotReceived,
        StatusFilter::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Leads",
            StatusFilter::New => "New",
            StatusFilter::Called => "Called",
            StatusFilter::Contacted => "Contacted",
            StatusFilter::NotReceived => "Not Received",
            StatusFilter::Closed => "Closed",
        }
    }

    /// Parse a chip name (`not-received`, `Not Received`, `all`, …).
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        STATUS_FILTER_ALIASES.get(key.as_str()).copied()
    }

    /// Whether a lead with `status` belongs in this bucket.
    pub fn admits(self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::New => status == LeadStatus::NewLead,
            StatusFilter::Called => status == LeadStatus::Called,
            StatusFilter::Contacted => {
                matches!(status, LeadStatus::Contacted | LeadStatus::FollowUp)
            }
            StatusFilter::NotReceived => status == LeadStatus::NotReceived,
            StatusFilter::Closed => status == LeadStatus::Closed,
        }
    }

    /// Next chip in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0);
        Self::CHIPS[(idx + 1) % Self::CHIPS.len()]
    }

    /// Previous chip in display order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0);
        Self::CHIPS[(idx + Self::CHIPS.len() - 1) % Self::CHIPS.len()]
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selector: everything, or one exact category value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c,
        }
    }

    /// Step through `[All, categories...]`, wrapping around. `forward`
    /// selects the direction. A selection no longer present restarts at `All`.
    pub fn cycle(&self, categories: &[String], forward: bool) -> Self {
        let pos = match self {
            CategoryFilter::All => 0,
            CategoryFilter::Only(c) => match categories.iter().position(|x| x == c) {
                Some(i) => i + 1,
                None => return CategoryFilter::All,
            },
        };
        let len = categories.len() + 1;
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        match next {
            0 => CategoryFilter::All,
            i => CategoryFilter::Only(categories[i - 1].clone()),
        }
    }
}

/// The full filter/search state the visible subset is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadQuery {
    pub status: StatusFilter,
    pub category: CategoryFilter,
    /// Free-text search; empty accepts everything.
    pub text: String,
}

impl LeadQuery {
    /// The per-lead predicate.
    pub fn matches(&self, lead: &Lead) -> bool {
        if !self.category.admits(&lead.category) {
            return false;
        }
        if !self.status.admits(lead.status) {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        [&lead.name, &lead.location, &lead.city]
            .iter()
            .any(|hay| hay.to_lowercase().contains(&needle))
    }

    /// Visible subset of `leads`, in collection order.
    pub fn visible<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}

/// Distinct categories across the unfiltered collection, sorted ascending.
pub fn categories(leads: &[Lead]) -> Vec<String> {
    leads
        .iter()
        .map(|lead| lead.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
