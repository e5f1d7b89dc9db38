//! Test builders: ergonomic constructors for `Lead` records and sheet text.
//!
//! Designed for readability in assertions, not production use.

use leadsheet::{
    csv::quote_field,
    types::{DEFAULT_CATEGORY, DEFAULT_CITY, DEFAULT_LOCATION, DEFAULT_PHONE},
    Lead, LeadBook, LeadId, LeadStatus, PropertyType,
};

// ---------------------------------------------------------------------------
// LeadBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Lead`] fixtures. Unset fields take the same
/// placeholders the ingestor would substitute.
///
/// ```rust,ignore
/// let lead = LeadBuilder::new(3, "Acme Realty")
///     .status(LeadStatus::Contacted)
///     .city("Pune")
///     .category("Builders")
///     .build();
/// ```
pub struct LeadBuilder {
    lead: Lead,
}

impl LeadBuilder {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            lead: Lead {
                id: LeadId(id),
                name: name.into(),
                status: LeadStatus::NewLead,
                phone: DEFAULT_PHONE.to_string(),
                location: DEFAULT_LOCATION.to_string(),
                city: DEFAULT_CITY.to_string(),
                property_type: PropertyType::Residential,
                category: DEFAULT_CATEGORY.to_string(),
                website: None,
                linkedin: None,
            },
        }
    }

    pub fn status(mut self, status: LeadStatus) -> Self {
        self.lead.status = status;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.lead.phone = phone.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.lead.location = location.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.lead.city = city.into();
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.lead.property_type = property_type;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.lead.category = category.into();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.lead.website = Some(website.into());
        self
    }

    pub fn linkedin(mut self, linkedin: impl Into<String>) -> Self {
        self.lead.linkedin = Some(linkedin.into());
        self
    }

    pub fn build(self) -> Lead {
        self.lead
    }
}

// ---------------------------------------------------------------------------
// SheetBuilder
// ---------------------------------------------------------------------------

/// Builds CSV export text row by row, quoting cells as needed.
///
/// ```rust,ignore
/// let csv = SheetBuilder::new(&["Name", "Phone"])
///     .row(&["Acme", "98765 43210"])
///     .build();
/// ```
pub struct SheetBuilder {
    lines: Vec<String>,
}

impl SheetBuilder {
    pub fn new(headers: &[&str]) -> Self {
        Self { lines: vec![join(headers)] }
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.lines.push(join(cells));
        self
    }

    /// Insert a blank line, which the ingestor must skip.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Same text with Windows line endings.
    pub fn build_crlf(self) -> String {
        self.build().replace('\n', "\r\n")
    }
}

fn join(cells: &[&str]) -> String {
    cells.iter().map(|c| quote_field(c)).collect::<Vec<_>>().join(",")
}

/// A book built directly from leads, bypassing ingestion.
pub fn book_of(leads: Vec<Lead>) -> LeadBook {
    LeadBook::new(leads)
}
