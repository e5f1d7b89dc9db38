//! Header resolver: maps arbitrary spreadsheet column headers onto the
//! semantic fields a [`Lead`](crate::Lead) needs.
//!
//! Each field owns an ordered keyword list. A field resolves to the first
//! column (left to right) whose lower-cased header contains any of its
//! keywords. Fields are resolved independently of one another, so a single
//! header such as `"Property Status"` can satisfy more than one field.

/// A semantic field read from the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Location,
    City,
    Status,
    PropertyType,
    Category,
    Website,
    Linkedin,
}

/// Ordered (field, keywords) table. Keyword order within a field is
/// irrelevant to the result; column order is what decides.
pub const FIELD_KEYWORDS: &[(Field, &[&str])] = &[
    (Field::Name, &["name", "lead", "client"]),
    (Field::Phone, &["phone", "mobile", "contact"]),
    (Field::Location, &["location", "area", "locality"]),
    (Field::City, &["city"]),
    (Field::Status, &["status", "stage"]),
    (Field::PropertyType, &["type", "property"]),
    (Field::Category, &["category", "business", "industry"]),
    (Field::Website, &["website", "web"]),
    (Field::Linkedin, &["linkedin", "url", "social"]),
];

/// Resolved column index per field, `None` when no header matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub phone: Option<usize>,
    pub location: Option<usize>,
    pub city: Option<usize>,
    pub status: Option<usize>,
    pub property_type: Option<usize>,
    pub category: Option<usize>,
    pub website: Option<usize>,
    pub linkedin: Option<usize>,
}

impl ColumnMap {
    /// Resolve every field against a header row. Headers are lower-cased
    /// here, so callers may pass them as parsed.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let lowered: Vec<String> = headers.iter().map(|h| h.as_ref().to_lowercase()).collect();
        let mut map = ColumnMap::default();
        for (field, keywords) in FIELD_KEYWORDS {
            *map.slot_mut(*field) = find_column(&lowered, keywords);
        }
        map
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Location => self.location,
            Field::City => self.city,
            Field::Status => self.status,
            Field::PropertyType => self.property_type,
            Field::Category => self.category,
            Field::Website => self.website,
            Field::Linkedin => self.linkedin,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<usize> {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Location => &mut self.location,
            Field::City => &mut self.city,
            Field::Status => &mut self.status,
            Field::PropertyType => &mut self.property_type,
            Field::Category => &mut self.category,
            Field::Website => &mut self.website,
            Field::Linkedin => &mut self.linkedin,
        }
    }
}

fn find_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| keywords.iter().any(|k| h.contains(k)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
