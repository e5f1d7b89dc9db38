//! Store: the session's owned lead collection.
//!
//! The store is the single source of truth; the UI reads from it, never from
//! the feed directly. Leads are never edited in place: a status change
//! replaces the one affected record with a copy carrying the new status.

use crate::{
    phone::PhoneRules,
    search::{self, LeadQuery},
    types::{Lead, LeadId, LeadStatus},
};
use chrono::{DateTime, Utc};

/// In-memory collection built by one ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadBook {
    leads: Vec<Lead>,
    loaded_at: DateTime<Utc>,
}

impl LeadBook {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads, loaded_at: Utc::now() }
    }

    /// Ingest raw export text into a fresh book.
    pub fn from_csv(text: &str) -> Self {
        Self::new(crate::ingest::ingest(text))
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn get(&self, id: LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    /// Replace the status of one lead. Unknown ids leave the book untouched.
    pub fn update_status(&mut self, id: LeadId, status: LeadStatus) {
        let Some(slot) = self.leads.iter_mut().find(|lead| lead.id == id) else {
            tracing::debug!(%id, "update_status: unknown lead");
            return;
        };
        tracing::debug!(%id, from = %slot.status, to = %status, "status updated");
        *slot = slot.with_status(status);
    }

    /// The call action: sanitise the number to dial and mark the lead as
    /// `Called` in the same step. Returns the `tel:` URI, or `None` when the
    /// id is unknown.
    pub fn call(&mut self, id: LeadId, rules: &PhoneRules) -> Option<String> {
        let uri = rules.tel_uri(&self.get(id)?.phone);
        self.update_status(id, LeadStatus::Called);
        Some(uri)
    }

    /// WhatsApp deep link for a lead. Does not change its status.
    pub fn whatsapp_link(&self, id: LeadId, rules: &PhoneRules) -> Option<String> {
        self.get(id).map(|lead| rules.whatsapp_link(&lead.phone))
    }

    pub fn visible(&self, query: &LeadQuery) -> Vec<&Lead> {
        query.visible(&self.leads)
    }

    pub fn categories(&self) -> Vec<String> {
        search::categories(&self.leads)
    }
}

impl Default for LeadBook {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHEET: &str = "Name,Phone,Status,Category\n\
        Acme,+91 98765 43210,new,Retail\n\
        Bolt,98450 12345,follow up,IT\n\
        Crest,,closed,Retail\n";

    #[test]
    fn update_status_replaces_only_that_lead() {
        let mut book = LeadBook::from_csv(SHEET);
        let before = book.leads().to_vec();

        book.update_status(LeadId(1), LeadStatus::NotReceived);

        assert_eq!(book.leads()[1].status, LeadStatus::NotReceived);
        assert_eq!(book.leads()[1].with_status(before[1].status), before[1]);
        assert_eq!(book.leads()[0], before[0]);
        assert_eq!(book.leads()[2], before[2]);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut book = LeadBook::from_csv(SHEET);
        let before = book.clone();
        book.update_status(LeadId(99), LeadStatus::Closed);
        assert_eq!(book, before);
    }

    #[test]
    fn call_sanitises_and_marks_called() {
        let mut book = LeadBook::from_csv(SHEET);
        let uri = book.call(LeadId(0), &PhoneRules::default());
        assert_eq!(uri.as_deref(), Some("tel:9876543210"));
        assert_eq!(book.get(LeadId(0)).map(|l| l.status), Some(LeadStatus::Called));
        assert_eq!(book.call(LeadId(7), &PhoneRules::default()), None);
    }

    #[test]
    fn whatsapp_link_leaves_status_alone() {
        let book = LeadBook::from_csv(SHEET);
        let link = book.whatsapp_link(LeadId(1), &PhoneRules::default());
        assert_eq!(link.as_deref(), Some("https://wa.me/919845012345"));
        assert_eq!(book.get(LeadId(1)).map(|l| l.status), Some(LeadStatus::FollowUp));
    }

    #[test]
    fn categories_come_from_the_whole_book() {
        let book = LeadBook::from_csv(SHEET);
        let query = LeadQuery { text: "acme".into(), ..Default::default() };
        assert_eq!(book.visible(&query).len(), 1);
        assert_eq!(book.categories(), vec!["IT", "Retail"]);
    }
}
