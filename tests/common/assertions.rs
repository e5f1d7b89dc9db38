//! Domain-specific assertion macros for leadsheet harnesses.
//!
//! These wrap `pretty_assertions` with messages that say which lead or
//! filter broke the expectation.

/// Assert the names of a visible subset, in order.
///
/// ```rust,ignore
/// assert_visible_names!(book.visible(&query), ["Acme Realty", "Sky Homes"]);
/// ```
#[macro_export]
macro_rules! assert_visible_names {
    ($visible:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $visible.iter().map(|lead| lead.name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "visible subset names");
    }};
}

/// Assert a lead's status by id within a `LeadBook`.
#[macro_export]
macro_rules! assert_status {
    ($book:expr, $id:expr, $status:expr) => {{
        let id = leadsheet::LeadId($id);
        match $book.get(id) {
            Some(lead) => pretty_assertions::assert_eq!(
                lead.status, $status,
                "status of {} ({:?})", id, lead.name
            ),
            None => panic!("assert_status! failed: {} not in book", id),
        }
    }};
}

/// Assert that every lead in a subset satisfies a predicate.
#[macro_export]
macro_rules! assert_all_leads {
    ($visible:expr, $pred:expr, $what:expr) => {{
        for lead in $visible.iter() {
            if !($pred)(lead) {
                panic!("assert_all_leads! failed: {} does not hold for {:?}", $what, lead);
            }
        }
    }};
}
