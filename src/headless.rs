//! Headless mode: fetch once, filter, print, exit.

use crate::{export::ExportFormat, CategoryFilter, LeadFeed, LeadQuery, LoadState, StatusFilter};
use std::io::Write;

/// What to print and how.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub query: LeadQuery,
    pub format: ExportFormat,
    /// Print the sorted category list instead of leads.
    pub categories: bool,
}

impl HeadlessOptions {
    pub fn new(status: StatusFilter, category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            query: LeadQuery { status, category, text: text.into() },
            ..Self::default()
        }
    }
}

/// Run one fetch against `feed` and write the result to `out`.
///
/// A failed fetch is an error carrying the generic failure message; an empty
/// visible subset is not.
pub async fn run<F: LeadFeed>(
    feed: &F,
    opts: &HeadlessOptions,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let book = match leadsheet_feeds::load(feed).await {
        LoadState::Loaded(book) => book,
        LoadState::Failed(message) => anyhow::bail!(message),
        LoadState::Loading => anyhow::bail!("fetch did not complete"),
    };

    if opts.categories {
        for category in book.categories() {
            writeln!(out, "{category}")?;
        }
        return Ok(());
    }

    let visible = book.visible(&opts.query);
    tracing::debug!(
        total = book.len(),
        visible = visible.len(),
        format = ?opts.format,
        "headless: rendering"
    );
    out.write_all(crate::export::render(&visible, opts.format)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
