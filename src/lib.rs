//! leadsheet: terminal dashboard for spreadsheet-backed sales leads.
//!
//! The published sheet is fetched once, parsed with a forgiving CSV reader,
//! normalised into [`Lead`] records and filtered by status, category and free
//! text. The layers live in workspace crates and are re-exported here so
//! integration tests and benches can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Ingestor ──► LeadBook ──► Search ──► TUI
//!                          │
//!                          └──► Export (headless)
//! ```
//!
//! The fetch runs on tokio; the UI drives the main thread and receives the
//! result over a channel.

pub mod headless;

pub use leadsheet_core::{
    config, csv, export, header, ingest, load, normalizer, phone, search, store, types,
    CategoryFilter, Lead, LeadBook, LeadId, LeadQuery, LeadStatus, LoadState, PropertyType,
    StatusFilter,
};
pub use leadsheet_feeds::{FetchError, FileFeed, LeadFeed, SheetFeed, Source};
