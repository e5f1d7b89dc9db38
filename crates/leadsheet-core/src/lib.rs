//! leadsheet-core: lead ingestion, normalisation and filtering.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! CSV text ──► Ingestor ──► Store ──► Search ──► UI
//!                            │
//!                            └──► Export
//! ```
//!
//! Ingestion is a pure function of the export text. The store owns the
//! session's leads and is only ever patched one status at a time.

pub mod config;
pub mod csv;
pub mod export;
pub mod header;
pub mod ingest;
pub mod load;
pub mod normalizer;
pub mod phone;
pub mod search;
pub mod store;
pub mod types;

pub use load::LoadState;
pub use search::{CategoryFilter, LeadQuery, StatusFilter};
pub use store::LeadBook;
pub use types::{Lead, LeadId, LeadStatus, PropertyType};
