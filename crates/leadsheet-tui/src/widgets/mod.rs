//! Ratatui widgets for the leadsheet TUI.

pub mod command_bar;
pub mod filter_bar;
pub mod header_bar;
pub mod help;
pub mod lead_list;
pub mod query_bar;
