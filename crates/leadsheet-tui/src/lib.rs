//! leadsheet TUI: ratatui dashboard over a [`leadsheet_feeds::Source`].

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Start the dashboard. The fetch is spawned on `runtime`; the terminal
/// loop runs on the calling thread.
pub fn run(
    config: leadsheet_core::config::Config,
    source: leadsheet_feeds::Source,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<()> {
    App::new(config, source, runtime).run()
}
