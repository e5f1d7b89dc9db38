use clap::Parser;
use leadsheet::{
    config::Config,
    export::ExportFormat,
    headless::{self, HeadlessOptions},
    CategoryFilter, FileFeed, SheetFeed, Source, StatusFilter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadsheet", about = "Terminal dashboard for spreadsheet-backed sales leads")]
struct Cli {
    /// Write debug logs to /tmp/leadsheet-debug.log (stderr in headless mode).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/leadsheet/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Spreadsheet CSV export URL (overrides `[source] url`).
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Read a local CSV export instead of fetching.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Fetch once, print the filtered leads to stdout and exit.
    #[arg(long)]
    headless: bool,

    /// Status chip: all, new, called, contacted, not-received, closed.
    #[arg(long, default_value = "all", value_parser = parse_status, requires = "headless")]
    status: StatusFilter,

    /// Exact category name, or "all".
    #[arg(long, requires = "headless")]
    category: Option<String>,

    /// Case-insensitive search over name, location and city.
    #[arg(long, default_value = "", requires = "headless")]
    query: String,

    /// Output format: table, jsonl or csv.
    #[arg(long, default_value = "table", requires = "headless")]
    format: ExportFormat,

    /// Print the sorted category list instead of leads.
    #[arg(long, requires = "headless")]
    categories: bool,
}

fn parse_status(s: &str) -> Result<StatusFilter, String> {
    StatusFilter::parse(s).ok_or_else(|| format!("unknown status filter: {s}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        init_logging(cli.headless)?;
    }

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "config load failed, using defaults");
            Config::defaults()
        }),
    };

    let source = match (&cli.file, &cli.url) {
        (Some(path), _) => Source::File(FileFeed::new(path)),
        (None, Some(url)) => Source::Sheet(SheetFeed::new(url)),
        (None, None) => Source::Sheet(SheetFeed::new(&config.source.url)),
    };

    let runtime = tokio::runtime::Runtime::new()?;

    if cli.headless {
        let category = match cli.category.as_deref() {
            None => CategoryFilter::All,
            Some(c) if c.eq_ignore_ascii_case("all") => CategoryFilter::All,
            Some(c) => CategoryFilter::Only(c.to_string()),
        };
        let opts = HeadlessOptions {
            format: cli.format,
            categories: cli.categories,
            ..HeadlessOptions::new(cli.status, category, cli.query)
        };
        let mut stdout = std::io::stdout().lock();
        return runtime.block_on(headless::run(&source, &opts, &mut stdout));
    }

    leadsheet_tui::run(config, source, runtime.handle().clone())
}

fn init_logging(headless: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    if headless {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/leadsheet-debug.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    tracing::info!("leadsheet debug log started, tail -f /tmp/leadsheet-debug.log");
    Ok(())
}
