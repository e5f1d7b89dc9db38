//! Dashboard state plus the terminal loop that drives it.
//!
//! [`AppState`] owns every decision and never touches the terminal, which
//! keeps it testable. [`App::run`] owns raw mode and the alternate screen
//! and restores both on exit or panic. The fetch runs on the
//! tokio runtime; its result is handed back over a oneshot channel and
//! polled once per frame, so every state mutation happens on the UI thread.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        filter_bar::FilterBar,
        header_bar::HeaderBar,
        help::HelpPopup,
        lead_list::LeadList,
        query_bar::{QueryBar, QueryBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use leadsheet_core::{
    config::Config, load::LOAD_FAILED_MESSAGE, phone::PhoneRules, CategoryFilter, Lead, LeadId,
    LeadQuery, LeadStatus, LoadState, StatusFilter,
};
use leadsheet_feeds::{LeadFeed, Source};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::oneshot::{self, error::TryRecvError};

const PAGE_STEP: usize = 10;

const FOOTER_HINT: &str = " c call · w whatsapp · 1/2/3 outcome · r refresh · / search · : command";

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub load: LoadState,
    pub filter: LeadQuery,
    pub query_bar: QueryBarState,
    /// Index into the visible subset.
    pub selected: usize,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub rules: PhoneRules,
    /// Description of the lead source shown in the header.
    pub source: String,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// One-line feedback shown in the footer (tel: URI, WhatsApp link, …).
    pub notice: Option<String>,
    /// Set by `r` / `:refresh`; the event loop starts a new fetch.
    pub refresh_requested: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, source: impl Into<String>) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            tracing::debug!(theme = %config.ui.theme, "unknown theme, using default");
            Theme::load_default()
        });
        let rules = config.phone.rules();
        Self {
            load: LoadState::Loading,
            filter: LeadQuery::default(),
            query_bar: QueryBarState::default(),
            selected: 0,
            focus: Focus::List,
            prev_focus: Focus::List,
            theme,
            config,
            rules,
            source: source.into(),
            show_help: false,
            command_bar: CommandBarState::default(),
            notice: None,
            refresh_requested: false,
            quit: false,
        }
    }

    /// The visible subset under the current filters. Empty unless loaded.
    pub fn visible(&self) -> Vec<&Lead> {
        self.load
            .book()
            .map(|book| book.visible(&self.filter))
            .unwrap_or_default()
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.visible().get(self.selected).copied()
    }

    fn selected_id(&self) -> Option<LeadId> {
        self.selected_lead().map(|lead| lead.id)
    }

    /// Switch to the loading state ahead of a (re)fetch.
    pub fn begin_loading(&mut self) {
        tracing::debug!(source = %self.source, "fetch started");
        self.load = LoadState::Loading;
        self.notice = None;
    }

    /// Install the outcome of a fetch, replacing any previous collection.
    pub fn finish_loading(&mut self, load: LoadState) {
        if let Some(book) = load.book() {
            tracing::debug!(leads = book.len(), "fetch finished");
        }
        self.load = load;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        tracing::debug!(from = %self.filter.status, to = %status, "status filter changed");
        self.filter.status = status;
        self.selected = 0;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(category = category.label(), "category filter changed");
        self.filter.category = category;
        self.selected = 0;
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let categories = self.load.book().map(|b| b.categories()).unwrap_or_default();
        let next = self.filter.category.cycle(&categories, forward);
        self.set_category(next);
    }

    /// Dial the selected lead: mark it Called and surface the `tel:` URI.
    pub fn call_selected(&mut self) {
        let Some(id) = self.selected_id() else { return };
        let Some(book) = self.load.book_mut() else { return };
        if let Some(uri) = book.call(id, &self.rules) {
            let name = book.get(id).map(|l| l.name.clone()).unwrap_or_default();
            self.notice = Some(format!("Calling {name}: {uri}  (1 Contacted · 2 Not Received · 3 Closed)"));
        }
        self.clamp_selection();
    }

    pub fn whatsapp_selected(&mut self) {
        let Some(id) = self.selected_id() else { return };
        let Some(book) = self.load.book() else { return };
        if let Some(link) = book.whatsapp_link(id, &self.rules) {
            self.notice = Some(format!("WhatsApp: {link}"));
        }
    }

    /// Record a call outcome. Only applies while the selected lead is Called.
    pub fn apply_outcome(&mut self, outcome: LeadStatus) {
        match self.selected_lead().map(|lead| lead.status) {
            Some(LeadStatus::Called) => self.set_selected_status(outcome),
            Some(_) => self.notice = Some("Call the lead first (c) to record an outcome.".to_string()),
            None => {}
        }
    }

    /// Set the selected lead's status unconditionally.
    pub fn set_selected_status(&mut self, status: LeadStatus) {
        let Some(id) = self.selected_id() else { return };
        if let Some(book) = self.load.book_mut() {
            book.update_status(id, status);
            let name = book.get(id).map(|l| l.name.as_str()).unwrap_or_default();
            self.notice = Some(format!("{name} marked {status}"));
        }
        self.clamp_selection();
    }

    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    fn sync_query_text(&mut self) {
        self.filter.text = self.query_bar.query.clone();
        self.selected = 0;
    }

    /// Apply one semantic event.
    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        if self.focus == Focus::Command {
            self.handle_command_mode(event);
            return;
        }

        if self.focus == Focus::QueryBar {
            match event {
                AppEvent::Escape | AppEvent::Enter | AppEvent::FocusNext => {
                    tracing::debug!("focus: QueryBar -> List");
                    self.focus = Focus::List;
                }
                AppEvent::Quit => self.quit = true,
                other => {
                    if self.query_bar.handle(&other) {
                        self.sync_query_text();
                    }
                }
            }
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::QueryFocus | AppEvent::FocusNext => {
                tracing::debug!("focus -> QueryBar");
                self.focus = Focus::QueryBar;
            }
            AppEvent::Escape => self.notice = None,
            AppEvent::Nav(Direction::Up) => self.move_selection(-1),
            AppEvent::Nav(Direction::Down) => self.move_selection(1),
            AppEvent::Nav(Direction::Left) => self.set_status_filter(self.filter.status.prev()),
            AppEvent::Nav(Direction::Right) => self.set_status_filter(self.filter.status.next()),
            AppEvent::PageUp => self.move_selection(-(PAGE_STEP as isize)),
            AppEvent::PageDown => self.move_selection(PAGE_STEP as isize),
            AppEvent::Top => self.selected = 0,
            AppEvent::Bottom => self.selected = self.visible().len().saturating_sub(1),
            AppEvent::CategoryNext => self.cycle_category(true),
            AppEvent::CategoryPrev => self.cycle_category(false),
            AppEvent::Call => self.call_selected(),
            AppEvent::WhatsApp => self.whatsapp_selected(),
            AppEvent::Outcome(status) => self.apply_outcome(status),
            AppEvent::Refresh => self.request_refresh(),
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            AppEvent::Char(_) | AppEvent::Backspace | AppEvent::Enter => {}
        }
    }

    fn handle_command_mode(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.command_bar.clear();
                self.focus = self.prev_focus;
            }
            AppEvent::Enter => {
                let input = self.command_bar.input.clone();
                match Command::parse(&input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        self.command_bar.clear();
                        self.focus = self.prev_focus;
                        execute_command(self, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        self.command_bar.clear();
                        self.focus = self.prev_focus;
                    }
                    Err(msg) => self.command_bar.error = Some(msg),
                }
            }
            AppEvent::Quit => self.quit = true,
            other => self.command_bar.handle(&other),
        }
    }
}

/// Returns true when the focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    source: Source,
    runtime: tokio::runtime::Handle,
    pending: Option<oneshot::Receiver<LoadState>>,
}

impl App {
    pub fn new(config: Config, source: Source, runtime: tokio::runtime::Handle) -> Self {
        let state = AppState::new(config, source.describe());
        Self { state, source, runtime, pending: None }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.start_fetch();
        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    /// Spawn the one-shot fetch. A fetch still in flight is abandoned: its
    /// receiver is dropped, so a late result can never overwrite a newer one.
    fn start_fetch(&mut self) {
        let (tx, rx) = oneshot::channel();
        let source = self.source.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(leadsheet_feeds::load(&source).await);
        });
        self.pending = Some(rx);
        self.state.begin_loading();
    }

    fn poll_fetch(&mut self) {
        let Some(rx) = self.pending.as_mut() else { return };
        match rx.try_recv() {
            Ok(load) => {
                self.pending = None;
                self.state.finish_loading(load);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                tracing::error!("fetch task ended without a result");
                self.pending = None;
                self.state.finish_loading(LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.poll_fetch();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.state.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.state.handle(ev);
                        }
                    }
                }
            }

            if std::mem::take(&mut self.state.refresh_requested) {
                self.start_fetch();
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // header | filters | lead list | query bar | footer
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let visible = state.visible();
    let counts = state.load.book().map(|book| (visible.len(), book.len()));

    frame.render_widget(HeaderBar::new(counts, &state.source, &state.theme), vert[0]);
    frame.render_widget(FilterBar::new(&state.filter, &state.theme), vert[1]);
    frame.render_widget(
        LeadList::new(&state.load, &visible, &state.theme)
            .selected(state.selected)
            .show_links(state.config.ui.show_links)
            .skeleton_rows(state.config.ui.skeleton_rows)
            .focused(state.focus == Focus::List),
        vert[2],
    );
    frame.render_widget(
        QueryBar::new(&state.query_bar, state.focus == Focus::QueryBar, &state.theme),
        vert[3],
    );

    let footer = match &state.notice {
        Some(notice) => Line::from(Span::raw(format!(" {notice}"))),
        None => Line::from(Span::styled(FOOTER_HINT, state.theme.muted)),
    };
    frame.render_widget(Paragraph::new(footer), vert[4]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the footer row
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: vert[4].y, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query_bar, true, &state.theme);
        frame.set_cursor_position(qb.cursor_position(vert[3]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
