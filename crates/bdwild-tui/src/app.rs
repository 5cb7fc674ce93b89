//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All page logic lives on
//! [`AppState`], which can be driven without a terminal.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    router::{Route, Router},
    theme::Theme,
    widgets::{
        about::AboutPage,
        blog::BlogPage,
        command_bar::{CommandBar, CommandBarState},
        cursor::CursorState,
        detail::DetailView,
        filter_popup::{FilterAction, FilterPopup, FilterPopupState},
        help::HelpPopup,
        home::{home_targets, HomePage},
        nav_bar::NavBar,
        query_bar::{QueryBar, QueryBarState, SuggestionDropdown},
        species_list::SpeciesList,
    },
};
use bdwild_core::{
    config::Config,
    query::{self, Query, SuggestOptions, Suggestion},
    Catalog, Category, ConservationStatus, Facet, Species,
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The page body: menus, result lists, related species.
    Content,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    pub config: Config,
    pub theme: Theme,
    pub router: Router,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub query: QueryBarState,
    pub category: Facet<Category>,
    pub status: Facet<ConservationStatus>,
    pub cursor: CursorState,
    pub filter: Option<FilterPopupState>,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config, theme: Theme) -> Self {
        Self {
            catalog,
            config,
            theme,
            router: Router::default(),
            focus: Focus::Content,
            prev_focus: Focus::Content,
            query: QueryBarState::default(),
            category: Facet::All,
            status: Facet::All,
            cursor: CursorState::default(),
            filter: None,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn title(&self) -> String {
        self.route().title(self.catalog.species())
    }

    // ── Derived page data ──────────────────────────────────────────────────

    /// The query the current page's term and filters describe.
    pub fn current_query(&self) -> Query {
        Query::new()
            .with_term(self.query.query.clone())
            .with_category(self.category.clone())
            .with_status(self.status.clone())
            .with_scope(self.route().scope())
    }

    /// Result rows of a searchable page; empty elsewhere.
    pub fn results(&self) -> Vec<&Species> {
        if !self.route().is_searchable() {
            return Vec::new();
        }
        query::filter_catalog(self.catalog.species(), &self.current_query())
    }

    pub fn suggestions(&self) -> Vec<Suggestion<'_>> {
        if !self.route().is_searchable() {
            return Vec::new();
        }
        query::suggest(
            self.catalog.species(),
            self.route().scope(),
            &self.query.query,
            SuggestOptions::with_limit(self.config.search.suggestion_limit),
        )
    }

    pub fn featured(&self) -> Vec<&Species> {
        query::featured(self.catalog.species(), &self.config.catalog.featured)
    }

    /// Related species of the detail page; empty elsewhere.
    pub fn related(&self) -> Vec<&Species> {
        match self.route() {
            Route::Detail(id) => query::related_species(
                self.catalog.species(),
                id,
                self.config.search.related_limit,
            ),
            _ => Vec::new(),
        }
    }

    /// The page each selectable row opens, top to bottom.
    pub fn targets(&self) -> Vec<Route> {
        match self.route() {
            Route::Home => home_targets(&self.featured()),
            Route::Category(_) | Route::Search => {
                self.results().iter().map(|s| Route::Detail(s.id)).collect()
            }
            Route::Detail(_) => self.related().iter().map(|s| Route::Detail(s.id)).collect(),
            Route::Blog | Route::About => Vec::new(),
        }
    }

    fn row_count(&self) -> usize {
        match self.route() {
            Route::Blog => self.catalog.posts().len(),
            _ => self.targets().len(),
        }
    }

    // ── Navigation ─────────────────────────────────────────────────────────

    /// Show `route`; a no-op when it is already shown. Each page starts with
    /// a fresh search term, filters and selection.
    pub fn navigate(&mut self, route: Route) {
        if self.router.navigate(route) {
            self.reset_page();
        }
    }

    pub fn back(&mut self) {
        if self.router.back() {
            self.reset_page();
        }
    }

    /// Go back one page, or quit when there is nothing to go back to.
    pub fn back_or_quit(&mut self) {
        if self.router.can_go_back() {
            self.back();
        } else {
            tracing::debug!("quit");
            self.quit = true;
        }
    }

    fn reset_page(&mut self) {
        self.query.clear();
        self.category = Facet::All;
        self.status = Facet::All;
        self.cursor.reset();
        self.filter = None;
        self.focus = Focus::Content;
    }

    // ── Filters ────────────────────────────────────────────────────────────

    pub fn set_status(&mut self, status: Facet<ConservationStatus>) {
        if !self.route().is_searchable() {
            self.navigate(Route::Search);
        }
        tracing::debug!(status = %status, "filter: status");
        self.status = status;
        self.cursor.reset();
    }

    /// Category pages have a fixed category, so this always filters on the
    /// search page.
    pub fn set_category(&mut self, category: Facet<Category>) {
        if self.route() != Route::Search {
            self.navigate(Route::Search);
        }
        tracing::debug!(category = %category, "filter: category");
        self.category = category;
        self.cursor.reset();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.category = Facet::All;
        self.status = Facet::All;
        self.cursor.reset();
    }

    fn open_filter(&mut self) {
        let route = self.route();
        if !route.is_searchable() {
            return;
        }
        let species = self.catalog.species();
        let categories = match route {
            Route::Search => query::distinct_categories(species),
            _ => Vec::new(),
        };
        let statuses = query::distinct_statuses(species, route.scope());
        tracing::debug!(categories = categories.len(), statuses = statuses.len(), "filter popup opened");
        self.filter = Some(FilterPopupState::new(
            categories,
            statuses,
            &self.category,
            &self.status,
        ));
    }

    fn open_selected(&mut self) {
        let target = self.targets().get(self.cursor.selected).copied();
        if let Some(route) = target {
            self.navigate(route);
        }
    }

    /// Enter in the query bar: open the highlighted suggestion, or hand focus
    /// back to the result list.
    fn accept_query(&mut self) {
        let picked = self
            .query
            .selected
            .and_then(|i| self.suggestions().get(i).map(|s| s.id));
        match picked {
            Some(id) => self.navigate(Route::Detail(id)),
            None => self.focus = Focus::Content,
        }
    }

    // ── Event handling ─────────────────────────────────────────────────────

    pub fn handle(&mut self, event: AppEvent) {
        if event == AppEvent::Exit {
            self.quit = true;
            return;
        }

        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        if let Some(popup) = self.filter.as_mut() {
            match popup.handle(&event) {
                Some(FilterAction::Apply { category, status }) => {
                    self.filter = None;
                    if self.route() == Route::Search {
                        self.category = category;
                    }
                    self.status = status;
                    self.cursor.reset();
                }
                Some(FilterAction::Clear) => {
                    self.filter = None;
                    self.category = Facet::All;
                    self.status = Facet::All;
                    self.cursor.reset();
                }
                Some(FilterAction::Close) => self.filter = None,
                None => {}
            }
            return;
        }

        match self.focus {
            Focus::Command => self.handle_command(event),
            Focus::QueryBar => self.handle_query(event),
            Focus::Content => self.handle_content(event),
        }
    }

    fn handle_command(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.command_bar.clear();
                self.focus = self.prev_focus;
            }
            AppEvent::Enter => match Command::parse(&self.command_bar.input) {
                Ok(cmd) => {
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                    execute_command(self, cmd);
                }
                Err(msg) if msg.is_empty() => {
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                }
                // Show the error; bar stays open
                Err(msg) => self.command_bar.error = Some(msg),
            },
            other => self.command_bar.handle(&other),
        }
    }

    fn handle_query(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape | AppEvent::FocusNext => {
                tracing::debug!("focus: QueryBar -> Content");
                self.query.selected = None;
                self.focus = Focus::Content;
            }
            AppEvent::Enter => self.accept_query(),
            other => {
                let edits = matches!(other, AppEvent::Char(_) | AppEvent::Backspace);
                let available = self.suggestions().len();
                self.query.handle(&other, available);
                if edits {
                    self.cursor.reset();
                }
            }
        }
    }

    fn handle_content(&mut self, event: AppEvent) {
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
            AppEvent::Quit => self.back_or_quit(),
            AppEvent::Back => self.back(),
            AppEvent::Jump(n) => {
                if let Some(route) = Route::NAV.get(usize::from(n).wrapping_sub(1)) {
                    self.navigate(*route);
                }
            }
            AppEvent::QueryFocus => {
                if !self.route().is_searchable() {
                    self.navigate(Route::Search);
                }
                tracing::debug!("focus -> QueryBar");
                self.focus = Focus::QueryBar;
            }
            AppEvent::FocusNext if self.route().is_searchable() => {
                tracing::debug!("focus: Content -> QueryBar");
                self.focus = Focus::QueryBar;
            }
            AppEvent::ToggleFilter => self.open_filter(),
            AppEvent::Enter => self.open_selected(),
            AppEvent::Nav(_) | AppEvent::ScrollUp | AppEvent::ScrollDown => {
                let rows = self.row_count();
                self.cursor.handle(&event, rows);
            }
            _ => {}
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, theme: Theme) -> Self {
        App { state: AppState::new(catalog, config, theme) }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut shown_title = String::new();
        loop {
            let title = self.state.title();
            if title != shown_title {
                execute!(io::stdout(), SetTitle(&title))?;
                shown_title = title;
            }

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(50))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
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
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let route = state.route();
    let searchable = route.is_searchable();

    // Vertical: 1-line nav bar | body | 3-line query bar on searchable pages
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(if searchable { 3 } else { 0 }),
        ])
        .split(area);

    let title = state.title();
    frame.render_widget(NavBar::new(route, &title, &state.theme), vert[0]);

    let content_focused = state.focus == Focus::Content;
    let theme = &state.theme;
    let show_local = state.config.ui.show_local_names;

    match route {
        Route::Home => {
            let counts = query::category_counts(state.catalog.species());
            let featured = state.featured();
            frame.render_widget(
                HomePage::new(&counts, &featured, &state.cursor, content_focused, theme),
                vert[1],
            );
        }
        Route::Category(_) | Route::Search => {
            let results = state.results();
            let list_title = match route {
                Route::Category(c) => format!("{} ({})", c.plural(), results.len()),
                _ => format!(
                    "Showing {} of {} animals",
                    results.len(),
                    state.catalog.len()
                ),
            };
            let pct = state.config.ui.list_pane_width_pct.min(100);
            let horiz = Layout::default()
                .direction(LayoutDir::Horizontal)
                .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
                .split(vert[1]);
            frame.render_widget(
                SpeciesList::new(&results, &state.cursor, content_focused, theme)
                    .title(list_title)
                    .term(&state.query.query)
                    .show_local_names(show_local),
                horiz[0],
            );
            let preview = results.get(state.cursor.selected).copied();
            frame.render_widget(
                DetailView::preview(preview, theme).show_local_names(show_local),
                horiz[1],
            );
        }
        Route::Detail(id) => {
            let species = query::find_by_id(state.catalog.species(), id);
            let related = state.related();
            frame.render_widget(
                DetailView::page(species, &related, &state.cursor, content_focused, theme)
                    .show_local_names(show_local),
                vert[1],
            );
        }
        Route::Blog => frame.render_widget(
            BlogPage::new(state.catalog.posts(), &state.cursor, content_focused, theme),
            vert[1],
        ),
        Route::About => frame.render_widget(AboutPage::new(theme), vert[1]),
    }

    if searchable {
        let query_focused = state.focus == Focus::QueryBar;
        let bar = QueryBar::new(&state.query, &state.category, &state.status, query_focused, theme);
        let (cx, cy) = bar.cursor_position(vert[2]);
        frame.render_widget(bar, vert[2]);

        if query_focused {
            let suggestions = state.suggestions();
            let dropdown = SuggestionDropdown::new(
                &suggestions,
                state.catalog.species(),
                state.query.selected,
                theme,
            );
            let height = dropdown.height().min(vert[1].height);
            let dd_area = Rect {
                x: vert[2].x + 1,
                y: vert[2].y.saturating_sub(height),
                width: vert[2].width.saturating_sub(2).min(72),
                height,
            };
            frame.render_widget(dropdown, dd_area);
            frame.set_cursor_position((cx, cy));
        }
    }

    if let Some(popup) = &state.filter {
        frame.render_widget(FilterPopup::new(popup, theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
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
