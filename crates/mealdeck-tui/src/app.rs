//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! Aggregations run on the tokio runtime handed in by the binary. Each load
//! is tagged with a generation number; results come back over an unbounded
//! channel and are applied on this thread, and results from an older
//! generation than the latest request are dropped.

use crate::{
    commands::Command,
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState, CommandInput},
        confirm::{ConfirmPopup, PendingConfirm},
        filter_panel::{FacetAction, FacetKind, FilterPanel, FilterPanelState},
        help::{centered_rect, HelpPopup},
        nav_bar::{NavBar, NoticeBar},
        query_bar::{QueryBar, QueryBarState},
        recipe_form::{FormMode, FormOutcome, FormState, RecipeForm},
        recipe_list::{ListFooter, RecipeList, RecipeListState},
        recipe_view::RecipeView,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mealdeck_core::{
    config::Config, store::DELETE_PROMPT, Answer, Browser, Deletion, Notice, RecipeDraft,
    RecipeStore, Route, StoreError,
};
use mealdeck_feeds::{Aggregation, Aggregator, RecipeSource};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Focus + load types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filters,
    Recipes,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

/// A finished aggregation on its way back to the UI thread.
#[derive(Debug)]
pub struct LoadResult {
    pub generation: u64,
    pub term: String,
    pub aggregation: Aggregation,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub store: RecipeStore,
    pub browser: Browser,
    pub route: Route,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub filters: FilterPanelState,
    pub list: RecipeListState,
    pub query: QueryBarState,
    pub command_bar: CommandBarState,
    /// Open on the Create and Edit routes.
    pub form: Option<FormState>,
    /// Recipe id shown in the quick-view popup.
    pub quick_view: Option<String>,
    /// Scroll offset of the detail screen / quick view.
    pub view_scroll: u16,
    pub confirm: Option<PendingConfirm>,
    pub notice: Option<Notice>,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    /// Latest load generation handed out.
    pub generation: u64,
    /// An aggregation for `generation` is in flight.
    pub loading: bool,
    /// Term of the last applied load.
    pub last_term: Option<String>,
    /// Load requested by a command, picked up by the event loop.
    pending_load: Option<String>,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        let browser = Browser::with_page_size(
            config.browse.page_size,
            config.browse.load_more_delay(),
        );
        let mut state = AppState {
            store: RecipeStore::new(),
            browser,
            route: Route::Home,
            focus: Focus::Recipes,
            prev_focus: Focus::Recipes,
            filters: FilterPanelState::default(),
            list: RecipeListState::default(),
            query: QueryBarState::default(),
            command_bar: CommandBarState::default(),
            form: None,
            quick_view: None,
            view_scroll: 0,
            confirm: None,
            notice: None,
            theme,
            config,
            show_help: false,
            generation: 0,
            loading: false,
            last_term: None,
            pending_load: None,
            quit: false,
        };
        state.after_store_change();
        state
    }

    // ── Loads ──────────────────────────────────────────────────────────────

    pub fn request_load(&mut self, term: impl Into<String>) {
        self.pending_load = Some(term.into());
    }

    pub fn take_pending_load(&mut self) -> Option<String> {
        self.pending_load.take()
    }

    /// Start a new load generation; results of older ones will be ignored.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a finished aggregation if it belongs to the latest generation.
    pub fn finish_load(&mut self, result: LoadResult) -> bool {
        if result.generation != self.generation {
            tracing::debug!(
                got = result.generation,
                current = self.generation,
                "load: stale result dropped"
            );
            return false;
        }
        self.loading = false;
        self.notice = result.aggregation.apply(&mut self.store);
        tracing::info!(term = %result.term, count = self.store.len(), "load: applied");
        self.last_term = Some(result.term);
        self.list.reset();
        self.after_store_change();
        true
    }

    // ── Store-driven refresh ───────────────────────────────────────────────

    fn after_store_change(&mut self) {
        self.browser.sync(&self.store);
        self.filters.set_values(
            self.browser.available_categories(&self.store),
            self.browser.available_areas(&self.store),
        );
        self.list.clamp(self.browser.revealed(&self.store));
        if let Some(id) = &self.quick_view {
            if !self.store.contains(id) {
                self.quick_view = None;
            }
        }
        if self.form.is_none() {
            self.route = self.route.clone().resolve(&self.store);
        }
    }

    /// Drive deferred reveals; call once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let mealdeck_core::pager::RevealOutcome::Revealed { revealed } =
            self.browser.tick(now, &self.store)
        {
            tracing::debug!(revealed, "list: page revealed");
        }
        self.list.clamp(self.browser.revealed(&self.store));
    }

    pub fn load_more(&mut self) {
        if self.browser.load_more(Instant::now(), &self.store) {
            tracing::debug!("list: load more scheduled");
        }
    }

    pub fn footer(&self) -> ListFooter {
        let found = self.browser.found(&self.store);
        if found == 0 {
            if self.loading && self.store.is_empty() {
                ListFooter::Loading
            } else {
                ListFooter::NothingFound
            }
        } else if self.browser.is_loading_more() {
            ListFooter::LoadingMore
        } else if self.browser.has_more(&self.store) {
            ListFooter::More { shown: self.browser.revealed(&self.store), total: found }
        } else {
            ListFooter::AllLoaded(found)
        }
    }

    fn selected_id(&self) -> Option<String> {
        let visible = self.browser.visible(&self.store);
        self.list.selected(&visible).map(|r| r.id.clone())
    }

    // ── Navigation ─────────────────────────────────────────────────────────

    pub fn navigate(&mut self, route: Route) {
        let route = route.resolve(&self.store);
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.quick_view = None;
        self.view_scroll = 0;
        self.form = match &route {
            Route::Create => Some(FormState::create()),
            Route::Edit(id) => self
                .store
                .get(id)
                .map(|r| FormState::edit(id.clone(), &RecipeDraft::from_recipe(r))),
            _ => None,
        };
        if route == Route::Home && self.focus == Focus::Command {
            self.focus = Focus::Recipes;
        }
        self.route = route;
    }

    fn back(&mut self) {
        match self.route.clone() {
            Route::Home => self.quit = true,
            Route::Edit(id) => self.navigate(Route::Detail(id)),
            _ => self.navigate(Route::Home),
        }
    }

    // ── Mutations ──────────────────────────────────────────────────────────

    fn ask_delete(&mut self, id: String) {
        if let Some(recipe) = self.store.get(&id) {
            tracing::debug!(%id, "delete: asking");
            self.confirm = Some(PendingConfirm {
                prompt: DELETE_PROMPT.to_string(),
                subject: recipe.name.clone(),
                id,
            });
        }
    }

    fn answer_delete(&mut self, pending: PendingConfirm, yes: bool) {
        match self.store.delete(&pending.id, &mut Answer(yes)) {
            Deletion::Removed(recipe) => {
                tracing::info!(id = %recipe.id, name = %recipe.name, "delete: removed");
                if matches!(&self.route, Route::Detail(id) if *id == recipe.id) {
                    self.navigate(Route::Home);
                }
                self.after_store_change();
            }
            Deletion::Declined | Deletion::Absent => {}
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let draft = form.draft();
        match form.mode.clone() {
            FormMode::Create => {
                match self.store.create(draft, &self.config.browse.placeholder_image) {
                    Ok(recipe) => {
                        tracing::info!(id = %recipe.id, "form: created");
                        self.form = None;
                        self.list.reset();
                        self.after_store_change();
                        self.navigate(Route::Home);
                    }
                    Err(err) => form.error = Some(err.to_string()),
                }
            }
            FormMode::Edit(id) => match self.store.edit(&id, draft) {
                Ok(()) => {
                    tracing::info!(%id, "form: saved");
                    self.form = None;
                    self.after_store_change();
                    self.navigate(Route::Home);
                }
                Err(StoreError::Validation(err)) => form.error = Some(err.to_string()),
                Err(StoreError::NotFound(_)) => {
                    self.form = None;
                    self.navigate(Route::NotFound);
                }
            },
        }
    }

    fn apply_facet(&mut self, action: FacetAction) {
        match action {
            FacetAction::Toggle(FacetKind::Category, value) => {
                self.browser.toggle_category(&value, &self.store)
            }
            FacetAction::Toggle(FacetKind::Area, value) => {
                self.browser.toggle_area(&value, &self.store)
            }
            FacetAction::Clear(FacetKind::Category) => {
                self.browser.set_categories(Vec::new(), &self.store)
            }
            FacetAction::Clear(FacetKind::Area) => self.browser.set_areas(Vec::new(), &self.store),
        }
        self.list.reset();
    }

    fn reset_filters(&mut self) {
        self.query.clear();
        self.browser.reset_filters(&self.store);
        self.list.reset();
    }

    // ── Event handling ─────────────────────────────────────────────────────

    /// True when a text-input widget has the keyboard.
    pub fn is_insert_mode(&self) -> bool {
        if self.show_help || self.confirm.is_some() {
            return false;
        }
        matches!(self.focus, Focus::QueryBar | Focus::Command)
            || (self.form.is_some() && self.quick_view.is_none())
    }

    pub fn handle(&mut self, event: AppEvent) {
        if let AppEvent::Resize(_, _) = event {
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

        if let Some(pending) = self.confirm.take() {
            match PendingConfirm::answer(&event) {
                Some(yes) => self.answer_delete(pending, yes),
                None => self.confirm = Some(pending),
            }
            return;
        }

        if self.focus == Focus::Command {
            match self.command_bar.handle(&event) {
                CommandInput::Editing => {}
                CommandInput::Cancelled => self.focus = self.prev_focus,
                CommandInput::Submitted(cmd) => {
                    self.focus = self.prev_focus;
                    self.execute_command(cmd);
                }
            }
            return;
        }

        if let Some(form) = self.form.as_mut() {
            match form.handle(&event) {
                FormOutcome::Editing => {}
                FormOutcome::Submit => self.submit_form(),
                FormOutcome::Cancel => self.back(),
            }
            return;
        }

        if self.quick_view.is_some() {
            self.handle_quick_view(event);
            return;
        }

        match event {
            AppEvent::Char('?') if self.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') if self.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            AppEvent::Char('x') if self.focus != Focus::QueryBar && self.notice.is_some() => {
                self.notice = None;
            }
            other => match self.route.clone() {
                Route::Home => self.handle_home(other),
                Route::Detail(id) => self.handle_detail(id, other),
                Route::NotFound => {
                    if matches!(
                        other,
                        AppEvent::Enter | AppEvent::Escape | AppEvent::Quit | AppEvent::Char('b')
                    ) {
                        self.navigate(Route::Home);
                    }
                }
                // Forms are handled above.
                Route::Create | Route::Edit(_) => {}
            },
        }
    }

    fn handle_quick_view(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape | AppEvent::Enter | AppEvent::Quit => {
                self.quick_view = None;
                self.view_scroll = 0;
            }
            AppEvent::Char('o') => {
                if let Some(id) = self.quick_view.take() {
                    self.navigate(Route::Detail(id));
                }
            }
            AppEvent::Char('e') => {
                if let Some(id) = self.quick_view.take() {
                    self.navigate(Route::Edit(id));
                }
            }
            // The popup stays open behind the prompt; a removal closes it.
            AppEvent::Char('d') => {
                if let Some(id) = self.quick_view.clone() {
                    self.ask_delete(id);
                }
            }
            other => self.scroll_view(&other),
        }
    }

    fn handle_detail(&mut self, id: String, event: AppEvent) {
        match event {
            AppEvent::Escape | AppEvent::Quit | AppEvent::Char('b') => self.back(),
            AppEvent::Char('e') => self.navigate(Route::Edit(id)),
            AppEvent::Char('d') => self.ask_delete(id),
            other => self.scroll_view(&other),
        }
    }

    fn scroll_view(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => self.view_scroll = self.view_scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.view_scroll = self.view_scroll.saturating_add(1),
            AppEvent::ScrollUp => self.view_scroll = self.view_scroll.saturating_sub(10),
            AppEvent::ScrollDown => self.view_scroll = self.view_scroll.saturating_add(10),
            _ => {}
        }
    }

    fn handle_home(&mut self, event: AppEvent) {
        if self.focus == Focus::QueryBar {
            match event {
                AppEvent::Escape | AppEvent::Enter | AppEvent::FocusNext => {
                    tracing::debug!("focus: QueryBar -> Recipes");
                    self.focus = Focus::Recipes;
                }
                other => {
                    if self.query.handle(&other) {
                        self.browser.set_text(self.query.query.clone(), &self.store);
                        self.list.reset();
                    }
                }
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Escape => self.notice = None,
            AppEvent::FocusNext | AppEvent::FocusPrev => {
                let next = match (self.focus, event == AppEvent::FocusNext) {
                    (Focus::Filters, true) => Focus::Recipes,
                    (Focus::Recipes, true) => Focus::QueryBar,
                    (Focus::Recipes, false) => Focus::Filters,
                    _ => Focus::Recipes,
                };
                tracing::debug!(from = ?self.focus, to = ?next, "focus cycle");
                self.focus = next;
            }
            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                self.focus = Focus::QueryBar;
            }
            AppEvent::Char('n') => self.navigate(Route::Create),
            AppEvent::Char('m') => self.load_more(),
            AppEvent::Char('R') => self.reset_filters(),
            other if self.focus == Focus::Filters => {
                if let Some(action) = self.filters.handle(&other) {
                    self.apply_facet(action);
                }
            }
            other => self.handle_recipes(other),
        }
    }

    fn handle_recipes(&mut self, event: AppEvent) {
        match event {
            AppEvent::Enter => {
                self.quick_view = self.selected_id();
                self.view_scroll = 0;
            }
            AppEvent::Char('o') => {
                if let Some(id) = self.selected_id() {
                    self.navigate(Route::Detail(id));
                }
            }
            AppEvent::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.navigate(Route::Edit(id));
                }
            }
            AppEvent::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.ask_delete(id);
                }
            }
            other => {
                let revealed = self.browser.revealed(&self.store);
                self.list.handle(&other, revealed);
                // The last revealed row scrolled into view
                if self.list.at_end(revealed) && self.browser.has_more(&self.store) {
                    self.load_more();
                }
            }
        }
    }

    /// Execute a parsed [`Command`] against the application state.
    pub fn execute_command(&mut self, cmd: Command) {
        tracing::debug!(command = ?cmd, "executing command");
        match cmd {
            Command::Quit => self.back(),
            Command::Exit => self.quit = true,
            Command::Help => self.show_help = !self.show_help,
            Command::Theme(name) => self.theme = Theme::by_name(&name),
            Command::Load(term) => self.request_load(term),
            Command::New => self.navigate(Route::Create),
            Command::Open(id) => self.navigate(Route::Detail(id)),
            Command::Edit(id) => self.navigate(Route::Edit(id)),
            Command::Go(route) => self.navigate(route),
            Command::Reset => self.reset_filters(),
            Command::More => self.load_more(),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<S> {
    state: AppState,
    aggregator: Arc<Aggregator<S>>,
    runtime: tokio::runtime::Handle,
    tx: mpsc::UnboundedSender<LoadResult>,
    rx: mpsc::UnboundedReceiver<LoadResult>,
}

impl<S: RecipeSource + 'static> App<S> {
    pub fn new(
        aggregator: Aggregator<S>,
        config: Config,
        theme: Theme,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let initial = config.api.initial_query.clone();
        let mut state = AppState::new(config, theme);
        state.request_load(initial);
        App {
            state,
            aggregator: Arc::new(aggregator),
            runtime,
            tx,
            rx,
        }
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

    fn spawn_load(&mut self, term: String) {
        let generation = self.state.begin_load();
        tracing::info!(%term, generation, "load: spawning aggregation");
        let aggregator = Arc::clone(&self.aggregator);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let aggregation = aggregator.aggregate(&term).await;
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(LoadResult { generation, term, aggregation });
        });
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            if let Some(term) = self.state.take_pending_load() {
                self.spawn_load(term);
            }
            while let Ok(result) = self.rx.try_recv() {
                self.state.finish_load(result);
            }
            self.state.tick(Instant::now());

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
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if self.state.is_insert_mode() {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                route = %self.state.route,
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
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
    let notice_height = u16::from(state.notice.is_some());
    let query_height = if state.route == Route::Home { 3 } else { 0 };

    // Vertical: nav bar | notice | body | query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(notice_height),
            Constraint::Fill(1),
            Constraint::Length(query_height),
        ])
        .split(area);

    let title = match &state.route {
        Route::Detail(id) | Route::Edit(id) => state.store.get(id).map(|r| r.name.as_str()),
        _ => None,
    };
    frame.render_widget(NavBar::new(&state.route, title, state.loading, &state.theme), vert[0]);
    if let Some(notice) = &state.notice {
        frame.render_widget(NoticeBar::new(notice, &state.theme), vert[1]);
    }

    let mut cursor = None;
    match &state.route {
        Route::Home => {
            let pct = state.config.ui.filter_pane_width_pct.min(60);
            let horiz = Layout::default()
                .direction(LayoutDir::Horizontal)
                .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
                .split(vert[2]);

            let filter = state.browser.filter();
            frame.render_widget(
                FilterPanel::new(&state.filters, filter, state.focus == Focus::Filters, &state.theme),
                horiz[0],
            );
            let visible = state.browser.visible(&state.store);
            frame.render_widget(
                RecipeList::new(
                    &state.list,
                    &visible,
                    state.footer(),
                    &filter.text,
                    state.focus == Focus::Recipes,
                    &state.theme,
                ),
                horiz[1],
            );
            let found = state.browser.found(&state.store);
            let qb = QueryBar::new(&state.query, state.focus == Focus::QueryBar, found, &state.theme);
            if state.focus == Focus::QueryBar {
                cursor = Some(qb.cursor_position(vert[3]));
            }
            frame.render_widget(qb, vert[3]);

            if let Some(recipe) = state.quick_view.as_deref().and_then(|id| state.store.get(id)) {
                frame.render_widget(
                    RecipeView::new(recipe, state.view_scroll, &state.theme).popup(),
                    vert[2],
                );
            }
        }
        Route::Detail(id) => {
            if let Some(recipe) = state.store.get(id) {
                frame.render_widget(RecipeView::new(recipe, state.view_scroll, &state.theme), vert[2]);
            }
        }
        Route::Create | Route::Edit(_) => {
            if let Some(form) = &state.form {
                frame.render_widget(RecipeForm::new(form, &state.theme), vert[2]);
                cursor = Some(form.cursor_position(vert[2]));
            }
        }
        Route::NotFound => {
            let body = centered_rect(44, 4, vert[2]);
            Paragraph::new(vec![
                Line::styled("Recipe not found", Style::default().add_modifier(Modifier::BOLD)),
                Line::default(),
                Line::styled("Press Enter to go back home", state.theme.recipe_meta),
            ])
            .centered()
            .render(body, frame.buffer_mut());
        }
    }

    if let Some(pending) = &state.confirm {
        frame.render_widget(ConfirmPopup::new(pending, &state.theme), area);
        cursor = None;
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        cursor = None;
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        cursor = Some((state.command_bar.cursor_col(cmd_area), cmd_area.y));
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
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
