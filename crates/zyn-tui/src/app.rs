//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All state transitions live
//! on [`AppState`] and take the clock as an argument, so they are exercised by
//! the unit tests below without a terminal.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        cart_summary::CartSummary,
        category_list::{CategoryList, CategoryListState},
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        product_list::{ProductList, ProductListState},
        query_bar::{QueryBar, QueryBarState},
        quick_view::QuickViewPopup,
        service_list::{ServiceList, ServiceListState},
        tab_bar::TabBar,
        toast::Toast,
    },
};
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use zyn_core::{
    config::Config,
    forms,
    notify::Notification,
    prefs::{self, PreferenceStore},
    search::ALL,
    services::ServicesState,
    Catalog, Service, ShopState, ThemeMode,
};

// ---------------------------------------------------------------------------
// Tabs, focus and overlays
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Shop,
    Services,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Shop, Tab::Services];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Shop => "Shop",
            Tab::Services => "Services",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Shop => 0,
            Tab::Services => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    /// Product list on the shop tab, service cards on the services tab.
    Products,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

/// Modal popups. At most one is open; it swallows input until closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    QuickView(u32),
    Cart,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub tab: Tab,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub shop: ShopState,
    pub services: ServicesState,
    pub categories: CategoryListState,
    pub service_categories: CategoryListState,
    pub products: ProductListState,
    pub service_list: ServiceListState,
    pub query: QueryBarState,
    pub services_query: QueryBarState,
    pub overlay: Option<Overlay>,
    /// Left pane visibility, toggled with `b`.
    pub show_categories: bool,
    pub command_bar: CommandBarState,
    pub theme: Theme,
    pub config: Config,
    prefs: Box<dyn PreferenceStore>,
    pub quit: bool,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        services: Vec<Service>,
        config: Config,
        prefs: Box<dyn PreferenceStore>,
    ) -> Self {
        let mode = prefs::load_theme(prefs.as_ref(), &config.preferences.theme_key);
        let categories = CategoryListState::new(catalog.categories());
        let services = ServicesState::new(services);
        let service_categories = CategoryListState::new(services.categories());
        tracing::debug!(
            products = catalog.len(),
            services = services.services().len(),
            theme = %mode,
            "app state created"
        );

        Self {
            tab: Tab::Shop,
            focus: Focus::Products,
            prev_focus: Focus::Products,
            shop: ShopState::new(catalog, config.catalog.page_size),
            services,
            categories,
            service_categories,
            products: ProductListState::default(),
            service_list: ServiceListState::default(),
            query: QueryBarState::default(),
            services_query: QueryBarState::default(),
            overlay: None,
            show_categories: config.ui.show_categories,
            command_bar: CommandBarState::default(),
            theme: Theme::for_mode(mode),
            config,
            prefs,
            quit: false,
        }
    }

    /// Time-driven updates: run a debounced search once typing pauses and
    /// drop an expired toast.
    pub fn tick(&mut self, now: Instant, utc: DateTime<Utc>) {
        if let Some(query) = self.query.take_due(now, self.config.search_debounce()) {
            self.apply_query(&query);
        }
        if self.shop.expire_notification(utc, self.config.notification_ttl()) {
            tracing::debug!("toast expired");
        }
    }

    pub fn handle(&mut self, event: AppEvent, now: Instant) {
        if let Some(overlay) = self.overlay {
            self.handle_overlay(overlay, event);
            return;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
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
                            self.execute(cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input, just close
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => self.quit = true,
                other => self.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if self.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                self.overlay = Some(Overlay::Help);
            }

            AppEvent::Char(':') if self.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }

            AppEvent::Escape => {
                if self.focus == Focus::QueryBar {
                    if self.tab == Tab::Services {
                        self.services_query.clear();
                        self.services.clear_query();
                        self.service_list.scroll = 0;
                    }
                    tracing::debug!("focus: QueryBar -> Products");
                    self.focus = Focus::Products;
                }
            }

            // Categories → Products → QueryBar, skipping a hidden category pane
            AppEvent::FocusNext => {
                let next = match self.focus {
                    Focus::Categories => Focus::Products,
                    Focus::Products => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command if self.show_categories => Focus::Categories,
                    Focus::QueryBar | Focus::Command => Focus::Products,
                };
                tracing::debug!(from = ?self.focus, to = ?next, "focus cycle");
                self.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                self.focus = Focus::QueryBar;
            }

            AppEvent::SwitchTab(index) => {
                if let Some(tab) = Tab::ALL.get(index).copied() {
                    tracing::debug!(tab = tab.label(), "switch tab");
                    self.tab = tab;
                    self.focus = Focus::Products;
                }
            }

            AppEvent::ToggleTheme => self.set_theme(self.theme.mode.toggled()),

            AppEvent::ToggleMenu => {
                self.show_categories = !self.show_categories;
                if !self.show_categories && self.focus == Focus::Categories {
                    self.focus = Focus::Products;
                }
                tracing::debug!(show = self.show_categories, "category pane toggled");
            }

            AppEvent::ShowCart => self.overlay = Some(Overlay::Cart),

            AppEvent::LoadMore if self.tab == Tab::Shop => self.load_more(),

            AppEvent::AddToCart if self.tab == Tab::Shop => {
                if let Some(id) = self.selected_id() {
                    self.shop.add_to_cart(id, Utc::now());
                }
            }

            AppEvent::ToggleWishlist if self.tab == Tab::Shop => {
                if let Some(id) = self.selected_id() {
                    self.shop.toggle_wishlist(id, Utc::now());
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other, now),
        }
    }

    fn handle_overlay(&mut self, overlay: Overlay, event: AppEvent) {
        match (overlay, event) {
            (_, AppEvent::Escape | AppEvent::Quit) => {
                tracing::debug!(?overlay, "overlay closed");
                self.overlay = None;
            }
            (Overlay::Help, AppEvent::Char('?')) | (Overlay::Cart, AppEvent::ShowCart) => {
                self.overlay = None;
            }
            (Overlay::QuickView(_), AppEvent::Enter) => self.overlay = None,
            (Overlay::QuickView(id), AppEvent::AddToCart) => {
                self.shop.add_to_cart(id, Utc::now());
            }
            (Overlay::QuickView(id), AppEvent::ToggleWishlist) => {
                self.shop.toggle_wishlist(id, Utc::now());
            }
            _ => {}
        }
    }

    /// Route an event to the widget that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent, now: Instant) {
        match (self.tab, self.focus) {
            (Tab::Shop, Focus::Categories) => {
                if let Some(category) = self.categories.handle(&event) {
                    self.apply_category(&category);
                }
            }
            (Tab::Shop, Focus::Products) => match event {
                AppEvent::Enter => {
                    if let Some(id) = self.selected_id() {
                        tracing::debug!(id, "quick view");
                        self.overlay = Some(Overlay::QuickView(id));
                    }
                }
                other => self.products.handle(&other, self.shop.visible().len()),
            },
            (Tab::Shop, Focus::QueryBar) => match event {
                AppEvent::Enter => {
                    let query = self.query.take_now();
                    self.apply_query(&query);
                    self.focus = Focus::Products;
                }
                other => {
                    self.query.handle(&other, now);
                }
            },
            (Tab::Services, Focus::Categories) => {
                if let Some(category) = self.service_categories.handle(&event) {
                    self.services.set_filter(&category);
                    self.service_list.scroll = 0;
                }
            }
            (Tab::Services, Focus::Products) => {
                self.service_list.handle(&event, self.services.visible().len());
            }
            (Tab::Services, Focus::QueryBar) => match event {
                AppEvent::Enter => self.focus = Focus::Products,
                other => {
                    // The services list is small enough to filter on every key
                    if self.services_query.handle(&other, now) {
                        let query = self.services_query.take_now();
                        self.services.set_query(&query);
                        self.service_list.scroll = 0;
                    }
                }
            },
            (_, Focus::Command) => {} // handled before dispatch
        }
    }

    // -----------------------------------------------------------------------
    // Actions shared by keys and commands
    // -----------------------------------------------------------------------

    fn selected_id(&self) -> Option<u32> {
        self.products.selected(self.shop.visible()).map(|item| item.id)
    }

    fn apply_query(&mut self, query: &str) {
        self.shop.apply_query(query);
        self.categories.select(&self.shop.filter);
        self.products.reset();
    }

    fn apply_category(&mut self, category: &str) {
        self.shop.apply_category(category);
        self.categories.select(&self.shop.filter);
        self.query.clear();
        self.products.reset();
    }

    fn load_more(&mut self) {
        if !self.shop.load_more() {
            tracing::debug!("load more: nothing left");
        }
    }

    /// Switch theme and persist it. A failed write is logged, not fatal.
    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = Theme::for_mode(mode);
        let key = self.config.preferences.theme_key.clone();
        if let Err(err) = prefs::save_theme(self.prefs.as_mut(), &key, mode) {
            tracing::warn!(error = %err, "could not save theme preference");
        }
        tracing::debug!(theme = %mode, "theme set");
    }

    /// Execute a parsed [`Command`].
    pub fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit = true,
            Command::Help => {
                self.overlay = match self.overlay {
                    Some(Overlay::Help) => None,
                    _ => Some(Overlay::Help),
                };
            }
            Command::Theme(mode) => {
                let mode = mode.unwrap_or_else(|| self.theme.mode.toggled());
                self.set_theme(mode);
            }
            Command::Filter(category) => match self.tab {
                Tab::Shop => self.apply_category(&category),
                Tab::Services => {
                    self.services.set_filter(&category);
                    self.service_categories.select(&self.services.filter);
                    self.service_list.scroll = 0;
                }
            },
            Command::Search(text) => match self.tab {
                Tab::Shop => {
                    self.query.set(&text);
                    self.apply_query(&text);
                }
                Tab::Services => {
                    self.services_query.set(&text);
                    self.services.set_query(&text);
                    self.service_list.scroll = 0;
                }
            },
            Command::Reset => {
                self.shop.reset();
                self.query.clear();
                self.categories.select(ALL);
                self.products.reset();
            }
            Command::More => self.load_more(),
            Command::Cart => self.overlay = Some(Overlay::Cart),
            Command::Remove(id) => {
                let now = Utc::now();
                if !self.shop.remove_from_cart(id, now) {
                    self.shop
                        .notify(Notification::error(format!("Product {id} is not in your cart"), now));
                }
                self.products.clamp(self.shop.visible().len());
            }
            Command::Subscribe(email) => {
                if !self.shop.subscribe_newsletter(&email, Utc::now()) {
                    tracing::debug!("newsletter: blank email ignored");
                }
            }
            Command::Contact(form) => {
                let now = Utc::now();
                let notification = match form.validate() {
                    Ok(()) => {
                        tracing::debug!(name = %form.name, email = %form.email, "contact form sent");
                        Notification::success(forms::CONTACT_SENT, now)
                    }
                    Err(err) => Notification::error(err.to_string(), now),
                };
                self.shop.notify(notification);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        App { state }
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
        loop {
            self.state.tick(Instant::now(), Utc::now());

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
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.state.handle(ev, Instant::now());
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.state.handle(ev, Instant::now());
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// True when a text-input widget is focused, so letter keys type rather than
/// trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let (side, main) = if state.show_categories {
        let pct = state.config.ui.category_pane_width_pct;
        let horiz = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
            .split(vert[1]);
        (Some(horiz[0]), horiz[1])
    } else {
        (None, vert[1])
    };

    frame.render_widget(
        TabBar::new(state.tab, state.shop.cart_count(), state.shop.wishlist_count(), &state.theme),
        vert[0],
    );

    let side_focused = state.focus == Focus::Categories;
    let main_focused = state.focus == Focus::Products;
    let query_focused = state.focus == Focus::QueryBar;

    let query_widget = match state.tab {
        Tab::Shop => {
            if let Some(side) = side {
                frame.render_widget(
                    CategoryList::new(&state.categories, side_focused, " Categories ", &state.theme),
                    side,
                );
            }
            frame.render_widget(
                ProductList::new(&state.products, &state.shop, main_focused, &state.theme),
                main,
            );
            QueryBar::new(
                &state.query,
                query_focused,
                state.shop.active().len(),
                " Search products ",
                &state.theme,
            )
        }
        Tab::Services => {
            if let Some(side) = side {
                frame.render_widget(
                    CategoryList::new(&state.service_categories, side_focused, " Filter ", &state.theme),
                    side,
                );
            }
            frame.render_widget(
                ServiceList::new(&state.service_list, &state.services, main_focused, &state.theme),
                main,
            );
            QueryBar::new(
                &state.services_query,
                query_focused,
                state.services.visible().len(),
                " Search services ",
                &state.theme,
            )
        }
    };
    let (cx, cy) = query_widget.cursor_position(vert[2]);
    frame.render_widget(query_widget, vert[2]);

    match state.overlay {
        Some(Overlay::Help) => frame.render_widget(HelpPopup::new(&state.theme), area),
        Some(Overlay::Cart) => frame.render_widget(CartSummary::new(&state.shop, &state.theme), area),
        Some(Overlay::QuickView(id)) => {
            if let Some(view) = state.shop.quick_view(id) {
                frame.render_widget(QuickViewPopup::new(view, &state.theme), area);
            }
        }
        None => {}
    }

    if let Some(notification) = &state.shop.notification {
        let toast = Toast::new(notification, &state.theme);
        let toast_area = toast.area(area);
        frame.render_widget(toast, toast_area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if query_focused && state.overlay.is_none() {
        frame.set_cursor_position((cx, cy));
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
