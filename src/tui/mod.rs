//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod contact_form;
pub mod handlers;
pub mod help_overlay;
pub mod navigation;
pub mod page;
pub mod particles;
pub mod portfolio;
pub mod project_modal;
pub mod sections;
pub mod skills;
pub mod status_bar;
pub mod theme;
pub mod toast;
pub mod typing;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::branding::APP_DISPLAY_NAME;
use crate::config::Config;
use crate::content::{ProjectCatalog, SectionId, SiteContent};
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use contact_form::ContactForm;
pub use help_overlay::HelpOverlayState;
pub use navigation::NavigationState;
pub use page::{PageLayout, PageScroll};
pub use particles::ParticleField;
pub use portfolio::PortfolioState;
pub use project_modal::ProjectModal;
pub use skills::SkillBars;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toast::{ToastPresenter, ToastSeverity};
pub use typing::TypingAnimator;

/// How long the event loop waits for input before advancing animations.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

const TITLE_BAR_ROWS: u16 = 3;
const STATUS_BAR_ROWS: u16 = 4;
const TOAST_ROWS: u16 = 3;
const DRAWER_COLS: u16 = 26;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Detail dialog for the selected portfolio project
    ProjectDetails,
    /// Help overlay popup
    HelpOverlay,
}

/// Central application state shared by the input and render paths.
pub struct AppState {
    /// Page content (hero phrases, bio, skills, portfolio grid).
    pub content: SiteContent,
    /// Project detail records backing the portfolio dialog.
    pub catalog: ProjectCatalog,
    /// Persisted configuration.
    pub config: Config,

    /// Active color palette.
    pub theme: Theme,
    /// Terminal size as of the last resize event.
    pub viewport: (u16, u16),
    /// Row layout of the page at the current width.
    pub page: PageLayout,
    /// Scroll offset with clamping and the smooth glide.
    pub scroll: PageScroll,
    /// Section held active by an explicit jump until the next manual
    /// scroll. Jump targets near the page bottom can sit beyond the
    /// scroll range, where the probe alone could never reach them.
    pub pinned_section: Option<SectionId>,

    /// Hero typewriter line.
    pub typing: TypingAnimator,
    /// Hero particle background.
    pub particles: ParticleField,
    /// Skill bar reveal states.
    pub skills: SkillBars,
    /// Portfolio filter, selection and fade.
    pub portfolio: PortfolioState,
    /// Contact form fields and the simulated submit.
    pub contact: ContactForm,
    /// Single toast slot.
    pub toasts: ToastPresenter,
    /// Sidebar/drawer navigation state.
    pub nav: NavigationState,
    /// Project dialog state, present while the dialog is open.
    pub modal: Option<ProjectModal>,
    /// Help overlay scroll state.
    pub help_overlay: HelpOverlayState,

    /// Key bindings for the main context.
    pub shortcuts: ShortcutRegistry,
    /// Which popup is currently displayed, if any.
    pub active_popup: Option<PopupType>,
    /// Message shown in the status bar.
    pub status_message: String,
    /// Color override for the status message.
    pub status_color_override: Option<Color>,
    /// Set when the application should exit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state for the given content and config.
    pub fn new(content: SiteContent, config: Config) -> Result<Self> {
        let catalog = ProjectCatalog::load().context("Failed to load project catalog")?;
        let theme = Theme::from_preference(config.ui.theme);
        let typing = TypingAnimator::new(content.typing_phrases.clone());
        let skills = SkillBars::new(content.skills.iter().map(|s| s.percent).collect());
        let portfolio = PortfolioState::new(content.portfolio.clone(), content.filter_tags.clone());

        let mut state = Self {
            content,
            catalog,
            config,
            theme,
            viewport: (0, 0),
            page: PageLayout::default(),
            scroll: PageScroll::default(),
            pinned_section: None,
            typing,
            particles: ParticleField::new(),
            skills,
            portfolio,
            contact: ContactForm::new(),
            toasts: ToastPresenter::new(),
            nav: NavigationState::new(),
            modal: None,
            help_overlay: HelpOverlayState::new(),
            shortcuts: ShortcutRegistry::new(),
            active_popup: None,
            status_message: String::new(),
            status_color_override: None,
            should_quit: false,
        };
        state.set_status("Ready");
        Ok(state)
    }

    /// Columns and rows of the page pane (terminal minus chrome and,
    /// on wide terminals, the sidebar).
    #[must_use]
    pub fn page_viewport(&self) -> (u16, u16) {
        let (width, height) = self.viewport;
        let content_width = if NavigationState::is_wide(width) {
            width.saturating_sub(navigation::SIDEBAR_COLS)
        } else {
            width
        };
        let content_height = height.saturating_sub(TITLE_BAR_ROWS + STATUS_BAR_ROWS);
        (content_width, content_height)
    }

    /// The currently active section, if any.
    ///
    /// An explicit jump pins its target until the user scrolls manually.
    /// Otherwise the section under the scroll-spy probe wins, with one
    /// adjustment: at the very bottom of an overflowing page the last
    /// section counts as active even though its top row never reaches
    /// the probe.
    #[must_use]
    pub fn active_section(&self) -> Option<SectionId> {
        if let Some(pinned) = self.pinned_section {
            return Some(pinned);
        }
        if self.scroll.max_offset() > 0 && self.scroll.offset() >= self.scroll.max_offset() {
            return self.page.sections.last().map(|s| s.id);
        }
        self.page
            .section_at(self.scroll.offset() + page::SCROLL_SPY_PROBE_ROWS)
    }

    /// Recomputes the page layout and scroll clamps. Needed after a
    /// resize and after anything that changes section heights, which
    /// today means the portfolio filter.
    pub fn relayout(&mut self) {
        let (width, height) = self.page_viewport();
        self.page = sections::layout_page(&self.content, &self.portfolio, width);
        self.scroll
            .set_bounds(self.page.total_height, height as usize);
    }

    /// Runs the skill reveal visibility pass for the current offset.
    pub fn observe_visibility(&mut self) {
        let (_, height) = self.page_viewport();
        if let Some(top) = self.page.top_of(SectionId::Skills) {
            self.skills
                .observe(top, self.scroll.offset(), height as usize);
        }
    }

    /// Relayout plus a fresh visibility pass.
    pub fn refresh_effects(&mut self) {
        self.relayout();
        self.observe_visibility();
    }

    /// Handles a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.nav.handle_resize(width);
        self.refresh_effects();
    }

    /// Advances every animation clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.typing.advance(dt);
        self.particles.advance(dt);
        self.skills.advance(dt);
        self.portfolio.advance(dt);
        self.toasts.advance(dt);
        if self.scroll.advance(dt) {
            self.observe_visibility();
        }
        if self.contact.advance(dt) {
            self.toasts
                .show(contact_form::SUCCESS_MESSAGE, ToastSeverity::Success);
            self.set_status("Message sent");
        }
    }

    /// Scrolls the page by `delta` rows and reruns the visibility pass.
    /// Manual scrolling hands the active section back to the probe.
    pub fn scroll_page(&mut self, delta: isize) {
        self.pinned_section = None;
        self.scroll.scroll_by(delta);
        self.observe_visibility();
    }

    /// Glides to the top of `section` and pins it active.
    pub fn go_to_section(&mut self, section: SectionId) {
        if let Some(top) = self.page.top_of(section) {
            self.pinned_section = Some(section);
            self.scroll.glide_to(top);
            self.set_status(format!("→ {}", section.title()));
        }
    }

    /// Opens the detail dialog for the selected portfolio card. Cards
    /// without a catalog record are ignored.
    pub fn open_project_modal(&mut self) {
        let Some(item) = self.portfolio.selected_item() else {
            return;
        };
        let Some(project) = self.catalog.get(&item.id) else {
            return;
        };
        self.modal = Some(ProjectModal::new(project.clone()));
        self.active_popup = Some(PopupType::ProjectDetails);
    }

    /// Closes whatever popup is open.
    pub fn close_popup(&mut self) {
        self.active_popup = None;
        self.modal = None;
    }

    /// Toggles the theme, persists the preference, and refreshes the
    /// page. A failed save keeps the new theme for this session.
    pub fn toggle_theme(&mut self) {
        let next = self.config.ui.theme.toggled();
        self.config.ui.theme = next;
        self.theme = Theme::from_preference(next);
        match self.config.save() {
            Ok(()) => self.set_status(format!("Theme: {}", next.as_str())),
            Err(e) => {
                let warning = self.theme.warning;
                self.set_status_with_color(format!("Theme not saved: {e}"), warning);
            }
        }
        self.refresh_effects();
    }

    /// Sets the status line with the default color.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = None;
    }

    /// Sets the status line with an explicit color.
    pub fn set_status_with_color(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.status_color_override = Some(color);
    }

    /// Rows the help overlay body can show at the current terminal
    /// size, for page-wise scrolling.
    #[must_use]
    pub fn help_visible_height(&self) -> usize {
        (usize::from(self.viewport.1) * 80 / 100).saturating_sub(2)
    }
}

/// Initializes the terminal for TUI mode.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the main event loop until the user quits.
///
/// The loop draws a frame, waits up to [`TICK_INTERVAL`] for input,
/// then advances the animation clocks by the real elapsed time, so
/// animations stay on schedule whatever the input rate.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let size = terminal.size().context("Failed to query terminal size")?;
    state.handle_resize(size.width, size.height);

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(TICK_INTERVAL).context("Failed to poll for events")? {
            match event::read().context("Failed to read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Resize(width, height) => state.handle_resize(width, height),
                _ => {}
            }
        }

        let now = Instant::now();
        state.advance(now.duration_since(last_tick));
        last_tick = now;

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Routes a key press to whichever context has focus.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::{KeyCode, KeyModifiers};

    // Ctrl+C always quits, whatever has focus
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    // The open drawer captures all input
    if state.nav.drawer_open() {
        return handlers::handle_drawer_keys(state, key);
    }

    // The contact form captures all input while editing
    if state.contact.editing {
        return handlers::handle_form_keys(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

/// Top-level render: background, chrome, page, overlays, toast.
fn render(f: &mut Frame, state: &mut AppState) {
    let background = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_ROWS),
            Constraint::Min(10),
            Constraint::Length(STATUS_BAR_ROWS),
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    if state.nav.drawer_open() {
        render_drawer(f, chunks[1], state);
    }

    render_popup(f, state);
    render_toast(f, state);
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(state.theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_DISPLAY_NAME}"),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", state.content.name),
            Style::default().fg(state.theme.text_secondary),
        ),
    ]);
    f.render_widget(Paragraph::new(title), inner);

    let toggle = Line::from(vec![
        Span::styled("t ", Style::default().fg(state.theme.text_muted)),
        Span::styled(
            theme::toggle_icon(state.config.ui.theme),
            Style::default().fg(state.theme.accent),
        ),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), inner);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    if NavigationState::is_wide(state.viewport.0) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(navigation::SIDEBAR_COLS),
                Constraint::Min(10),
            ])
            .split(area);
        render_sidebar(f, chunks[0], state);
        render_page(f, chunks[1], state);
    } else {
        render_page(f, area, state);
    }
}

fn render_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let active = state.active_section();

    let mut lines = vec![Line::from("")];
    lines.push(Line::from(Span::styled(
        format!(" {}", state.content.name),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for (i, section) in SectionId::ALL.iter().enumerate() {
        let is_active = active == Some(*section);
        let marker = if is_active { "▸" } else { " " };
        let style = if is_active {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.inactive)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(theme.accent)),
            Span::styled(format!("{} {}", i + 1, section.title()), style),
        ]));
    }

    let sidebar = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(sidebar, area);
}

/// Renders the visible slice of the page at the current scroll offset.
fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = sections::build_page_lines(state, area.width);
    let top = state.scroll.offset().min(lines.len());
    let bottom = (top + area.height as usize).min(lines.len());
    let visible: Vec<Line> = lines[top..bottom].to_vec();
    f.render_widget(Paragraph::new(visible), area);
}

/// Renders the navigation drawer over a dimmed page.
fn render_drawer(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let backdrop: Vec<Line> = (0..area.height)
        .map(|_| {
            Line::from(Span::styled(
                "░".repeat(area.width as usize),
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::DIM),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(backdrop), area);

    let panel = Rect {
        x: area.x,
        y: area.y,
        width: DRAWER_COLS.min(area.width),
        height: area.height,
    };
    f.render_widget(Clear, panel);

    let active = state.active_section();
    let mut lines = vec![Line::from("")];
    for (i, section) in SectionId::ALL.iter().enumerate() {
        let selected = state.nav.selected() == i;
        let is_active = active == Some(*section);
        let marker = if selected { "▸" } else { " " };
        let mut style = if is_active {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.text)
        };
        if selected {
            style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(theme.accent)),
            Span::styled(format!("{} {}", i + 1, section.title()), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter go · Esc close",
        Style::default().fg(theme.text_muted),
    )));

    let drawer = Paragraph::new(lines)
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(drawer, panel);
}

fn render_popup(f: &mut Frame, state: &mut AppState) {
    match state.active_popup {
        Some(PopupType::ProjectDetails) => {
            let AppState { modal, theme, .. } = state;
            if let Some(modal) = modal.as_mut() {
                project_modal::render::render_project_modal(f, f.area(), modal, theme);
            }
        }
        Some(PopupType::HelpOverlay) => {
            state.help_overlay.render(f, f.area(), &state.theme);
        }
        None => {}
    }
}

/// Renders the toast box in the top-right corner. The box width tracks
/// the slide progress, so the toast grows out of the right edge and
/// shrinks back into it.
fn render_toast(f: &mut Frame, state: &AppState) {
    let Some(toast) = state.toasts.current() else {
        return;
    };
    let area = f.area();
    let text = format!(" {} {} ", toast.severity.glyph(), toast.message);
    let full_width = (text.chars().count() as u16 + 2).min(area.width);
    let visible = (f64::from(full_width) * toast.progress()).round() as u16;
    if visible == 0 || area.height < TOAST_ROWS + 1 {
        return;
    }

    let rect = Rect {
        x: area.x + area.width - visible,
        y: area.y + 1,
        width: visible,
        height: TOAST_ROWS,
    };
    f.render_widget(Clear, rect);
    let body = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(toast.severity.background()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(toast.severity.background())),
    );
    f.render_widget(body, rect);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
