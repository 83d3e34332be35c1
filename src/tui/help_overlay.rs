//! Help overlay widget showing all keyboard shortcuts organized by category.
//!
//! This module provides a scrollable help overlay accessible via '?' key
//! that documents all keyboard shortcuts and features.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::Theme;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        // Calculate total lines using default dark theme for initialization
        // (actual rendering will use the current theme)
        let content = Self::get_help_content(&Theme::default());
        let total_lines = content.len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    /// Scroll down by a page (approximation based on visible height).
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page (approximation based on visible height).
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    /// Get the comprehensive help content organized by category.
    fn get_help_content(theme: &Theme) -> Vec<Line<'static>> {
        let entry = |keys: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled("  ", Style::default().fg(theme.text)),
                Span::styled(keys, Style::default().fg(theme.success)),
                Span::styled(desc, Style::default().fg(theme.text)),
            ])
        };
        let section = |title: &'static str| {
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )])
        };

        vec![
            // Header
            Line::from(vec![Span::styled(
                "═══════════════════════════════════════════════════════════════",
                Style::default().fg(theme.primary),
            )]),
            Line::from(vec![Span::styled(
                "                      Termfolio - Help                      ",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                "═══════════════════════════════════════════════════════════════",
                Style::default().fg(theme.primary),
            )]),
            Line::from(""),
            section("═══ NAVIGATION ═══"),
            Line::from(""),
            entry("j/k", "                  Scroll the page down/up"),
            entry("Up/Down", "              Scroll the page up/down"),
            entry("PgUp/PgDn", "            Scroll by a full screen"),
            entry("g / G", "                Jump to the top / bottom"),
            entry("1-5", "                  Jump to a section (Home..Contact)"),
            Line::from(""),
            section("═══ MENU ═══"),
            Line::from(""),
            entry("m", "                    Toggle the navigation menu (narrow terminals)"),
            entry("j/k", "                  Move between menu links"),
            entry("Enter", "                Open the highlighted section"),
            entry("Escape", "               Close the menu without navigating"),
            Line::from(""),
            section("═══ PORTFOLIO ═══"),
            Line::from(""),
            entry("f / F", "                Cycle the category filter forward/back"),
            entry("h/l", "                  Select the previous/next project"),
            entry("Left/Right", "           Select the previous/next project"),
            entry("Enter", "                Open details for the selected project"),
            Line::from(""),
            section("═══ PROJECT DETAILS ═══"),
            Line::from(""),
            entry("j/k", "                  Scroll the description"),
            entry("c", "                    Copy the project link to the clipboard"),
            entry("Escape", "               Close the dialog"),
            Line::from(""),
            section("═══ CONTACT FORM ═══"),
            Line::from(""),
            entry("Enter", "                Start editing (while Contact is active)"),
            entry("Tab/Shift+Tab", "        Move to the next/previous field"),
            entry("Enter", "                Next field, or submit on the button"),
            entry("Ctrl+S", "               Submit from any field"),
            entry("Escape", "               Leave the form editor"),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Note:", Style::default().fg(theme.primary)),
                Span::styled(
                    " submission is simulated; no message leaves the terminal",
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(""),
            section("═══ THEME ═══"),
            Line::from(""),
            entry("t", "                    Toggle dark/light theme"),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Info:", Style::default().fg(theme.primary)),
                Span::styled(
                    " Theme choice saved to ~/.config/Termfolio/config.toml",
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::from(""),
            section("═══ SYSTEM ═══"),
            Line::from(""),
            entry("?", "                    Toggle this help overlay"),
            entry("q / Ctrl+C", "           Quit"),
            entry("Escape", "               Close current dialog/menu"),
            Line::from(""),
            section("═══ TIPS ═══"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "  • Status bar shows context-sensitive hints and the active section",
                Style::default().fg(theme.text),
            )]),
            Line::from(vec![Span::styled(
                "  • Skill bars fill the first time they scroll into view",
                Style::default().fg(theme.text),
            )]),
            Line::from(vec![Span::styled(
                "  • The section highlighted in the sidebar follows your scroll position",
                Style::default().fg(theme.text),
            )]),
            Line::from(vec![Span::styled(
                "  • Filtering the portfolio keeps your selection when it stays visible",
                Style::default().fg(theme.text),
            )]),
            Line::from(""),
            // Footer
            Line::from(vec![Span::styled(
                "═══════════════════════════════════════════════════════════════",
                Style::default().fg(theme.primary),
            )]),
            Line::from(vec![Span::styled(
                "              Press '?' to close help • Press ↑↓ to scroll               ",
                Style::default().fg(theme.text_muted),
            )]),
            Line::from(vec![Span::styled(
                "═══════════════════════════════════════════════════════════════",
                Style::default().fg(theme.primary),
            )]),
        ]
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Calculate centered modal size (60% width, 80% height)
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        let modal_area = Rect {
            x: x + area.x,
            y: y + area.y,
            width,
            height,
        };

        frame.render_widget(Clear, modal_area);

        // Create layout for content area and scrollbar
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        // Get help content
        let content = Self::get_help_content(theme);

        // Create paragraph with scrolling
        let visible_height = content_area.height.saturating_sub(2) as usize; // Account for borders
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        // Render scrollbar
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}
