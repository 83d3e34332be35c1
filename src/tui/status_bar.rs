//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        // First line: status message, or the scroll position indicator
        let content_line = if state.status_message.is_empty() {
            Self::get_position_line(state, theme)
        } else if let Some(color) = state.status_color_override {
            Line::from(vec![Span::styled(
                state.status_message.clone(),
                Style::default().fg(color),
            )])
        } else {
            Line::from(state.status_message.clone())
        };

        let status_text = vec![content_line, Self::get_contextual_help_line(state, theme)];

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// The active-section / scroll-progress indicator shown when no
    /// status message is set.
    fn get_position_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let section = state
            .active_section()
            .map_or("—", |s| s.title());
        let max = state.scroll.max_offset();
        let percent = if max == 0 {
            100
        } else {
            state.scroll.offset() * 100 / max
        };
        Line::from(vec![
            Span::styled("Section: ", Style::default().fg(theme.primary)),
            Span::styled(
                section.to_string(),
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {percent}%"), Style::default().fg(theme.text_muted)),
        ])
    }

    /// Get the current context name based on application state
    fn get_current_context(state: &AppState) -> &'static str {
        match state.active_popup {
            Some(PopupType::ProjectDetails) => "dialog",
            Some(PopupType::HelpOverlay) => "help",
            None => {
                if state.nav.drawer_open() {
                    "drawer"
                } else if state.contact.editing {
                    "form"
                } else {
                    "main"
                }
            }
        }
    }

    /// Key/action hints for a context, in display order.
    fn context_hints(context: &'static str) -> &'static [(&'static str, &'static str)] {
        match context {
            "drawer" => &[
                ("j/k", "Move"),
                ("Enter", "Go"),
                ("1-5", "Jump"),
                ("Esc", "Close"),
            ],
            "dialog" => &[("j/k", "Scroll"), ("c", "Copy link"), ("Esc", "Close")],
            "help" => &[("j/k", "Scroll"), ("g/G", "Top/Bottom"), ("Esc", "Close")],
            "form" => &[
                ("Tab", "Next field"),
                ("Enter", "Next/Submit"),
                ("Ctrl+S", "Submit"),
                ("Esc", "Done"),
            ],
            _ => &[
                ("j/k", "Scroll"),
                ("1-5", "Jump"),
                ("f", "Filter"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        }
    }

    /// Get contextual help line (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context = Self::get_current_context(state);
        let hints = Self::context_hints(context);

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(*action));
        }

        // Always advertise the help overlay from the main context
        if context == "main" {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw("Help"));
        }

        Line::from(spans)
    }
}
