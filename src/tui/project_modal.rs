//! Project detail dialog.
//!
//! Opens over the page for the selected portfolio item, showing the
//! catalog entry's full description. The body scrolls independently of
//! the page, and the project link can be copied to the clipboard.

use crossterm::event::{KeyCode, KeyEvent};

use crate::content::ProjectDetails;

/// What a key press inside the dialog asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Key handled (or ignored); dialog stays open.
    Continue,
    /// Close the dialog and return to the page.
    Close,
    /// Copy the project link to the clipboard.
    CopyLink,
}

/// How a description line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyLine {
    Heading,
    Bullet,
    Text,
    Blank,
}

fn classify(line: &str) -> BodyLine {
    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        BodyLine::Blank
    } else if trimmed.ends_with(':') {
        BodyLine::Heading
    } else if trimmed.starts_with("- ") {
        BodyLine::Bullet
    } else {
        BodyLine::Text
    }
}

/// State of the open detail dialog.
#[derive(Debug, Clone)]
pub struct ProjectModal {
    /// The catalog entry being shown.
    pub project: ProjectDetails,
    /// Scroll offset into the description body.
    pub scroll_offset: usize,
    /// Total body lines, updated by the render pass.
    pub total_lines: usize,
}

impl ProjectModal {
    /// Opens the dialog for `project`, scrolled to the top.
    #[must_use]
    pub fn new(project: ProjectDetails) -> Self {
        let total_lines = project.description.len();
        Self {
            project,
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scrolls the body down `amount` lines, stopping with the last
    /// line still in view.
    pub fn scroll_down(&mut self, amount: usize) {
        let max = self.total_lines.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    /// Scrolls the body up `amount` lines.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Jumps to the top of the body.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Jumps to the bottom of the body.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }
}

/// Handles a key press while the dialog is open.
pub fn handle_modal_input(modal: &mut ProjectModal, key: KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
        KeyCode::Char('c') => ModalAction::CopyLink,
        KeyCode::Up | KeyCode::Char('k') => {
            modal.scroll_up(1);
            ModalAction::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            modal.scroll_down(1);
            ModalAction::Continue
        }
        KeyCode::PageUp => {
            modal.scroll_up(10);
            ModalAction::Continue
        }
        KeyCode::PageDown => {
            modal.scroll_down(10);
            ModalAction::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            modal.scroll_to_top();
            ModalAction::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            modal.scroll_to_bottom();
            ModalAction::Continue
        }
        _ => ModalAction::Continue,
    }
}

pub(super) mod render {
    //! Dialog rendering, split out so the state above stays pure.

    use ratatui::layout::Rect;
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    };
    use ratatui::Frame;

    use super::super::theme::Theme;
    use super::super::centered_rect;
    use super::{classify, BodyLine, ProjectModal};

    /// Renders the dialog centered over `area`.
    pub fn render_project_modal(f: &mut Frame, area: Rect, modal: &mut ProjectModal, theme: &Theme) {
        let popup_area = centered_rect(70, 80, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(format!(" {} ", modal.project.title))
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.background));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!("▣ {}", modal.project.image),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(Span::styled(
                format!("→ {}", modal.project.link),
                Style::default().fg(theme.accent),
            )),
            Line::from(""),
        ];
        for raw in &modal.project.description {
            lines.push(match classify(raw) {
                BodyLine::Blank => Line::from(""),
                BodyLine::Heading => Line::from(Span::styled(
                    raw.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                BodyLine::Bullet => Line::from(vec![
                    Span::styled("  • ", Style::default().fg(theme.accent)),
                    Span::styled(
                        raw.trim_start_matches("- ").to_string(),
                        Style::default().fg(theme.text),
                    ),
                ]),
                BodyLine::Text => {
                    Line::from(Span::styled(raw.clone(), Style::default().fg(theme.text)))
                }
            });
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "c copy link · j/k scroll · Esc close",
            Style::default().fg(theme.text_muted),
        )));

        modal.total_lines = lines.len();
        let max = modal.total_lines.saturating_sub(1);
        modal.scroll_offset = modal.scroll_offset.min(max);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((modal.scroll_offset as u16, 0))
            .style(Style::default().bg(theme.background));
        f.render_widget(paragraph, inner);

        if modal.total_lines > inner.height as usize {
            let mut scrollbar_state =
                ScrollbarState::new(modal.total_lines).position(modal.scroll_offset);
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .style(Style::default().fg(theme.text_muted)),
                popup_area,
                &mut scrollbar_state,
            );
        }
    }
}
