//! Section line builders for the scrolling page.
//!
//! Every section has a height function and a line builder, kept side by
//! side so they cannot drift apart: the builder always produces exactly
//! the number of rows the height function reports for the same width.
//! [`build_page_lines`] stitches the sections together with the gap rows
//! the layout uses, so the assembled page matches [`PageLayout::stack`]
//! row for row.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{SectionId, SiteContent};

use super::contact_form::{ContactForm, FormField};
use super::page::{PageLayout, SECTION_GAP};
use super::particles::ParticleField;
use super::portfolio::PortfolioState;
use super::skills::{self, SkillBars};
use super::theme::Theme;
use super::typing::TypingAnimator;
use super::AppState;

/// Fixed height of the hero banner.
pub const HERO_HEIGHT: usize = 14;

const INDENT: &str = "  ";
const GREETING_ROW: usize = 3;
const NAME_ROW: usize = 4;
const TYPED_ROW: usize = 6;
const HINT_ROW: usize = HERO_HEIGHT - 2;

/// Columns available for wrapped text at a given page width.
fn text_width(width: u16) -> usize {
    (width as usize).saturating_sub(4).max(10)
}

/// Greedy word wrap. Never returns an empty vec; a blank input yields
/// one blank line so heights stay stable.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Keeps the tail of an overlong value visible (where the cursor sits).
fn fit_tail(value: &str, avail: usize) -> String {
    let count = value.chars().count();
    if count <= avail {
        return value.to_string();
    }
    let keep = avail.saturating_sub(1);
    let tail: String = value.chars().skip(count - keep).collect();
    format!("…{tail}")
}

/// "app" -> "App", for filter chips.
fn display_tag(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn header_line(title: &str, width: u16, theme: &Theme) -> Line<'static> {
    let total = (width as usize).saturating_sub(2).min(60);
    let prefix = format!("── {title} ");
    let fill = total.saturating_sub(prefix.chars().count());
    Line::from(Span::styled(
        format!("{prefix}{}", "─".repeat(fill)),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn centered_line(text: String, width: u16, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text.chars().count()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text, style),
    ])
}

// ---------------------------------------------------------------------------
// Hero

/// Height of the hero banner.
#[must_use]
pub fn hero_height() -> usize {
    HERO_HEIGHT
}

/// Builds the hero banner: drifting particles behind a centered
/// greeting, the name, the typewriter line, and a scroll hint.
#[must_use]
pub fn hero_lines(
    content: &SiteContent,
    typing: &TypingAnimator,
    particles: &ParticleField,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let w = width.max(1) as usize;
    let mut cells: Vec<Vec<Option<(&'static str, Style)>>> = vec![vec![None; w]; HERO_HEIGHT];
    for particle in particles.particles() {
        let (dx, dy) = particle.drift_offset();
        let col = particle.x_pct * (w.saturating_sub(1)) as f64 + dx;
        let row = particle.y_pct * (HERO_HEIGHT - 1) as f64 + dy;
        if col < 0.0 || row < 0.0 {
            continue;
        }
        let (col, row) = (col.round() as usize, row.round() as usize);
        if col >= w || row >= HERO_HEIGHT {
            continue;
        }
        let style = if particle.opacity < 0.35 {
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::DIM)
        } else if particle.opacity < 0.55 {
            Style::default()
                .fg(theme.particle)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(theme.particle)
        };
        cells[row][col] = Some((particle.glyph(), style));
    }

    (0..HERO_HEIGHT)
        .map(|row| match row {
            GREETING_ROW => centered_line(
                "Hi, I'm".to_string(),
                width,
                Style::default().fg(theme.text_secondary),
            ),
            NAME_ROW => centered_line(
                content.name.clone(),
                width,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            TYPED_ROW => centered_line(
                format!("{}█", typing.visible_text()),
                width,
                Style::default().fg(theme.accent),
            ),
            HINT_ROW => centered_line(
                "↓ scroll to explore".to_string(),
                width,
                Style::default().fg(theme.text_muted),
            ),
            _ => {
                let mut spans = Vec::new();
                let mut blanks = 0usize;
                for cell in &cells[row] {
                    match cell {
                        None => blanks += 1,
                        Some((glyph, style)) => {
                            if blanks > 0 {
                                spans.push(Span::raw(" ".repeat(blanks)));
                                blanks = 0;
                            }
                            spans.push(Span::styled(*glyph, *style));
                        }
                    }
                }
                Line::from(spans)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// About

/// Height of the about section at `width` columns.
#[must_use]
pub fn about_height(content: &SiteContent, width: u16) -> usize {
    let w = text_width(width);
    let body: usize = content
        .about
        .iter()
        .map(|para| wrap_text(para, w).len())
        .sum();
    2 + body + content.about.len().saturating_sub(1)
}

/// Builds the about section: header plus wrapped paragraphs.
#[must_use]
pub fn about_lines(content: &SiteContent, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let w = text_width(width);
    let mut lines = vec![
        header_line(SectionId::About.title(), width, theme),
        Line::from(""),
    ];
    for (i, para) in content.about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for wrapped in wrap_text(para, w) {
            lines.push(Line::from(Span::styled(
                format!("{INDENT}{wrapped}"),
                Style::default().fg(theme.text),
            )));
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Skills

/// Height of the skills section.
#[must_use]
pub fn skills_height(content: &SiteContent) -> usize {
    skills::HEADER_ROWS + content.skills.len() * skills::ROWS_PER_SKILL
}

/// Builds the skills section: a label row and an animated bar row per
/// skill. The bar row fills to the percent the reveal state reports.
#[must_use]
pub fn skills_lines(
    content: &SiteContent,
    bars: &SkillBars,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let bar_width = text_width(width).min(40);
    let mut lines = vec![
        header_line(SectionId::Skills.title(), width, theme),
        Line::from(""),
    ];
    for (i, skill) in content.skills.iter().enumerate() {
        let label = format!(
            "{INDENT}{:<pad$}{:>3}%",
            skill.name,
            bars.target_percent(i),
            pad = bar_width.saturating_sub(4)
        );
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(theme.text),
        )));
        let filled = usize::from(bars.displayed_percent(i)) * bar_width / 100;
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("█".repeat(filled), Style::default().fg(theme.accent)),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(theme.text_muted),
            ),
        ]));
    }
    lines
}

// ---------------------------------------------------------------------------
// Portfolio

/// Height of the portfolio section under the current filter.
#[must_use]
pub fn portfolio_height(portfolio: &PortfolioState) -> usize {
    3 + portfolio.visible_indices().len().max(1)
}

/// Builds the portfolio section: header, filter chips, and the visible
/// items with the selection marker. Items are dimmed while the
/// post-filter fade is running.
#[must_use]
pub fn portfolio_lines(
    portfolio: &PortfolioState,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(SectionId::Portfolio.title(), width, theme)];

    let mut chips: Vec<Span> = vec![Span::styled(
        format!("{INDENT}Filter: "),
        Style::default().fg(theme.text_secondary),
    )];
    for (i, tag) in portfolio.tags().iter().enumerate() {
        if i == portfolio.active_tag_index() {
            chips.push(Span::styled(
                format!("[{}]", display_tag(tag)),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            chips.push(Span::styled(
                format!(" {} ", display_tag(tag)),
                Style::default().fg(theme.text_muted),
            ));
        }
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));
    lines.push(Line::from(""));

    let visible = portfolio.visible_indices();
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}(no projects in this category)"),
            Style::default().fg(theme.text_muted),
        )));
        return lines;
    }

    let fade = if portfolio.is_fading() {
        Modifier::DIM
    } else {
        Modifier::empty()
    };
    for index in visible {
        let Some(item) = portfolio.items().get(index) else {
            continue;
        };
        let selected = portfolio.selected() == Some(index);
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | fade)
        } else {
            Style::default().fg(theme.text).add_modifier(fade)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{INDENT}{marker}"),
                Style::default().fg(theme.accent),
            ),
            Span::styled(item.title.clone(), title_style),
            Span::styled(
                format!("  ·  {}", display_tag(&item.category)),
                Style::default().fg(theme.text_muted).add_modifier(fade),
            ),
        ]));
    }
    lines
}

// ---------------------------------------------------------------------------
// Contact

/// Height of the contact section at `width` columns.
#[must_use]
pub fn contact_height(content: &SiteContent, width: u16) -> usize {
    8 + wrap_text(&content.contact_intro, text_width(width)).len()
}

/// Builds the contact section: intro, the four labelled inputs, and the
/// submit control. The focused control is highlighted while editing.
#[must_use]
pub fn contact_lines(
    content: &SiteContent,
    form: &ContactForm,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let w = text_width(width);
    let mut lines = vec![header_line(SectionId::Contact.title(), width, theme)];
    for wrapped in wrap_text(&content.contact_intro, w) {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}{wrapped}"),
            Style::default().fg(theme.text_secondary),
        )));
    }
    lines.push(Line::from(""));

    let value_width = w.saturating_sub(16).max(8);
    for field in [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ] {
        let focused = form.editing && form.active_field == field;
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        let mut value = fit_tail(form.field_value(field), value_width);
        if focused {
            value.push('█');
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{INDENT}{:>12}  ", field.label()), label_style),
            Span::styled(value, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));

    let submit_focused = form.editing && form.active_field == FormField::Submit;
    let submit_style = if form.is_pending() {
        Style::default().fg(theme.text_muted)
    } else if submit_focused {
        Style::default()
            .fg(theme.accent)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    };
    lines.push(Line::from(vec![
        Span::raw(format!("{INDENT}{:>12}  ", "")),
        Span::styled(format!("[ {} ]", form.submit_label()), submit_style),
    ]));
    lines
}

// ---------------------------------------------------------------------------
// Assembly

/// Heights of every section at `width` columns, in page order.
#[must_use]
pub fn section_heights(
    content: &SiteContent,
    portfolio: &PortfolioState,
    width: u16,
) -> Vec<(SectionId, usize)> {
    vec![
        (SectionId::Home, hero_height()),
        (SectionId::About, about_height(content, width)),
        (SectionId::Skills, skills_height(content)),
        (SectionId::Portfolio, portfolio_height(portfolio)),
        (SectionId::Contact, contact_height(content, width)),
    ]
}

/// Builds the full page, gap rows included. The result always has
/// exactly [`PageLayout::total_height`] rows for the same width, which
/// is what keeps scroll-spy and the visibility passes honest.
#[must_use]
pub fn build_page_lines(state: &AppState, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, &(id, _)) in section_heights(&state.content, &state.portfolio, width)
        .iter()
        .enumerate()
    {
        if i > 0 {
            for _ in 0..SECTION_GAP {
                lines.push(Line::from(""));
            }
        }
        let section = match id {
            SectionId::Home => hero_lines(
                &state.content,
                &state.typing,
                &state.particles,
                &state.theme,
                width,
            ),
            SectionId::About => about_lines(&state.content, &state.theme, width),
            SectionId::Skills => skills_lines(&state.content, &state.skills, &state.theme, width),
            SectionId::Portfolio => portfolio_lines(&state.portfolio, &state.theme, width),
            SectionId::Contact => {
                contact_lines(&state.content, &state.contact, &state.theme, width)
            }
        };
        lines.extend(section);
    }
    lines
}

/// Recomputes the page layout for the current section heights.
#[must_use]
pub fn layout_page(content: &SiteContent, portfolio: &PortfolioState, width: u16) -> PageLayout {
    PageLayout::stack(&section_heights(content, portfolio, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn content() -> SiteContent {
        SiteContent::builtin()
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let wrapped = wrap_text("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_blank_is_one_line() {
        assert_eq!(wrap_text("", 20).len(), 1);
        assert_eq!(wrap_text("   ", 20).len(), 1);
    }

    #[test]
    fn test_fit_tail_keeps_cursor_end() {
        assert_eq!(fit_tail("short", 10), "short");
        assert_eq!(fit_tail("abcdefghij", 5), "…ghij");
    }

    #[test]
    fn test_display_tag_capitalizes() {
        assert_eq!(display_tag("app"), "App");
        assert_eq!(display_tag("all"), "All");
        assert_eq!(display_tag(""), "");
    }

    #[test]
    fn test_hero_lines_match_height() {
        let content = content();
        let typing = TypingAnimator::new(content.typing_phrases.clone());
        let mut rng = StdRng::seed_from_u64(3);
        let particles = ParticleField::spawn_with(&mut rng, 30);
        let lines = hero_lines(&content, &typing, &particles, &Theme::dark(), 80);
        assert_eq!(lines.len(), hero_height());
    }

    #[test]
    fn test_about_lines_match_height() {
        let content = content();
        for width in [40u16, 80, 120] {
            let lines = about_lines(&content, &Theme::dark(), width);
            assert_eq!(lines.len(), about_height(&content, width), "width {width}");
        }
    }

    #[test]
    fn test_skills_lines_match_height() {
        let content = content();
        let bars = SkillBars::new(content.skills.iter().map(|s| s.percent).collect());
        let lines = skills_lines(&content, &bars, &Theme::dark(), 80);
        assert_eq!(lines.len(), skills_height(&content));
    }

    #[test]
    fn test_portfolio_lines_match_height_across_filters() {
        let content = content();
        let mut portfolio =
            PortfolioState::new(content.portfolio.clone(), content.filter_tags.clone());
        for _ in 0..portfolio.tags().len() {
            let lines = portfolio_lines(&portfolio, &Theme::dark(), 80);
            assert_eq!(lines.len(), portfolio_height(&portfolio));
            portfolio.cycle_filter(true);
        }
    }

    #[test]
    fn test_contact_lines_match_height() {
        let content = content();
        let form = ContactForm::new();
        for width in [40u16, 80, 120] {
            let lines = contact_lines(&content, &form, &Theme::dark(), width);
            assert_eq!(lines.len(), contact_height(&content, width), "width {width}");
        }
    }

    #[test]
    fn test_empty_filter_keeps_placeholder_row() {
        let portfolio = PortfolioState::new(Vec::new(), vec!["all".to_string()]);
        let lines = portfolio_lines(&portfolio, &Theme::dark(), 80);
        assert_eq!(lines.len(), portfolio_height(&portfolio));
        assert_eq!(portfolio_height(&portfolio), 4);
    }

    #[test]
    fn test_section_heights_cover_every_section() {
        let content = content();
        let portfolio =
            PortfolioState::new(content.portfolio.clone(), content.filter_tags.clone());
        let heights = section_heights(&content, &portfolio, 80);
        let ids: Vec<SectionId> = heights.iter().map(|&(id, _)| id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        assert!(heights.iter().all(|&(_, h)| h > 0));
    }
}
