//! Action dispatch for the main context.

use anyhow::Result;

use crate::content::SectionId;
use crate::shortcuts::Action;
use crate::tui::{AppState, HelpOverlayState, NavigationState, PopupType};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::ScrollUp => {
            state.scroll_page(-1);
            Ok(false)
        }
        Action::ScrollDown => {
            state.scroll_page(1);
            Ok(false)
        }
        Action::PageUp => {
            let rows = state.page_viewport().1 as isize;
            state.scroll_page(-rows);
            Ok(false)
        }
        Action::PageDown => {
            let rows = state.page_viewport().1 as isize;
            state.scroll_page(rows);
            Ok(false)
        }
        Action::JumpToTop => {
            state.go_to_section(SectionId::Home);
            Ok(false)
        }
        Action::JumpToBottom => {
            state.pinned_section = None;
            let bottom = state.scroll.max_offset();
            state.scroll.glide_to(bottom);
            Ok(false)
        }
        Action::JumpToSection(section) => {
            state.go_to_section(section);
            Ok(false)
        }
        Action::ToggleTheme => {
            state.toggle_theme();
            Ok(false)
        }
        Action::ToggleMenu => handle_toggle_menu(state),
        Action::CycleFilter => handle_cycle_filter(state, true),
        Action::CycleFilterBack => handle_cycle_filter(state, false),
        Action::SelectPrevious => {
            state.portfolio.select_previous();
            Ok(false)
        }
        Action::SelectNext => {
            state.portfolio.select_next();
            Ok(false)
        }
        Action::Activate => handle_activate(state),
        Action::ToggleHelp => {
            state.help_overlay = HelpOverlayState::new();
            state.active_popup = Some(PopupType::HelpOverlay);
            Ok(false)
        }
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        // Nothing to cancel in the main context
        Action::Cancel => Ok(false),
    }
}

/// Toggle the navigation drawer. On wide terminals the sidebar is
/// always on screen, so there is nothing to toggle.
fn handle_toggle_menu(state: &mut AppState) -> Result<bool> {
    if NavigationState::is_wide(state.viewport.0) {
        state.set_status("Menu is pinned on wide terminals");
        return Ok(false);
    }
    let active = state.active_section();
    state.nav.toggle_drawer(active);
    Ok(false)
}

/// Advance (or rewind) the portfolio filter and relayout, since the
/// grid height depends on how many cards the filter keeps.
fn handle_cycle_filter(state: &mut AppState, forward: bool) -> Result<bool> {
    state.portfolio.cycle_filter(forward);
    state.relayout();
    let label = state.portfolio.active_tag().unwrap_or("all").to_string();
    state.set_status(format!("Filter: {label}"));
    Ok(false)
}

/// Enter acts on the active section: open the selected project card,
/// or start editing the contact form.
fn handle_activate(state: &mut AppState) -> Result<bool> {
    match state.active_section() {
        Some(SectionId::Portfolio) => state.open_project_modal(),
        Some(SectionId::Contact) => state.contact.begin_editing(),
        _ => {}
    }
    Ok(false)
}
