//! Popup input handlers (project dialog and help overlay).

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::project_modal::{self, ModalAction};
use crate::tui::{AppState, PopupType, ToastSeverity};

/// Handle input when a popup is active
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::ProjectDetails) => handle_project_dialog_input(state, key),
        Some(PopupType::HelpOverlay) => handle_help_overlay_input(state, key),
        None => Ok(false),
    }
}

/// Handle input for the project detail dialog
fn handle_project_dialog_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(modal) = state.modal.as_mut() else {
        state.close_popup();
        return Ok(false);
    };
    match project_modal::handle_modal_input(modal, key) {
        ModalAction::Continue => {}
        ModalAction::Close => state.close_popup(),
        ModalAction::CopyLink => copy_project_link(state),
    }
    Ok(false)
}

/// Copy the open project's link to the system clipboard.
fn copy_project_link(state: &mut AppState) {
    let Some(link) = state.modal.as_ref().map(|m| m.project.link.clone()) else {
        return;
    };
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(link)) {
        Ok(()) => state
            .toasts
            .show("Link copied to clipboard", ToastSeverity::Info),
        Err(e) => state
            .toasts
            .show(format!("Failed to copy link: {e}"), ToastSeverity::Error),
    }
}

/// Handle input for the help overlay
fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | '?') => {
            state.active_popup = None;
        }
        KeyCode::Up | KeyCode::Char('k') => state.help_overlay.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => state.help_overlay.scroll_down(),
        KeyCode::PageUp => {
            let page = state.help_visible_height();
            state.help_overlay.page_up(page);
        }
        KeyCode::PageDown => {
            let page = state.help_visible_height();
            state.help_overlay.page_down(page);
        }
        KeyCode::Home | KeyCode::Char('g') => state.help_overlay.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => state.help_overlay.scroll_to_bottom(),
        _ => {}
    }
    Ok(false)
}
