//! Contact form input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::contact_form::{self, FormAction, SubmitAttempt};
use crate::tui::{AppState, ToastSeverity};

/// Handle input while the contact form has focus
pub fn handle_form_keys(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match contact_form::handle_form_input(&mut state.contact, key) {
        FormAction::Continue => {}
        FormAction::Exit => {
            state.contact.stop_editing();
            state.set_status("Ready");
        }
        FormAction::Submit => submit(state),
    }
    Ok(false)
}

/// Start the simulated submit, or surface why it cannot start.
fn submit(state: &mut AppState) {
    match state.contact.submit() {
        SubmitAttempt::Started => state.set_status("Sending message..."),
        SubmitAttempt::Invalid(message) => state.toasts.show(message, ToastSeverity::Error),
        SubmitAttempt::AlreadyPending => state.set_status("Still sending..."),
    }
}
