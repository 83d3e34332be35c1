//! Navigation drawer input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::navigation::{self, DrawerAction};
use crate::tui::AppState;

/// Handle input while the drawer is open (it captures everything)
pub fn handle_drawer_keys(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match navigation::handle_drawer_input(&mut state.nav, key) {
        DrawerAction::Continue => {}
        DrawerAction::Close => state.nav.close_drawer(),
        DrawerAction::Activate(section) => {
            state.nav.close_drawer();
            state.go_to_section(section);
        }
    }
    Ok(false)
}
