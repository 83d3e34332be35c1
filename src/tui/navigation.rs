//! Responsive navigation: a persistent sidebar on wide terminals, a
//! toggleable drawer overlay on narrow ones.
//!
//! While the drawer is open it captures all input, so the page behind it
//! cannot scroll. Resizing to a wide terminal force-closes the drawer
//! because the sidebar takes over.

use crossterm::event::{KeyCode, KeyEvent};

use crate::content::SectionId;

/// Terminals at least this many columns wide get the persistent sidebar.
pub const WIDE_BREAKPOINT_COLS: u16 = 100;
/// Width of the persistent sidebar.
pub const SIDEBAR_COLS: u16 = 20;

/// What a key press inside the open drawer asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    /// Key handled (or ignored); drawer stays open.
    Continue,
    /// Close the drawer without navigating.
    Close,
    /// Close the drawer and jump to this section.
    Activate(SectionId),
}

/// Sidebar/drawer state.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    drawer_open: bool,
    selected: usize,
}

impl NavigationState {
    /// Creates the state with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `width` columns get the persistent sidebar.
    #[must_use]
    pub fn is_wide(width: u16) -> bool {
        width >= WIDE_BREAKPOINT_COLS
    }

    /// Whether the drawer overlay is open.
    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Index of the highlighted drawer link.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The section the highlighted drawer link points at.
    #[must_use]
    pub fn selected_section(&self) -> SectionId {
        SectionId::ALL[self.selected.min(SectionId::ALL.len() - 1)]
    }

    /// Opens the drawer with the link for `active` highlighted.
    pub fn open_drawer(&mut self, active: Option<SectionId>) {
        self.drawer_open = true;
        self.selected = active.map(|s| s.index()).unwrap_or(0);
    }

    /// Closes the drawer.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Toggles the drawer, highlighting the `active` link when opening.
    pub fn toggle_drawer(&mut self, active: Option<SectionId>) {
        if self.drawer_open {
            self.close_drawer();
        } else {
            self.open_drawer(active);
        }
    }

    /// Moves the highlight down one link, saturating at the last.
    pub fn select_next(&mut self) {
        if self.selected + 1 < SectionId::ALL.len() {
            self.selected += 1;
        }
    }

    /// Moves the highlight up one link, saturating at the first.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Reacts to a terminal resize: the drawer cannot stay open once the
    /// sidebar takes over.
    pub fn handle_resize(&mut self, width: u16) {
        if Self::is_wide(width) {
            self.drawer_open = false;
        }
    }
}

/// Handles a key press while the drawer is open.
pub fn handle_drawer_input(nav: &mut NavigationState, key: KeyEvent) -> DrawerAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => DrawerAction::Close,
        KeyCode::Up | KeyCode::Char('k') => {
            nav.select_previous();
            DrawerAction::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            nav.select_next();
            DrawerAction::Continue
        }
        KeyCode::Enter => DrawerAction::Activate(nav.selected_section()),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let index = (c as usize).wrapping_sub('1' as usize);
            match SectionId::ALL.get(index) {
                Some(&section) => DrawerAction::Activate(section),
                None => DrawerAction::Continue,
            }
        }
        _ => DrawerAction::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_breakpoint_boundary() {
        assert!(!NavigationState::is_wide(99));
        assert!(NavigationState::is_wide(100));
        assert!(NavigationState::is_wide(180));
    }

    #[test]
    fn test_toggle_drawer() {
        let mut nav = NavigationState::new();
        assert!(!nav.drawer_open());
        nav.toggle_drawer(None);
        assert!(nav.drawer_open());
        nav.toggle_drawer(None);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn test_open_highlights_active_section() {
        let mut nav = NavigationState::new();
        nav.open_drawer(Some(SectionId::Skills));
        assert_eq!(nav.selected_section(), SectionId::Skills);
        nav.close_drawer();
        nav.open_drawer(None);
        assert_eq!(nav.selected_section(), SectionId::Home);
    }

    #[test]
    fn test_selection_saturates() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        nav.select_previous();
        assert_eq!(nav.selected(), 0);
        for _ in 0..10 {
            nav.select_next();
        }
        assert_eq!(nav.selected(), SectionId::ALL.len() - 1);
    }

    #[test]
    fn test_resize_to_wide_closes_drawer() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        nav.handle_resize(120);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn test_resize_narrow_keeps_drawer() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        nav.handle_resize(80);
        assert!(nav.drawer_open());
    }

    #[test]
    fn test_drawer_input_escape_closes() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        assert_eq!(handle_drawer_input(&mut nav, key(KeyCode::Esc)), DrawerAction::Close);
        assert_eq!(
            handle_drawer_input(&mut nav, key(KeyCode::Char('m'))),
            DrawerAction::Close
        );
    }

    #[test]
    fn test_drawer_input_moves_highlight() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        handle_drawer_input(&mut nav, key(KeyCode::Char('j')));
        assert_eq!(nav.selected(), 1);
        handle_drawer_input(&mut nav, key(KeyCode::Up));
        assert_eq!(nav.selected(), 0);
    }

    #[test]
    fn test_drawer_enter_activates_highlighted_link() {
        let mut nav = NavigationState::new();
        nav.open_drawer(Some(SectionId::About));
        assert_eq!(
            handle_drawer_input(&mut nav, key(KeyCode::Enter)),
            DrawerAction::Activate(SectionId::About)
        );
    }

    #[test]
    fn test_drawer_digits_jump_directly() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        assert_eq!(
            handle_drawer_input(&mut nav, key(KeyCode::Char('4'))),
            DrawerAction::Activate(SectionId::Portfolio)
        );
        assert_eq!(
            handle_drawer_input(&mut nav, key(KeyCode::Char('9'))),
            DrawerAction::Continue
        );
    }

    #[test]
    fn test_drawer_swallows_unrelated_keys() {
        let mut nav = NavigationState::new();
        nav.open_drawer(None);
        assert_eq!(
            handle_drawer_input(&mut nav, key(KeyCode::Char('t'))),
            DrawerAction::Continue
        );
    }
}
