//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting the status bar hints with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::content::SectionId;

/// All possible actions in the main page context.
///
/// This enum represents every action a user can take while no overlay
/// is capturing input. It serves as the bridge between keyboard
/// shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === PAGE SCROLLING ===
    /// Scroll the page up one row.
    ScrollUp,
    /// Scroll the page down one row.
    ScrollDown,
    /// Scroll up one screen.
    PageUp,
    /// Scroll down one screen.
    PageDown,
    /// Jump to the top of the page.
    JumpToTop,
    /// Jump to the bottom of the page.
    JumpToBottom,

    // === SECTIONS ===
    /// Glide to the given section.
    JumpToSection(SectionId),

    // === THEME & MENU ===
    /// Flip between dark and light theme.
    ToggleTheme,
    /// Open or close the navigation drawer (narrow terminals).
    ToggleMenu,

    // === PORTFOLIO ===
    /// Advance the portfolio category filter.
    CycleFilter,
    /// Step the portfolio category filter backwards.
    CycleFilterBack,
    /// Select the previous visible portfolio item.
    SelectPrevious,
    /// Select the next visible portfolio item.
    SelectNext,

    // === ACTIVATION ===
    /// Context-dependent Enter: open project details in Portfolio,
    /// start editing in Contact.
    Activate,

    // === HELP ===
    /// Toggle the help overlay.
    ToggleHelp,

    // === GENERAL ===
    /// Quit the application.
    Quit,
    /// Dismiss transient state (status message).
    Cancel,
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the
/// main page context; overlays (drawer, dialogs, the form editor) route
/// their keys through their own handlers.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === PAGE SCROLLING ===
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToTop);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::JumpToBottom);
        self.register(ctx, K::Home, M::NONE, Action::JumpToTop);
        self.register(ctx, K::End, M::NONE, Action::JumpToBottom);

        // === SECTIONS ===
        for (i, &section) in SectionId::ALL.iter().enumerate() {
            let digit = char::from(b'1' + i as u8);
            self.register(ctx, K::Char(digit), M::NONE, Action::JumpToSection(section));
        }

        // === THEME & MENU ===
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('m'), M::NONE, Action::ToggleMenu);

        // === PORTFOLIO ===
        self.register(ctx, K::Char('f'), M::NONE, Action::CycleFilter);
        self.register(ctx, K::Char('F'), M::SHIFT, Action::CycleFilterBack);
        self.register(ctx, K::Left, M::NONE, Action::SelectPrevious);
        self.register(ctx, K::Right, M::NONE, Action::SelectNext);
        self.register(ctx, K::Char('h'), M::NONE, Action::SelectPrevious);
        self.register(ctx, K::Char('l'), M::NONE, Action::SelectNext);

        // === ACTIVATION ===
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char('i'), M::NONE, Action::Activate);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        // Test scrolling
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), Some(Action::ScrollUp));

        // Test theme toggle
        let event = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), Some(Action::ToggleTheme));
    }

    #[test]
    fn test_section_jump_digits() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(
            registry.lookup("main", event),
            Some(Action::JumpToSection(SectionId::Home))
        );

        let event = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(
            registry.lookup("main", event),
            Some(Action::JumpToSection(SectionId::Contact))
        );

        // No sixth section
        let event = KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), None);
    }

    #[test]
    fn test_filter_shortcuts() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("main", event), Some(Action::CycleFilter));

        let event = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup("main", event), Some(Action::CycleFilterBack));
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        // Vim keys should work for scrolling and selection
        assert_eq!(
            registry.lookup(
                "main",
                KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
            ),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            registry.lookup(
                "main",
                KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)
            ),
            Some(Action::ScrollUp)
        );
        assert_eq!(
            registry.lookup(
                "main",
                KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)
            ),
            Some(Action::SelectPrevious)
        );
        assert_eq!(
            registry.lookup(
                "main",
                KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)
            ),
            Some(Action::SelectNext)
        );
    }

    #[test]
    fn test_unknown_context_has_no_bindings() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("dialog", event), None);
    }

    #[test]
    fn test_quit_and_help() {
        let registry = ShortcutRegistry::new();
        assert!(registry.matches(
            "main",
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit
        ));
        assert!(registry.matches(
            "main",
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            Action::ToggleHelp
        ));
    }
}
