//! Input handler modules for different TUI contexts.

pub mod actions;
pub mod drawer;
pub mod form;
pub mod main;
pub mod popups;

// Re-export handler functions
pub use actions::dispatch_action;
pub use drawer::handle_drawer_keys;
pub use form::handle_form_keys;
pub use main::handle_main_input;
pub use popups::handle_popup_input;
