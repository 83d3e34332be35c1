//! Termfolio Library
//!
//! This library provides the core functionality for the Termfolio
//! application: the built-in page content, persisted configuration, and
//! the terminal UI components that animate and render the page.

// Module declarations
pub mod branding;
pub mod config;
pub mod content;
pub mod shortcuts;
pub mod tui;
