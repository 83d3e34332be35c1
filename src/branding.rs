//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths,
//! descriptions) so a fork only needs to edit one file.

/// The human-readable display name of the application.
///
/// Used in:
/// - The title bar
/// - Help text
/// - Startup messages
pub const APP_DISPLAY_NAME: &str = "Termfolio";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Command examples in documentation
pub const APP_BINARY_NAME: &str = "termfolio";

/// The directory name for application data (currently just the config file).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Termfolio";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Interactive terminal portfolio";
