//! xmenu-apps: Application menu generation for xmenu on Linux desktops.
//!
//! Provides:
//! - Icon theme indexing (size/scale matching, inheritance) and icon lookup
//! - Desktop entry parsing with visibility rules (NoDisplay, TryExec, OnlyShowIn, ...)
//! - Category folding and `Exec` field code expansion
//! - Menu assembly in xmenu's tab-indented format, and piping it through xmenu

pub mod catalog;
pub mod categories;
pub mod config;
pub mod desktop_entry;
pub mod error;
pub mod field_codes;
pub mod icons;
pub mod ini;
pub mod menu;
pub mod paths;
pub mod runner;
pub mod theme;
pub mod visibility;

pub use catalog::AppCatalog;
pub use config::MenuOptions;
pub use desktop_entry::Application;
pub use error::{MenuError, Result};
pub use icons::IconResolver;
pub use menu::{Menu, MenuEntry, MenuLine};
pub use paths::Environment;
pub use runner::MenuRunner;

/// Build the complete menu for `env`.
///
/// Icon directories are only indexed when icons are enabled.
pub fn generate_menu(env: &Environment, options: &MenuOptions) -> Menu {
    let icons = (!options.no_icon).then(|| IconResolver::for_theme(env, options));
    let catalog = AppCatalog::scan(env);
    Menu::build(catalog.apps(), icons.as_ref(), options)
}
