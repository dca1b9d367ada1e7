//! Desktop entry parsing.

use crate::categories::{OTHERS, classify};
use crate::error::Result;
use crate::ini::IniReader;
use crate::paths::Environment;
use crate::visibility::VisibilityCheck;
use std::path::{Path, PathBuf};

const DESKTOP_ENTRY_SECTION: &str = "Desktop Entry";

/// Parsed from .desktop files.
#[derive(Clone, Debug, Default)]
pub struct Application {
    pub name: String,
    pub generic_name: String,
    pub exec: String,
    pub icon: String,
    /// Working directory (`Path=`).
    pub path: String,
    pub terminal: bool,
    /// Value of the `Type` key.
    pub kind: String,
    /// Raw `Categories=` value.
    pub categories: String,
    /// Menu section derived from `categories`.
    pub category: String,
    pub desktop_file: PathBuf,
    /// Set when a visibility rule hid the entry.
    pub suppressed: bool,
}

impl Application {
    /// Record one `[Desktop Entry]` key.
    pub fn apply(&mut self, key: &str, value: &str) {
        match key {
            "Name" => self.name = value.to_string(),
            "GenericName" => self.generic_name = value.to_string(),
            "Exec" => self.exec = value.to_string(),
            "Icon" => self.icon = value.to_string(),
            "Path" => self.path = value.to_string(),
            "Terminal" => self.terminal = value == "true",
            "Type" => self.kind = value.to_string(),
            "Categories" => {
                self.categories = value.to_string();
                self.category = classify(value).to_string();
            }
            _ => {}
        }
    }

    /// Only launchable, visible applications end up in the menu.
    pub fn is_displayable(&self) -> bool {
        !self.suppressed
            && self.kind == "Application"
            && !self.exec.is_empty()
            && !self.name.is_empty()
    }

    /// Name shown in the menu, optionally with the generic name appended.
    pub fn display_name(&self, with_generic_name: bool) -> String {
        if with_generic_name && !self.generic_name.is_empty() {
            format!("{} ({})", self.name, self.generic_name)
        } else {
            self.name.clone()
        }
    }
}

/// Parse a .desktop file, deciding visibility in the same pass.
pub fn parse_desktop_file(path: &Path, env: &Environment) -> Result<Application> {
    let mut app = Application {
        category: OTHERS.to_string(),
        desktop_file: path.to_path_buf(),
        ..Default::default()
    };
    let mut visibility = VisibilityCheck::new(env);

    for entry in IniReader::open(path)? {
        let entry = entry?;
        if entry.section != DESKTOP_ENTRY_SECTION {
            continue;
        }
        app.apply(&entry.key, &entry.value);
        visibility.feed(&entry.key, &entry.value);
    }

    app.suppressed = visibility.is_suppressed();
    Ok(app)
}
