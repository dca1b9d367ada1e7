//! Show/hide decision for desktop entries.
//!
//! Each key of the `[Desktop Entry]` section is checked as it is read. Any
//! veto suppresses the entry for good; later keys cannot bring it back.

use crate::paths::Environment;
use log::debug;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Streaming visibility check for one desktop entry.
pub struct VisibilityCheck<'a> {
    env: &'a Environment,
    suppressed: bool,
}

impl<'a> VisibilityCheck<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self {
            env,
            suppressed: false,
        }
    }

    pub fn feed(&mut self, key: &str, value: &str) {
        if self.suppressed {
            return;
        }

        let veto = match key {
            "NoDisplay" | "Hidden" => value == "true",
            "Type" => value != "Application",
            "TryExec" => !value.is_empty() && !find_executable(value, &self.env.exec_search_path),
            "NotShowIn" => shown_in(value, &self.env.current_desktops),
            "OnlyShowIn" => !shown_in(value, &self.env.current_desktops),
            _ => false,
        };

        if veto {
            debug!("Suppressed by {}={}", key, value);
            self.suppressed = true;
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }
}

/// Does the `;`-separated desktop list name any of the current desktops?
fn shown_in(list: &str, current_desktops: &[String]) -> bool {
    list.split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .any(|d| current_desktops.iter().any(|current| current == d))
}

/// Locate `command` as an executable regular file.
///
/// Absolute commands are checked directly; anything else is tried against
/// each search directory in order.
pub fn find_executable<P: AsRef<Path>>(command: &str, search_path: &[P]) -> bool {
    if command.starts_with('/') {
        return is_executable(Path::new(command));
    }

    search_path
        .iter()
        .any(|dir| is_executable(&dir.as_ref().join(command)))
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
