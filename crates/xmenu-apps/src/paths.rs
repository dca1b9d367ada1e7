//! Path helpers for XDG directories and config files.

use crate::ini;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Generic pixmap directory, always searched after every theme directory.
pub const PIXMAPS_DIR: &str = "/usr/share/pixmaps";

const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Theme used when neither the options nor GTK settings name one.
pub const DEFAULT_ICON_THEME: &str = "hicolor";

/// Process environment the menu is built against.
///
/// Built once from the real environment by [`Environment::from_env`], or
/// field by field when pointing the pipeline at fixture directories.
#[derive(Clone, Debug)]
pub struct Environment {
    /// XDG data directories in search order (highest priority first).
    pub data_dirs: Vec<PathBuf>,
    /// Directories from `$PATH`, used for `TryExec`.
    pub exec_search_path: Vec<PathBuf>,
    /// `$XDG_CONFIG_HOME`.
    pub config_home: PathBuf,
    /// Tokens from `$XDG_CURRENT_DESKTOP`.
    pub current_desktops: Vec<String>,
    pub pixmaps_dir: PathBuf,
}

impl Environment {
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_default();

        let data_home = dirs::data_dir().unwrap_or_else(|| home.join(".local/share"));
        let xdg_data_dirs = std::env::var("XDG_DATA_DIRS").ok();
        let data_dirs = data_search_path(data_home, xdg_data_dirs.as_deref());

        let config_home = dirs::config_dir().unwrap_or_else(|| home.join(".config"));
        let path = std::env::var("PATH").unwrap_or_default();
        let desktops = std::env::var("XDG_CURRENT_DESKTOP").unwrap_or_default();

        Self {
            data_dirs,
            exec_search_path: split_path_list(&path),
            config_home,
            current_desktops: split_desktops(&desktops),
            pixmaps_dir: PathBuf::from(PIXMAPS_DIR),
        }
    }

    /// Every `<data-dir>/applications` directory, in search order.
    pub fn application_directories(&self) -> Vec<PathBuf> {
        self.data_dirs
            .iter()
            .map(|dir| dir.join("applications"))
            .collect()
    }

    /// Root of `theme` inside one data directory.
    pub fn theme_root(data_dir: &Path, theme: &str) -> PathBuf {
        data_dir.join("icons").join(theme)
    }

    /// Pick the icon theme: the configured one, else GTK 3 settings, else hicolor.
    pub fn resolve_icon_theme(&self, configured: &str) -> String {
        if !configured.is_empty() {
            return configured.to_string();
        }
        detect_icon_theme(&self.config_home).unwrap_or_else(|| DEFAULT_ICON_THEME.to_string())
    }
}

/// Read `gtk-icon-theme-name` from `<config-home>/gtk-3.0/settings.ini`.
pub fn detect_icon_theme(config_home: &Path) -> Option<String> {
    let settings = config_home.join("gtk-3.0").join("settings.ini");
    if !settings.exists() {
        return None;
    }

    debug!("Reading GTK settings: {}", settings.display());
    match ini::find_value(&settings, "Settings", "gtk-icon-theme-name") {
        Ok(theme) => theme.filter(|t| !t.is_empty()),
        Err(e) => {
            warn!("Failed to parse GTK settings: {}", e);
            None
        }
    }
}

/// Data directories in search order: `data_home` first, then `$XDG_DATA_DIRS`
/// (or its default when unset or empty), without duplicates.
pub fn data_search_path(data_home: PathBuf, xdg_data_dirs: Option<&str>) -> Vec<PathBuf> {
    let xdg_data_dirs = xdg_data_dirs
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_DATA_DIRS);

    let mut data_dirs = vec![data_home];
    for dir in split_path_list(xdg_data_dirs) {
        if !data_dirs.contains(&dir) {
            data_dirs.push(dir);
        }
    }
    data_dirs
}

/// Split a colon-separated list of directories, dropping empty items.
pub fn split_path_list(list: &str) -> Vec<PathBuf> {
    list.split(':')
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub fn split_desktops(list: &str) -> Vec<String> {
    list.split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
