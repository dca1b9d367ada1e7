//! Icon lookup through an ordered list of theme directories.

use crate::config::MenuOptions;
use crate::paths::Environment;
use crate::theme::find_icon_directories;
use log::debug;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions tried for each directory, in priority order.
pub const ICON_EXTENSIONS: [&str; 3] = ["svg", "png", "xpm"];

/// One directory on the icon search path.
#[derive(Debug)]
pub struct IconDirectory {
    pub path: PathBuf,
    /// Entry names read when the directory was opened; `None` if it could not be read.
    entries: Option<HashSet<OsString>>,
}

impl IconDirectory {
    /// Open the directory and snapshot its entries for fast probing.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_dir(&path) {
            Ok(dir) => Some(dir.filter_map(|e| e.ok()).map(|e| e.file_name()).collect()),
            Err(e) => {
                debug!("Cannot open icon directory {}: {}", path.display(), e);
                None
            }
        };
        Self { path, entries }
    }

    pub fn is_open(&self) -> bool {
        self.entries.is_some()
    }

    /// Does `file_name` exist directly inside this directory?
    ///
    /// A snapshot hit is confirmed with a stat so dangling symlinks are skipped.
    pub fn contains(&self, file_name: &str) -> bool {
        match &self.entries {
            Some(entries) if !file_name.contains('/') => {
                entries.contains(OsStr::new(file_name)) && self.path.join(file_name).exists()
            }
            _ => self.path.join(file_name).exists(),
        }
    }
}

/// Resolves icon names to files through an ordered directory list.
pub struct IconResolver {
    directories: Vec<IconDirectory>,
    fallback: PathBuf,
}

impl IconResolver {
    /// Open `directories` (already in probe order) and resolve `fallback_icon` once.
    ///
    /// When the fallback icon itself cannot be found the fallback path is empty.
    pub fn new(directories: Vec<PathBuf>, fallback_icon: &str) -> Self {
        let directories: Vec<IconDirectory> =
            directories.into_iter().map(IconDirectory::open).collect();
        for dir in &directories {
            let probe = if dir.is_open() { "cached" } else { "stat" };
            debug!("Icon directory ({}): {}", probe, dir.path.display());
        }

        let mut resolver = Self {
            directories,
            fallback: PathBuf::new(),
        };
        resolver.fallback = resolver.lookup(fallback_icon).unwrap_or_default();
        debug!("Fallback icon: {:?}", resolver.fallback);
        resolver
    }

    /// Build the resolver for the configured (or detected) icon theme.
    pub fn for_theme(env: &Environment, options: &MenuOptions) -> Self {
        let theme = env.resolve_icon_theme(&options.icon_theme);
        debug!("Using icon theme {}", theme);
        let dirs = find_icon_directories(env, &theme, options.icon_size, options.scale);
        Self::new(dirs, &options.fallback_icon)
    }

    /// Resolve an icon name, falling back to the fallback icon.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.lookup(name).unwrap_or_else(|| self.fallback.clone())
    }

    /// Find an icon without applying the fallback.
    pub fn lookup(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        if name.starts_with('/') {
            let path = PathBuf::from(name);
            return path.exists().then_some(path);
        }

        for dir in &self.directories {
            for ext in ICON_EXTENSIONS {
                let file_name = format!("{}.{}", name, ext);
                if dir.contains(&file_name) {
                    return Some(dir.path.join(file_name));
                }
            }
        }

        None
    }

    pub fn fallback(&self) -> &Path {
        &self.fallback
    }

    pub fn directories(&self) -> &[IconDirectory] {
        &self.directories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_first_directory_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let d2 = tmp.path().join("d2");
        let expected = touch(&d1, "foo.png");
        touch(&d2, "foo.png");

        let resolver = IconResolver::new(vec![d1, d2], "missing");
        assert_eq!(resolver.directories().len(), 2);
        assert_eq!(resolver.resolve("foo"), expected);
    }

    #[test]
    fn test_svg_preferred_over_png() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "foo.png");
        let svg = touch(tmp.path(), "foo.svg");
        touch(tmp.path(), "foo.xpm");

        let resolver = IconResolver::new(vec![tmp.path().to_path_buf()], "missing");
        assert_eq!(resolver.resolve("foo"), svg);
    }

    #[test]
    fn test_directory_order_beats_extension_order() {
        let tmp = tempfile::tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let d2 = tmp.path().join("d2");
        let xpm = touch(&d1, "foo.xpm");
        touch(&d2, "foo.svg");

        let resolver = IconResolver::new(vec![d1, d2], "missing");
        assert_eq!(resolver.resolve("foo"), xpm);
    }

    #[test]
    fn test_unknown_icon_resolves_to_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        let fallback = touch(tmp.path(), "application-x-executable.png");

        let resolver =
            IconResolver::new(vec![tmp.path().to_path_buf()], "application-x-executable");
        assert_eq!(resolver.fallback(), fallback.as_path());
        assert_eq!(resolver.resolve("does-not-exist"), fallback);
        assert_eq!(resolver.resolve(""), fallback);
    }

    #[test]
    fn test_absolute_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let fallback = touch(tmp.path(), "fb.svg");
        let custom = touch(&tmp.path().join("elsewhere"), "custom.png");

        let resolver = IconResolver::new(vec![tmp.path().to_path_buf()], "fb");
        assert_eq!(resolver.resolve(custom.to_str().unwrap()), custom);
        assert_eq!(resolver.resolve("/no/such/icon.png"), fallback);
    }

    #[test]
    fn test_unreadable_directory_falls_back_to_stat() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("later");
        let dir = IconDirectory::open(missing.clone());
        assert!(!dir.is_open());

        // Created after opening: only a live stat can see it.
        touch(&missing, "foo.png");
        assert!(dir.contains("foo.png"));
    }

    #[test]
    fn test_dangling_symlink_is_not_an_icon() {
        let tmp = tempfile::tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let d2 = tmp.path().join("d2");
        fs::create_dir_all(&d1).unwrap();
        std::os::unix::fs::symlink("/nonexistent/target.svg", d1.join("foo.svg")).unwrap();
        let real = touch(&d2, "foo.png");

        let resolver = IconResolver::new(vec![d1.clone(), d2], "missing");
        assert!(resolver.directories()[0].is_open());
        assert!(!resolver.directories()[0].contains("foo.svg"));
        assert_eq!(resolver.resolve("foo"), real);
    }

    #[test]
    fn test_missing_fallback_is_empty() {
        let resolver = IconResolver::new(Vec::new(), "application-x-executable");
        assert_eq!(resolver.fallback(), Path::new(""));
        assert_eq!(resolver.resolve("foo"), PathBuf::new());
    }
}
