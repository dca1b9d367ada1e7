//! App Catalog implementation.

use crate::desktop_entry::{Application, parse_desktop_file};
use crate::paths::Environment;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::Path;

/// Every displayable application found in the data directories.
#[derive(Debug, Default)]
pub struct AppCatalog {
    apps: Vec<Application>,
}

impl AppCatalog {
    /// Scan `<data-dir>/applications` of every data directory.
    ///
    /// Desktop file IDs seen in an earlier data directory shadow later ones.
    /// Unreadable directories and malformed files are skipped.
    pub fn scan(env: &Environment) -> Self {
        info!("Scanning app catalog...");

        let mut apps = Vec::new();
        let mut seen_ids = HashSet::new();

        for dir in env.application_directories() {
            if !dir.is_dir() {
                debug!("No applications in {}", dir.display());
                continue;
            }

            let walker = walkdir::WalkDir::new(&dir)
                .follow_links(true)
                .sort_by_file_name();
            for entry in walker.into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                if !entry.file_type().is_file()
                    || path.extension().and_then(|e| e.to_str()) != Some("desktop")
                {
                    continue;
                }

                let Some(id) = desktop_file_id(&dir, path) else {
                    continue;
                };
                if !seen_ids.insert(id) {
                    debug!("Shadowed: {}", path.display());
                    continue;
                }

                debug!("Parsing app entry: {}", path.display());
                match parse_desktop_file(path, env) {
                    Ok(app) if app.is_displayable() => apps.push(app),
                    Ok(_) => {}
                    Err(e) => warn!("Skipping desktop entry: {}", e),
                }
            }
        }

        info!("Found {} applications.", apps.len());
        Self { apps }
    }

    pub fn apps(&self) -> &[Application] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Desktop file ID: path below the applications directory with `/` replaced by `-`.
fn desktop_file_id(app_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(app_dir).ok()?;
    Some(relative.to_string_lossy().replace('/', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn env_for(data_dirs: Vec<PathBuf>) -> Environment {
        Environment {
            data_dirs,
            exec_search_path: Vec::new(),
            config_home: PathBuf::new(),
            current_desktops: Vec::new(),
            pixmaps_dir: PathBuf::new(),
        }
    }

    fn write_app(data_dir: &Path, relative: &str, name: &str) {
        let path = data_dir.join("applications").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            path,
            format!("[Desktop Entry]\nType=Application\nName={}\nExec=run-{}\n", name, name),
        )
        .unwrap();
    }

    fn names(catalog: &AppCatalog) -> Vec<&str> {
        catalog.apps().iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_desktop_file_id() {
        let id = desktop_file_id(
            Path::new("/usr/share/applications"),
            Path::new("/usr/share/applications/kde4/konsole.desktop"),
        );
        assert_eq!(id.as_deref(), Some("kde4-konsole.desktop"));
    }

    #[test]
    fn test_scan_finds_nested_entries_and_skips_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        write_app(tmp.path(), "top.desktop", "Top");
        write_app(tmp.path(), "vendor/nested.desktop", "Nested");
        fs::write(tmp.path().join("applications/readme.txt"), "not an app").unwrap();
        fs::write(
            tmp.path().join("applications/hidden.desktop"),
            "[Desktop Entry]\nType=Application\nName=Hidden\nExec=h\nHidden=true\n",
        )
        .unwrap();
        fs::write(tmp.path().join("applications/broken.desktop"), "[Desktop Entry\n").unwrap();

        let catalog = AppCatalog::scan(&env_for(vec![tmp.path().to_path_buf()]));
        let mut found = names(&catalog);
        found.sort();
        assert_eq!(found, vec!["Nested", "Top"]);
    }

    #[test]
    fn test_earlier_data_dir_shadows_later() {
        let user = tempfile::tempdir().unwrap();
        let system = tempfile::tempdir().unwrap();
        write_app(user.path(), "editor.desktop", "UserEditor");
        write_app(system.path(), "editor.desktop", "SystemEditor");
        write_app(system.path(), "other.desktop", "Other");

        let env = env_for(vec![
            user.path().to_path_buf(),
            PathBuf::from("/nonexistent/data"),
            system.path().to_path_buf(),
        ]);
        let catalog = AppCatalog::scan(&env);
        assert_eq!(catalog.len(), 2);
        assert_eq!(names(&catalog), vec!["UserEditor", "Other"]);
    }

    #[test]
    fn test_no_readable_directory_is_empty() {
        let catalog = AppCatalog::scan(&env_for(vec![PathBuf::from("/nonexistent/data")]));
        assert!(catalog.is_empty());
    }
}
