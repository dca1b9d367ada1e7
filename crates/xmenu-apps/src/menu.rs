//! Menu assembly and the xmenu line format.
//!
//! Entries are ordered by section name, then by case-insensitive app name,
//! and a section header is emitted whenever the section changes:
//!
//! ```text
//! IMG:/path/to/section.svg<TAB>Section
//! <TAB>IMG:/path/to/app.svg<TAB>Name (Generic Name)<TAB>command
//! ```

use crate::categories::category_icon;
use crate::config::MenuOptions;
use crate::desktop_entry::Application;
use crate::field_codes;
use crate::icons::IconResolver;
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// One line of the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuLine {
    Category {
        icon: Option<PathBuf>,
        name: String,
    },
    Entry(MenuEntry),
}

/// A launchable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// `None` when icons are disabled.
    pub icon: Option<PathBuf>,
    pub name: String,
    pub command: String,
}

impl fmt::Display for MenuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuLine::Category { icon, name } => match non_empty(icon) {
                Some(icon) => write!(f, "IMG:{}\t{}", icon.display(), name),
                None => write!(f, "{}", name),
            },
            MenuLine::Entry(entry) => match non_empty(&entry.icon) {
                Some(icon) => write!(
                    f,
                    "\tIMG:{}\t{}\t{}",
                    icon.display(),
                    entry.name,
                    entry.command
                ),
                None => write!(f, "\t{}\t{}", entry.name, entry.command),
            },
        }
    }
}

// An unresolvable fallback icon leaves an empty path; print no IMG field for it.
fn non_empty(icon: &Option<PathBuf>) -> Option<&PathBuf> {
    icon.as_ref().filter(|p| !p.as_os_str().is_empty())
}

/// The assembled menu, in output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    lines: Vec<MenuLine>,
}

impl Menu {
    /// Sort and group `apps`. Pass no resolver to build a menu without icons.
    pub fn build(
        apps: &[Application],
        icons: Option<&IconResolver>,
        options: &MenuOptions,
    ) -> Self {
        let mut sorted: Vec<&Application> = apps.iter().collect();
        sorted.sort_by(|a, b| compare_apps(a, b));

        let mut lines = Vec::with_capacity(sorted.len() + 16);
        let mut current: Option<&str> = None;

        for app in sorted {
            if current != Some(app.category.as_str()) {
                current = Some(app.category.as_str());
                let icon_name = category_icon(&app.category).unwrap_or_default();
                lines.push(MenuLine::Category {
                    icon: icons.map(|r| r.resolve(icon_name)),
                    name: app.category.clone(),
                });
            }

            lines.push(MenuLine::Entry(MenuEntry {
                icon: icons.map(|r| r.resolve(&app.icon)),
                name: app.display_name(!options.no_generic_name),
                command: field_codes::expand(app, &options.terminal),
            }));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[MenuLine] {
        &self.lines
    }

    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.lines.iter().filter_map(|line| match line {
            MenuLine::Entry(entry) => Some(entry),
            MenuLine::Category { .. } => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the menu, one line per item.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

/// Section, then case-insensitive name; exact name and file path break ties.
fn compare_apps(a: &Application, b: &Application) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.desktop_file.cmp(&b.desktop_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn app(name: &str, category: &str) -> Application {
        Application {
            name: name.to_string(),
            exec: format!("{} %U", name.to_lowercase()),
            kind: "Application".to_string(),
            category: category.to_string(),
            desktop_file: PathBuf::from(format!("/apps/{}.desktop", name)),
            ..Default::default()
        }
    }

    fn render(menu: &Menu) -> String {
        let mut out = Vec::new();
        menu.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn no_icons() -> MenuOptions {
        MenuOptions {
            no_icon: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_grouped_and_sorted_without_icons() {
        let apps = vec![
            app("zed", "Development"),
            app("Firefox", "Internet"),
            app("alacritty", "System"),
            app("Emacs", "Development"),
        ];

        let menu = Menu::build(&apps, None, &no_icons());
        assert_eq!(menu.lines().len(), 7);
        assert_eq!(
            render(&menu),
            "Development\n\tEmacs\temacs \n\tzed\tzed \n\
             Internet\n\tFirefox\tfirefox \n\
             System\n\talacritty\talacritty \n"
        );
    }

    #[test]
    fn test_sort_is_independent_of_discovery_order() {
        let mut apps = vec![
            app("beta", "Office"),
            app("Alpha", "Office"),
            app("alpha", "Office"),
            app("Gamma", "Games"),
        ];
        let forward = Menu::build(&apps, None, &no_icons());
        apps.reverse();
        let backward = Menu::build(&apps, None, &no_icons());

        assert_eq!(forward, backward);
        let names: Vec<&str> = forward.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_generic_name_annotation() {
        let mut firefox = app("Firefox", "Internet");
        firefox.generic_name = "Web Browser".to_string();
        let apps = vec![firefox];

        let annotated = Menu::build(&apps, None, &no_icons());
        assert_eq!(annotated.entries().next().unwrap().name, "Firefox (Web Browser)");

        let options = MenuOptions {
            no_generic_name: true,
            ..no_icons()
        };
        let plain = Menu::build(&apps, None, &options);
        assert_eq!(plain.entries().next().unwrap().name, "Firefox");
    }

    #[test]
    fn test_icons_and_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        for name in ["firefox.svg", "applications-internet.png", "application-x-executable.png"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        let resolver = IconResolver::new(vec![dir.to_path_buf()], "application-x-executable");

        let mut firefox = app("Firefox", "Internet");
        firefox.icon = "firefox".to_string();
        let apps = vec![firefox, app("Links", "Internet")];

        let menu = Menu::build(&apps, Some(&resolver), &MenuOptions::default());
        let d = dir.display();
        assert_eq!(
            render(&menu),
            format!(
                "IMG:{d}/applications-internet.png\tInternet\n\
                 \tIMG:{d}/firefox.svg\tFirefox\tfirefox \n\
                 \tIMG:{d}/application-x-executable.png\tLinks\tlinks \n"
            )
        );
    }

    #[test]
    fn test_missing_fallback_omits_img_field() {
        let resolver = IconResolver::new(Vec::new(), "application-x-executable");
        let apps = vec![app("Links", "Internet")];

        let menu = Menu::build(&apps, Some(&resolver), &MenuOptions::default());
        assert_eq!(render(&menu), "Internet\n\tLinks\tlinks \n");
        assert_eq!(menu.entries().next().unwrap().icon.as_deref(), Some(Path::new("")));
    }

    #[test]
    fn test_empty_menu() {
        let menu = Menu::build(&[], None, &MenuOptions::default());
        assert!(menu.is_empty());
        assert_eq!(render(&menu), "");
    }
}
