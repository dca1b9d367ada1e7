//! Icon theme index parsing and size matching.
//!
//! Every section of an `index.theme` names a subdirectory and declares the
//! icon sizes it holds. Sections are folded one at a time into a
//! [`ThemeSectionCriteria`]; when a section closes (a new section starts or
//! the file ends) the criteria are checked against the requested size and
//! scale and the subdirectory is kept on a match.

use crate::error::Result;
use crate::ini::{IniEntry, IniReader};
use crate::paths::{DEFAULT_ICON_THEME, Environment};
use log::{debug, warn};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

const THEME_SECTION: &str = "Icon Theme";
const DEFAULT_THRESHOLD: i32 = 2;
const DEFAULT_DIR_SCALE: i32 = 1;

/// `Type` key of a theme subdirectory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectoryType {
    Fixed,
    Scalable,
    #[default]
    Threshold,
    /// Unrecognized value, never matches.
    Unknown,
}

impl From<&str> for DirectoryType {
    fn from(s: &str) -> Self {
        match s {
            "Fixed" => DirectoryType::Fixed,
            "Scalable" => DirectoryType::Scalable,
            "Threshold" | "" => DirectoryType::Threshold,
            _ => DirectoryType::Unknown,
        }
    }
}

/// Size criteria declared by one theme subdirectory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSectionCriteria {
    pub subdir: String,
    pub size: Option<i32>,
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
    pub threshold: i32,
    pub scale: i32,
    pub kind: DirectoryType,
}

impl ThemeSectionCriteria {
    pub fn new(subdir: &str) -> Self {
        Self {
            subdir: subdir.to_string(),
            size: None,
            min_size: None,
            max_size: None,
            threshold: DEFAULT_THRESHOLD,
            scale: DEFAULT_DIR_SCALE,
            kind: DirectoryType::default(),
        }
    }

    /// Record one key of the section. Unknown keys and unparsable numbers are ignored.
    pub fn apply(&mut self, key: &str, value: &str) {
        let number = || {
            let parsed = value.parse::<i32>().ok();
            if parsed.is_none() {
                debug!("ignoring non-numeric {}={}", key, value);
            }
            parsed
        };

        match key {
            "Size" => self.size = number().or(self.size),
            "MinSize" => self.min_size = number().or(self.min_size),
            "MaxSize" => self.max_size = number().or(self.max_size),
            "Threshold" => self.threshold = number().unwrap_or(self.threshold),
            "Scale" => self.scale = number().unwrap_or(self.scale),
            "Type" => self.kind = DirectoryType::from(value),
            _ => {}
        }
    }

    /// Does this subdirectory hold icons for `size` at `scale`?
    ///
    /// A section without `Size` is not an icon directory and never matches.
    /// `MinSize` and `MaxSize` fall back to `Size`.
    pub fn matches(&self, size: i32, scale: i32) -> bool {
        if self.scale != scale {
            return false;
        }
        let Some(declared) = self.size else {
            return false;
        };

        match self.kind {
            DirectoryType::Fixed => declared == size,
            DirectoryType::Scalable => {
                let min = self.min_size.unwrap_or(declared);
                let max = self.max_size.unwrap_or(declared);
                min <= size && size <= max
            }
            DirectoryType::Threshold => {
                (i64::from(declared) - i64::from(size)).abs() <= i64::from(self.threshold)
            }
            DirectoryType::Unknown => false,
        }
    }
}

/// Result of folding one `index.theme`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeIndex {
    /// Matching subdirectories, in file order.
    pub directories: Vec<String>,
    /// Parent themes from `[Icon Theme] Inherits`.
    pub inherits: Vec<String>,
}

/// Accumulator folding index entries into a [`ThemeIndex`].
pub struct ThemeIndexFold {
    size: i32,
    scale: i32,
    current: Option<ThemeSectionCriteria>,
    index: ThemeIndex,
}

impl ThemeIndexFold {
    pub fn new(size: i32, scale: i32) -> Self {
        Self {
            size,
            scale,
            current: None,
            index: ThemeIndex::default(),
        }
    }

    pub fn feed(&mut self, entry: &IniEntry) {
        let changed = self
            .current
            .as_ref()
            .is_none_or(|c| c.subdir != entry.section);
        if changed {
            self.close_section();
            self.current = Some(ThemeSectionCriteria::new(&entry.section));
        }

        if entry.section == THEME_SECTION && entry.key == "Inherits" {
            self.index.inherits = entry
                .value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(current) = self.current.as_mut() {
            current.apply(&entry.key, &entry.value);
        }
    }

    /// Evaluate the open section and reset the accumulator.
    pub fn close_section(&mut self) {
        if let Some(criteria) = self.current.take() {
            if criteria.matches(self.size, self.scale) {
                self.index.directories.push(criteria.subdir);
            }
        }
    }

    /// Close the last section and hand back the result.
    pub fn finish(mut self) -> ThemeIndex {
        self.close_section();
        self.index
    }
}

/// Parse one `index.theme` file.
pub fn parse_theme_index(path: &Path, size: i32, scale: i32) -> Result<ThemeIndex> {
    let mut fold = ThemeIndexFold::new(size, scale);
    for entry in IniReader::open(path)? {
        fold.feed(&entry?);
    }
    Ok(fold.finish())
}

/// Collect the icon directories to probe for `theme`, in probe order.
///
/// The requested theme comes first (data directories in search order, each
/// index in file order), then the themes it inherits from breadth-first,
/// then hicolor, then the pixmaps directory.
pub fn find_icon_directories(
    env: &Environment,
    theme: &str,
    size: i32,
    scale: i32,
) -> Vec<PathBuf> {
    let mut result = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([theme.to_string()]);

    loop {
        let Some(theme) = queue.pop_front().or_else(|| {
            (!visited.contains(DEFAULT_ICON_THEME)).then(|| DEFAULT_ICON_THEME.to_string())
        }) else {
            break;
        };
        if !visited.insert(theme.clone()) {
            continue;
        }

        for data_dir in &env.data_dirs {
            let root = Environment::theme_root(data_dir, &theme);
            let index_path = root.join("index.theme");
            if !index_path.exists() {
                continue;
            }

            debug!("Parsing icon theme index: {}", index_path.display());
            let index = match parse_theme_index(&index_path, size, scale) {
                Ok(index) => index,
                Err(e) => {
                    warn!("Skipping icon theme index: {}", e);
                    continue;
                }
            };

            result.extend(index.directories.iter().map(|subdir| root.join(subdir)));
            for parent in index.inherits {
                if !visited.contains(&parent) {
                    queue.push_back(parent);
                }
            }
        }
    }

    result.push(env.pixmaps_dir.clone());
    result
}
