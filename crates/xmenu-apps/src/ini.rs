//! Streaming reader for INI-like files (desktop entries, index.theme, GTK settings).
//!
//! The reader yields one [`IniEntry`] per `key=value` line, tagged with the
//! section it appeared in. Each consumer folds the entries it cares about,
//! so a single parse can drive several independent reducers.

use crate::error::{MenuError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One `key=value` pair and the section it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniEntry {
    pub section: String,
    pub key: String,
    pub value: String,
}

pub struct IniReader<R> {
    reader: R,
    buf: Vec<u8>,
    path: PathBuf,
    section: String,
    line_no: usize,
    failed: bool,
}

impl IniReader<BufReader<File>> {
    /// Open a file for streaming.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> IniReader<R> {
    /// Wrap any buffered reader. `path` is only used for error reporting.
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            path: path.to_path_buf(),
            section: String::new(),
            line_no: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for IniReader<R> {
    type Item = Result<IniEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        // A malformed line ends the stream: the caller skips the whole file.
        if self.failed {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    self.failed = true;
                    return Some(Err(MenuError::Io(e)));
                }
            }
            self.line_no += 1;

            // Bytes that are not UTF-8 only matter if the key is consumed.
            let line = String::from_utf8_lossy(&self.buf).into_owned();
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[') {
                match name.strip_suffix(']') {
                    Some(name) => {
                        self.section = name.trim().to_string();
                        continue;
                    }
                    None => return Some(Err(self.fail())),
                }
            }

            return match line.split_once('=') {
                Some((key, value)) => Some(Ok(IniEntry {
                    section: self.section.clone(),
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                })),
                None => Some(Err(self.fail())),
            };
        }
    }
}

impl<R> IniReader<R> {
    fn fail(&mut self) -> MenuError {
        self.failed = true;
        MenuError::Parse {
            path: self.path.clone(),
            line: self.line_no,
        }
    }
}

/// Look up a single value in a file, ignoring parse failures after the match.
pub fn find_value(path: &Path, section: &str, key: &str) -> Result<Option<String>> {
    for entry in IniReader::open(path)? {
        let entry = entry?;
        if entry.section == section && entry.key == key {
            return Ok(Some(entry.value));
        }
    }
    Ok(None)
}
