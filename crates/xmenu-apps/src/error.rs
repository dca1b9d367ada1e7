//! Error types for xmenu-apps

use std::path::PathBuf;

/// Errors raised while reading descriptors, theme indexes or running the menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}:{line}: malformed line", .path.display())]
    Parse { path: PathBuf, line: usize },

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Menu program error: {0}")]
    Runner(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
