//! Error types for drawer overlays.

use std::fmt;
use std::path::PathBuf;

use side_drawer_core::ViewError;
use thiserror::Error;

use crate::widget::drawer::Position;

/// Which of an item's two positions was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRole {
    /// Where the item rests while hidden.
    Hidden,
    /// Where the item rests while shown.
    Shown,
}

impl fmt::Display for PositionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionRole::Hidden => f.write_str("hidden"),
            PositionRole::Shown => f.write_str("shown"),
        }
    }
}

/// Errors from building or driving a drawer overlay.
#[derive(Error, Debug)]
pub enum DrawerError {
    /// A position is centered on both axes and has no edge to anchor to.
    #[error("{role} position {position:?} is centered on both axes")]
    InvalidPosition {
        /// The rejected position's role.
        role: PositionRole,
        /// The rejected position.
        position: Position,
    },

    /// A view id passed in is not (or no longer) in the tree.
    #[error("view tree error: {0}")]
    View(#[from] ViewError),

    /// Overlay configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from loading an [`OverlayConfig`](crate::config::OverlayConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML is malformed or does not match the expected shape.
    #[error("failed to parse overlay config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for drawer operations.
pub type Result<T> = std::result::Result<T, DrawerError>;
