use crate::geometry::GeometryError;

use std::path::PathBuf;

use thiserror::Error;

/// Every way a collage run can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum CollageError{
    #[error("got {actual} images for a grid of {expected} cells")]
    CountMismatch{ expected: usize, actual: usize },

    #[error("file {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("cannot decode {}: {reason}", path.display())]
    Decode{ path: PathBuf, reason: String },

    #[error("unknown tile kind {kind:?} for {}", path.display())]
    UnknownTileKind{ path: PathBuf, kind: String },

    #[error("cannot transform {}: {source}", path.display())]
    Geometry{ path: PathBuf, #[source] source: GeometryError },

    #[error("cannot save {}: {reason}", path.display())]
    Encode{ path: PathBuf, reason: String },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, CollageError>;
