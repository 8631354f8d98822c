//! Error types for the packaging pipeline.

use thiserror::Error;

/// Errors surfaced by the packaging components.
///
/// Each variant carries the full cause chain of the underlying failure as
/// rendered text. The rollback controller treats every variant the same
/// way: restore the build directory, report, exit non-zero.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("manifest read: {0}")]
    ManifestRead(String),

    #[error("manifest write: {0}")]
    ManifestWrite(String),

    #[error("stage: {0}")]
    Stage(String),

    #[error("population: {0}")]
    Population(String),

    #[error("compression: {0}")]
    Compression(String),
}

impl PackError {
    pub(crate) fn manifest_read(err: anyhow::Error) -> Self {
        Self::ManifestRead(format!("{err:#}"))
    }

    pub(crate) fn manifest_write(err: anyhow::Error) -> Self {
        Self::ManifestWrite(format!("{err:#}"))
    }

    pub(crate) fn stage(err: anyhow::Error) -> Self {
        Self::Stage(format!("{err:#}"))
    }

    pub(crate) fn population(err: anyhow::Error) -> Self {
        Self::Population(format!("{err:#}"))
    }

    pub(crate) fn compression(err: anyhow::Error) -> Self {
        Self::Compression(format!("{err:#}"))
    }
}
