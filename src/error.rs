use thiserror::Error;

/// Top-level error type for the pslgen kernel.
#[derive(Debug, Error)]
pub enum PslgenError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while editing the sketch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The candidate edge would cross existing geometry.
    #[error("segments should not intersect")]
    SegmentsIntersect,
}

/// Errors raised while exporting the sketch.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Save was requested while a loop is still being built.
    #[error("please finish the current loop first")]
    IncompleteLoop,

    #[error("failed to write PSLG file: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`PslgenError`].
pub type Result<T> = std::result::Result<T, PslgenError>;
