use std::path::PathBuf;

use thiserror::Error;

/// Result type for rendering and file output.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by a text sink or by writing a generated file.
///
/// Rendering itself never fails; these only surface what the sink reports.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write to output stream")]
    Io(#[from] std::io::Error),

    #[error("failed to format output")]
    Fmt(#[from] std::fmt::Error),

    #[error("failed to write '{path}'")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
