use std::path::PathBuf;

use thiserror::Error;

/// Rejected before any conversion is attempted; no files are touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select at least one image.")]
    NoSourceFiles,
    #[error("Please select an output folder.")]
    NoOutputDirectory,
}

/// A decode, encode or IO failure for a single source file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file name has no usable stem")]
    InvalidFileName,
}

/// Result of one batch invocation. The batch stops at the first error,
/// so at most one failure is ever reported per invocation.
#[derive(Debug)]
pub enum ConversionOutcome {
    Success { converted: usize },
    Failure { source: PathBuf, error: ConvertError },
}
