//! Custom error types for imgdiff.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the imgdiff library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode the output image.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The two input images do not have the same dimensions.
    #[error("image bounds {first:?} != {second:?}")]
    BoundsMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for imgdiff operations.
pub type Result<T> = std::result::Result<T, Error>;
