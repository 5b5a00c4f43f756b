//! Error types for password derivation.

use std::path::PathBuf;

/// Errors that can occur while deriving a password.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `--image` was given on the command line
    #[error("Image path is required. Use -i or --image to specify the image file.")]
    MissingArgument,

    /// The image could not be opened or decoded
    #[error("Error reading image '{}': {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
