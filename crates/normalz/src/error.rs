use std::io;

use thiserror::Error;

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconstructing images.
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding or encoding the image failed.
    #[error(transparent)]
    Image(#[from] ::image::ImageError),

    /// Filesystem access failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The image has no red and green channels to reconstruct from.
    #[error("unsupported color type {0:?}; expected RGB or RGBA")]
    UnsupportedColorType(::image::ColorType),
}
