//! Parallel normal map Z reconstruction over images and files.
//!
//! Applies [`normalz_math::reconstruct`] to every texel of a pixel buffer,
//! an [`image::DynamicImage`], or an image file on disk. Texels are
//! independent, so buffers are processed with rayon data parallelism and no
//! shared mutable state.
//!
//! # Key functions
//!
//! - [`reconstruct_texels`]: Reconstruct an interleaved RGB/RGBA buffer in place
//! - [`reconstruct_image`]: Reconstruct a decoded image in place
//! - [`reconstruct_file`]: Decode, reconstruct, and encode an image file

mod error;

pub mod file;
pub mod raster;
pub mod texel;

pub use error::{Error, Result};
pub use file::{is_supported_extension, reconstruct_file};
pub use raster::reconstruct_image;
pub use texel::{BatchStats, PixelLayout, Texel, reconstruct_texels};

pub use normalz_math::{ChannelPolicy, NormalSample, ReconstructOptions};
