//! Reconstruction of image files on disk.

use std::fs;
use std::path::Path;

use normalz_math::ReconstructOptions;

use crate::Result;
use crate::raster::reconstruct_image;
use crate::texel::BatchStats;

/// File extensions that [`reconstruct_file`] can decode.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "tif", "tiff", "jpg", "jpeg"];

/// Whether `path` has an extension in [`SUPPORTED_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

/// Decode `input`, reconstruct its blue channel, and encode it to `output`.
///
/// The output format follows the extension of `output`. Missing parent
/// directories of `output` are created.
pub fn reconstruct_file(input: &Path, output: &Path, options: ReconstructOptions) -> Result<BatchStats> {
    let mut image = image::open(input)?;
    let stats = reconstruct_image(&mut image, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    image.save(output)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        texels = stats.texels,
        saturated = stats.saturated,
        non_finite = stats.non_finite,
        "Reconstructed file"
    );
    if stats.non_finite > 0 {
        tracing::warn!(
            input = %input.display(),
            "{} texels had NaN or infinite channels and were reconstructed as flat",
            stats.non_finite
        );
    }
    if stats.saturated > 0 {
        tracing::warn!(
            input = %input.display(),
            "{:.2}% of texels lay outside the unit disk and were clamped",
            stats.saturated_fraction() * 100.0
        );
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension(&PathBuf::from("a/b/normal.png")));
        assert!(is_supported_extension(&PathBuf::from("NORMAL.TIFF")));
        assert!(is_supported_extension(&PathBuf::from("n.Jpg")));
        assert!(!is_supported_extension(&PathBuf::from("n.dds")));
        assert!(!is_supported_extension(&PathBuf::from("png")));
    }
}
