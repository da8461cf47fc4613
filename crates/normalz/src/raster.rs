//! Reconstruction over decoded images.

use image::DynamicImage;
use normalz_math::ReconstructOptions;

use crate::texel::{BatchStats, PixelLayout, reconstruct_texels};
use crate::{Error, Result};

/// Reconstruct the blue channel of every texel of `image` in place.
///
/// Bit depth and alpha are preserved. Images without red and green
/// channels are rejected with [`Error::UnsupportedColorType`].
pub fn reconstruct_image(image: &mut DynamicImage, options: ReconstructOptions) -> Result<BatchStats> {
    let (width, height) = (image.width(), image.height());
    let color = image.color();
    tracing::debug!(width, height, ?color, ?options, "Reconstructing image");

    let stats = match image {
        DynamicImage::ImageRgb8(buffer) => reconstruct_texels(&mut **buffer, PixelLayout::Rgb, options),
        DynamicImage::ImageRgba8(buffer) => reconstruct_texels(&mut **buffer, PixelLayout::Rgba, options),
        DynamicImage::ImageRgb16(buffer) => reconstruct_texels(&mut **buffer, PixelLayout::Rgb, options),
        DynamicImage::ImageRgba16(buffer) => reconstruct_texels(&mut **buffer, PixelLayout::Rgba, options),
        DynamicImage::ImageRgb32F(buffer) => reconstruct_texels(&mut **buffer, PixelLayout::Rgb, options),
        DynamicImage::ImageRgba32F(buffer) => reconstruct_texels(&mut **buffer, PixelLayout::Rgba, options),
        _ => return Err(Error::UnsupportedColorType(color)),
    };

    tracing::debug!(
        texels = stats.texels,
        saturated = stats.saturated,
        non_finite = stats.non_finite,
        "Image reconstructed"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, Rgb, Rgb32FImage, RgbImage, Rgba};
    use normalz_math::ChannelPolicy;
    use rstest::rstest;

    #[test]
    fn test_rgb8_image() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::from_fn(4, 2, |x, _| {
            if x == 0 { Rgb([255, 255, 0]) } else { Rgb([128, 128, 0]) }
        }));
        let stats = reconstruct_image(&mut image, ReconstructOptions::default()).unwrap();
        assert_eq!(stats, BatchStats { texels: 8, saturated: 2, non_finite: 0 });

        let buffer = image.as_rgb8().unwrap();
        assert_eq!(buffer.get_pixel(0, 1), &Rgb([255, 255, 128]));
        assert_eq!(buffer.get_pixel(3, 0), &Rgb([128, 128, 255]));
    }

    #[test]
    fn test_rgba16_keeps_alpha() {
        let buffer = ImageBuffer::<Rgba<u16>, Vec<u16>>::from_pixel(3, 3, Rgba([32768, 32768, 0, 1234]));
        let mut image = DynamicImage::ImageRgba16(buffer);
        reconstruct_image(&mut image, ReconstructOptions::default()).unwrap();
        let buffer = image.as_rgba16().unwrap();
        for pixel in buffer.pixels() {
            assert_eq!(pixel, &Rgba([32768, 32768, u16::MAX, 1234]));
        }
    }

    #[test]
    fn test_rgb32f_renormalized() {
        let mut image = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(2, 2, Rgb([1.0, 1.0, 0.25])));
        let options = ReconstructOptions::default().with_channels(ChannelPolicy::Renormalized);
        reconstruct_image(&mut image, options).unwrap();
        let pixel = image.as_rgb32f().unwrap().get_pixel(1, 1);
        assert!((pixel[0] - 0.853_553_4).abs() < 1e-5);
        assert!((pixel[1] - 0.853_553_4).abs() < 1e-5);
        assert_eq!(pixel[2], 0.5);
    }

    #[rstest]
    #[case(DynamicImage::new_rgb8(3, 2))]
    #[case(DynamicImage::new_rgba8(3, 2))]
    #[case(DynamicImage::new_rgb16(3, 2))]
    #[case(DynamicImage::new_rgba16(3, 2))]
    #[case(DynamicImage::new_rgb32f(3, 2))]
    #[case(DynamicImage::new_rgba32f(3, 2))]
    fn test_color_types_accepted(#[case] image: DynamicImage) {
        let mut image = image;
        let color = image.color();
        let stats = reconstruct_image(&mut image, ReconstructOptions::default()).unwrap();
        assert_eq!(stats.texels, 6);
        assert_eq!(image.color(), color);
    }

    #[rstest]
    #[case(DynamicImage::new_luma8(2, 2), ColorType::L8)]
    #[case(DynamicImage::new_luma_a8(2, 2), ColorType::La8)]
    #[case(DynamicImage::new_luma16(2, 2), ColorType::L16)]
    #[case(DynamicImage::new_luma_a16(2, 2), ColorType::La16)]
    fn test_luma_rejected(#[case] image: DynamicImage, #[case] expected: ColorType) {
        let mut image = image;
        let err = reconstruct_image(&mut image, ReconstructOptions::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedColorType(color) if color == expected));
    }

    #[test]
    fn test_rgb32f_nan_texels_reconstructed_flat() {
        let mut image = DynamicImage::ImageRgb32F(Rgb32FImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([f32::NAN, f32::INFINITY, 0.0]) } else { Rgb([0.5, 0.5, 0.0]) }
        }));
        let stats = reconstruct_image(&mut image, ReconstructOptions::default()).unwrap();
        assert_eq!(stats, BatchStats { texels: 2, saturated: 0, non_finite: 1 });

        let buffer = image.as_rgb32f().unwrap();
        assert_eq!(buffer.get_pixel(0, 0), &Rgb([0.5, 0.5, 1.0]));
        assert_eq!(buffer.get_pixel(1, 0), &Rgb([0.5, 0.5, 1.0]));
    }
}
