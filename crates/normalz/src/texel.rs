//! Per-texel reconstruction over interleaved pixel buffers.

use std::ops::{Add, AddAssign};

use normalz_math::{ReconstructOptions, trace};
use rayon::prelude::*;

/// A channel storage type that can be converted to and from `[0, 1]`.
pub trait Texel: Copy + Send + Sync {
    /// Convert a stored value to a unit float.
    fn to_unit(self) -> f32;

    /// Convert a unit float back to storage, clamping and rounding as needed.
    fn from_unit(value: f32) -> Self;
}

impl Texel for u8 {
    #[inline]
    fn to_unit(self) -> f32 {
        f32::from(self) / f32::from(u8::MAX)
    }

    #[inline]
    fn from_unit(value: f32) -> Self {
        (value.clamp(0.0, 1.0) * f32::from(u8::MAX)).round() as u8
    }
}

impl Texel for u16 {
    #[inline]
    fn to_unit(self) -> f32 {
        f32::from(self) / f32::from(u16::MAX)
    }

    #[inline]
    fn from_unit(value: f32) -> Self {
        (value.clamp(0.0, 1.0) * f32::from(u16::MAX)).round() as u16
    }
}

impl Texel for f32 {
    #[inline]
    fn to_unit(self) -> f32 {
        self
    }

    #[inline]
    fn from_unit(value: f32) -> Self {
        value
    }
}

/// Channel layout of an interleaved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb,
    /// Alpha is carried through untouched.
    Rgba,
}

impl PixelLayout {
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Counters gathered while reconstructing a batch of texels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of texels reconstructed.
    pub texels: u64,
    /// Texels whose red and green lay outside the unit disk.
    pub saturated: u64,
    /// Texels with a NaN or infinite red or green, reconstructed as flat.
    pub non_finite: u64,
}

impl BatchStats {
    /// Fraction of texels that were saturated, or 0 for an empty batch.
    #[must_use]
    pub fn saturated_fraction(&self) -> f64 {
        if self.texels == 0 {
            0.0
        } else {
            self.saturated as f64 / self.texels as f64
        }
    }
}

impl Add for BatchStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            texels: self.texels + rhs.texels,
            saturated: self.saturated + rhs.saturated,
            non_finite: self.non_finite + rhs.non_finite,
        }
    }
}

impl AddAssign for BatchStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Reconstruct every texel of an interleaved buffer in place.
///
/// Red and green are rewritten from the reconstruction output (for integer
/// storage under [`normalz_math::ChannelPolicy::PreserveInput`] this is
/// bit-identical to the input) and blue is replaced. A trailing partial pixel
/// is left untouched.
///
/// Decoded float images may hold NaN or infinite channels. Those channels
/// are replaced with 0.5 before reconstruction and counted in
/// [`BatchStats::non_finite`].
pub fn reconstruct_texels<T: Texel>(
    data: &mut [T],
    layout: PixelLayout,
    options: ReconstructOptions,
) -> BatchStats {
    data.par_chunks_exact_mut(layout.channels())
        .map(|pixel| {
            let (r, g) = (pixel[0].to_unit(), pixel[1].to_unit());
            let finite = r.is_finite() && g.is_finite();
            let t = trace(finite_or_flat(r), finite_or_flat(g), options);
            pixel[0] = T::from_unit(t.output.r);
            pixel[1] = T::from_unit(t.output.g);
            pixel[2] = T::from_unit(t.output.b);
            BatchStats {
                texels: 1,
                saturated: u64::from(t.saturated),
                non_finite: u64::from(!finite),
            }
        })
        .reduce(BatchStats::default, |a, b| a + b)
}

#[inline]
fn finite_or_flat(channel: f32) -> f32 {
    if channel.is_finite() { channel } else { 0.5 }
}
