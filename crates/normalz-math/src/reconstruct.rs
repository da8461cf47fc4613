//! Blue channel reconstruction.

use glam::Vec3;

use crate::packing::{pack, unpack};
use crate::{ChannelPolicy, NormalSample, ReconstructOptions, UnitVector3};

/// Every intermediate value of a single reconstruction.
///
/// Produced by [`trace`]. [`reconstruct`] returns only [`Self::output`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconstruction {
    /// Packed red after the optional input clamp.
    pub r: f32,
    /// Packed green after the optional input clamp.
    pub g: f32,
    /// Signed X before renormalization.
    pub x: f32,
    /// Signed Y before renormalization.
    pub y: f32,
    /// `x² + y²` before clamping to 1.
    pub xy_length_squared: f32,
    /// Whether `x, y` lay outside the unit disk and had to be clamped.
    pub saturated: bool,
    /// Z from the unit sphere equation, before renormalization.
    pub z: f32,
    /// The renormalized vector.
    pub normal: UnitVector3,
    /// The emitted texel.
    pub output: NormalSample,
}

/// Reconstruct the blue channel from packed red and green.
///
/// Inputs outside `[0, 1]` are tolerated. Non-finite inputs are a contract
/// violation and produce unspecified output.
///
/// ```
/// use normalz_math::{ReconstructOptions, reconstruct};
///
/// let flat = reconstruct(0.5, 0.5, ReconstructOptions::default());
/// assert_eq!(flat.b, 1.0);
/// ```
#[inline]
#[must_use]
pub fn reconstruct(r: f32, g: f32, options: ReconstructOptions) -> NormalSample {
    trace(r, g, options).output
}

/// Reconstruct a texel, ignoring its blue channel.
#[inline]
#[must_use]
pub fn reconstruct_sample(sample: NormalSample, options: ReconstructOptions) -> NormalSample {
    reconstruct(sample.r, sample.g, options)
}

/// Reconstruct and return every intermediate value.
#[must_use]
pub fn trace(r: f32, g: f32, options: ReconstructOptions) -> Reconstruction {
    debug_assert!(r.is_finite() && g.is_finite(), "non-finite input ({r}, {g})");

    let (r, g) = if options.clamp_input {
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0))
    } else {
        (r, g)
    };

    // Unclamped inputs near f32::MAX overflow when unpacked.
    let x = unpack(r).clamp(f32::MIN, f32::MAX);
    let y = unpack(g).clamp(f32::MIN, f32::MAX);

    // Lossy and filtered textures routinely land outside the unit disk.
    let xy_length_squared = x * x + y * y;
    let saturated = xy_length_squared > 1.0;
    let d = xy_length_squared.min(1.0);
    let z = (1.0 - d).sqrt();

    // Scale by the largest component first so the length cannot overflow.
    let v = Vec3::new(x, y, z);
    let scale = v.abs().max_element();
    let normal = if scale > 0.0 {
        let v = v / scale;
        v / v.length()
    } else {
        v
    };

    let b = pack(normal.z);
    let output = match options.channels {
        ChannelPolicy::PreserveInput => NormalSample::new(r, g, b),
        ChannelPolicy::Renormalized => NormalSample::new(pack(normal.x), pack(normal.y), b),
    };

    Reconstruction {
        r,
        g,
        x,
        y,
        xy_length_squared,
        saturated,
        z,
        normal: normal.into(),
        output,
    }
}
