//! Reconstruct the Z channel of tangent-space normal map texels.
//!
//! Two-channel normal maps store only the X and Y components of each normal
//! in the red and green channels. The Z component is recovered from the unit
//! normal constraint `x² + y² + z² = 1`, always taking the non-negative root
//! so reconstructed normals face outward.
//!
//! # Design principles
//!
//! - **Pure**: No I/O, no logging, no shared state
//! - **Total**: Every finite input yields a finite, well-defined output
//! - **User-controlled parallelism**: Callers decide how to batch texels
//!
//! # Key functions
//!
//! - [`reconstruct`]: Reconstruct the blue channel from packed red and green
//! - [`reconstruct_sample`]: Same, for a whole [`NormalSample`]
//! - [`trace`]: Reconstruct and keep every intermediate value
//! - [`pack`] / [`unpack`]: Convert between packed and signed ranges

pub mod packing;
pub mod reconstruct;

pub use packing::{pack, unpack};
pub use reconstruct::{Reconstruction, reconstruct, reconstruct_sample, trace};

use glam::Vec3;

/// A normal map texel in packed `[0, 1]` color space.
///
/// When used as input, `b` is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalSample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl NormalSample {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Unpack all three channels into the signed `[-1, 1]` range.
    #[must_use]
    pub fn to_signed(self) -> UnitVector3 {
        UnitVector3::new(unpack(self.r), unpack(self.g), unpack(self.b))
    }
}

impl From<[f32; 3]> for NormalSample {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<NormalSample> for [f32; 3] {
    fn from(sample: NormalSample) -> Self {
        [sample.r, sample.g, sample.b]
    }
}

/// A direction with components in the signed `[-1, 1]` range.
///
/// Values produced by [`trace`] after renormalization satisfy
/// `x² + y² + z² ≈ 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl UnitVector3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        Vec3::from(self).length_squared()
    }

    /// Check the unit length invariant within `tolerance`.
    #[must_use]
    pub fn is_normalized(self, tolerance: f32) -> bool {
        (self.length_squared() - 1.0).abs() <= tolerance
    }

    /// Pack all three components into `[0, 1]` color space.
    #[must_use]
    pub fn to_packed(self) -> NormalSample {
        NormalSample::new(pack(self.x), pack(self.y), pack(self.z))
    }
}

impl From<Vec3> for UnitVector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<UnitVector3> for Vec3 {
    fn from(v: UnitVector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Which red and green values a reconstruction emits.
///
/// The two policies only disagree for saturated texels, where the packed
/// `x, y` lie outside the unit disk and renormalization shortens them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ChannelPolicy {
    /// Emit the input red and green (after the optional input clamp).
    #[default]
    PreserveInput,
    /// Emit red and green re-packed from the renormalized vector.
    Renormalized,
}

/// Options for a reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructOptions {
    /// Clamp input red and green to `[0, 1]` before unpacking.
    pub clamp_input: bool,
    /// Red and green output policy.
    pub channels: ChannelPolicy,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            clamp_input: true,
            channels: ChannelPolicy::PreserveInput,
        }
    }
}

impl ReconstructOptions {
    #[must_use]
    pub const fn with_channels(mut self, channels: ChannelPolicy) -> Self {
        self.channels = channels;
        self
    }

    #[must_use]
    pub const fn with_clamp_input(mut self, clamp_input: bool) -> Self {
        self.clamp_input = clamp_input;
        self
    }
}
