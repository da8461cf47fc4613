//! Conversion between packed `[0, 1]` and signed `[-1, 1]` ranges.

/// Map a signed component to packed color space: `(signed + 1) / 2`.
#[inline]
#[must_use]
pub fn pack(signed: f32) -> f32 {
    (signed + 1.0) * 0.5
}

/// Map a packed channel to a signed component: `packed * 2 - 1`.
#[inline]
#[must_use]
pub fn unpack(packed: f32) -> f32 {
    packed * 2.0 - 1.0
}
