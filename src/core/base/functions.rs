use super::constants::PI;
use super::types::Float;

#[inline]
pub fn radians(deg: Float) -> Float {
    return deg * (PI / 180.0);
}

#[inline]
pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    return (1.0 - t) * v1 + t * v2;
}

#[inline]
pub fn inv_sqrt(x: Float) -> Float {
    return 1.0 / Float::sqrt(x);
}
