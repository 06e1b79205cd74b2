use super::types::Float;

#[cfg(not(feature = "float-as-double"))]
mod detail {
    use super::Float;

    pub const PI: Float = std::f32::consts::PI;
    pub const ONE_MINUS_EPSILON: Float = 0.99999994;
}

#[cfg(feature = "float-as-double")]
mod detail {
    use super::Float;

    pub const PI: Float = std::f64::consts::PI;
    pub const ONE_MINUS_EPSILON: Float = 0.99999999999999989;
}

pub use detail::*;
