pub mod bounds3;
pub mod ray;
pub mod vector3;

pub use bounds3::*;
pub use ray::*;
pub use vector3::*;
