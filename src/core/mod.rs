pub mod base;
pub mod geometry;
pub mod quaternion;
pub mod rng;
pub mod transform;

pub use base::*;
pub use geometry::*;
pub use quaternion::*;
pub use rng::*;
pub use transform::*;
