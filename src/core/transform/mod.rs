pub mod animated_transform;
pub mod decompose;
pub mod matrix4x4;
pub mod transform;

pub use animated_transform::AnimatedTransform;
pub use decompose::{decompose, POLAR_DECOMPOSE_EPSILON, POLAR_DECOMPOSE_MAX_ITERATIONS};
pub use matrix4x4::Matrix4x4;
pub use transform::Transform;
