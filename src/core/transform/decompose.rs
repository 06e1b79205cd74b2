use super::matrix4x4::Matrix4x4;
use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::quaternion::Quaternion;

/// Convergence threshold for the polar-decomposition iteration, as the
/// maximum per-row L1 change between successive estimates.
pub const POLAR_DECOMPOSE_EPSILON: Float = 1e-4;

/// Hard cap on polar-decomposition iterations. Termination is guaranteed;
/// accuracy past the cap is not, so pathological inputs come out best-effort.
pub const POLAR_DECOMPOSE_MAX_ITERATIONS: u32 = 100;

/// Splits a matrix into translation, rotation, and scale/shear factors,
/// `M = T R S`. The rotation is found by polar decomposition: averaging the
/// current estimate with its own inverse transpose converges to the nearest
/// pure rotation, leaving `inverse(R) * M` as the scale factor. Both knobs
/// are parameters so callers and tests can probe convergence behavior.
///
/// A singular input produces non-finite factors, mirroring `inverse`.
pub fn decompose(
    m: &Matrix4x4,
    epsilon: Float,
    max_iterations: u32,
) -> (Vector3f, Quaternion, Matrix4x4) {
    // Translation is the last column.
    let t = Vector3f::new(m.m[4 * 0 + 3], m.m[4 * 1 + 3], m.m[4 * 2 + 3]);

    // Remaining scale-rotation part with the translation zeroed.
    let mut msr = *m;
    for i in 0..3 {
        msr.m[4 * i + 3] = 0.0;
    }
    msr.m[15] = 1.0;

    let mut mr = msr;
    let mut count = 0;
    loop {
        let mrit = mr.transpose().inverse();
        let mut mrnext = mr;
        for i in 0..16 {
            mrnext.m[i] = 0.5 * (mr.m[i] + mrit.m[i]);
        }

        let mut norm: Float = 0.0;
        for i in 0..3 {
            let n = Float::abs(mr.m[4 * i + 0] - mrnext.m[4 * i + 0])
                + Float::abs(mr.m[4 * i + 1] - mrnext.m[4 * i + 1])
                + Float::abs(mr.m[4 * i + 2] - mrnext.m[4 * i + 2]);
            norm = Float::max(norm, n);
        }
        mr = mrnext;
        count += 1;

        if norm <= epsilon {
            break;
        }
        if count >= max_iterations {
            log::warn!(
                "polar decomposition stopped at the {} iteration cap (residual {})",
                max_iterations,
                norm
            );
            break;
        }
    }

    let r = Quaternion::from_matrix(&mr);
    let s = mr.inverse() * msr;
    return (t, r, s);
}
