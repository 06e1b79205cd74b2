use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::transform::{Matrix4x4, Transform};
use std::ops;

/// Rotation as a vector part and a scalar part. Operations assume unit
/// length where a rotation is meant; nothing here re-normalizes except
/// where documented.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Quaternion {
    pub v: Vector3f,
    pub w: Float,
}

impl Quaternion {
    pub fn new(v: &Vector3f, w: Float) -> Self {
        Quaternion { v: *v, w }
    }

    pub fn identity() -> Self {
        Quaternion {
            v: Vector3f::zero(),
            w: 1.0,
        }
    }

    pub fn dot(q1: &Quaternion, q2: &Quaternion) -> Float {
        return q1.v.dot(&q2.v) + q1.w * q2.w;
    }

    pub fn normalize(&self) -> Self {
        return *self / Float::sqrt(Quaternion::dot(self, self));
    }

    /// Rotation component of a matrix, branching on the trace or the
    /// largest diagonal entry so the square root below stays well away
    /// from zero. The off-diagonal sums and differences must agree with
    /// `to_transform` sign for sign, or interpolation runs backwards.
    pub fn from_matrix(mat: &Matrix4x4) -> Self {
        let m = &mat.m;
        let trace = m[4 * 0 + 0] + m[4 * 1 + 1] + m[4 * 2 + 2];
        if trace > 0.0 {
            let t = trace + 1.0;
            let s = inv_sqrt(t) * 0.5;
            Quaternion {
                v: Vector3f::new(
                    (m[4 * 2 + 1] - m[4 * 1 + 2]) * s,
                    (m[4 * 0 + 2] - m[4 * 2 + 0]) * s,
                    (m[4 * 1 + 0] - m[4 * 0 + 1]) * s,
                ),
                w: s * t,
            }
        } else if m[4 * 0 + 0] > m[4 * 1 + 1] && m[4 * 0 + 0] > m[4 * 2 + 2] {
            let t = m[4 * 0 + 0] - m[4 * 1 + 1] - m[4 * 2 + 2] + 1.0;
            let s = inv_sqrt(t) * 0.5;
            Quaternion {
                v: Vector3f::new(
                    s * t,
                    (m[4 * 1 + 0] + m[4 * 0 + 1]) * s,
                    (m[4 * 2 + 0] + m[4 * 0 + 2]) * s,
                ),
                w: (m[4 * 2 + 1] - m[4 * 1 + 2]) * s,
            }
        } else if m[4 * 1 + 1] > m[4 * 2 + 2] {
            let t = -m[4 * 0 + 0] + m[4 * 1 + 1] - m[4 * 2 + 2] + 1.0;
            let s = inv_sqrt(t) * 0.5;
            Quaternion {
                v: Vector3f::new(
                    (m[4 * 0 + 1] + m[4 * 1 + 0]) * s,
                    s * t,
                    (m[4 * 2 + 1] + m[4 * 1 + 2]) * s,
                ),
                w: (m[4 * 0 + 2] - m[4 * 2 + 0]) * s,
            }
        } else {
            let t = -m[4 * 0 + 0] - m[4 * 1 + 1] + m[4 * 2 + 2] + 1.0;
            let s = inv_sqrt(t) * 0.5;
            Quaternion {
                v: Vector3f::new(
                    (m[4 * 0 + 2] + m[4 * 2 + 0]) * s,
                    (m[4 * 1 + 2] + m[4 * 2 + 1]) * s,
                    s * t,
                ),
                w: (m[4 * 1 + 0] - m[4 * 0 + 1]) * s,
            }
        }
    }

    /// Rotation matrix from a unit quaternion, with doubled components so
    /// each entry costs one multiply. The inverse of a rotation is its
    /// transpose, so no general inversion is needed.
    pub fn to_transform(&self) -> Transform {
        let v = &self.v;
        let w = self.w;
        let x2 = v.x + v.x;
        let y2 = v.y + v.y;
        let z2 = v.z + v.z;

        let xx2 = v.x * x2;
        let yy2 = v.y * y2;
        let zz2 = v.z * z2;
        let xy2 = v.x * y2;
        let xz2 = v.x * z2;
        let yz2 = v.y * z2;
        let wx2 = w * x2;
        let wy2 = w * y2;
        let wz2 = w * z2;

        let mut m = Matrix4x4::identity();
        m.m[4 * 0 + 0] = 1.0 - yy2 - zz2;
        m.m[4 * 0 + 1] = xy2 - wz2;
        m.m[4 * 0 + 2] = xz2 + wy2;
        m.m[4 * 1 + 0] = xy2 + wz2;
        m.m[4 * 1 + 1] = 1.0 - xx2 - zz2;
        m.m[4 * 1 + 2] = yz2 - wx2;
        m.m[4 * 2 + 0] = xz2 - wy2;
        m.m[4 * 2 + 1] = yz2 + wx2;
        m.m[4 * 2 + 2] = 1.0 - xx2 - yy2;

        return Transform::from((m, m.transpose()));
    }

    /// Spherical interpolation. Near-parallel quaternions fall back to a
    /// normalized lerp; the slerp formula divides by sin(theta) and is
    /// unstable there.
    pub fn slerp(t: Float, q1: &Quaternion, q2: &Quaternion) -> Quaternion {
        let cos_theta = Quaternion::dot(q1, q2);
        if cos_theta > 0.9995 {
            return (*q1 * (1.0 - t) + *q2 * t).normalize();
        } else {
            let theta = Float::acos(Float::clamp(cos_theta, -1.0, 1.0));
            let theta_p = theta * t;
            let q_perp = (*q2 - *q1 * cos_theta).normalize();
            return *q1 * Float::cos(theta_p) + q_perp * Float::sin(theta_p);
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl ops::Add<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            v: self.v + rhs.v,
            w: self.w + rhs.w,
        }
    }
}

impl ops::Sub<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            v: self.v - rhs.v,
            w: self.w - rhs.w,
        }
    }
}

impl ops::Mul<Float> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Float) -> Quaternion {
        Quaternion {
            v: self.v * rhs,
            w: self.w * rhs,
        }
    }
}

impl ops::Div<Float> for Quaternion {
    type Output = Quaternion;
    fn div(self, rhs: Float) -> Quaternion {
        Quaternion {
            v: self.v / rhs,
            w: self.w / rhs,
        }
    }
}

impl ops::Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        Quaternion {
            v: -self.v,
            w: -self.w,
        }
    }
}

impl From<&Transform> for Quaternion {
    fn from(t: &Transform) -> Self {
        Quaternion::from_matrix(&t.m)
    }
}
