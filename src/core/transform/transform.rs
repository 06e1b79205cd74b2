use super::matrix4x4::Matrix4x4;
use crate::core::base::*;
use crate::core::geometry::*;

/// Forward matrix paired with its inverse. Constructors that take only the
/// forward matrix compute the inverse; the pair form trusts the caller, for
/// factories where the inverse is known analytically.
///
/// A transform built from a singular matrix is usable but maps everything
/// to non-finite values; invertibility is the caller's responsibility.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub minv: Matrix4x4,
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            m: Matrix4x4::identity(),
            minv: Matrix4x4::identity(),
        }
    }

    pub fn translate(delta: &Vector3f) -> Self {
        #[rustfmt::skip]
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, delta.x,
            0.0, 1.0, 0.0, delta.y,
            0.0, 0.0, 1.0, delta.z,
            0.0, 0.0, 0.0, 1.0,
        );
        #[rustfmt::skip]
        let minv = Matrix4x4::new(
            1.0, 0.0, 0.0, -delta.x,
            0.0, 1.0, 0.0, -delta.y,
            0.0, 0.0, 1.0, -delta.z,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform { m, minv }
    }

    pub fn scale(x: Float, y: Float, z: Float) -> Self {
        #[rustfmt::skip]
        let m = Matrix4x4::new(
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        #[rustfmt::skip]
        let minv = Matrix4x4::new(
            1.0 / x, 0.0,     0.0,     0.0,
            0.0,     1.0 / y, 0.0,     0.0,
            0.0,     0.0,     1.0 / z, 0.0,
            0.0,     0.0,     0.0,     1.0,
        );
        Transform { m, minv }
    }

    pub fn rotate_x(theta: Float) -> Self {
        let sin_theta = Float::sin(radians(theta));
        let cos_theta = Float::cos(radians(theta));
        #[rustfmt::skip]
        let m = Matrix4x4::new(
            1.0, 0.0,       0.0,        0.0,
            0.0, cos_theta, -sin_theta, 0.0,
            0.0, sin_theta, cos_theta,  0.0,
            0.0, 0.0,       0.0,        1.0,
        );
        Transform {
            m,
            minv: m.transpose(),
        }
    }

    pub fn rotate_y(theta: Float) -> Self {
        let sin_theta = Float::sin(radians(theta));
        let cos_theta = Float::cos(radians(theta));
        #[rustfmt::skip]
        let m = Matrix4x4::new(
            cos_theta,  0.0, sin_theta, 0.0,
            0.0,        1.0, 0.0,       0.0,
            -sin_theta, 0.0, cos_theta, 0.0,
            0.0,        0.0, 0.0,       1.0,
        );
        Transform {
            m,
            minv: m.transpose(),
        }
    }

    pub fn rotate_z(theta: Float) -> Self {
        let sin_theta = Float::sin(radians(theta));
        let cos_theta = Float::cos(radians(theta));
        #[rustfmt::skip]
        let m = Matrix4x4::new(
            cos_theta, -sin_theta, 0.0, 0.0,
            sin_theta, cos_theta,  0.0, 0.0,
            0.0,       0.0,        1.0, 0.0,
            0.0,       0.0,        0.0, 1.0,
        );
        Transform {
            m,
            minv: m.transpose(),
        }
    }

    /// Rotation of `theta` degrees about an arbitrary axis.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Self {
        let a = axis.normalize();
        let sin_theta = Float::sin(radians(theta));
        let cos_theta = Float::cos(radians(theta));
        let mut m = Matrix4x4::identity();

        // Rotation of first basis vector
        m.m[4 * 0 + 0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[4 * 0 + 1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[4 * 0 + 2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;

        // Rotations of second and third basis vectors
        m.m[4 * 1 + 0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[4 * 1 + 1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[4 * 1 + 2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;

        m.m[4 * 2 + 0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[4 * 2 + 1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[4 * 2 + 2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;

        Transform {
            m,
            minv: m.transpose(),
        }
    }

    /// World-to-camera transform for a viewer at `pos` looking at `look`.
    /// The inverse (camera-to-world) is assembled directly from the derived
    /// basis; only the forward matrix needs the general inverse.
    pub fn look_at(pos: &Point3f, look: &Point3f, up: &Vector3f) -> Self {
        let dir = (*look - *pos).normalize();
        let right = Vector3f::cross(&up.normalize(), &dir);
        if right.length_squared() == 0.0 {
            log::error!(
                "look_at: up vector {:?} and viewing direction {:?} are parallel",
                up,
                dir
            );
            return Transform::identity();
        }
        let right = right.normalize();
        let new_up = Vector3f::cross(&dir, &right);
        #[rustfmt::skip]
        let camera_to_world = Matrix4x4::new(
            right.x, new_up.x, dir.x, pos.x,
            right.y, new_up.y, dir.y, pos.y,
            right.z, new_up.z, dir.z, pos.z,
            0.0,     0.0,      0.0,   1.0,
        );
        Transform {
            m: camera_to_world.inverse(),
            minv: camera_to_world,
        }
    }

    pub fn inverse(&self) -> Self {
        Transform {
            m: self.minv,
            minv: self.m,
        }
    }

    pub fn transpose(&self) -> Self {
        Transform {
            m: self.m.transpose(),
            minv: self.minv.transpose(),
        }
    }

    pub fn is_identity(&self) -> bool {
        return self.m == Matrix4x4::identity();
    }

    /// Sign of the upper 3x3 determinant; negative means the transform
    /// flips a right-handed frame to a left-handed one.
    pub fn swaps_handedness(&self) -> bool {
        let m = &self.m.m;
        let det = m[4 * 0 + 0] * (m[4 * 1 + 1] * m[4 * 2 + 2] - m[4 * 1 + 2] * m[4 * 2 + 1])
            - m[4 * 0 + 1] * (m[4 * 1 + 0] * m[4 * 2 + 2] - m[4 * 1 + 2] * m[4 * 2 + 0])
            + m[4 * 0 + 2] * (m[4 * 1 + 0] * m[4 * 2 + 1] - m[4 * 1 + 1] * m[4 * 2 + 0]);
        return det < 0.0;
    }

    pub fn has_scale(&self) -> bool {
        let la2 = self.transform_vector(&Vector3f::new(1.0, 0.0, 0.0)).length_squared();
        let lb2 = self.transform_vector(&Vector3f::new(0.0, 1.0, 0.0)).length_squared();
        let lc2 = self.transform_vector(&Vector3f::new(0.0, 0.0, 1.0)).length_squared();
        let not_one = |x: Float| !(0.999..=1.001).contains(&x);
        return not_one(la2) || not_one(lb2) || not_one(lc2);
    }

    /// Full homogeneous transform; the result is divided by the homogeneous
    /// weight when it is not one. Points are the only quantity that takes
    /// the perspective divide.
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let (x, y, z) = (p.x, p.y, p.z);
        let m = &self.m.m;
        let xp = m[0] * x + m[1] * y + m[2] * z + m[3];
        let yp = m[4] * x + m[5] * y + m[6] * z + m[7];
        let zp = m[8] * x + m[9] * y + m[10] * z + m[11];
        let wp = m[12] * x + m[13] * y + m[14] * z + m[15];
        if wp == 1.0 {
            return Point3f::new(xp, yp, zp);
        } else {
            return Point3f::new(xp, yp, zp) / wp;
        }
    }

    /// Linear part only; translation does not apply to directions.
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let (x, y, z) = (v.x, v.y, v.z);
        let m = &self.m.m;
        return Vector3f::new(
            m[0] * x + m[1] * y + m[2] * z,
            m[4] * x + m[5] * y + m[6] * z,
            m[8] * x + m[9] * y + m[10] * z,
        );
    }

    /// Normals transform by the inverse transpose, read here as the columns
    /// of `minv`. Using the forward matrix would break perpendicularity
    /// under non-uniform scale.
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let (x, y, z) = (n.x, n.y, n.z);
        let minv = &self.minv.m;
        return Normal3f::new(
            minv[0] * x + minv[4] * y + minv[8] * z,
            minv[1] * x + minv[5] * y + minv[9] * z,
            minv[2] * x + minv[6] * y + minv[10] * z,
        );
    }

    /// Origin maps as a point, direction as a vector; parametric range and
    /// time pass through unchanged.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        let o = self.transform_point(&r.o);
        let d = self.transform_vector(&r.d);
        return Ray::new(&o, &d, r.t_max.get(), r.time);
    }

    pub fn transform_ray_differential(&self, r: &RayDifferential) -> RayDifferential {
        let mut ret = RayDifferential::from(self.transform_ray(&r.ray));
        ret.has_differentials = r.has_differentials;
        ret.rx_origin = self.transform_point(&r.rx_origin);
        ret.ry_origin = self.transform_point(&r.ry_origin);
        ret.rx_direction = self.transform_vector(&r.rx_direction);
        ret.ry_direction = self.transform_vector(&r.ry_direction);
        return ret;
    }

    /// Tightest axis-aligned box containing the transformed box, computed
    /// per output axis from the translation column plus the smaller/larger
    /// of each `m[i][j] * min[j]` / `m[i][j] * max[j]` pair (Arvo 1990).
    /// Equivalent to transforming all eight corners for affine transforms,
    /// in linear rather than exponential work.
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        let m = &self.m.m;
        let mut min = [m[3], m[7], m[11]];
        let mut max = min;
        for i in 0..3 {
            for j in 0..3 {
                let p0 = m[4 * i + j] * b.min[j];
                let p1 = m[4 * i + j] * b.max[j];
                min[i] += Float::min(p0, p1);
                max[i] += Float::max(p0, p1);
            }
        }
        return Bounds3f::new(
            &Point3f::new(min[0], min[1], min[2]),
            &Point3f::new(max[0], max[1], max[2]),
        );
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul<Transform> for Transform {
    type Output = Transform;
    /// Inverse of a composition is the reverse-order composition of the
    /// inverses.
    fn mul(self, t2: Transform) -> Transform {
        Transform {
            m: self.m * t2.m,
            minv: t2.minv * self.minv,
        }
    }
}

impl From<Matrix4x4> for Transform {
    fn from(m: Matrix4x4) -> Self {
        Transform {
            m,
            minv: m.inverse(),
        }
    }
}

impl From<[Float; 16]> for Transform {
    fn from(v: [Float; 16]) -> Self {
        Transform::from(Matrix4x4::from(v))
    }
}

impl From<(Matrix4x4, Matrix4x4)> for Transform {
    fn from(v: (Matrix4x4, Matrix4x4)) -> Self {
        Transform { m: v.0, minv: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let t1 = Transform::scale(4.0, 4.0, 4.0);
        let t2 = t1.inverse();
        let t3 = Transform::scale(0.25, 0.25, 0.25);
        assert_eq!(t2, t3);
    }

    #[test]
    fn test_002() {
        let t1 = Transform::translate(&Vector3f::new(4.0, 4.0, 4.0));
        let t2 = t1.inverse();
        let t3 = Transform::translate(&Vector3f::new(-4.0, -4.0, -4.0));
        assert_eq!(t2, t3);
    }

    #[test]
    fn test_003() {
        let t1 = Transform::rotate_x(90.0);
        assert_eq!(t1.inverse(), Transform::rotate_x(-90.0));
        let t2 = Transform::rotate_y(90.0);
        assert_eq!(t2.inverse(), Transform::rotate_y(-90.0));
        let t3 = Transform::rotate_z(90.0);
        assert_eq!(t3.inverse(), Transform::rotate_z(-90.0));
    }

    #[test]
    fn test_004() {
        let t = Transform::translate(&Vector3f::new(1.0, -2.0, 3.0))
            * Transform::rotate_z(37.0)
            * Transform::scale(2.0, 3.0, 4.0);
        let composed = t * t.inverse();
        let i = Matrix4x4::identity();
        for k in 0..16 {
            assert!(Float::abs(composed.m.m[k] - i.m[k]) < 1e-5);
            assert!(Float::abs(composed.minv.m[k] - i.m[k]) < 1e-5);
        }
    }

    #[test]
    fn test_005() {
        let t = Transform::rotate_z(90.0);
        let v = t.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert!(Vector3f::distance(&v, &Vector3f::new(0.0, 1.0, 0.0)) < 1e-6);
    }

    #[test]
    fn test_006() {
        // Vectors scale with the matrix, normals with its inverse transpose.
        let t = Transform::scale(2.0, 1.0, 1.0);
        let v = t.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        let n = t.transform_normal(&Normal3f::new(1.0, 0.0, 0.0));
        assert_eq!(v, Vector3f::new(2.0, 0.0, 0.0));
        assert_eq!(n, Normal3f::new(0.5, 0.0, 0.0));
        assert_ne!(v, n);
    }

    #[test]
    fn test_007() {
        let t = Transform::rotate(45.0, &Vector3f::new(1.0, 1.0, 1.0));
        let p = Point3f::new(0.3, -0.7, 1.1);
        let q = t.inverse().transform_point(&t.transform_point(&p));
        assert!(Point3f::distance(&q, &p) < 1e-5);
        assert!(!t.swaps_handedness());
    }

    #[test]
    fn test_008() {
        let pos = Point3f::new(0.0, 0.0, 0.0);
        let look = Point3f::new(0.0, 0.0, 1.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        let t = Transform::look_at(&pos, &look, &up);
        let composed = t * t.inverse();
        let i = Matrix4x4::identity();
        for k in 0..16 {
            assert!(Float::abs(composed.m.m[k] - i.m[k]) < 1e-5);
        }
    }

    #[test]
    fn test_009() {
        assert!(Transform::scale(1.0, 1.0, -1.0).swaps_handedness());
        assert!(!Transform::scale(1.0, 1.0, 1.0).swaps_handedness());
        assert!(Transform::scale(-1.0, -1.0, -1.0).swaps_handedness());
    }

    #[test]
    fn test_010() {
        assert!(Transform::identity().is_identity());
        assert!(!Transform::translate(&Vector3f::new(1.0, 0.0, 0.0)).is_identity());
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn test_011() {
        // A non-unit homogeneous weight divides the point through.
        #[rustfmt::skip]
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 2.0,
        );
        let t = Transform::from(m);
        let p = t.transform_point(&Point3f::new(2.0, 4.0, 6.0));
        assert_eq!(p, Point3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_012() {
        let t = Transform::rotate_y(30.0) * Transform::translate(&Vector3f::new(0.0, 1.0, 2.0));
        let r = Ray::new(
            &Point3f::new(1.0, 2.0, 3.0),
            &Vector3f::new(0.0, 0.0, 1.0),
            100.0,
            0.25,
        );
        let tr = t.transform_ray(&r);
        assert_eq!(tr.t_max.get(), 100.0);
        assert_eq!(tr.time, 0.25);
        assert!(Point3f::distance(&tr.o, &t.transform_point(&r.o)) == 0.0);
        // Direction picks up no translation.
        assert!(Float::abs(tr.d.length() - 1.0) < 1e-6);
    }

    #[test]
    fn test_013() {
        let t = Transform::rotate_z(30.0) * Transform::scale(2.0, 1.0, 1.0);
        let b = Bounds3f::new(&Point3f::new(-1.0, -1.0, -1.0), &Point3f::new(1.0, 2.0, 3.0));
        let tb = t.transform_bounds(&b);
        // Oracle: union of the eight transformed corners.
        let mut expected = Bounds3f::from_points(
            &t.transform_point(&b.corner(0)),
            &t.transform_point(&b.corner(1)),
        );
        for i in 2..8 {
            expected = expected.union_p(&t.transform_point(&b.corner(i)));
        }
        assert!(Point3f::distance(&tb.min, &expected.min) < 1e-5);
        assert!(Point3f::distance(&tb.max, &expected.max) < 1e-5);
    }

    #[test]
    fn test_014() {
        assert!(Transform::scale(2.0, 1.0, 1.0).has_scale());
        assert!(!Transform::rotate_x(40.0).has_scale());
        assert!(!Transform::translate(&Vector3f::new(5.0, 0.0, 0.0)).has_scale());
    }
}
