use super::decompose::*;
use super::matrix4x4::Matrix4x4;
use super::transform::Transform;
use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::quaternion::Quaternion;

/// Per-keyframe translation/rotation/scale factors, present only when the
/// two keyframes actually differ.
#[derive(Debug, PartialEq, Clone)]
struct Keyframes {
    t: [Vector3f; 2],
    r: [Quaternion; 2],
    s: [Matrix4x4; 2],
    has_rotation: bool,
}

/// Two keyframe transforms with a time interval, interpolated by
/// decomposing each into translation/rotation/scale and recombining at the
/// query time. Decomposition runs once at construction; everything after
/// is read-only.
#[derive(Debug, PartialEq, Clone)]
pub struct AnimatedTransform {
    pub transforms: [Transform; 2],
    pub times: [Float; 2],
    pub actually_animated: bool,
    keys: Option<Keyframes>,
}

impl AnimatedTransform {
    /// `start_time < end_time` is a precondition; a degenerate or inverted
    /// interval is a caller bug.
    pub fn new(
        start_transform: &Transform,
        start_time: Float,
        end_transform: &Transform,
        end_time: Float,
    ) -> Self {
        debug_assert!(start_time < end_time);
        let actually_animated = start_transform != end_transform;
        let keys = if actually_animated {
            let (t0, r0, s0) = decompose(
                &start_transform.m,
                POLAR_DECOMPOSE_EPSILON,
                POLAR_DECOMPOSE_MAX_ITERATIONS,
            );
            let (t1, mut r1, s1) = decompose(
                &end_transform.m,
                POLAR_DECOMPOSE_EPSILON,
                POLAR_DECOMPOSE_MAX_ITERATIONS,
            );
            // q and -q are the same rotation; flip to the shorter arc.
            if Quaternion::dot(&r0, &r1) < 0.0 {
                r1 = -r1;
            }
            let has_rotation = Quaternion::dot(&r0, &r1) < 0.9995;
            Some(Keyframes {
                t: [t0, t1],
                r: [r0, r1],
                s: [s0, s1],
                has_rotation,
            })
        } else {
            None
        };
        AnimatedTransform {
            transforms: [*start_transform, *end_transform],
            times: [start_time, end_time],
            actually_animated,
            keys,
        }
    }

    pub fn is_animated(&self) -> bool {
        return self.actually_animated;
    }

    pub fn has_rotation(&self) -> bool {
        return self.keys.as_ref().map_or(false, |k| k.has_rotation);
    }

    pub fn has_scale(&self) -> bool {
        return self.transforms[0].has_scale() || self.transforms[1].has_scale();
    }

    /// Transform at `time`, clamped to the keyframe interval. Translation
    /// and the scale matrix interpolate linearly; rotation goes through
    /// slerp when the keyframe rotations differ enough to matter.
    pub fn interpolate(&self, time: Float) -> Transform {
        if !self.actually_animated || time <= self.times[0] {
            return self.transforms[0];
        }
        if time >= self.times[1] {
            return self.transforms[1];
        }
        let Some(keys) = self.keys.as_ref() else {
            return self.transforms[0];
        };

        let dt = (time - self.times[0]) / (self.times[1] - self.times[0]);

        let trans = keys.t[0] * (1.0 - dt) + keys.t[1] * dt;
        let rotate = if keys.has_rotation {
            Quaternion::slerp(dt, &keys.r[0], &keys.r[1])
        } else {
            keys.r[0]
        };
        let mut scale = Matrix4x4::identity();
        for i in 0..3 {
            for j in 0..3 {
                scale.m[4 * i + j] = lerp(dt, keys.s[0].m[4 * i + j], keys.s[1].m[4 * i + j]);
            }
        }

        return Transform::translate(&trans) * rotate.to_transform() * Transform::from(scale);
    }

    pub fn transform_point(&self, time: Float, p: &Point3f) -> Point3f {
        if !self.actually_animated || time <= self.times[0] {
            return self.transforms[0].transform_point(p);
        }
        if time >= self.times[1] {
            return self.transforms[1].transform_point(p);
        }
        return self.interpolate(time).transform_point(p);
    }

    pub fn transform_vector(&self, time: Float, v: &Vector3f) -> Vector3f {
        if !self.actually_animated || time <= self.times[0] {
            return self.transforms[0].transform_vector(v);
        }
        if time >= self.times[1] {
            return self.transforms[1].transform_vector(v);
        }
        return self.interpolate(time).transform_vector(v);
    }

    pub fn transform_normal(&self, time: Float, n: &Normal3f) -> Normal3f {
        if !self.actually_animated || time <= self.times[0] {
            return self.transforms[0].transform_normal(n);
        }
        if time >= self.times[1] {
            return self.transforms[1].transform_normal(n);
        }
        return self.interpolate(time).transform_normal(n);
    }

    pub fn transform_ray(&self, r: &Ray) -> Ray {
        if !self.actually_animated || r.time <= self.times[0] {
            return self.transforms[0].transform_ray(r);
        }
        if r.time >= self.times[1] {
            return self.transforms[1].transform_ray(r);
        }
        return self.interpolate(r.time).transform_ray(r);
    }

    pub fn transform_ray_differential(&self, r: &RayDifferential) -> RayDifferential {
        if !self.actually_animated || r.ray.time <= self.times[0] {
            return self.transforms[0].transform_ray_differential(r);
        }
        if r.ray.time >= self.times[1] {
            return self.transforms[1].transform_ray_differential(r);
        }
        return self.interpolate(r.ray.time).transform_ray_differential(r);
    }

    /// Conservative bound on the box swept over the whole interval. When
    /// rotation is involved the extrema can fall between the keyframes, so
    /// sampled intermediate transforms are folded in and the result padded;
    /// exact extrema would need the motion derivative terms.
    pub fn motion_bounds(&self, b: &Bounds3f) -> Bounds3f {
        if !self.actually_animated {
            return self.transforms[0].transform_bounds(b);
        }
        let b0 = self.transforms[0].transform_bounds(b);
        let b1 = self.transforms[1].transform_bounds(b);
        let mut bounds = b0.union(&b1);
        if !self.has_rotation() {
            return bounds;
        }

        const STEPS: u32 = 64;
        for i in 1..STEPS {
            let time = lerp(i as Float / STEPS as Float, self.times[0], self.times[1]);
            bounds = bounds.union(&self.interpolate(time).transform_bounds(b));
        }
        let d = bounds.diagonal() * 0.1;
        return Bounds3f::new(&(bounds.min - d), &(bounds.max + d));
    }
}
