use super::vector3::*;
use crate::core::base::*;
use std::cell::Cell;

/// Parametric ray. `t_max` is interior-mutable so intersection code can
/// narrow it through a shared reference.
#[derive(Debug, Default, Clone)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    pub t_max: Cell<Float>,
    pub time: Float,
}

impl Ray {
    pub fn new(o: &Point3f, d: &Vector3f, t_max: Float, time: Float) -> Self {
        Ray {
            o: *o,
            d: *d,
            t_max: Cell::new(t_max),
            time,
        }
    }

    pub fn position(&self, t: Float) -> Point3f {
        return self.o + self.d * t;
    }
}

/// Ray plus the auxiliary x/y camera-sample offsets used for filtering.
/// A plain payload alongside the ray, valid only when `has_differentials`
/// is set.
#[derive(Debug, Default, Clone)]
pub struct RayDifferential {
    pub ray: Ray,
    pub has_differentials: bool,
    pub rx_origin: Point3f,
    pub ry_origin: Point3f,
    pub rx_direction: Vector3f,
    pub ry_direction: Vector3f,
}

impl RayDifferential {
    pub fn new(o: &Point3f, d: &Vector3f, t_max: Float, time: Float) -> Self {
        RayDifferential {
            ray: Ray::new(o, d, t_max, time),
            has_differentials: false,
            rx_origin: Point3f::default(),
            ry_origin: Point3f::default(),
            rx_direction: Vector3f::default(),
            ry_direction: Vector3f::default(),
        }
    }

    pub fn scale_differentials(&mut self, s: Float) {
        self.rx_origin = self.ray.o + (self.rx_origin - self.ray.o) * s;
        self.ry_origin = self.ray.o + (self.ry_origin - self.ray.o) * s;
        self.rx_direction = self.ray.d + (self.rx_direction - self.ray.d) * s;
        self.ry_direction = self.ray.d + (self.ry_direction - self.ray.d) * s;
    }
}

impl From<Ray> for RayDifferential {
    fn from(ray: Ray) -> Self {
        RayDifferential {
            ray,
            has_differentials: false,
            rx_origin: Point3f::default(),
            ry_origin: Point3f::default(),
            rx_direction: Vector3f::default(),
            ry_direction: Vector3f::default(),
        }
    }
}
