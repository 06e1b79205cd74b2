use super::vector3::*;

/// Axis-aligned box described by its minimum and maximum corners.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Bounds3 {
    pub min: Point3f,
    pub max: Point3f,
}

pub type Bounds3f = Bounds3;

impl Bounds3 {
    pub fn new(min: &Point3f, max: &Point3f) -> Self {
        Bounds3 {
            min: *min,
            max: *max,
        }
    }

    /// Smallest box containing two arbitrary points.
    pub fn from_points(p1: &Point3f, p2: &Point3f) -> Self {
        Bounds3 {
            min: Point3f::min(p1, p2),
            max: Point3f::max(p1, p2),
        }
    }

    pub fn corner(&self, i: usize) -> Point3f {
        debug_assert!(i < 8);
        let x = if i & 1 != 0 { self.max.x } else { self.min.x };
        let y = if i & 2 != 0 { self.max.y } else { self.min.y };
        let z = if i & 4 != 0 { self.max.z } else { self.min.z };
        return Point3f::new(x, y, z);
    }

    pub fn diagonal(&self) -> Vector3f {
        return self.max - self.min;
    }

    pub fn union(&self, other: &Self) -> Self {
        return Bounds3 {
            min: Point3f::min(&self.min, &other.min),
            max: Point3f::max(&self.max, &other.max),
        };
    }

    pub fn union_p(&self, p: &Point3f) -> Self {
        return Bounds3 {
            min: Point3f::min(&self.min, p),
            max: Point3f::max(&self.max, p),
        };
    }
}
