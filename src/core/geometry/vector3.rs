use crate::core::base::*;
use std::ops;

/// Three-component value shared by vectors, points, and normals. The
/// transform code keys the correct mapping rule off the alias a caller
/// picks, not off a distinct type.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

pub type Vector3f = Vector3;
pub type Point3f = Vector3;
pub type Normal3f = Vector3;

impl Vector3 {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3 { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> Float {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn abs_dot(&self, rhs: &Self) -> Float {
        return Float::abs(self.dot(rhs));
    }

    #[inline]
    pub fn cross(a: &Self, b: &Self) -> Self {
        return Vector3 {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
        };
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> Float {
        return Float::sqrt(self.length_squared());
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        return Vector3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        };
    }

    #[inline]
    pub fn abs(&self) -> Self {
        return Vector3 {
            x: Float::abs(self.x),
            y: Float::abs(self.y),
            z: Float::abs(self.z),
        };
    }

    #[inline]
    pub fn min(a: &Self, b: &Self) -> Self {
        return Vector3 {
            x: Float::min(a.x, b.x),
            y: Float::min(a.y, b.y),
            z: Float::min(a.z, b.z),
        };
    }

    #[inline]
    pub fn max(a: &Self, b: &Self) -> Self {
        return Vector3 {
            x: Float::max(a.x, b.x),
            y: Float::max(a.y, b.y),
            z: Float::max(a.z, b.z),
        };
    }

    #[inline]
    pub fn distance(a: &Self, b: &Self) -> Float {
        return (*a - *b).length();
    }

    #[inline]
    pub fn distance_squared(a: &Self, b: &Self) -> Float {
        return (*a - *b).length_squared();
    }
}

impl ops::Add<Vector3> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl ops::AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::Sub<Vector3> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl ops::SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl ops::Mul<Float> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: Float) -> Vector3 {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl ops::MulAssign<Float> for Vector3 {
    fn mul_assign(&mut self, rhs: Float) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl ops::Div<Float> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: Float) -> Vector3 {
        Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl ops::Index<usize> for Vector3 {
    type Output = Float;
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}
