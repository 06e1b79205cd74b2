use crate::core::base::*;
use std::ops;

/// Row-major 4x4 matrix, stored flat; entry (i, j) lives at `m[4 * i + j]`.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [Float; 16],
}

impl Matrix4x4 {
    #[rustfmt::skip]
    pub fn new(
        t00: Float, t01: Float, t02: Float, t03: Float,
        t10: Float, t11: Float, t12: Float, t13: Float,
        t20: Float, t21: Float, t22: Float, t23: Float,
        t30: Float, t31: Float, t32: Float, t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                t00, t01, t02, t03,
                t10, t11, t12, t13,
                t20, t21, t22, t23,
                t30, t31, t32, t33,
            ],
        }
    }

    pub fn identity() -> Self {
        Matrix4x4 {
            m: [
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        #[rustfmt::skip]
        return Matrix4x4::new(
            m[0], m[4], m[8],  m[12],
            m[1], m[5], m[9],  m[13],
            m[2], m[6], m[10], m[14],
            m[3], m[7], m[11], m[15],
        );
    }

    /// Closed-form inverse built from 2x2 sub-determinants of the top and
    /// bottom row pairs, combined into the adjugate and a single reciprocal
    /// determinant. Branch-free; a singular input yields non-finite entries
    /// rather than an error.
    pub fn inverse(&self) -> Self {
        let m = &self.m;

        let s0 = m[0] * m[5] - m[4] * m[1];
        let s1 = m[0] * m[6] - m[4] * m[2];
        let s2 = m[0] * m[7] - m[4] * m[3];
        let s3 = m[1] * m[6] - m[5] * m[2];
        let s4 = m[1] * m[7] - m[5] * m[3];
        let s5 = m[2] * m[7] - m[6] * m[3];

        let c5 = m[10] * m[15] - m[14] * m[11];
        let c4 = m[9] * m[15] - m[13] * m[11];
        let c3 = m[9] * m[14] - m[13] * m[10];
        let c2 = m[8] * m[15] - m[12] * m[11];
        let c1 = m[8] * m[14] - m[12] * m[10];
        let c0 = m[8] * m[13] - m[12] * m[9];

        let det = 1.0 / (s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0);

        let mut inv = [0.0 as Float; 16];

        inv[0] = (m[5] * c5 - m[6] * c4 + m[7] * c3) * det;
        inv[1] = (-m[1] * c5 + m[2] * c4 - m[3] * c3) * det;
        inv[2] = (m[13] * s5 - m[14] * s4 + m[15] * s3) * det;
        inv[3] = (-m[9] * s5 + m[10] * s4 - m[11] * s3) * det;

        inv[4] = (-m[4] * c5 + m[6] * c2 - m[7] * c1) * det;
        inv[5] = (m[0] * c5 - m[2] * c2 + m[3] * c1) * det;
        inv[6] = (-m[12] * s5 + m[14] * s2 - m[15] * s1) * det;
        inv[7] = (m[8] * s5 - m[10] * s2 + m[11] * s1) * det;

        inv[8] = (m[4] * c4 - m[5] * c2 + m[7] * c0) * det;
        inv[9] = (-m[0] * c4 + m[1] * c2 - m[3] * c0) * det;
        inv[10] = (m[12] * s4 - m[13] * s2 + m[15] * s0) * det;
        inv[11] = (-m[8] * s4 + m[9] * s2 - m[11] * s0) * det;

        inv[12] = (-m[4] * c3 + m[5] * c1 - m[6] * c0) * det;
        inv[13] = (m[0] * c3 - m[1] * c1 + m[2] * c0) * det;
        inv[14] = (-m[12] * s3 + m[13] * s1 - m[14] * s0) * det;
        inv[15] = (m[8] * s3 - m[9] * s1 + m[10] * s0) * det;

        return Matrix4x4 { m: inv };
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl ops::Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut r = Matrix4x4 { m: [0.0; 16] };
        for i in 0..4 {
            for j in 0..4 {
                r.m[4 * i + j] = self.m[4 * i + 0] * rhs.m[4 * 0 + j]
                    + self.m[4 * i + 1] * rhs.m[4 * 1 + j]
                    + self.m[4 * i + 2] * rhs.m[4 * 2 + j]
                    + self.m[4 * i + 3] * rhs.m[4 * 3 + j];
            }
        }
        return r;
    }
}

impl From<[Float; 16]> for Matrix4x4 {
    fn from(v: [Float; 16]) -> Self {
        Matrix4x4 { m: v }
    }
}

impl From<[[Float; 4]; 4]> for Matrix4x4 {
    fn from(v: [[Float; 4]; 4]) -> Self {
        let mut m = [0.0 as Float; 16];
        for i in 0..4 {
            m[4 * i..4 * i + 4].copy_from_slice(&v[i]);
        }
        Matrix4x4 { m }
    }
}
