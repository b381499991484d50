// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Mat3` and `Mat4` types and associated operations.

use super::{Vec3, Vec4, EPSILON};
use std::ops::Mul;

// --- Mat3 ---

/// A 3x3 column-major matrix.
///
/// Its primary role here is as the normal matrix: the inverse-transpose of
/// the upper-left 3x3 corner of a model-view [`Mat4`], used to transform
/// surface normals without picking up non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a `Mat3` from the upper-left 3x3 corner of a [`Mat4`],
    /// discarding the translation column.
    #[inline]
    pub fn from_mat4(m4: &Mat4) -> Self {
        Self::from_cols(
            m4.cols[0].truncate(),
            m4.cols[1].truncate(),
            m4.cols[2].truncate(),
        )
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
            + c2.x * (c0.y * c1.z - c1.y * c0.z)
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec3::new(self.cols[0].x, self.cols[1].x, self.cols[2].x),
            Vec3::new(self.cols[0].y, self.cols[1].y, self.cols[2].y),
            Vec3::new(self.cols[0].z, self.cols[1].z, self.cols[2].z),
        )
    }

    /// Computes the inverse of the matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant close to zero).
    pub fn inverse(&self) -> Option<Self> {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let m00 = c1.y * c2.z - c2.y * c1.z;
        let m10 = c2.y * c0.z - c0.y * c2.z;
        let m20 = c0.y * c1.z - c1.y * c0.z;
        let det = c0.x * m00 + c1.x * m10 + c2.x * m20;

        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let m01 = c2.x * c1.z - c1.x * c2.z;
        let m11 = c0.x * c2.z - c2.x * c0.z;
        let m21 = c1.x * c0.z - c0.x * c1.z;
        let m02 = c1.x * c2.y - c2.x * c1.y;
        let m12 = c2.x * c0.y - c0.x * c2.y;
        let m22 = c0.x * c1.y - c1.x * c0.y;

        Some(Self::from_cols(
            Vec3::new(m00, m10, m20) * inv_det,
            Vec3::new(m01, m11, m21) * inv_det,
            Vec3::new(m02, m12, m22) * inv_det,
        ))
    }

    /// Returns the columns padded to 16-byte slots, as uploaded to the GPU.
    ///
    /// A `mat3` column in uniform memory occupies a full `vec4` slot; the
    /// fourth element of each slot is zero.
    #[inline]
    pub fn to_padded_cols(&self) -> [[f32; 4]; 3] {
        [
            self.cols[0].extend(0.0).to_array(),
            self.cols[1].extend(0.0).to_array(),
            self.cols[2].extend(0.0).to_array(),
        ]
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

// --- Mat4 ---

/// A 4x4 column-major matrix, used for 3D affine and projective transformations.
///
/// This is the primary type for model, view, and projection matrices. The
/// memory layout is column-major, compatible with modern graphics APIs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, v.extend(1.0))
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::W,
        )
    }

    /// Creates a matrix for a rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(c, s, 0.0, 0.0),
            Vec4::new(-s, c, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        )
    }

    /// Creates a rotation matrix from a normalized axis and an angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector.
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let x = axis.x;
        let y = axis.y;
        let z = axis.z;

        Self::from_cols(
            Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vec4::new(t * y * x - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vec4::new(t * z * x + s * y, t * z * y - s * x, t * z * z + c, 0.0),
            Vec4::W,
        )
    }

    /// Creates a right-handed perspective projection matrix with a [0, 1]
    /// depth range.
    ///
    /// # Arguments
    ///
    /// * `fov_y_radians`: Vertical field of view in radians.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `z_near`: Distance to the near clipping plane (must be positive).
    /// * `z_far`: Distance to the far clipping plane (must exceed `z_near`).
    #[inline]
    pub fn perspective_rh_zo(
        fov_y_radians: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        debug_assert!(z_near > 0.0 && z_far > z_near);
        let f = 1.0 / (fov_y_radians / 2.0).tan();
        let cc = z_far / (z_near - z_far);
        let dd = (z_near * z_far) / (z_near - z_far);

        Self::from_cols(
            Vec4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, cc, -1.0),
            Vec4::new(0.0, 0.0, dd, 0.0),
        )
    }

    /// Creates a right-handed orthographic projection matrix with a [0, 1]
    /// depth range.
    #[inline]
    pub fn orthographic_rh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = z_far - z_near;

        Self::from_cols(
            Vec4::new(2.0 / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / tmb, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -1.0 / fmn, 0.0),
            Vec4::new(
                -(right + left) / rml,
                -(top + bottom) / tmb,
                -z_near / fmn,
                1.0,
            ),
        )
    }

    /// Creates a right-handed view matrix for a camera looking from `eye`
    /// towards `target`.
    ///
    /// Returns `None` if `eye` and `target` coincide, or if `up` is parallel
    /// to the view direction.
    #[inline]
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Option<Self> {
        let forward = target - eye;
        if forward.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let f = forward.normalize();
        let s = f.cross(up);
        if s.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let s = s.normalize();
        let u = s.cross(f);

        Some(Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-eye.dot(s), -eye.dot(u), eye.dot(f), 1.0),
        ))
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec4::new(
                self.cols[0].x,
                self.cols[1].x,
                self.cols[2].x,
                self.cols[3].x,
            ),
            Vec4::new(
                self.cols[0].y,
                self.cols[1].y,
                self.cols[2].y,
                self.cols[3].y,
            ),
            Vec4::new(
                self.cols[0].z,
                self.cols[1].z,
                self.cols[2].z,
                self.cols[3].z,
            ),
            Vec4::new(
                self.cols[0].w,
                self.cols[1].w,
                self.cols[2].w,
                self.cols[3].w,
            ),
        )
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        // Expansion along the first row, with each 3x3 minor taken from the
        // y/z/w components of the remaining columns.
        let lower = |v: Vec4| Vec3::new(v.y, v.z, v.w);
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];
        let d = self.cols[3];

        a.x * Mat3::from_cols(lower(b), lower(c), lower(d)).determinant()
            - b.x * Mat3::from_cols(lower(a), lower(c), lower(d)).determinant()
            + c.x * Mat3::from_cols(lower(a), lower(b), lower(d)).determinant()
            - d.x * Mat3::from_cols(lower(a), lower(b), lower(c)).determinant()
    }

    /// Computes the inverse of a general matrix, projective transforms
    /// included.
    ///
    /// Returns `None` if the matrix is singular (determinant close to zero).
    /// For matrices known to be affine, [`Mat4::affine_inverse`] is cheaper.
    pub fn inverse(&self) -> Option<Self> {
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];
        let d = self.cols[3];

        let coef00 = c.z * d.w - d.z * c.w;
        let coef02 = b.z * d.w - d.z * b.w;
        let coef03 = b.z * c.w - c.z * b.w;
        let coef04 = c.y * d.w - d.y * c.w;
        let coef06 = b.y * d.w - d.y * b.w;
        let coef07 = b.y * c.w - c.y * b.w;
        let coef08 = c.y * d.z - d.y * c.z;
        let coef10 = b.y * d.z - d.y * b.z;
        let coef11 = b.y * c.z - c.y * b.z;
        let coef12 = c.x * d.w - d.x * c.w;
        let coef14 = b.x * d.w - d.x * b.w;
        let coef15 = b.x * c.w - c.x * b.w;
        let coef16 = c.x * d.z - d.x * c.z;
        let coef18 = b.x * d.z - d.x * b.z;
        let coef19 = b.x * c.z - c.x * b.z;
        let coef20 = c.x * d.y - d.x * c.y;
        let coef22 = b.x * d.y - d.x * b.y;
        let coef23 = b.x * c.y - c.x * b.y;

        let fac0 = Vec4::new(coef00, coef00, coef02, coef03);
        let fac1 = Vec4::new(coef04, coef04, coef06, coef07);
        let fac2 = Vec4::new(coef08, coef08, coef10, coef11);
        let fac3 = Vec4::new(coef12, coef12, coef14, coef15);
        let fac4 = Vec4::new(coef16, coef16, coef18, coef19);
        let fac5 = Vec4::new(coef20, coef20, coef22, coef23);

        let vec0 = Vec4::new(b.x, a.x, a.x, a.x);
        let vec1 = Vec4::new(b.y, a.y, a.y, a.y);
        let vec2 = Vec4::new(b.z, a.z, a.z, a.z);
        let vec3 = Vec4::new(b.w, a.w, a.w, a.w);

        let sign_a = Vec4::new(1.0, -1.0, 1.0, -1.0);
        let sign_b = Vec4::new(-1.0, 1.0, -1.0, 1.0);

        let inv0 = (vec1 * fac0 - vec2 * fac1 + vec3 * fac2) * sign_a;
        let inv1 = (vec0 * fac0 - vec2 * fac3 + vec3 * fac4) * sign_b;
        let inv2 = (vec0 * fac1 - vec1 * fac3 + vec3 * fac5) * sign_a;
        let inv3 = (vec0 * fac2 - vec1 * fac4 + vec2 * fac5) * sign_b;

        // Dot of the first column with the adjugate's first row.
        let det = a.dot(Vec4::new(inv0.x, inv1.x, inv2.x, inv3.x));
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        Some(Self::from_cols(
            inv0 * inv_det,
            inv1 * inv_det,
            inv2 * inv_det,
            inv3 * inv_det,
        ))
    }

    /// Computes the inverse of an affine transformation matrix (one composed
    /// only of translation, rotation, and scale).
    ///
    /// Returns `None` if the matrix is singular.
    pub fn affine_inverse(&self) -> Option<Self> {
        let linear = Mat3::from_mat4(self);
        let inv = linear.inverse()?;
        let t = self.cols[3].truncate();
        let inv_t = -(inv * t);

        Some(Self::from_cols(
            inv.cols[0].extend(0.0),
            inv.cols[1].extend(0.0),
            inv.cols[2].extend(0.0),
            inv_t.extend(1.0),
        ))
    }

    /// Transforms a point (`w` = 1.0) by this matrix and projects the result
    /// back to 3D by dividing by `w`.
    #[inline]
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let h = *self * p.extend(1.0);
        if h.w.abs() > EPSILON {
            h.truncate() * (1.0 / h.w)
        } else {
            h.truncate()
        }
    }

    /// Returns the matrix as a column-major `[[f32; 4]; 4]` array, the form
    /// embedded in GPU uniform structures.
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [
            self.cols[0].to_array(),
            self.cols[1].to_array(),
            self.cols[2].to_array(),
            self.cols[3].to_array(),
        ]
    }

    /// Rebuilds a matrix from its column-major `[[f32; 4]; 4]` array form.
    #[inline]
    pub fn from_cols_array_2d(a: &[[f32; 4]; 4]) -> Self {
        Self::from_cols(
            Vec4::new(a[0][0], a[0][1], a[0][2], a[0][3]),
            Vec4::new(a[1][0], a[1][1], a[1][2], a[1][3]),
            Vec4::new(a[2][0], a[2][1], a[2][2], a[2][3]),
            Vec4::new(a[3][0], a[3][1], a[3][2], a[3][3]),
        )
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Matrix multiplication is not
    /// commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self::from_cols(
            self * rhs.cols[0],
            self * rhs.cols[1],
            self * rhs.cols[2],
            self * rhs.cols[3],
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

// --- Tests ---
