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

//! Defines the `LinearRgba` color type and associated operations.

use crate::math::vector::{Vec3, Vec4};
use std::ops::{Add, Mul};

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// Lighting accumulates in linear space and components may exceed `1.0`
/// mid-computation; [`LinearRgba::saturate`] clamps the result back to the
/// displayable range at the end of shading.
///
/// `#[repr(C)]` ensures a consistent memory layout for passing color data to
/// graphics APIs.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque `LinearRgba` from a [`Vec3`] of RGB components.
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::rgb(v.x, v.y, v.z)
    }

    /// Creates a `LinearRgba` from an RGB [`Vec3`] and an explicit alpha.
    #[inline]
    pub fn from_vec3_alpha(v: Vec3, a: f32) -> Self {
        Self::new(v.x, v.y, v.z, a)
    }

    /// Returns the RGB components as a [`Vec3`], discarding alpha.
    #[inline]
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Converts this `LinearRgba` to a [`Vec4`].
    #[inline]
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Returns a new color with the same RGB components but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Clamps every component to the `[0.0, 1.0]` range.
    #[inline]
    pub fn saturate(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Linearly interpolates between two colors.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: start.r + (end.r - start.r) * t,
            g: start.g + (end.g - start.g) * t,
            b: start.b + (end.b - start.b) * t,
            a: start.a + (end.a - start.a) * t,
        }
    }
}

// --- Operator Overloads ---

impl Default for LinearRgba {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for LinearRgba {
    type Output = Self;
    /// Adds two colors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Mul<f32> for LinearRgba {
    type Output = Self;
    /// Multiplies all components by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            r: self.r * scalar,
            g: self.g * scalar,
            b: self.b * scalar,
            a: self.a * scalar,
        }
    }
}

impl Mul for LinearRgba {
    type Output = Self;
    /// Multiplies two colors component-wise (modulation).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    fn color_approx_eq(a: LinearRgba, b: LinearRgba) -> bool {
        approx_eq(a.r, b.r) && approx_eq(a.g, b.g) && approx_eq(a.b, b.b) && approx_eq(a.a, b.a)
    }

    #[test]
    fn test_vec_conversions() {
        let c = LinearRgba::from_vec3(Vec3::new(0.1, 0.2, 0.3));
        assert!(approx_eq(c.a, 1.0));
        assert_eq!(c.to_vec3(), Vec3::new(0.1, 0.2, 0.3));

        let c2 = LinearRgba::from_vec3_alpha(Vec3::new(0.4, 0.5, 0.6), 0.7);
        let v = c2.to_vec4();
        assert!(approx_eq(v.w, 0.7));
    }

    #[test]
    fn test_saturate() {
        let hot = LinearRgba::new(1.5, -0.2, 0.5, 2.0);
        let clamped = hot.saturate();
        assert!(color_approx_eq(clamped, LinearRgba::new(1.0, 0.0, 0.5, 1.0)));
    }

    #[test]
    fn test_with_alpha() {
        let c = LinearRgba::WHITE.with_alpha(0.25);
        assert!(approx_eq(c.r, 1.0));
        assert!(approx_eq(c.a, 0.25));
    }

    #[test]
    fn test_add_and_scale() {
        let c1 = LinearRgba::new(0.2, 0.3, 0.4, 0.5);
        let c2 = LinearRgba::new(0.1, 0.1, 0.1, 0.1);
        let sum = c1 + c2;
        assert!(color_approx_eq(sum, LinearRgba::new(0.3, 0.4, 0.5, 0.6)));

        let scaled = c1 * 2.0;
        assert!(color_approx_eq(scaled, LinearRgba::new(0.4, 0.6, 0.8, 1.0)));
    }

    #[test]
    fn test_modulation() {
        let c1 = LinearRgba::new(0.2, 0.5, 0.8, 1.0);
        let c2 = LinearRgba::new(0.5, 0.5, 0.5, 0.5);
        let product = c1 * c2;
        assert!(color_approx_eq(product, LinearRgba::new(0.1, 0.25, 0.4, 0.5)));
    }

    #[test]
    fn test_lerp() {
        let a = LinearRgba::BLACK;
        let b = LinearRgba::WHITE;
        let mid = LinearRgba::lerp(a, b, 0.5);
        assert!(approx_eq(mid.r, 0.5));
        assert!(approx_eq(mid.a, 1.0));
        // t is clamped
        assert!(color_approx_eq(LinearRgba::lerp(a, b, -1.0), a));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(LinearRgba::default(), LinearRgba::WHITE);
    }
}
