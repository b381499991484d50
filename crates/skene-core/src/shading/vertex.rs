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

//! The per-vertex record layout shared with the GPU vertex stage.

use crate::math::{LinearRgba, Vec2, Vec3};
use std::mem;

/// A single vertex as stored in the vertex buffer, with a 64-byte stride.
///
/// Attribute offsets are fixed: position at 0, normal at 16, color at 32,
/// texture coordinate at 48. The trailing 8 bytes pad the stride to a
/// 16-byte multiple.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexRecord {
    /// Object-space position as a homogeneous point (`w` = 1.0).
    pub position: [f32; 4],
    /// Object-space surface normal as a homogeneous direction (`w` = 0.0).
    /// Expected to be unit length before upload.
    pub normal: [f32; 4],
    /// Per-vertex color (linear RGBA). Defaults to opaque white so that
    /// uncolored geometry is driven entirely by its material.
    pub color: LinearRgba,
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
    /// Pads the stride to 64 bytes. Always zero.
    pub _padding: [f32; 2],
}

const _: () = assert!(mem::size_of::<VertexRecord>() == 64);
const _: () = assert!(mem::offset_of!(VertexRecord, position) == 0);
const _: () = assert!(mem::offset_of!(VertexRecord, normal) == 16);
const _: () = assert!(mem::offset_of!(VertexRecord, color) == 32);
const _: () = assert!(mem::offset_of!(VertexRecord, tex_coord) == 48);

impl VertexRecord {
    /// Creates a white vertex from a position, normal, and texture coordinate.
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            normal: normal.extend(0.0).to_array(),
            color: LinearRgba::WHITE,
            tex_coord: tex_coord.to_array(),
            _padding: [0.0; 2],
        }
    }

    /// Returns this vertex with a different per-vertex color.
    #[inline]
    pub fn with_color(self, color: LinearRgba) -> Self {
        Self { color, ..self }
    }
}

impl Default for VertexRecord {
    /// A white vertex at the origin with a +Z normal.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_is_64_bytes() {
        assert_eq!(mem::size_of::<VertexRecord>(), 64);
        assert_eq!(bytemuck::bytes_of(&VertexRecord::default()).len(), 64);
    }

    #[test]
    fn test_homogeneous_components() {
        let v = VertexRecord::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Y,
            Vec2::new(0.5, 0.5),
        );
        // Positions are points, normals are directions.
        assert_eq!(v.position[3], 1.0);
        assert_eq!(v.normal[3], 0.0);
        assert_eq!(v.color, LinearRgba::WHITE);
    }

    #[test]
    fn test_with_color() {
        let v = VertexRecord::default().with_color(LinearRgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(v.color.r, 1.0);
        assert_eq!(v.color.g, 0.0);
        // The rest of the record is untouched.
        assert_eq!(v.normal, [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_padding_stays_zero() {
        let v = VertexRecord::new(Vec3::ONE, Vec3::X, Vec2::ONE);
        assert_eq!(v._padding, [0.0; 2]);
    }
}
