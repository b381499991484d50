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

//! The per-draw uniform structure handed to the GPU shading stage.

use super::MaterialBlock;
use crate::math::{Mat3, Mat4};
use std::mem;

/// Everything a single draw needs from the CPU, exactly 336 bytes.
///
/// Matrices are column-major. The normal matrix is a 3x3 stored as three
/// 16-byte column slots, so the following field lands on a 16-byte
/// boundary. Each composed `FrameUniforms` is an independent value owned
/// by its draw; nothing is shared across draws or frames.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// The camera projection matrix.
    pub projection: [[f32; 4]; 4],
    /// The combined model-view matrix for this draw.
    pub model_view: [[f32; 4]; 4],
    /// Inverse-transpose of the model-view's upper-left 3x3, with each
    /// column padded to a `vec4` slot.
    pub normal_matrix: [[f32; 4]; 3],
    /// The texture coordinate transform for this draw's material.
    pub texture_transform: [[f32; 4]; 4],
    /// The packed material parameters.
    pub material: MaterialBlock,
    /// Number of valid entries in the light buffer. Never exceeds
    /// [`super::MAX_LIGHTS`].
    pub light_count: i32,
    /// Non-zero when the draw samples a texture.
    pub has_texture: i32,
    /// Rasterized size for point primitives, in pixels.
    pub point_size: f32,
    /// Non-zero when the draw bypasses lighting entirely.
    pub is_unlit: i32,
}

const _: () = assert!(mem::size_of::<FrameUniforms>() == 336);
const _: () = assert!(mem::offset_of!(FrameUniforms, projection) == 0);
const _: () = assert!(mem::offset_of!(FrameUniforms, model_view) == 64);
const _: () = assert!(mem::offset_of!(FrameUniforms, normal_matrix) == 128);
const _: () = assert!(mem::offset_of!(FrameUniforms, texture_transform) == 176);
const _: () = assert!(mem::offset_of!(FrameUniforms, material) == 240);
const _: () = assert!(mem::offset_of!(FrameUniforms, light_count) == 320);
const _: () = assert!(mem::offset_of!(FrameUniforms, has_texture) == 324);
const _: () = assert!(mem::offset_of!(FrameUniforms, point_size) == 328);
const _: () = assert!(mem::offset_of!(FrameUniforms, is_unlit) == 332);

impl Default for FrameUniforms {
    /// Identity matrices, the default material, and no lights.
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            model_view: Mat4::IDENTITY.to_cols_array_2d(),
            normal_matrix: Mat3::IDENTITY.to_padded_cols(),
            texture_transform: Mat4::IDENTITY.to_cols_array_2d(),
            material: MaterialBlock::default(),
            light_count: 0,
            has_texture: 0,
            point_size: 1.0,
            is_unlit: 0,
        }
    }
}

impl FrameUniforms {
    /// Returns the raw bytes of this structure for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
