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

//! Surface material state and its packed GPU representation.

use crate::math::{Mat4, Vec2, Vec3};
use std::mem;

/// The packed material parameters embedded in the per-draw uniforms.
///
/// The layout is fixed at exactly 80 bytes: four 16-byte color slots
/// (each an RGB triple padded to a `vec4` slot), `shininess` at offset 64,
/// `transparency` at 68, and 8 bytes of trailing padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialBlock {
    /// Diffuse reflectance (rgb), fourth component is padding.
    pub diffuse_color: [f32; 4],
    /// Ambient reflectance (rgb), fourth component is padding.
    pub ambient_color: [f32; 4],
    /// Specular reflectance (rgb), fourth component is padding.
    pub specular_color: [f32; 4],
    /// Emitted color (rgb), fourth component is padding.
    pub emissive_color: [f32; 4],
    /// Specular exponent. Zero disables the specular term.
    pub shininess: f32,
    /// Transparency in `[0, 1]`; the fragment alpha is `1 - transparency`.
    pub transparency: f32,
    /// Pads the block to 80 bytes. Always zero.
    pub _padding: [f32; 2],
}

const _: () = assert!(mem::size_of::<MaterialBlock>() == 80);
const _: () = assert!(mem::offset_of!(MaterialBlock, diffuse_color) == 0);
const _: () = assert!(mem::offset_of!(MaterialBlock, ambient_color) == 16);
const _: () = assert!(mem::offset_of!(MaterialBlock, specular_color) == 32);
const _: () = assert!(mem::offset_of!(MaterialBlock, emissive_color) == 48);
const _: () = assert!(mem::offset_of!(MaterialBlock, shininess) == 64);
const _: () = assert!(mem::offset_of!(MaterialBlock, transparency) == 68);

impl Default for MaterialBlock {
    fn default() -> Self {
        Material::default().to_block()
    }
}

/// A 2D transform applied to texture coordinates before sampling.
///
/// The component transforms compose as translate, then rotate and scale
/// about `center`: a coordinate is moved to the center origin, scaled,
/// rotated, moved back, and finally translated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureTransform {
    /// Translation applied after the centered rotation and scale.
    pub translation: Vec2,
    /// Rotation around `center`, in radians.
    pub rotation: f32,
    /// Scale factors applied about `center`.
    pub scale: Vec2,
    /// The point the rotation and scale pivot around.
    pub center: Vec2,
}

impl Default for TextureTransform {
    /// The identity transform: no translation or rotation, unit scale.
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            center: Vec2::ZERO,
        }
    }
}

impl TextureTransform {
    /// Builds the matrix form of this transform for the uniform buffer.
    ///
    /// Texture coordinates are 2D, but the matrix is a full [`Mat4`] so the
    /// shading stage applies one matrix type everywhere.
    pub fn matrix(&self) -> Mat4 {
        let center = Vec3::new(self.center.x, self.center.y, 0.0);
        let translate = Mat4::from_translation(Vec3::new(
            self.translation.x,
            self.translation.y,
            0.0,
        ));
        let rotate = Mat4::from_rotation_z(self.rotation);
        let scale = Mat4::from_scale(Vec3::new(self.scale.x, self.scale.y, 1.0));
        translate
            * Mat4::from_translation(center)
            * rotate
            * scale
            * Mat4::from_translation(-center)
    }
}

/// The CPU-side description of a surface, flattened to a [`MaterialBlock`]
/// at upload time.
///
/// Defaults mirror the classic fixed-function material: light-grey diffuse,
/// dim ambient, no specular or emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse reflectance.
    pub diffuse_color: Vec3,
    /// Ambient reflectance.
    pub ambient_color: Vec3,
    /// Specular reflectance.
    pub specular_color: Vec3,
    /// Emitted color, independent of lighting.
    pub emissive_color: Vec3,
    /// Specular exponent. Zero disables the specular term.
    pub shininess: f32,
    /// Transparency in `[0, 1]`.
    pub transparency: f32,
    /// Optional transform applied to texture coordinates before sampling.
    pub texture_transform: Option<TextureTransform>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Vec3::splat(0.8),
            ambient_color: Vec3::splat(0.2),
            specular_color: Vec3::ZERO,
            emissive_color: Vec3::ZERO,
            shininess: 0.2,
            transparency: 0.0,
            texture_transform: None,
        }
    }
}

impl Material {
    /// Packs this material into its 80-byte uniform representation.
    pub fn to_block(&self) -> MaterialBlock {
        MaterialBlock {
            diffuse_color: self.diffuse_color.extend(0.0).to_array(),
            ambient_color: self.ambient_color.extend(0.0).to_array(),
            specular_color: self.specular_color.extend(0.0).to_array(),
            emissive_color: self.emissive_color.extend(0.0).to_array(),
            shininess: self.shininess,
            transparency: self.transparency,
            _padding: [0.0; 2],
        }
    }

    /// Returns the texture coordinate matrix for this material, identity
    /// when no transform is set.
    pub fn texture_matrix(&self) -> Mat4 {
        self.texture_transform
            .map(|t| t.matrix())
            .unwrap_or(Mat4::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, FRAC_PI_2};

    #[test]
    fn test_block_is_80_bytes() {
        assert_eq!(mem::size_of::<MaterialBlock>(), 80);
        assert_eq!(bytemuck::bytes_of(&MaterialBlock::default()).len(), 80);
    }

    #[test]
    fn test_scalar_offsets() {
        assert_eq!(mem::offset_of!(MaterialBlock, shininess), 64);
        assert_eq!(mem::offset_of!(MaterialBlock, transparency), 68);
    }

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.diffuse_color, Vec3::splat(0.8));
        assert_eq!(m.ambient_color, Vec3::splat(0.2));
        assert_eq!(m.specular_color, Vec3::ZERO);
        assert!(approx_eq(m.shininess, 0.2));
        assert!(approx_eq(m.transparency, 0.0));
        assert!(m.texture_transform.is_none());
    }

    #[test]
    fn test_to_block_packs_colors_into_slots() {
        let m = Material {
            diffuse_color: Vec3::new(0.1, 0.2, 0.3),
            emissive_color: Vec3::new(0.4, 0.5, 0.6),
            ..Default::default()
        };
        let block = m.to_block();
        assert_eq!(block.diffuse_color, [0.1, 0.2, 0.3, 0.0]);
        assert_eq!(block.emissive_color, [0.4, 0.5, 0.6, 0.0]);
        assert_eq!(block._padding, [0.0; 2]);
    }

    #[test]
    fn test_texture_matrix_identity_when_unset() {
        let m = Material::default();
        assert_eq!(m.texture_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_texture_transform_translation() {
        let t = TextureTransform {
            translation: Vec2::new(0.25, 0.5),
            ..Default::default()
        };
        let p = t.matrix().project_point(Vec3::new(0.1, 0.1, 0.0));
        assert!(approx_eq(p.x, 0.35));
        assert!(approx_eq(p.y, 0.6));
    }

    #[test]
    fn test_texture_transform_pivots_around_center() {
        // A quarter turn around the texture center maps (1, 0.5) to (0.5, 1).
        let t = TextureTransform {
            rotation: FRAC_PI_2,
            center: Vec2::new(0.5, 0.5),
            ..Default::default()
        };
        let p = t.matrix().project_point(Vec3::new(1.0, 0.5, 0.0));
        assert!(approx_eq(p.x, 0.5));
        assert!(approx_eq(p.y, 1.0));

        // The pivot itself is a fixed point.
        let c = t.matrix().project_point(Vec3::new(0.5, 0.5, 0.0));
        assert!(approx_eq(c.x, 0.5));
        assert!(approx_eq(c.y, 0.5));
    }

    #[test]
    fn test_texture_transform_scale_about_center() {
        let t = TextureTransform {
            scale: Vec2::new(2.0, 2.0),
            center: Vec2::new(0.5, 0.5),
            ..Default::default()
        };
        let p = t.matrix().project_point(Vec3::new(1.0, 1.0, 0.0));
        assert!(approx_eq(p.x, 1.5));
        assert!(approx_eq(p.y, 1.5));
    }
}
