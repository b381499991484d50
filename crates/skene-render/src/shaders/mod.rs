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

//! Compile-time embedded shader sources.
//!
//! The WGSL here is the GPU half of the shading contract: its structs
//! mirror the byte layouts of [`FrameUniforms`](skene_core::shading::FrameUniforms)
//! and [`LightRecord`](skene_core::shading::LightRecord), and its lighting
//! loop mirrors [`evaluate`](crate::evaluator::evaluate). Changes to either
//! side must land on both.

/// Forward rendering shader with the full lit/unlit fragment path.
///
/// Evaluates up to [`MAX_LIGHTS`](skene_core::shading::MAX_LIGHTS)
/// directional, point, and spot lights per fragment in view space.
pub const LIT_FORWARD_WGSL: &str = include_str!("lit_forward.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_forward_shader_has_entry_points() {
        assert!(LIT_FORWARD_WGSL.contains("@vertex"));
        assert!(LIT_FORWARD_WGSL.contains("@fragment"));
    }

    #[test]
    fn test_lit_forward_shader_mirrors_uniform_layout() {
        // The struct names and members the CPU side packs for.
        assert!(LIT_FORWARD_WGSL.contains("struct FrameUniforms"));
        assert!(LIT_FORWARD_WGSL.contains("struct MaterialBlock"));
        assert!(LIT_FORWARD_WGSL.contains("struct LightRecord"));
        assert!(LIT_FORWARD_WGSL.contains("normal_matrix: mat3x3<f32>"));
        assert!(LIT_FORWARD_WGSL.contains("light_count: i32"));
        assert!(LIT_FORWARD_WGSL.contains("cut_off_angle: f32"));
    }

    #[test]
    fn test_lit_forward_shader_binds_light_buffer() {
        assert!(LIT_FORWARD_WGSL.contains("array<LightRecord>"));
        assert!(LIT_FORWARD_WGSL.contains("var<storage, read>"));
    }
}
