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

//! Per-frame uniform assembly.
//!
//! [`FrameComposer`] turns scene state into upload-ready bytes: at the start
//! of a frame it flattens the light list into view-space records, then
//! produces one independent [`FrameUniforms`] value per [`DrawItem`]. The
//! composer is the producer side of the upload contract; making the written
//! bytes visible to the GPU before the draw is the caller's concern.

use crate::transform::TransformPipeline;
use skene_core::math::Mat4;
use skene_core::shading::{FrameUniforms, LightRecord, LightSource, Material, MAX_LIGHTS};

/// Everything one draw contributes to its uniforms.
#[derive(Debug, Clone)]
pub struct DrawItem {
    /// The resolved model-to-world matrix for this drawable.
    pub model: Mat4,
    /// The surface material.
    pub material: Material,
    /// Whether the draw samples a texture.
    pub has_texture: bool,
    /// Rasterized size for point primitives, in pixels.
    pub point_size: f32,
    /// Whether the draw bypasses lighting entirely.
    pub unlit: bool,
}

impl Default for DrawItem {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            material: Material::default(),
            has_texture: false,
            point_size: 1.0,
            unlit: false,
        }
    }
}

/// Builds the per-draw uniforms and the frame's light buffer.
#[derive(Debug)]
pub struct FrameComposer {
    pipeline: TransformPipeline,
    lights: Vec<LightRecord>,
}

impl FrameComposer {
    /// Creates a composer around a transform pipeline.
    pub fn new(pipeline: TransformPipeline) -> Self {
        Self {
            pipeline,
            lights: Vec::with_capacity(MAX_LIGHTS),
        }
    }

    /// The transform pipeline, for view and projection updates.
    #[inline]
    pub fn pipeline_mut(&mut self) -> &mut TransformPipeline {
        &mut self.pipeline
    }

    /// Read access to the transform pipeline.
    #[inline]
    pub fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    /// Starts a frame by flattening the scene's lights.
    ///
    /// Lights that are switched off are skipped. Active lights beyond
    /// [`MAX_LIGHTS`] are dropped. A frame with no active light gets the
    /// default headlight so geometry never renders black by accident.
    pub fn begin_frame(&mut self, sources: &[LightSource]) {
        let view = self.pipeline.view();
        self.lights.clear();
        self.lights.extend(
            sources
                .iter()
                .filter(|s| s.is_on())
                .take(MAX_LIGHTS)
                .map(|s| s.to_record(&view)),
        );
        if self.lights.is_empty() {
            self.lights.push(LightRecord::headlight());
        }
    }

    /// The view-space light records for this frame.
    #[inline]
    pub fn light_records(&self) -> &[LightRecord] {
        &self.lights
    }

    /// The light buffer bytes for upload.
    #[inline]
    pub fn light_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }

    /// Composes the uniforms for one draw.
    ///
    /// Every call returns a fresh value; draws never alias uniform state.
    pub fn compose(&self, item: &DrawItem) -> FrameUniforms {
        let model_view = self.pipeline.model_view(&item.model);
        let normal_matrix = self.pipeline.normal_matrix(&model_view);

        FrameUniforms {
            projection: self.pipeline.projection().to_cols_array_2d(),
            model_view: model_view.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_padded_cols(),
            texture_transform: item.material.texture_matrix().to_cols_array_2d(),
            material: item.material.to_block(),
            light_count: self.lights.len() as i32,
            has_texture: item.has_texture as i32,
            point_size: item.point_size,
            is_unlit: item.unlit as i32,
        }
    }
}
