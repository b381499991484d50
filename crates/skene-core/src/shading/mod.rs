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

//! The per-frame shading data contract.
//!
//! This module defines the exact binary layout of everything the CPU hands
//! to the GPU shading stage each frame: vertex records, the material block,
//! per-light records, and the per-draw uniform structure. Every GPU-visible
//! struct here is `#[repr(C)]`, [`bytemuck::Pod`], and guarded by
//! compile-time size and offset assertions, so a layout drift on either
//! side fails the build rather than corrupting a frame.
//!
//! Alongside the packed records live the rich CPU-side authoring types
//! ([`Material`], [`LightSource`]) which are flattened into their packed
//! form only at upload time.

pub mod light;
pub mod material;
pub mod uniforms;
pub mod vertex;

pub use self::light::{
    DirectionalLight, LightKind, LightRecord, LightSource, PointLight, SpotLight,
};
pub use self::material::{Material, MaterialBlock, TextureTransform};
pub use self::uniforms::FrameUniforms;
pub use self::vertex::VertexRecord;

/// The maximum number of lights a single frame may reference.
///
/// The light buffer is sized for exactly this many [`LightRecord`]s and the
/// shading stage never reads past `light_count`, which is clamped to this
/// value on the producer side.
pub const MAX_LIGHTS: usize = 8;
