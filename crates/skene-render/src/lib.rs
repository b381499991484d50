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

//! # Skene Render
//!
//! The frame-preparation path of the Skene scene viewer: camera and
//! projection validation, per-draw transform derivation, light flattening,
//! uniform assembly, and the reference lighting evaluator mirrored by the
//! embedded GPU shader.

#![warn(missing_docs)]

pub mod camera;
pub mod error;
pub mod evaluator;
pub mod frame;
pub mod shaders;
pub mod transform;

pub use camera::Projection;
pub use error::ProjectionError;
pub use evaluator::{evaluate, Fragment, TextureSampler};
pub use frame::{DrawItem, FrameComposer};
pub use transform::{TransformPipeline, TransformStack};
