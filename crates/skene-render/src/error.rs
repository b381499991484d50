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

//! Error types for the frame-preparation path.

use thiserror::Error;

/// A camera projection configuration that cannot produce a valid matrix.
///
/// These are configuration errors, not per-frame conditions: the transform
/// pipeline rejects the offending configuration and keeps rendering with
/// the last valid one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// A parameter is NaN or infinite.
    #[error("projection parameter '{0}' is not finite")]
    NonFinite(&'static str),

    /// The vertical field of view must lie strictly between 0 and pi radians.
    #[error("field of view {0} is outside (0, pi)")]
    InvalidFieldOfView(f32),

    /// The aspect ratio must be strictly positive.
    #[error("aspect ratio {0} must be positive")]
    InvalidAspectRatio(f32),

    /// The near plane must be strictly positive.
    #[error("near plane {0} must be positive")]
    InvalidNearPlane(f32),

    /// The far plane must be strictly greater than the near plane.
    #[error("far plane {far} must exceed near plane {near}")]
    InvalidDepthRange {
        /// The configured near plane.
        near: f32,
        /// The configured far plane.
        far: f32,
    },

    /// An orthographic extent is empty (left == right or bottom == top).
    #[error("orthographic extent '{0}' is empty")]
    EmptyExtent(&'static str),
}
