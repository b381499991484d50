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

//! Per-frame transform derivation.
//!
//! [`TransformPipeline`] owns the camera state and derives the matrices a
//! draw needs; [`TransformStack`] accumulates scene-graph transforms with
//! save/restore semantics while the graph is traversed.

use crate::camera::Projection;
use crate::error::ProjectionError;
use skene_core::math::{Mat3, Mat4};

/// Owns the camera state and derives per-draw matrices.
///
/// The projection is validated on the way in. A rejected reconfiguration is
/// logged and the previous projection stays in effect, so a bad camera
/// setting degrades one frame's framing, never its integrity.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    view: Mat4,
    projection: Mat4,
}

impl TransformPipeline {
    /// Creates a pipeline from an initial projection configuration.
    ///
    /// The initial configuration must be valid; there is no previous state
    /// to fall back to yet.
    pub fn new(projection: &Projection) -> Result<Self, ProjectionError> {
        Ok(Self {
            view: Mat4::IDENTITY,
            projection: projection.matrix()?,
        })
    }

    /// The current view matrix.
    #[inline]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Replaces the view matrix.
    #[inline]
    pub fn set_view(&mut self, view: Mat4) {
        self.view = view;
    }

    /// The current projection matrix.
    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Reconfigures the projection.
    ///
    /// An invalid configuration is reported through the log and ignored;
    /// the last valid projection remains in effect.
    pub fn set_projection(&mut self, projection: &Projection) {
        match projection.matrix() {
            Ok(m) => self.projection = m,
            Err(e) => {
                log::error!("rejected projection reconfiguration, keeping previous: {e}");
            }
        }
    }

    /// Combines a model matrix with the current view.
    #[inline]
    pub fn model_view(&self, model: &Mat4) -> Mat4 {
        self.view * *model
    }

    /// Derives the normal matrix for a model-view matrix: the
    /// inverse-transpose of its upper-left 3x3.
    ///
    /// A degenerate model-view (zero scale on some axis) has no inverse;
    /// the identity is used instead and a warning is logged, so the draw
    /// still lands with approximate normals.
    pub fn normal_matrix(&self, model_view: &Mat4) -> Mat3 {
        match Mat3::from_mat4(model_view).inverse() {
            Some(inv) => inv.transpose(),
            None => {
                log::warn!("degenerate model-view matrix, using identity normal matrix");
                Mat3::IDENTITY
            }
        }
    }
}

/// Parent-to-child matrix accumulation with save/restore.
///
/// Scene-graph traversal pushes each grouping node's local transform and
/// pops it when the node's children are done, the way separator nodes
/// isolate their subtree. The current matrix is always the product of
/// every pushed transform, applied left to right from the root.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Creates a stack whose current transform is the identity.
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// The accumulated transform at the current depth.
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Enters a child scope: the current transform becomes
    /// `current * local`.
    pub fn push(&mut self, local: &Mat4) {
        self.saved.push(self.current);
        self.current = self.current * *local;
    }

    /// Leaves the current scope, restoring the transform saved by the
    /// matching [`push`](Self::push).
    ///
    /// Popping at root depth is a traversal bug; it is logged and ignored.
    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(prev) => self.current = prev,
            None => log::warn!("transform stack popped at root depth"),
        }
    }

    /// How many scopes are currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
