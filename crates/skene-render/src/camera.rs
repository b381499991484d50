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

//! Camera projection configuration and validation.

use crate::error::ProjectionError;
use skene_core::math::{Mat4, PI};

/// A camera projection, validated before it ever becomes a matrix.
///
/// Both variants produce right-handed matrices with a `[0, 1]` depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// A perspective projection defined by a vertical field of view.
    Perspective {
        /// Vertical field of view in radians, in `(0, pi)`.
        fov_y_radians: f32,
        /// Viewport width divided by height.
        aspect_ratio: f32,
        /// Distance to the near clipping plane. Must be positive.
        z_near: f32,
        /// Distance to the far clipping plane. Must exceed `z_near`.
        z_far: f32,
    },
    /// An orthographic projection defined by a view box.
    Orthographic {
        /// Left edge of the view box.
        left: f32,
        /// Right edge of the view box.
        right: f32,
        /// Bottom edge of the view box.
        bottom: f32,
        /// Top edge of the view box.
        top: f32,
        /// Distance to the near clipping plane. Must be positive.
        z_near: f32,
        /// Distance to the far clipping plane. Must exceed `z_near`.
        z_far: f32,
    },
}

impl Default for Projection {
    /// A 45-degree perspective projection for a square viewport.
    fn default() -> Self {
        Self::Perspective {
            fov_y_radians: PI / 4.0,
            aspect_ratio: 1.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

impl Projection {
    /// Checks every parameter of this configuration.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        match *self {
            Projection::Perspective {
                fov_y_radians,
                aspect_ratio,
                z_near,
                z_far,
            } => {
                check_finite(fov_y_radians, "fov_y_radians")?;
                check_finite(aspect_ratio, "aspect_ratio")?;
                check_finite(z_near, "z_near")?;
                check_finite(z_far, "z_far")?;
                if fov_y_radians <= 0.0 || fov_y_radians >= PI {
                    return Err(ProjectionError::InvalidFieldOfView(fov_y_radians));
                }
                if aspect_ratio <= 0.0 {
                    return Err(ProjectionError::InvalidAspectRatio(aspect_ratio));
                }
                if z_near <= 0.0 {
                    return Err(ProjectionError::InvalidNearPlane(z_near));
                }
                if z_far <= z_near {
                    return Err(ProjectionError::InvalidDepthRange {
                        near: z_near,
                        far: z_far,
                    });
                }
                Ok(())
            }
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                z_near,
                z_far,
            } => {
                check_finite(left, "left")?;
                check_finite(right, "right")?;
                check_finite(bottom, "bottom")?;
                check_finite(top, "top")?;
                check_finite(z_near, "z_near")?;
                check_finite(z_far, "z_far")?;
                if left == right {
                    return Err(ProjectionError::EmptyExtent("left..right"));
                }
                if bottom == top {
                    return Err(ProjectionError::EmptyExtent("bottom..top"));
                }
                if z_near <= 0.0 {
                    return Err(ProjectionError::InvalidNearPlane(z_near));
                }
                if z_far <= z_near {
                    return Err(ProjectionError::InvalidDepthRange {
                        near: z_near,
                        far: z_far,
                    });
                }
                Ok(())
            }
        }
    }

    /// Validates the configuration and builds the projection matrix.
    pub fn matrix(&self) -> Result<Mat4, ProjectionError> {
        self.validate()?;
        Ok(match *self {
            Projection::Perspective {
                fov_y_radians,
                aspect_ratio,
                z_near,
                z_far,
            } => Mat4::perspective_rh_zo(fov_y_radians, aspect_ratio, z_near, z_far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                z_near,
                z_far,
            } => Mat4::orthographic_rh_zo(left, right, bottom, top, z_near, z_far),
        })
    }
}

fn check_finite(value: f32, name: &'static str) -> Result<(), ProjectionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::NonFinite(name))
    }
}
