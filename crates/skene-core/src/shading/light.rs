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

//! Light source descriptions and their packed per-light records.
//!
//! Scene lights are authored as [`LightSource`] values in whatever space
//! the scene graph places them. At frame-composition time each active light
//! is flattened into a view-space [`LightRecord`], the 64-byte layout the
//! shading stage consumes. All lighting math downstream happens in view
//! space.

use crate::math::{LinearRgba, Mat4, Vec3, FRAC_PI_4};
use std::mem;

/// Discriminates the light variants inside a packed [`LightRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LightKind {
    /// Parallel rays from an infinitely distant source; no falloff.
    Directional = 0,
    /// Omni-directional emission from a point, with distance falloff.
    Point = 1,
    /// Point emission restricted to a cone, with angular falloff.
    Spot = 2,
}

/// A light source illuminating the scene from a uniform direction.
///
/// Directional lights simulate distant sources like the sun: no position,
/// only a direction, and no attenuation with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Whether the light contributes to the frame.
    pub on: bool,
    /// The direction the light travels (from the source towards the scene).
    pub direction: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier; `1.0` is standard intensity.
    pub intensity: f32,
}

impl Default for DirectionalLight {
    /// A white unit-intensity light shining along -Z.
    fn default() -> Self {
        Self {
            on: true,
            direction: Vec3::NEG_Z,
            color: LinearRgba::WHITE,
            intensity: 1.0,
        }
    }
}

/// A light source emitting in all directions from a single point.
///
/// Attenuates with distance as `1 / (1 + drop_off_rate * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Whether the light contributes to the frame.
    pub on: bool,
    /// The position of the light.
    pub position: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier; `1.0` is standard intensity.
    pub intensity: f32,
    /// Controls how quickly the light fades with distance. Zero means no
    /// distance falloff.
    pub drop_off_rate: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            on: true,
            position: Vec3::new(0.0, 0.0, 1.0),
            color: LinearRgba::WHITE,
            intensity: 1.0,
            drop_off_rate: 0.0,
        }
    }
}

/// A light source emitting a cone of light from a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    /// Whether the light contributes to the frame.
    pub on: bool,
    /// The position of the light.
    pub position: Vec3,
    /// The axis of the cone (from the source towards the scene).
    pub direction: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier; `1.0` is standard intensity.
    pub intensity: f32,
    /// Controls both the distance falloff and how sharply intensity drops
    /// towards the cone edge. Zero keeps the cone uniformly lit.
    pub drop_off_rate: f32,
    /// Half-angle of the cone, in radians. Fragments outside it receive
    /// nothing from this light.
    pub cut_off_angle: f32,
}

impl SpotLight {
    /// The default cone half-angle (45 degrees).
    pub const DEFAULT_CUT_OFF_ANGLE: f32 = FRAC_PI_4;
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            on: true,
            position: Vec3::new(0.0, 0.0, 1.0),
            direction: Vec3::NEG_Z,
            color: LinearRgba::WHITE,
            intensity: 1.0,
            drop_off_rate: 0.0,
            cut_off_angle: Self::DEFAULT_CUT_OFF_ANGLE,
        }
    }
}

/// Any light source a scene can contain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSource {
    /// A directional light.
    Directional(DirectionalLight),
    /// A point light.
    Point(PointLight),
    /// A spot light.
    Spot(SpotLight),
}

impl Default for LightSource {
    fn default() -> Self {
        LightSource::Directional(DirectionalLight::default())
    }
}

impl LightSource {
    /// Whether the light is switched on.
    #[inline]
    pub fn is_on(&self) -> bool {
        match self {
            LightSource::Directional(l) => l.on,
            LightSource::Point(l) => l.on,
            LightSource::Spot(l) => l.on,
        }
    }

    /// Flattens this light into its packed view-space record.
    ///
    /// Positions are transformed as points (`w` = 1) and directions as
    /// directions (`w` = 0), re-normalized after the transform. Fields a
    /// variant has no use for stay zero.
    pub fn to_record(&self, view: &Mat4) -> LightRecord {
        match *self {
            LightSource::Directional(l) => LightRecord {
                direction: transform_direction(view, l.direction),
                color: l.color.to_vec3().to_array(),
                intensity: l.intensity,
                kind: LightKind::Directional as i32,
                ..LightRecord::zeroed()
            },
            LightSource::Point(l) => LightRecord {
                position: transform_point(view, l.position),
                color: l.color.to_vec3().to_array(),
                intensity: l.intensity,
                kind: LightKind::Point as i32,
                drop_off_rate: l.drop_off_rate,
                ..LightRecord::zeroed()
            },
            LightSource::Spot(l) => LightRecord {
                position: transform_point(view, l.position),
                direction: transform_direction(view, l.direction),
                color: l.color.to_vec3().to_array(),
                intensity: l.intensity,
                kind: LightKind::Spot as i32,
                drop_off_rate: l.drop_off_rate,
                cut_off_angle: l.cut_off_angle,
                ..LightRecord::zeroed()
            },
        }
    }
}

#[inline]
fn transform_point(view: &Mat4, p: Vec3) -> [f32; 4] {
    (*view * p.extend(1.0)).truncate().extend(1.0).to_array()
}

#[inline]
fn transform_direction(view: &Mat4, d: Vec3) -> [f32; 4] {
    (*view * d.extend(0.0))
        .truncate()
        .normalize()
        .extend(0.0)
        .to_array()
}

/// A single light as stored in the light buffer, exactly 64 bytes.
///
/// Positions and directions are in view space. `kind` holds a
/// [`LightKind`] discriminant.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRecord {
    /// View-space position (`w` = 1). Zero for directional lights.
    pub position: [f32; 4],
    /// View-space direction (`w` = 0), unit length. Zero for point lights.
    pub direction: [f32; 4],
    /// Light color (linear RGB).
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// [`LightKind`] discriminant.
    pub kind: i32,
    /// Distance and cone-edge falloff control.
    pub drop_off_rate: f32,
    /// Cone half-angle in radians. Meaningful for spot lights only.
    pub cut_off_angle: f32,
    /// Pads the record to 64 bytes. Always zero.
    pub _padding: f32,
}

const _: () = assert!(mem::size_of::<LightRecord>() == 64);
const _: () = assert!(mem::offset_of!(LightRecord, position) == 0);
const _: () = assert!(mem::offset_of!(LightRecord, direction) == 16);
const _: () = assert!(mem::offset_of!(LightRecord, color) == 32);
const _: () = assert!(mem::offset_of!(LightRecord, intensity) == 44);
const _: () = assert!(mem::offset_of!(LightRecord, kind) == 48);
const _: () = assert!(mem::offset_of!(LightRecord, drop_off_rate) == 52);
const _: () = assert!(mem::offset_of!(LightRecord, cut_off_angle) == 56);

impl LightRecord {
    /// An all-zero record.
    #[inline]
    pub fn zeroed() -> Self {
        bytemuck::Zeroable::zeroed()
    }

    /// The fallback light used when a frame has no active light: a white
    /// unit-intensity directional light along view-space -Z, matching the
    /// camera's gaze.
    ///
    /// This record is already in view space and must not be passed through
    /// the view transform again.
    pub fn headlight() -> Self {
        Self {
            direction: [0.0, 0.0, -1.0, 0.0],
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            kind: LightKind::Directional as i32,
            ..Self::zeroed()
        }
    }
}
