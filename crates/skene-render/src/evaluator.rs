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

//! The reference lighting evaluator.
//!
//! [`evaluate`] computes the color of a single fragment from the same
//! inputs the GPU stage receives, defining the shading contract in plain
//! Rust. The embedded WGSL in [`crate::shaders`] mirrors this function;
//! when the two disagree, this one is authoritative.
//!
//! All positions and directions are in view space, with the eye at the
//! origin looking down -Z.

use skene_core::math::{LinearRgba, Mat4, Vec2, Vec3, EPSILON};
use skene_core::shading::{FrameUniforms, LightKind, LightRecord, MAX_LIGHTS};

/// The interpolated inputs of one fragment.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    /// View-space position.
    pub position: Vec3,
    /// View-space surface normal. Need not be unit length; a zero-length
    /// normal simply receives no diffuse or specular light.
    pub normal: Vec3,
    /// Interpolated per-vertex color. Its RGB modulates the diffuse
    /// reflectance like the texture sample does; its alpha is ignored,
    /// opacity comes from the material alone.
    pub color: LinearRgba,
    /// Raw texture coordinate, before the texture transform.
    pub tex_coord: Vec2,
}

/// Resolves a texture coordinate to a color.
///
/// The evaluator stays independent of any image or GPU resource type;
/// tests use solid-color samplers, the viewer adapts its texture cache.
pub trait TextureSampler {
    /// Samples the bound texture at `uv`.
    fn sample(&self, uv: Vec2) -> LinearRgba;
}

/// Computes the final color of a fragment.
///
/// `ambient_light` is the scene-wide ambient illumination multiplied with
/// the material's ambient reflectance; it is explicit configuration, not a
/// built-in constant. `sampler` is consulted only when the uniforms carry
/// `has_texture`; the sample and the fragment's vertex color both modulate
/// the diffuse and unlit colors but never the specular or emissive terms.
///
/// The returned alpha is `1 - transparency`; the RGB channels are clamped
/// to `[0, 1]`.
pub fn evaluate(
    uniforms: &FrameUniforms,
    lights: &[LightRecord],
    ambient_light: LinearRgba,
    sampler: Option<&dyn TextureSampler>,
    fragment: &Fragment,
) -> LinearRgba {
    let material = &uniforms.material;
    let diffuse_color = slot_rgb(material.diffuse_color) * fragment.color.to_vec3();
    let specular_color = slot_rgb(material.specular_color);
    let emissive_color = slot_rgb(material.emissive_color);
    let ambient_color = slot_rgb(material.ambient_color);
    let alpha = (1.0 - material.transparency).clamp(0.0, 1.0);

    let texture_rgb = if uniforms.has_texture != 0 {
        match sampler {
            Some(s) => {
                let transform = Mat4::from_cols_array_2d(&uniforms.texture_transform);
                let uv = transform
                    .project_point(Vec3::new(fragment.tex_coord.x, fragment.tex_coord.y, 0.0));
                s.sample(Vec2::new(uv.x, uv.y)).to_vec3()
            }
            None => Vec3::ONE,
        }
    } else {
        Vec3::ONE
    };

    if uniforms.is_unlit != 0 {
        let rgb = diffuse_color * texture_rgb + emissive_color;
        return LinearRgba::from_vec3_alpha(rgb, alpha).saturate();
    }

    let normal = fragment.normal.normalize();
    let to_eye = (-fragment.position).normalize();

    let count = uniforms
        .light_count
        .clamp(0, MAX_LIGHTS as i32)
        .min(lights.len() as i32) as usize;

    let mut diffuse_acc = Vec3::ZERO;
    let mut specular_acc = Vec3::ZERO;

    for record in &lights[..count] {
        let light_rgb =
            Vec3::new(record.color[0], record.color[1], record.color[2]) * record.intensity;

        let (to_light, attenuation) = if record.kind == LightKind::Directional as i32 {
            let dir = Vec3::new(record.direction[0], record.direction[1], record.direction[2]);
            (-dir, 1.0)
        } else {
            let position =
                Vec3::new(record.position[0], record.position[1], record.position[2]);
            let offset = position - fragment.position;
            let distance = offset.length();
            let to_light = offset.normalize();
            let mut attenuation =
                1.0 / (1.0 + record.drop_off_rate * distance * distance);
            if record.kind == LightKind::Spot as i32 {
                attenuation *= spot_factor(record, to_light);
            }
            (to_light, attenuation)
        };

        if attenuation <= 0.0 {
            continue;
        }

        let n_dot_l = normal.dot(to_light).max(0.0);
        if n_dot_l <= 0.0 {
            continue;
        }
        diffuse_acc = diffuse_acc + light_rgb * (attenuation * n_dot_l);

        if material.shininess > 0.0 {
            let reflected = (-to_light).reflect(normal);
            let r_dot_v = reflected.dot(to_eye).max(0.0);
            if r_dot_v > 0.0 {
                specular_acc =
                    specular_acc + light_rgb * (attenuation * r_dot_v.powf(material.shininess));
            }
        }
    }

    let rgb = diffuse_color * texture_rgb * diffuse_acc
        + specular_color * specular_acc
        + ambient_color * ambient_light.to_vec3()
        + emissive_color;

    LinearRgba::from_vec3_alpha(rgb, alpha).saturate()
}

/// The angular falloff of a spot light for a fragment lit from direction
/// `to_light`.
///
/// Zero outside the cone. Inside, the normalized angular position `t`
/// (1 on the axis, 0 at the edge) is raised to an exponent driven by
/// `drop_off_rate`, so the falloff is continuous across the cone boundary.
fn spot_factor(record: &LightRecord, to_light: Vec3) -> f32 {
    let axis = Vec3::new(record.direction[0], record.direction[1], record.direction[2]);
    let cos_angle = (-to_light).dot(axis);
    let cos_cutoff = record.cut_off_angle.cos();

    if cos_angle <= cos_cutoff {
        return 0.0;
    }
    let span = 1.0 - cos_cutoff;
    if span < EPSILON {
        // Degenerate cone: everything that passed the cutoff is on axis.
        return 1.0;
    }
    let t = ((cos_angle - cos_cutoff) / span).clamp(0.0, 1.0);
    t.powf((128.0 * record.drop_off_rate).max(1.0))
}

#[inline]
fn slot_rgb(slot: [f32; 4]) -> Vec3 {
    Vec3::new(slot[0], slot[1], slot[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use skene_core::math::approx_eq;
    use skene_core::shading::{LightSource, Material, PointLight, SpotLight, TextureTransform};

    struct SolidSampler(LinearRgba);

    impl TextureSampler for SolidSampler {
        fn sample(&self, _uv: Vec2) -> LinearRgba {
            self.0
        }
    }

    /// A sampler that encodes the uv it was asked for, to observe the
    /// texture transform.
    struct UvEchoSampler;

    impl TextureSampler for UvEchoSampler {
        fn sample(&self, uv: Vec2) -> LinearRgba {
            LinearRgba::rgb(uv.x, uv.y, 0.0)
        }
    }

    fn facing_fragment() -> Fragment {
        Fragment {
            position: Vec3::new(0.0, 0.0, -1.0),
            normal: Vec3::Z,
            color: LinearRgba::WHITE,
            tex_coord: Vec2::ZERO,
        }
    }

    fn headlight_record() -> LightRecord {
        LightRecord::headlight()
    }

    fn uniforms_with(material: Material, light_count: i32) -> FrameUniforms {
        FrameUniforms {
            material: material.to_block(),
            light_count,
            ..Default::default()
        }
    }

    fn color_approx_eq(a: LinearRgba, b: LinearRgba) -> bool {
        approx_eq(a.r, b.r) && approx_eq(a.g, b.g) && approx_eq(a.b, b.b) && approx_eq(a.a, b.a)
    }

    #[test]
    fn test_directional_diffuse_head_on() {
        // A red surface facing a white headlight reflects pure red.
        let material = Material {
            diffuse_color: Vec3::new(1.0, 0.0, 0.0),
            ambient_color: Vec3::ZERO,
            shininess: 0.0,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);
        let out = evaluate(
            &u,
            &[headlight_record()],
            LinearRgba::BLACK,
            None,
            &facing_fragment(),
        );
        assert!(color_approx_eq(out, LinearRgba::rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_diffuse_follows_incidence_angle() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            shininess: 0.0,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);
        // Tilt the surface 60 degrees away: N . L = cos(60) = 0.5.
        let fragment = Fragment {
            normal: Vec3::new(0.0, 3.0_f32.sqrt(), 1.0).normalize(),
            ..facing_fragment()
        };
        let out = evaluate(&u, &[headlight_record()], LinearRgba::BLACK, None, &fragment);
        assert!(approx_eq(out.r, 0.5));
    }

    #[test]
    fn test_no_lights_leaves_ambient_and_emissive() {
        let material = Material {
            ambient_color: Vec3::new(0.2, 0.2, 0.2),
            emissive_color: Vec3::new(0.1, 0.0, 0.0),
            ..Default::default()
        };
        let u = uniforms_with(material, 0);
        let out = evaluate(
            &u,
            &[],
            LinearRgba::WHITE,
            None,
            &facing_fragment(),
        );
        assert!(approx_eq(out.r, 0.3));
        assert!(approx_eq(out.g, 0.2));
        assert!(approx_eq(out.b, 0.2));
    }

    #[test]
    fn test_unlit_ignores_lights() {
        let material = Material {
            diffuse_color: Vec3::new(0.3, 0.4, 0.5),
            emissive_color: Vec3::new(0.1, 0.0, 0.0),
            transparency: 0.25,
            ..Default::default()
        };
        let mut u = uniforms_with(material, 1);
        u.is_unlit = 1;

        // A blinding light changes nothing on the unlit path.
        let mut blinding = headlight_record();
        blinding.intensity = 100.0;

        let out = evaluate(&u, &[blinding], LinearRgba::WHITE, None, &facing_fragment());
        assert!(approx_eq(out.r, 0.4));
        assert!(approx_eq(out.g, 0.4));
        assert!(approx_eq(out.b, 0.5));
        assert!(approx_eq(out.a, 0.75));
    }

    #[test]
    fn test_zero_intensity_contributes_nothing() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);
        let mut dark = headlight_record();
        dark.intensity = 0.0;

        let out = evaluate(&u, &[dark], LinearRgba::BLACK, None, &facing_fragment());
        assert!(color_approx_eq(out, LinearRgba::BLACK));
    }

    #[test]
    fn test_point_light_distance_attenuation() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            shininess: 0.0,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);

        // Light two units straight above the fragment, along its normal.
        let light = LightSource::Point(PointLight {
            position: Vec3::new(0.0, 0.0, 1.0),
            drop_off_rate: 0.5,
            ..Default::default()
        })
        .to_record(&Mat4::IDENTITY);

        let fragment = Fragment {
            position: Vec3::new(0.0, 0.0, -1.0),
            ..facing_fragment()
        };
        let out = evaluate(&u, &[light], LinearRgba::BLACK, None, &fragment);
        // d = 2, attenuation = 1 / (1 + 0.5 * 4) = 1/3.
        assert!(approx_eq(out.r, 1.0 / 3.0));
    }

    #[test]
    fn test_spot_cone_boundary_is_continuous() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            shininess: 0.0,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);

        let spot = |cut_off_angle: f32| {
            LightSource::Spot(SpotLight {
                position: Vec3::new(0.0, 0.0, 1.0),
                direction: Vec3::NEG_Z,
                cut_off_angle,
                drop_off_rate: 0.0,
                ..Default::default()
            })
            .to_record(&Mat4::IDENTITY)
        };

        let on_axis = facing_fragment();
        // 30 degrees off the spot axis.
        let off_axis = Fragment {
            position: Vec3::new(0.0, 2.0 * (30.0_f32.to_radians()).tan(), -1.0),
            ..facing_fragment()
        };

        // Inside a wide cone the fragment is lit; a narrow cone excludes it.
        let wide = evaluate(&u, &[spot(0.9)], LinearRgba::BLACK, None, &on_axis);
        assert!(wide.r > 0.9);

        let narrow = evaluate(
            &u,
            &[spot(20.0_f32.to_radians())],
            LinearRgba::BLACK,
            None,
            &off_axis,
        );
        assert!(approx_eq(narrow.r, 0.0));

        // Just inside the cutoff the contribution approaches zero rather
        // than jumping, so the cone edge does not band.
        let barely_inside = evaluate(
            &u,
            &[spot(30.5_f32.to_radians())],
            LinearRgba::BLACK,
            None,
            &off_axis,
        );
        assert!(barely_inside.r < 0.1);
    }

    #[test]
    fn test_shininess_zero_disables_specular() {
        let base = Material {
            diffuse_color: Vec3::ZERO,
            ambient_color: Vec3::ZERO,
            specular_color: Vec3::ONE,
            ..Default::default()
        };

        let matte = uniforms_with(
            Material {
                shininess: 0.0,
                ..base
            },
            1,
        );
        let shiny = uniforms_with(
            Material {
                shininess: 16.0,
                ..base
            },
            1,
        );

        // The facing fragment sees the mirror direction head on.
        let matte_out = evaluate(
            &matte,
            &[headlight_record()],
            LinearRgba::BLACK,
            None,
            &facing_fragment(),
        );
        let shiny_out = evaluate(
            &shiny,
            &[headlight_record()],
            LinearRgba::BLACK,
            None,
            &facing_fragment(),
        );
        assert!(approx_eq(matte_out.r, 0.0));
        assert!(approx_eq(shiny_out.r, 1.0));
    }

    #[test]
    fn test_texture_modulates_diffuse_not_specular() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            specular_color: Vec3::ONE,
            shininess: 8.0,
            ..Default::default()
        };
        let mut u = uniforms_with(material, 1);
        u.has_texture = 1;

        let grey = SolidSampler(LinearRgba::rgb(0.5, 0.5, 0.5));
        let out = evaluate(
            &u,
            &[headlight_record()],
            LinearRgba::BLACK,
            Some(&grey),
            &facing_fragment(),
        );
        // Diffuse and specular are both 1.0 head on; the texture halves
        // only the diffuse half: 0.5 * 1.0 + 1.0, clamped to 1.0.
        assert!(approx_eq(out.r, 1.0));

        // With specular removed the same setup shows the halved diffuse.
        let mut no_spec = u;
        no_spec.material.specular_color = [0.0; 4];
        let out = evaluate(
            &no_spec,
            &[headlight_record()],
            LinearRgba::BLACK,
            Some(&grey),
            &facing_fragment(),
        );
        assert!(approx_eq(out.r, 0.5));
    }

    #[test]
    fn test_vertex_color_modulates_diffuse_not_specular() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            shininess: 0.0,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);
        let tinted = Fragment {
            color: LinearRgba::rgb(0.5, 0.25, 1.0),
            ..facing_fragment()
        };
        let out = evaluate(&u, &[headlight_record()], LinearRgba::BLACK, None, &tinted);
        assert!(approx_eq(out.r, 0.5));
        assert!(approx_eq(out.g, 0.25));
        assert!(approx_eq(out.b, 1.0));

        // The specular term sees the material's reflectance only.
        let shiny = uniforms_with(
            Material {
                diffuse_color: Vec3::ZERO,
                ambient_color: Vec3::ZERO,
                specular_color: Vec3::ONE,
                shininess: 16.0,
                ..Default::default()
            },
            1,
        );
        let out = evaluate(&shiny, &[headlight_record()], LinearRgba::BLACK, None, &tinted);
        assert!(approx_eq(out.r, 1.0));
        assert!(approx_eq(out.g, 1.0));
    }

    #[test]
    fn test_vertex_color_modulates_unlit_color() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            emissive_color: Vec3::new(0.0, 0.5, 0.0),
            ..Default::default()
        };
        let mut u = uniforms_with(material, 0);
        u.is_unlit = 1;

        let tinted = Fragment {
            color: LinearRgba::rgb(0.5, 0.5, 0.5),
            ..facing_fragment()
        };
        let out = evaluate(&u, &[], LinearRgba::BLACK, None, &tinted);
        // Emissive is not tinted by the vertex color.
        assert!(approx_eq(out.r, 0.5));
        assert!(approx_eq(out.g, 1.0));
        assert!(approx_eq(out.b, 0.5));
    }

    #[test]
    fn test_texture_transform_is_applied_before_sampling() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            ambient_color: Vec3::ZERO,
            shininess: 0.0,
            texture_transform: Some(TextureTransform {
                translation: Vec2::new(0.25, 0.5),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut u = FrameUniforms {
            material: material.to_block(),
            texture_transform: material.texture_matrix().to_cols_array_2d(),
            light_count: 1,
            ..Default::default()
        };
        u.has_texture = 1;
        u.is_unlit = 1;

        let out = evaluate(
            &u,
            &[],
            LinearRgba::BLACK,
            Some(&UvEchoSampler),
            &facing_fragment(),
        );
        // The echoed uv is the transformed coordinate.
        assert!(approx_eq(out.r, 0.25));
        assert!(approx_eq(out.g, 0.5));
    }

    #[test]
    fn test_degenerate_normal_produces_no_nan() {
        let material = Material {
            ambient_color: Vec3::splat(0.2),
            ..Default::default()
        };
        let u = uniforms_with(material, 1);
        let fragment = Fragment {
            normal: Vec3::ZERO,
            ..facing_fragment()
        };
        let out = evaluate(&u, &[headlight_record()], LinearRgba::WHITE, None, &fragment);
        assert!(out.r.is_finite());
        // Only the ambient term survives.
        assert!(approx_eq(out.r, 0.2));
    }

    #[test]
    fn test_light_count_never_reads_past_buffer() {
        let material = Material::default();
        // A count larger than the slice must not panic.
        let u = uniforms_with(material, MAX_LIGHTS as i32);
        let out = evaluate(
            &u,
            &[headlight_record()],
            LinearRgba::BLACK,
            None,
            &facing_fragment(),
        );
        assert!(out.r.is_finite());
    }

    #[test]
    fn test_rgb_is_clamped() {
        let material = Material {
            diffuse_color: Vec3::ONE,
            emissive_color: Vec3::ONE,
            ..Default::default()
        };
        let u = uniforms_with(material, 1);
        let mut hot = headlight_record();
        hot.intensity = 10.0;

        let out = evaluate(&u, &[hot], LinearRgba::WHITE, None, &facing_fragment());
        assert!(approx_eq(out.r, 1.0));
        assert!(approx_eq(out.g, 1.0));
        assert!(approx_eq(out.b, 1.0));
    }
}
