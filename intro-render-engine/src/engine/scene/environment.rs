//! Equirectangular to cubemap conversion for the environment light.
//!
//! The EXR loader produces a flat lat-long image; image-based lighting needs
//! a cube texture. Conversion runs once on the CPU when the map arrives.

use std::f32::consts::PI;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
};
use half::f16;
use thiserror::Error;

const CUBE_FACES: u32 = 6;

#[derive(Debug, Error, PartialEq)]
pub enum EnvironmentMapError {
    #[error("unsupported equirectangular format {0:?}")]
    UnsupportedFormat(TextureFormat),
    #[error("equirectangular image has no pixel data")]
    MissingData,
    #[error("equirectangular image has zero size")]
    Empty,
    #[error("pixel data holds {actual} bytes, expected at least {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Decoded RGBA texels of an equirectangular image, row 0 at the top.
pub struct EquirectPixels {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl EquirectPixels {
    pub fn from_image(image: &Image) -> Result<Self, EnvironmentMapError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(EnvironmentMapError::Empty);
        }

        let format = image.texture_descriptor.format;
        let channel_bytes = match format {
            TextureFormat::Rgba32Float => 4,
            TextureFormat::Rgba16Float => 2,
            other => return Err(EnvironmentMapError::UnsupportedFormat(other)),
        };

        let data = image.data.as_ref().ok_or(EnvironmentMapError::MissingData)?;
        let expected = width as usize * height as usize * 4 * channel_bytes;
        if data.len() < expected {
            return Err(EnvironmentMapError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let channels: Vec<f32> = data[..expected]
            .chunks_exact(channel_bytes)
            .map(|bytes| {
                if channel_bytes == 4 {
                    bytemuck::pod_read_unaligned::<f32>(bytes)
                } else {
                    bytemuck::pod_read_unaligned::<f16>(bytes).to_f32()
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            texels: channels.chunks_exact(4).map(Vec4::from_slice).collect(),
        })
    }

    /// Bilinear sample along a world direction. Longitude wraps, latitude clamps.
    pub fn sample(&self, direction: Vec3) -> Vec4 {
        let uv = direction_to_equirect_uv(direction);
        let x = uv.x * self.width as f32 - 0.5;
        let y = (1.0 - uv.y) * self.height as f32 - 0.5;
        let (x0, y0) = (x.floor(), y.floor());
        let (fx, fy) = (x - x0, y - y0);

        let fetch = |xi: i64, yi: i64| {
            let xi = xi.rem_euclid(self.width as i64);
            let yi = yi.clamp(0, self.height as i64 - 1);
            self.texels[(yi * self.width as i64 + xi) as usize]
        };

        let (x0, y0) = (x0 as i64, y0 as i64);
        let top = fetch(x0, y0).lerp(fetch(x0 + 1, y0), fx);
        let bottom = fetch(x0, y0 + 1).lerp(fetch(x0 + 1, y0 + 1), fx);
        top.lerp(bottom, fy)
    }
}

/// Lat-long texture coordinates of a direction; `v = 1` straight up.
pub fn direction_to_equirect_uv(direction: Vec3) -> Vec2 {
    let d = direction.normalize_or_zero();
    Vec2::new(
        d.z.atan2(d.x) / (2.0 * PI) + 0.5,
        d.y.clamp(-1.0, 1.0).asin() / PI + 0.5,
    )
}

/// Direction through point `(u, v)` in `[-1, 1]` of a cube face, in the
/// layer order +X, -X, +Y, -Y, +Z, -Z. `v` grows downward on every face.
pub fn cube_face_direction(face: u32, u: f32, v: f32) -> Vec3 {
    let direction = match face {
        0 => Vec3::new(1.0, -v, -u),
        1 => Vec3::new(-1.0, -v, u),
        2 => Vec3::new(u, 1.0, v),
        3 => Vec3::new(u, -1.0, -v),
        4 => Vec3::new(u, -v, 1.0),
        _ => Vec3::new(-u, -v, -1.0),
    };
    direction.normalize()
}

/// World direction seen through a cube-space direction. Bevy samples
/// environment cubes with `z` negated, cube space being left-handed.
pub fn cube_to_world(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, direction.y, -direction.z)
}

/// Project an equirectangular image onto a six-layer `Rgba16Float` cube texture.
pub fn equirect_to_cubemap(image: &Image, face_size: u32) -> Result<Image, EnvironmentMapError> {
    let pixels = EquirectPixels::from_image(image)?;
    let face_size = face_size.max(1);

    let texel_count = (face_size * face_size * CUBE_FACES) as usize;
    let mut data = Vec::with_capacity(texel_count * 4 * 2);
    for face in 0..CUBE_FACES {
        for y in 0..face_size {
            for x in 0..face_size {
                let u = 2.0 * (x as f32 + 0.5) / face_size as f32 - 1.0;
                let v = 2.0 * (y as f32 + 0.5) / face_size as f32 - 1.0;
                let colour = pixels.sample(cube_to_world(cube_face_direction(face, u, v)));
                for channel in colour.to_array() {
                    data.extend_from_slice(&f16::from_f32(channel).to_le_bytes());
                }
            }
        }
    }

    let mut cubemap = Image::new(
        Extent3d {
            width: face_size,
            height: face_size,
            depth_or_array_layers: CUBE_FACES,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba16Float,
        RenderAssetUsages::RENDER_WORLD,
    );
    cubemap.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    Ok(cubemap)
}
