use bevy::asset::RenderAssetUsages;
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, MeshVertexBufferLayoutRef, PrimitiveTopology};
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};
use bevy::render::view::NoFrustumCulling;
use constants::scene;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::assets::intro_manifest::ParticleSettings;

const PARTICLE_SHADER_PATH: &str = "shaders/particle_sprite.wgsl";

#[derive(Component)]
pub struct ParticleField;

/// Additive, camera-facing sprite material. The vertex shader expands each
/// particle's four coincident vertices into a view-space quad, so sprites
/// shrink with distance.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleSpriteMaterial {
    /// `[0]` linear colour, `[1].x` world-space sprite edge.
    #[uniform(0)]
    pub params: [Vec4; 2],
    #[texture(1)]
    #[sampler(2)]
    pub texture: Handle<Image>,
}

impl ParticleSpriteMaterial {
    pub fn new(colour: Color, size: f32, texture: Handle<Image>) -> Self {
        Self {
            params: [
                colour.to_linear().to_vec4(),
                Vec4::new(size, 0.0, 0.0, 0.0),
            ],
            texture,
        }
    }
}

impl Material for ParticleSpriteMaterial {
    fn vertex_shader() -> ShaderRef {
        PARTICLE_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        PARTICLE_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// Uniform scatter in a cube of edge `spread` centred on the origin.
pub fn scatter_positions(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * spread,
                (rng.random::<f32>() - 0.5) * spread,
                (rng.random::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}

/// Four vertices per particle, all at its centre; the UV picks the corner the
/// sprite shader pushes each one to.
pub fn particle_mesh(positions: &[Vec3]) -> Mesh {
    let corner_uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut vertices = Vec::with_capacity(positions.len() * 4);
    let mut uvs = Vec::with_capacity(positions.len() * 4);
    let mut indices = Vec::with_capacity(positions.len() * 6);

    for (i, centre) in positions.iter().enumerate() {
        let base = (i * 4) as u32;
        for uv in corner_uvs {
            vertices.push(centre.to_array());
            uvs.push(uv);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vertices)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

pub fn spawn_particle_field(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ParticleSpriteMaterial>,
    texture: Handle<Image>,
    settings: &ParticleSettings,
) -> Entity {
    let [r, g, b] = scene::PARTICLE_COLOUR;
    let material = materials.add(ParticleSpriteMaterial::new(
        Color::srgb_u8(r, g, b),
        settings.size,
        texture,
    ));

    let positions = scatter_positions(settings.count, settings.spread, settings.seed);
    info!("Scattering {} particles", positions.len());

    commands
        .spawn((
            ParticleField,
            Name::new("ParticleField"),
            Mesh3d(meshes.add(particle_mesh(&positions))),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            // Bounds cover centres only; edge sprites would pop.
            NoFrustumCulling,
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use bevy::render::mesh::VertexAttributeValues;

    use super::*;

    #[test]
    fn scatter_stays_inside_the_cube() {
        let positions = scatter_positions(5_000, 100.0, 7);
        assert_eq!(positions.len(), 5_000);
        assert!(
            positions
                .iter()
                .all(|p| p.abs().max_element() <= 50.0)
        );
    }

    #[test]
    fn same_seed_gives_same_field() {
        assert_eq!(scatter_positions(64, 100.0, 3), scatter_positions(64, 100.0, 3));
        assert_ne!(scatter_positions(64, 100.0, 3), scatter_positions(64, 100.0, 4));
    }

    #[test]
    fn zero_spread_collapses_to_origin() {
        assert!(scatter_positions(10, 0.0, 1).iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn mesh_has_one_quad_per_particle() {
        let mesh = particle_mesh(&[Vec3::ZERO, Vec3::ONE, Vec3::NEG_ONE]);
        assert_eq!(mesh.count_vertices(), 12);
        assert_eq!(mesh.indices().unwrap().len(), 18);
    }

    #[test]
    fn quad_vertices_share_the_particle_centre() {
        let centres = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 9.0)];
        let mesh = particle_mesh(&centres);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions should be Float32x3");
        };
        for (quad, centre) in positions.chunks_exact(4).zip(centres) {
            assert!(quad.iter().all(|vertex| *vertex == centre.to_array()));
        }

        let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("uvs should be Float32x2");
        };
        let first_quad: Vec<_> = uvs[..4].to_vec();
        assert_eq!(first_quad, vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(&uvs[4..], &uvs[..4]);
    }

    #[test]
    fn sprite_material_packs_linear_colour_and_size() {
        let material = ParticleSpriteMaterial::new(Color::WHITE, 0.5, Handle::default());
        assert_eq!(material.params[0], Vec4::ONE);
        assert_eq!(material.params[1].x, 0.5);
        assert_eq!(material.alpha_mode(), AlphaMode::Add);
    }

    #[test]
    fn empty_field_builds_an_empty_mesh() {
        let mesh = particle_mesh(&[]);
        assert_eq!(mesh.count_vertices(), 0);
    }
}
