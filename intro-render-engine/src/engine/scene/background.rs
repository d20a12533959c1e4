use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_resource::Face;
use constants::scene;

#[derive(Component)]
pub struct Background;

/// Open half-cylinder around the Y axis, sweeping `theta` over `[0, PI]`
/// from +Z toward +X. Front faces point outward; the background is seen from
/// inside, so its material culls them.
pub fn half_cylinder_mesh(radius: f32, height: f32, segments: u32) -> Mesh {
    let segments = segments.max(1);
    let half_height = height * 0.5;

    let mut positions = Vec::with_capacity(((segments + 1) * 2) as usize);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());

    // Row 0 is the top edge, row 1 the bottom edge.
    for (row, y) in [half_height, -half_height].into_iter().enumerate() {
        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let theta = u * std::f32::consts::PI;
            let (sin, cos) = theta.sin_cos();
            positions.push([radius * sin, y, radius * cos]);
            normals.push([sin, 0.0, cos]);
            uvs.push([u, row as f32]);
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((segments * 6) as usize);
    for segment in 0..segments {
        let top = segment;
        let bottom = segment + stride;
        indices.extend_from_slice(&[top, bottom, top + 1, bottom, bottom + 1, top + 1]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

pub fn spawn_background(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    });

    let mesh = half_cylinder_mesh(
        scene::BACKGROUND_RADIUS,
        scene::BACKGROUND_HEIGHT,
        scene::BACKGROUND_SEGMENTS,
    );

    commands
        .spawn((
            Background,
            Name::new("Background"),
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material),
            Transform::from_translation(scene::BACKGROUND_POSITION)
                .with_rotation(Quat::from_rotation_y(scene::BACKGROUND_YAW)),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values.clone(),
            _ => panic!("missing positions"),
        }
    }

    #[test]
    fn mesh_has_two_rows_and_two_triangles_per_segment() {
        let mesh = half_cylinder_mesh(300.0, 500.0, 32);
        assert_eq!(mesh.count_vertices(), 33 * 2);
        assert_eq!(mesh.indices().unwrap().len(), 32 * 6);
    }

    #[test]
    fn vertices_lie_on_the_front_half_of_the_cylinder() {
        let mesh = half_cylinder_mesh(300.0, 500.0, 8);
        for [x, y, z] in positions(&mesh) {
            assert!(((x * x + z * z).sqrt() - 300.0).abs() < 1e-2);
            assert!(x >= -1e-3, "theta stays within [0, PI]");
            assert!((y.abs() - 250.0).abs() < 1e-3);
        }
    }

    #[test]
    fn triangles_face_outward() {
        let mesh = half_cylinder_mesh(10.0, 4.0, 4);
        let positions = positions(&mesh);
        let indices: Vec<usize> = mesh.indices().unwrap().iter().collect();

        for triangle in indices.chunks_exact(3) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from(positions[triangle[i]]));
            let normal = (b - a).cross(c - a);
            let centre = (a + b + c) / 3.0;
            let outward = Vec3::new(centre.x, 0.0, centre.z);
            assert!(normal.dot(outward) > 0.0);
        }
    }
}
