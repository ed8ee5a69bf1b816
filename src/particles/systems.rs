use bevy::prelude::*;
use rand::Rng;

use crate::PARTICLE_COUNT;
use crate::navigation::{NavigationConfig, NavigationStarted};
use crate::particles::cascade::FormationCascade;
use crate::particles::components::{Particle, scatter_position};
use crate::particles::formation::Formation;

/// Palette shared by the particle materials.
const PARTICLE_COLORS: [Color; 5] = [
    Color::srgba(0.0, 0.96, 1.0, 0.7),
    Color::srgba(1.0, 0.0, 1.0, 0.7),
    Color::srgba(1.0, 1.0, 0.0, 0.7),
    Color::srgba(1.0, 0.0, 0.5, 0.7),
    Color::srgba(0.5, 1.0, 0.0, 0.7),
];

/// Spawn the decorative particle meshes at random scatter positions.
pub fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let shapes: Vec<Handle<Mesh>> = ParticleVisualFactory::build_shapes()
        .into_iter()
        .map(|mesh| meshes.add(mesh))
        .collect();
    let palette: Vec<Handle<StandardMaterial>> = PARTICLE_COLORS
        .iter()
        .map(|color| materials.add(ParticleVisualFactory::build_material(*color)))
        .collect();

    let mut rng = rand::rng();
    for index in 0..PARTICLE_COUNT {
        let shape = shapes[rng.random_range(0..shapes.len())].clone();
        let material = palette[rng.random_range(0..palette.len())].clone();
        let particle = Particle::random(index, &mut rng);
        let transform = Transform::from_translation(scatter_position(&mut rng))
            .with_rotation(particle.orientation());
        commands.spawn((
            bevy::mesh::Mesh3d(shape),
            bevy::pbr::MeshMaterial3d(material),
            transform,
            particle,
        ));
    }
    info!("spawned {PARTICLE_COUNT} particles");
}

/// Start a formation cascade for each navigation and apply placements as they fall due.
pub fn formation_cascade_system(
    time: Res<Time>,
    config: Res<NavigationConfig>,
    mut cascade: ResMut<FormationCascade>,
    mut started: MessageReader<NavigationStarted>,
    mut particles: Query<(&Particle, &mut Transform)>,
) {
    for navigation in started.read() {
        let formation = Formation::for_section(&navigation.id);
        debug!("reshaping particles into {formation:?}");
        cascade.start(formation, PARTICLE_COUNT, config.cascade_step_secs);
    }
    if cascade.is_idle() {
        return;
    }
    let due = cascade.tick(time.delta_secs());
    if due.is_empty() {
        return;
    }
    for (particle, mut transform) in &mut particles {
        if let Some((_, target)) = due.iter().find(|(index, _)| *index == particle.index) {
            transform.translation = *target;
        }
    }
}

/// Factory for particle meshes and materials.
struct ParticleVisualFactory;

impl ParticleVisualFactory {
    /// Cube, sphere, cone, octahedron and torus.
    fn build_shapes() -> Vec<Mesh> {
        vec![
            Mesh::from(Cuboid::new(20.0, 20.0, 20.0)),
            Sphere::new(15.0).mesh().uv(32, 32),
            Mesh::from(Cone {
                radius: 10.0,
                height: 30.0,
            }),
            octahedron_mesh(15.0),
            Mesh::from(Torus::new(7.0, 17.0)),
        ]
    }

    /// Translucent lit material in `color`.
    fn build_material(color: Color) -> StandardMaterial {
        StandardMaterial {
            base_color: color,
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.6,
            ..default()
        }
    }
}

/// Flat-shaded octahedron with vertices `radius` from the centre on each axis.
fn octahedron_mesh(radius: f32) -> Mesh {
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    for sx in [1.0_f32, -1.0] {
        for sy in [1.0_f32, -1.0] {
            for sz in [1.0_f32, -1.0] {
                let x = [sx * radius, 0.0, 0.0];
                let y = [0.0, sy * radius, 0.0];
                let z = [0.0, 0.0, sz * radius];
                // Mirroring an odd number of axes flips the winding.
                let face = if sx * sy * sz > 0.0 { [x, y, z] } else { [x, z, y] };
                let normal = Vec3::new(sx, sy, sz).normalize().to_array();
                positions.extend(face);
                normals.extend([normal; 3]);
            }
        }
    }
    let indices = (0..positions.len() as u32).collect();
    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::TriangleList,
        bevy::asset::RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(bevy::mesh::Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eight outward-wound triangles whose corners sit on the axes.
    #[test]
    fn octahedron_faces_point_outward() {
        let mesh = octahedron_mesh(15.0);
        let Some(positions) = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
        else {
            panic!("octahedron has positions");
        };
        assert_eq!(positions.len(), 24);
        for face in positions.chunks(3) {
            let [a, b, c] = [face[0], face[1], face[2]].map(Vec3::from_array);
            for corner in [a, b, c] {
                assert!((corner.length() - 15.0).abs() < 1e-4);
            }
            let winding = (b - a).cross(c - a);
            assert!(winding.dot(a + b + c) > 0.0);
        }
    }
}
