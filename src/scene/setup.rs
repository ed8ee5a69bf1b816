use bevy::camera::{PerspectiveProjection, Projection};
use bevy::prelude::*;

use crate::scene::camera::FolioCamera;
use crate::{CAMERA_DISTANCE, CAMERA_EASING};

/// Vertical field of view in degrees.
const CAMERA_FOV_DEGREES: f32 = 75.0;
/// Near clip plane distance.
const CAMERA_NEAR: f32 = 1.0;
/// Far clip plane distance.
const CAMERA_FAR: f32 = 2_000.0;
/// Clear colour behind the scene.
const BACKDROP_COLOR: Color = Color::srgb(0.03, 0.03, 0.07);
/// Global ambient-light colour.
const AMBIENT_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);
/// Global ambient-light brightness.
const AMBIENT_BRIGHTNESS: f32 = 600.0;
/// Cyan key light colour.
const KEY_LIGHT_COLOR: Color = Color::srgb(0.0, 0.96, 1.0);
/// Key light illuminance.
const KEY_LIGHT_ILLUMINANCE: f32 = 8_000.0;
/// Direction the key light shines from.
const KEY_LIGHT_POSITION: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Build the camera and lighting around the particle field.
pub fn setup_scene(mut commands: Commands) {
    setup_environment(&mut commands);
    spawn_key_light(&mut commands);
    spawn_camera(&mut commands);
}

/// Insert background and ambient-light resources.
fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(ClearColor(BACKDROP_COLOR));
    commands.insert_resource(bevy::light::GlobalAmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });
}

/// Spawn the directional key light.
fn spawn_key_light(commands: &mut Commands) {
    commands.spawn((
        bevy::light::DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            color: KEY_LIGHT_COLOR,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Spawn the pointer-following perspective camera.
fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        bevy::camera::Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        FolioCamera::new(CAMERA_EASING),
    ));
}
