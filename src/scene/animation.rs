use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::particles::Particle;
use crate::scene::camera::{FolioCamera, PointerTarget};
use crate::scene::clock::FrameClock;

/// One step of the animation loop: camera drift, then particle spin and float.
pub fn advance_scene<'a, C, I>(
    clock: &C,
    pointer: PointerTarget,
    camera: (&FolioCamera, &mut Transform),
    particles: I,
) where
    C: FrameClock + ?Sized,
    I: IntoIterator<Item = (&'a mut Particle, &'a mut Transform)>,
{
    let frames = clock.frames();
    let (rig, camera_transform) = camera;
    camera_transform.translation = rig.ease_toward(camera_transform.translation, pointer, frames);
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);

    let elapsed = clock.elapsed_secs();
    for (particle, transform) in particles {
        particle.step(transform, elapsed, frames);
    }
}

/// Drive the animation loop once per app update.
pub fn animation_tick_system(
    time: Res<Time>,
    pointer: Res<PointerTarget>,
    mut cameras: Query<(&FolioCamera, &mut Transform), Without<Particle>>,
    mut particles: Query<(&mut Particle, &mut Transform), Without<FolioCamera>>,
) {
    let Ok((rig, mut camera_transform)) = cameras.single_mut() else {
        return;
    };
    advance_scene(
        &*time,
        *pointer,
        (rig, &mut *camera_transform),
        particles
            .iter_mut()
            .map(|(particle, transform)| (particle.into_inner(), transform.into_inner())),
    );
}

/// Pause particle motion while the window is unfocused.
pub fn focus_pause_system(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut particles: Query<&mut Particle>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let paused = !window.focused;
    let mut toggled = false;
    for mut particle in &mut particles {
        if particle.paused != paused {
            particle.paused = paused;
            toggled = true;
        }
    }
    if toggled {
        debug!("particle motion paused: {paused}");
    }
}
