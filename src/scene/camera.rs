use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Pointer offset from the window centre, scaled into scene units.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTarget(
    /// Scaled offset; `y` grows downward like window coordinates.
    pub Vec2,
);

impl PointerTarget {
    /// Scene units per pixel of pointer offset.
    const SCALE: f32 = 0.1;

    /// Map a cursor position inside a window of `size` pixels.
    pub fn from_cursor(cursor: Vec2, size: Vec2) -> Self {
        Self((cursor - size * 0.5) * Self::SCALE)
    }
}

/// Camera that drifts toward the pointer while looking at the origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct FolioCamera {
    /// Fraction of the remaining distance covered per reference frame.
    pub easing: f32,
}

impl FolioCamera {
    /// Build a camera rig with the given per-frame easing fraction.
    pub fn new(easing: f32) -> Self {
        Self { easing }
    }

    /// Move `position` toward the pointer-derived target over `frames` reference frames.
    pub fn ease_toward(&self, position: Vec3, pointer: PointerTarget, frames: f32) -> Vec3 {
        let target = Vec3::new(pointer.0.x, -pointer.0.y, position.z);
        let factor = 1.0 - (1.0 - self.easing).powf(frames);
        position + (target - position) * factor
    }
}

/// Track the cursor of the primary window.
pub fn pointer_tracking_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerTarget>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    let target = PointerTarget::from_cursor(cursor, size);
    if *pointer != target {
        *pointer = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_at_centre_means_no_offset() {
        let size = Vec2::new(1280.0, 720.0);
        assert_eq!(PointerTarget::from_cursor(size * 0.5, size).0, Vec2::ZERO);
        assert_eq!(
            PointerTarget::from_cursor(Vec2::new(1280.0, 0.0), size).0,
            Vec2::new(64.0, -36.0)
        );
    }

    /// One reference frame covers the easing fraction; y follows the inverted pointer.
    #[test]
    fn easing_covers_fraction_per_frame() {
        let camera = FolioCamera::new(0.05);
        let pointer = PointerTarget(Vec2::new(100.0, 40.0));
        let next = camera.ease_toward(Vec3::new(0.0, 0.0, 500.0), pointer, 1.0);
        assert!((next.x - 5.0).abs() < 1e-4);
        assert!((next.y + 2.0).abs() < 1e-4);
        assert_eq!(next.z, 500.0);
    }
}
