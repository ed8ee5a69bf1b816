use bevy::prelude::*;
use rand::Rng;

/// Decorative particle with its own spin and float parameters.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position of this particle within the field.
    pub index: usize,
    /// Euler rotation (XYZ) in radians.
    pub rotation: Vec3,
    /// Rotation advance per reference frame, per axis.
    pub rotation_speed: Vec3,
    /// Frequency factor of the vertical float.
    pub float_speed: f32,
    /// Skip spin and float while set.
    pub paused: bool,
}

impl Particle {
    /// Largest per-axis spin magnitude per reference frame.
    const MAX_SPIN: f32 = 0.005;
    /// Lowest float frequency factor.
    const MIN_FLOAT_SPEED: f32 = 0.01;
    /// Spread of float frequency factors above the minimum.
    const FLOAT_SPEED_SPREAD: f32 = 0.02;
    /// Vertical nudge amplitude per reference frame.
    pub const FLOAT_AMPLITUDE: f32 = 0.5;

    /// Roll random orientation, spin and float parameters for particle `index`.
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        let mut spin = || (rng.random::<f32>() - 0.5) * 2.0 * Self::MAX_SPIN;
        let rotation_speed = Vec3::new(spin(), spin(), spin());
        let rotation = Vec3::new(
            rng.random::<f32>(),
            rng.random::<f32>(),
            rng.random::<f32>(),
        ) * std::f32::consts::TAU;
        Self {
            index,
            rotation,
            rotation_speed,
            float_speed: Self::MIN_FLOAT_SPEED + rng.random::<f32>() * Self::FLOAT_SPEED_SPREAD,
            paused: false,
        }
    }

    /// Current rotation as a quaternion.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Advance spin and float by `frames` reference frames at `elapsed` seconds.
    pub fn step(&mut self, transform: &mut Transform, elapsed: f32, frames: f32) {
        if self.paused {
            return;
        }
        self.rotation += self.rotation_speed * frames;
        transform.rotation = self.orientation();
        transform.translation.y += self.float_offset(elapsed) * frames;
    }

    /// Vertical nudge for one reference frame at `elapsed` seconds.
    pub fn float_offset(&self, elapsed: f32) -> f32 {
        (elapsed * self.float_speed + self.index as f32).sin() * Self::FLOAT_AMPLITUDE
    }
}

/// Random initial scatter box for a freshly spawned particle.
pub fn scatter_position(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random::<f32>() * 2000.0 - 1000.0,
        rng.random::<f32>() * 2000.0 - 1000.0,
        rng.random::<f32>() * 1000.0 - 500.0,
    )
}
