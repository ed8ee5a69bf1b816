use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// Closed-form particle layout chosen per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    /// Shell around the origin with uniformly sampled angles.
    Sphere,
    /// Two interleaved strands winding around the vertical axis.
    Helix,
    /// Cube lattice centred on the origin.
    Grid,
    /// Rising spiral with linearly growing radius.
    Spiral,
    /// Parametric heart in the XY plane, rippled along Z.
    Heart,
}

impl Formation {
    /// Sphere radius.
    const SPHERE_RADIUS: f32 = 300.0;
    /// Helix radius.
    const HELIX_RADIUS: f32 = 200.0;
    /// Vertical spacing between consecutive helix particles.
    const HELIX_RISE: f32 = 50.0;
    /// Helix turns are `HELIX_SWEEP` radians over the whole field.
    const HELIX_SWEEP: f32 = 4.0 * PI;
    /// Cells per grid edge.
    pub const GRID_SIZE: usize = 3;
    /// Distance between neighbouring grid cells.
    pub const GRID_SPACING: f32 = 150.0;
    /// Spiral angle advance per particle.
    const SPIRAL_TURN: f32 = 0.5;
    /// Spiral radius at index zero.
    const SPIRAL_BASE_RADIUS: f32 = 100.0;
    /// Spiral radius growth per particle.
    const SPIRAL_RADIUS_STEP: f32 = 10.0;
    /// Spiral height growth per particle.
    const SPIRAL_RISE: f32 = 20.0;
    /// Spiral height at index zero.
    const SPIRAL_BASE_HEIGHT: f32 = -150.0;
    /// Uniform scale applied to the heart curve.
    pub const HEART_SCALE: f32 = 100.0;
    /// Depth amplitude of the heart ripple.
    pub const HEART_DEPTH: f32 = 50.0;

    /// Select the formation for a section; unknown sections fall back to the sphere.
    pub fn for_section(id: &str) -> Self {
        match id {
            "about" => Formation::Helix,
            "skills" => Formation::Grid,
            "projects" => Formation::Spiral,
            "contact" => Formation::Heart,
            _ => Formation::Sphere,
        }
    }

    /// Resting position of particle `index` in a field of `count`.
    pub fn position(self, index: usize, count: usize) -> Vec3 {
        let i = index as f32;
        let n = count.max(1) as f32;
        match self {
            Formation::Sphere => {
                let phi = unit_hash(index, 0x51) * TAU;
                let theta = unit_hash(index, 0xA7) * PI;
                Vec3::new(
                    theta.sin() * phi.cos(),
                    theta.sin() * phi.sin(),
                    theta.cos(),
                ) * Self::SPHERE_RADIUS
            }
            Formation::Helix => {
                let strand = if index % 2 == 0 { 0.0 } else { PI };
                let t = i / n * Self::HELIX_SWEEP + strand;
                Vec3::new(
                    t.cos() * Self::HELIX_RADIUS,
                    (i - n / 2.0) * Self::HELIX_RISE,
                    t.sin() * Self::HELIX_RADIUS,
                )
            }
            Formation::Grid => grid_cell(index, Self::GRID_SIZE) * Self::GRID_SPACING,
            Formation::Spiral => {
                let angle = i * Self::SPIRAL_TURN;
                let radius = Self::SPIRAL_BASE_RADIUS + i * Self::SPIRAL_RADIUS_STEP;
                Vec3::new(
                    angle.cos() * radius,
                    i * Self::SPIRAL_RISE + Self::SPIRAL_BASE_HEIGHT,
                    angle.sin() * radius,
                )
            }
            Formation::Heart => heart_point(TAU * i / n),
        }
    }
}

/// Point on the scaled heart curve at parameter `t`.
pub fn heart_point(t: f32) -> Vec3 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec3::new(
        x * Formation::HEART_SCALE,
        y * Formation::HEART_SCALE,
        (2.0 * t).sin() * Formation::HEART_DEPTH,
    )
}

/// Integer lattice coordinate of `index` in a `size`³ cube centred on zero.
fn grid_cell(index: usize, size: usize) -> Vec3 {
    let half = (size / 2) as f32;
    let x = (index % size) as f32 - half;
    let y = ((index / size) % size) as f32 - half;
    let z = (index / (size * size)) as f32 - half;
    Vec3::new(x, y, z)
}

/// Deterministic value in `[0, 1)` derived from a particle index and a salt.
fn unit_hash(index: usize, salt: u32) -> f32 {
    let mut h = (index as u32).wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    (h >> 8) as f32 / (1u32 << 24) as f32
}
