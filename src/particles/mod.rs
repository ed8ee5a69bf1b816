mod cascade;
mod components;
mod formation;
mod systems;

pub use cascade::FormationCascade;
pub use components::Particle;
pub use systems::{formation_cascade_system, spawn_particle_field};
