use bevy::prelude::*;

use crate::particles::formation::Formation;

/// One particle target waiting for its stagger delay.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingPlacement {
    index: usize,
    target: Vec3,
    remaining: f32,
}

/// Staggered application of a formation across the field.
///
/// Starting a new cascade drops whatever the previous one had not yet placed.
#[derive(Resource, Debug, Default)]
pub struct FormationCascade {
    pending: Vec<PendingPlacement>,
}

impl FormationCascade {
    /// Queue `formation` for `count` particles, particle `i` after `i * step` seconds.
    pub fn start(&mut self, formation: Formation, count: usize, step: f32) {
        self.pending = (0..count)
            .map(|index| PendingPlacement {
                index,
                target: formation.position(index, count),
                remaining: index as f32 * step,
            })
            .collect();
    }

    /// Advance by `dt` seconds and return placements that are now due.
    pub fn tick(&mut self, dt: f32) -> Vec<(usize, Vec3)> {
        let mut due = Vec::new();
        self.pending.retain_mut(|placement| {
            placement.remaining -= dt;
            if placement.remaining <= 0.0 {
                due.push((placement.index, placement.target));
                false
            } else {
                true
            }
        });
        due
    }

    /// Whether every queued placement has been applied.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Particle zero lands immediately, later ones wait their turn.
    #[test]
    fn placements_are_staggered_by_index() {
        let mut cascade = FormationCascade::default();
        cascade.start(Formation::Grid, 3, 0.1);

        let first = cascade.tick(0.0);
        assert_eq!(first, vec![(0, Formation::Grid.position(0, 3))]);
        assert!(cascade.tick(0.05).is_empty());
        assert_eq!(cascade.tick(0.06).len(), 1);
        assert_eq!(cascade.tick(0.1).len(), 1);
        assert!(cascade.is_idle());
    }

    /// Repeating a section yields the same resting layout regardless of interruption.
    #[test]
    fn repeated_reposition_is_idempotent() {
        let count = 15;
        let settle = |cascade: &mut FormationCascade, positions: &mut Vec<Vec3>| {
            for (index, target) in cascade.tick(10.0) {
                positions[index] = target;
            }
        };

        let mut positions = vec![Vec3::ZERO; count];
        let mut cascade = FormationCascade::default();
        cascade.start(Formation::for_section("projects"), count, 0.1);
        settle(&mut cascade, &mut positions);
        let once = positions.clone();

        // Interrupt a heart cascade halfway, then re-request projects twice.
        cascade.start(Formation::for_section("contact"), count, 0.1);
        for (index, target) in cascade.tick(0.55) {
            positions[index] = target;
        }
        cascade.start(Formation::for_section("projects"), count, 0.1);
        cascade.start(Formation::for_section("projects"), count, 0.1);
        settle(&mut cascade, &mut positions);

        assert_eq!(positions, once);
    }
}
