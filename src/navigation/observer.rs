use bevy::prelude::*;

/// Fraction of section `index` inside a one-viewport window starting at `offset`.
pub fn visible_fraction(index: usize, offset: f32) -> f32 {
    (1.0 - (index as f32 - offset).abs()).clamp(0.0, 1.0)
}

/// Tracks per-section visibility and reports upward threshold crossings.
#[derive(Resource, Debug)]
pub struct VisibilityObserver {
    threshold: f32,
    previous: Vec<f32>,
}

impl VisibilityObserver {
    /// Build an observer for `count` sections that have not been seen yet.
    pub fn new(count: usize, threshold: f32) -> Self {
        Self {
            threshold,
            previous: vec![0.0; count],
        }
    }

    /// Sample visibility at `offset`; returns the sections that just crossed the threshold.
    pub fn observe(&mut self, offset: f32) -> Vec<usize> {
        let mut crossed = Vec::new();
        for (index, previous) in self.previous.iter_mut().enumerate() {
            let fraction = visible_fraction(index, offset);
            if fraction >= self.threshold && *previous < self.threshold {
                crossed.push(index);
            }
            *previous = fraction;
        }
        crossed
    }
}

/// Emitted the first and every later time a section crosses into view.
#[derive(Message, Debug, Clone, Copy)]
pub struct SectionRevealed {
    /// Index of the section.
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_full_when_aligned() {
        assert_eq!(visible_fraction(2, 2.0), 1.0);
        assert_eq!(visible_fraction(0, 1.0), 0.0);
        assert!((visible_fraction(1, 0.25) - 0.25).abs() < 1e-6);
    }

    /// First sample reveals the visible section; holding still reports nothing more.
    #[test]
    fn crossing_reported_once_per_entry() {
        let mut observer = VisibilityObserver::new(3, 0.3);
        assert_eq!(observer.observe(0.0), vec![0]);
        assert!(observer.observe(0.0).is_empty());

        // Section 1 crosses 0.3 on the way down.
        assert!(observer.observe(0.2).is_empty());
        assert_eq!(observer.observe(0.5), vec![1]);
    }

    #[test]
    fn leaving_and_returning_crosses_again() {
        let mut observer = VisibilityObserver::new(2, 0.3);
        observer.observe(0.0);
        observer.observe(1.0);
        assert_eq!(observer.observe(0.0), vec![0]);
    }
}
