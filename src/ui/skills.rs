use bevy::prelude::*;

use crate::navigation::SectionRevealed;

/// Progress bar that fills to a skill level once its section is revealed.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SkillBar {
    /// Section holding the bar.
    pub section: usize,
    /// Final fill in percent.
    pub level: f32,
    /// Current fill in percent.
    pub current: f32,
    /// Seconds left before filling starts, once triggered.
    delay: Option<f32>,
    /// Time banked toward the next fill step.
    carry: f32,
}

impl SkillBar {
    /// Pause between reveal and first fill step.
    const START_DELAY_SECS: f32 = 0.2;
    /// Interval between fill steps.
    const STEP_SECS: f32 = 0.02;
    /// Number of steps to reach the level.
    const STEPS: f32 = 100.0;

    /// Empty bar for `level` percent in `section`.
    pub fn new(section: usize, level: f32) -> Self {
        Self {
            section,
            level,
            current: 0.0,
            delay: None,
            carry: 0.0,
        }
    }

    /// Arm the bar; only the first trigger counts.
    pub fn trigger(&mut self) {
        if self.delay.is_none() {
            self.delay = Some(Self::START_DELAY_SECS);
        }
    }

    /// Whether the bar reached its level.
    pub fn is_full(&self) -> bool {
        self.current >= self.level
    }

    /// Advance by `dt` seconds; returns whether the fill changed.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(delay) = self.delay else {
            return false;
        };
        if self.is_full() {
            return false;
        }
        let mut budget = dt;
        if delay > 0.0 {
            let remaining = delay - budget;
            self.delay = Some(remaining.max(0.0));
            if remaining > 0.0 {
                return false;
            }
            budget = -remaining;
        }
        self.carry += budget;
        let steps = (self.carry / Self::STEP_SECS).floor();
        if steps < 1.0 {
            return false;
        }
        self.carry -= steps * Self::STEP_SECS;
        self.current = (self.current + steps * self.level / Self::STEPS).min(self.level);
        true
    }
}

/// Arm skill bars in sections that came into view.
pub fn skill_trigger_system(
    mut revealed: MessageReader<SectionRevealed>,
    mut bars: Query<&mut SkillBar>,
) {
    for message in revealed.read() {
        for mut bar in &mut bars {
            if bar.section == message.index {
                bar.trigger();
            }
        }
    }
}

/// Fill armed skill bars and resize their fill nodes.
pub fn skill_fill_system(time: Res<Time>, mut bars: Query<(&mut SkillBar, &mut Node)>) {
    let dt = time.delta_secs();
    for (mut bar, mut node) in &mut bars {
        if bar.advance(dt) {
            node.width = Val::Percent(bar.current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untriggered_bar_stays_empty() {
        let mut bar = SkillBar::new(2, 80.0);
        assert!(!bar.advance(5.0));
        assert_eq!(bar.current, 0.0);
    }

    /// Waits 200 ms, then fills in 100 steps of 20 ms.
    #[test]
    fn fills_after_delay_in_fixed_steps() {
        let mut bar = SkillBar::new(2, 80.0);
        bar.trigger();
        assert!(!bar.advance(0.15));
        assert!(bar.advance(0.1));
        assert!((bar.current - 1.6).abs() < 1e-4);

        for _ in 0..200 {
            bar.advance(0.016);
        }
        assert!(bar.is_full());
        assert_eq!(bar.current, 80.0);
    }
}
