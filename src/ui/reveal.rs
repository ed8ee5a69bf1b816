use bevy::prelude::*;

use crate::navigation::SectionRevealed;

/// Element that fades and slides in once its section is revealed.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RevealItem {
    /// Section the element belongs to.
    pub section: usize,
    /// Position among the section's reveal items.
    pub order: usize,
    /// Seconds since the reveal started, once it has.
    pub elapsed: Option<f32>,
}

impl RevealItem {
    /// Delay between consecutive items.
    const STAGGER_SECS: f32 = 0.1;
    /// Fade/slide duration of one item.
    const DURATION_SECS: f32 = 0.6;
    /// Starting downward offset in pixels.
    pub const OFFSET_PX: f32 = 20.0;

    /// Hidden item waiting for `section`.
    pub fn new(section: usize, order: usize) -> Self {
        Self {
            section,
            order,
            elapsed: None,
        }
    }

    /// Begin the reveal; later calls keep the running one.
    pub fn start(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(0.0);
        }
    }

    /// Eased progress in `[0, 1]`, accounting for this item's stagger.
    pub fn progress(&self) -> f32 {
        let Some(elapsed) = self.elapsed else {
            return 0.0;
        };
        let local = elapsed - self.order as f32 * Self::STAGGER_SECS;
        let t = (local / Self::DURATION_SECS).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Whether the item reached full opacity.
    pub fn is_settled(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Start reveal items of every section that just came into view.
pub fn reveal_trigger_system(
    mut revealed: MessageReader<SectionRevealed>,
    mut items: Query<&mut RevealItem>,
) {
    for message in revealed.read() {
        for mut item in &mut items {
            if item.section == message.index && item.elapsed.is_none() {
                item.start();
            }
        }
    }
}

/// Advance running reveals and apply opacity and offset.
pub fn reveal_animation_system(
    time: Res<Time>,
    mut items: Query<(&mut RevealItem, &mut Node, Option<&mut TextColor>)>,
) {
    let dt = time.delta_secs();
    for (mut item, mut node, text_color) in &mut items {
        let Some(elapsed) = item.elapsed else {
            continue;
        };
        if item.is_settled() {
            continue;
        }
        item.elapsed = Some(elapsed + dt);
        let progress = item.progress();
        node.top = Val::Px(RevealItem::OFFSET_PX * (1.0 - progress));
        if let Some(mut text_color) = text_color {
            text_color.0.set_alpha(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_at(order: usize, elapsed: f32) -> f32 {
        RevealItem {
            elapsed: Some(elapsed),
            ..RevealItem::new(0, order)
        }
        .progress()
    }

    #[test]
    fn hidden_until_started() {
        let mut item = RevealItem::new(1, 0);
        assert_eq!(item.progress(), 0.0);
        item.start();
        assert_eq!(item.progress(), 0.0);
        item.elapsed = Some(0.6);
        assert!(item.is_settled());
    }

    /// Later items wait `order × 100 ms` before moving.
    #[test]
    fn items_are_staggered() {
        let first = progress_at(0, 0.25);
        let third = progress_at(2, 0.25);
        let fourth = progress_at(3, 0.25);
        assert!(first > third);
        assert!(third > 0.0);
        assert_eq!(fourth, 0.0);
    }

    #[test]
    fn restart_keeps_running_reveal() {
        let mut item = RevealItem::new(0, 0);
        item.start();
        item.elapsed = Some(0.3);
        item.start();
        assert_eq!(item.elapsed, Some(0.3));
    }
}
