use bevy::prelude::*;

use crate::{
    CASCADE_STEP_SECS, NAVIGATION_LOCK_SECS, VISIBILITY_THRESHOLD, WHEEL_THROTTLE_SECS,
};

/// Timing and threshold tunables for navigation and its side effects.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct NavigationConfig {
    /// Duration of the smooth scroll; the lock is held for exactly this long.
    pub transition_secs: f32,
    /// Minimum spacing between wheel-driven navigations.
    pub wheel_throttle_secs: f32,
    /// Visible fraction at which a section counts as in view.
    pub visibility_threshold: f32,
    /// Per-particle delay step of the formation cascade.
    pub cascade_step_secs: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            transition_secs: NAVIGATION_LOCK_SECS,
            wheel_throttle_secs: WHEEL_THROTTLE_SECS,
            visibility_threshold: VISIBILITY_THRESHOLD,
            cascade_step_secs: CASCADE_STEP_SECS,
        }
    }
}
