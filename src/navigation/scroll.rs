use bevy::prelude::*;

use crate::navigation::navigator::TransitionToken;

/// Eased movement of the page offset toward one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransition {
    /// Token of the navigation that started this transition.
    pub token: TransitionToken,
    /// Offset at transition start, in viewport heights.
    pub from: f32,
    /// Offset at transition end, in viewport heights.
    pub to: f32,
    /// Seconds elapsed since start.
    pub elapsed: f32,
    /// Total duration in seconds.
    pub duration: f32,
}

impl ScrollTransition {
    /// Start a transition from `from` to `to` lasting `duration` seconds.
    pub fn new(token: TransitionToken, from: f32, to: f32, duration: f32) -> Self {
        Self {
            token,
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt` seconds and return the eased offset.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.offset()
    }

    /// Eased offset at the current elapsed time.
    pub fn offset(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * ease_in_out_quad(t)
    }

    /// Whether the transition reached its end.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Quadratic ease-in-out over `t ∈ [0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t < 1.0 {
        0.5 * t * t
    } else {
        let t = t - 1.0;
        -0.5 * (t * (t - 2.0) - 1.0)
    }
}

/// Vertical page offset (in viewport heights) and the transition moving it.
#[derive(Resource, Debug, Default)]
pub struct PageScroll {
    /// Current offset; section `i` starts at offset `i`.
    pub offset: f32,
    /// In-flight transition, if any.
    pub transition: Option<ScrollTransition>,
}

impl PageScroll {
    /// Begin scrolling toward section `index`, replacing any running transition.
    pub fn scroll_to(&mut self, token: TransitionToken, index: usize, duration: f32) {
        self.transition = Some(ScrollTransition::new(
            token,
            self.offset,
            index as f32,
            duration,
        ));
    }

    /// Advance the running transition; returns its token once it completes.
    pub fn tick(&mut self, dt: f32) -> Option<TransitionToken> {
        let transition = self.transition.as_mut()?;
        self.offset = transition.advance(dt);
        if !transition.is_finished() {
            return None;
        }
        let token = transition.token;
        self.transition = None;
        Some(token)
    }
}

/// Emitted when a scroll transition reaches its target section.
#[derive(Message, Debug, Clone, Copy)]
pub struct ScrollSettled {
    /// Token of the finished transition.
    pub token: TransitionToken,
}
