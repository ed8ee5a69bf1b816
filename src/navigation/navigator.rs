use bevy::prelude::*;

use crate::navigation::section::{Direction, Section};

/// Identifies one navigation transition; releases the lock it was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Lock taken and target activated; the token must be finished to unlock.
    Started {
        /// Token carried by the scroll transition.
        token: TransitionToken,
        /// Index of the newly active section.
        index: usize,
    },
    /// Another transition still holds the lock.
    Locked,
    /// No section carries the requested identifier.
    UnknownSection,
    /// Sequential step past the first or last section.
    AtBoundary,
}

/// Owner of the active-section state and the navigation lock.
///
/// Every write to a section's active flag goes through this type, both from
/// explicit navigation and from visibility-driven promotion.
#[derive(Resource, Debug)]
pub struct SectionNavigator {
    sections: Vec<Section>,
    current: usize,
    lock: Option<TransitionToken>,
    next_token: u64,
}

impl SectionNavigator {
    /// Build a navigator over `ids` in page order with the first one active.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections: Vec<Section> = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| Section::new(id, index))
            .collect();
        if let Some(first) = sections.first_mut() {
            first.active = true;
        }
        Self {
            sections,
            current: 0,
            lock: None,
            next_token: 0,
        }
    }

    /// All sections in page order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The active section.
    pub fn active(&self) -> &Section {
        &self.sections[self.current]
    }

    /// Whether a transition currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Look up a section index by identifier.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Navigate to the section named `id`, taking the lock on success.
    pub fn navigate_to(&mut self, id: &str) -> NavigationOutcome {
        let Some(index) = self.index_of(id) else {
            return NavigationOutcome::UnknownSection;
        };
        self.navigate_to_index(index)
    }

    /// Navigate one section forward or back from the active one.
    pub fn step(&mut self, direction: Direction) -> NavigationOutcome {
        if self.is_locked() {
            return NavigationOutcome::Locked;
        }
        match direction.neighbour(self.current, self.sections.len()) {
            Some(index) => self.navigate_to_index(index),
            None => NavigationOutcome::AtBoundary,
        }
    }

    /// Promote a section that became visible, unless a transition is running.
    ///
    /// Returns whether the active section changed.
    pub fn promote_visible(&mut self, id: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        match self.index_of(id) {
            Some(index) if index != self.current => {
                self.set_active(index);
                true
            }
            _ => false,
        }
    }

    /// Release the lock if `token` belongs to the running transition.
    pub fn finish_transition(&mut self, token: TransitionToken) -> bool {
        if self.lock == Some(token) {
            self.lock = None;
            true
        } else {
            false
        }
    }

    fn navigate_to_index(&mut self, index: usize) -> NavigationOutcome {
        if self.is_locked() {
            return NavigationOutcome::Locked;
        }
        let token = TransitionToken(self.next_token);
        self.next_token += 1;
        self.lock = Some(token);
        self.set_active(index);
        NavigationOutcome::Started { token, index }
    }

    fn set_active(&mut self, index: usize) {
        for section in &mut self.sections {
            section.active = section.index == index;
        }
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> SectionNavigator {
        SectionNavigator::new(["home", "about", "skills", "projects", "contact"])
    }

    fn active_count(nav: &SectionNavigator) -> usize {
        nav.sections().iter().filter(|section| section.active).count()
    }

    /// Unknown ids leave every active flag untouched.
    #[test]
    fn unknown_section_is_a_no_op() {
        let mut nav = portfolio();
        let before: Vec<bool> = nav.sections().iter().map(|s| s.active).collect();
        for id in ["", "Home", "blog", "contact "] {
            assert_eq!(nav.navigate_to(id), NavigationOutcome::UnknownSection);
        }
        let after: Vec<bool> = nav.sections().iter().map(|s| s.active).collect();
        assert_eq!(before, after);
        assert!(!nav.is_locked());
    }

    /// Exactly one section is active after construction and after every kind of change.
    #[test]
    fn exactly_one_section_active() {
        let mut nav = portfolio();
        assert_eq!(active_count(&nav), 1);
        assert_eq!(nav.active().id, "home");

        let NavigationOutcome::Started { token, .. } = nav.navigate_to("skills") else {
            panic!("navigation should start");
        };
        assert_eq!(active_count(&nav), 1);
        nav.finish_transition(token);

        assert!(nav.promote_visible("projects"));
        assert_eq!(active_count(&nav), 1);
        assert_eq!(nav.active().id, "projects");
    }

    /// Sequential navigation stops at both ends.
    #[test]
    fn step_is_clamped_at_boundaries() {
        let mut nav = portfolio();
        assert_eq!(nav.step(Direction::Previous), NavigationOutcome::AtBoundary);
        assert_eq!(nav.active().index, 0);

        let NavigationOutcome::Started { token, .. } = nav.navigate_to("contact") else {
            panic!("navigation should start");
        };
        nav.finish_transition(token);
        assert_eq!(nav.step(Direction::Next), NavigationOutcome::AtBoundary);
        assert_eq!(nav.active().id, "contact");
    }

    /// A second request while the first transition runs is dropped.
    #[test]
    fn lock_drops_overlapping_requests() {
        let mut nav = portfolio();
        assert!(matches!(
            nav.navigate_to("about"),
            NavigationOutcome::Started { index: 1, .. }
        ));
        assert_eq!(nav.navigate_to("projects"), NavigationOutcome::Locked);
        assert_eq!(nav.step(Direction::Next), NavigationOutcome::Locked);
        assert!(!nav.promote_visible("contact"));
        assert_eq!(nav.active().id, "about");
    }

    /// Only the matching token unlocks.
    #[test]
    fn stale_token_does_not_release_lock() {
        let mut nav = portfolio();
        let NavigationOutcome::Started { token: first, .. } = nav.navigate_to("about") else {
            panic!("navigation should start");
        };
        assert!(nav.finish_transition(first));
        let NavigationOutcome::Started { token: second, .. } = nav.navigate_to("skills") else {
            panic!("navigation should start");
        };
        assert!(!nav.finish_transition(first));
        assert!(nav.is_locked());
        assert!(nav.finish_transition(second));
        assert!(!nav.is_locked());
    }

    #[test]
    fn promoting_active_section_reports_no_change() {
        let mut nav = portfolio();
        assert!(!nav.promote_visible("home"));
        assert!(!nav.promote_visible("missing"));
    }
}
