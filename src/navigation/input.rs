use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

use crate::contact::ContactForm;
use crate::navigation::config::NavigationConfig;
use crate::navigation::section::Direction;
use crate::ui::NavLink;

/// A request to change the active section, funnelled to the navigator.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Jump to a section by identifier.
    To(String),
    /// Move one section forward or back.
    Step(Direction),
}

/// Leading-edge throttle: the first event passes, later ones wait out the interval.
#[derive(Resource, Debug, Default)]
pub struct WheelThrottle {
    last_fired: Option<f32>,
}

impl WheelThrottle {
    /// Return whether an event at `now` seconds may fire, recording it if so.
    pub fn admit(&mut self, now: f32, interval: f32) -> bool {
        if let Some(last) = self.last_fired
            && now - last < interval
        {
            return false;
        }
        self.last_fired = Some(now);
        true
    }
}

/// Turn wheel motion into throttled next/previous requests.
pub fn wheel_navigation_system(
    time: Res<Time>,
    scroll: Res<AccumulatedMouseScroll>,
    config: Res<NavigationConfig>,
    mut throttle: ResMut<WheelThrottle>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    let Some(direction) = Direction::from_wheel(scroll.delta.y) else {
        return;
    };
    if throttle.admit(time.elapsed_secs(), config.wheel_throttle_secs) {
        requests.write(NavigationRequest::Step(direction));
    }
}

/// Map arrow keys to next/previous unless a form field has focus.
pub fn key_navigation_system(
    input: Res<ButtonInput<KeyCode>>,
    form: Res<ContactForm>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    if form.focused().is_some() {
        return;
    }
    if input.just_pressed(KeyCode::ArrowDown) {
        requests.write(NavigationRequest::Step(Direction::Next));
    }
    if input.just_pressed(KeyCode::ArrowUp) {
        requests.write(NavigationRequest::Step(Direction::Previous));
    }
}

/// Navigate when a side-nav link is pressed.
pub fn nav_link_click_system(
    links: Query<(&Interaction, &NavLink), Changed<Interaction>>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    for (interaction, link) in &links {
        if *interaction == Interaction::Pressed {
            requests.write(NavigationRequest::To(link.section.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;
    use bevy::prelude::*;

    use super::{NavigationRequest, WheelThrottle, key_navigation_system};
    use crate::contact::ContactForm;

    fn arrow_down_requests(form: ContactForm) -> usize {
        let mut app = App::new();
        app.add_message::<NavigationRequest>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(form)
            .add_systems(Update, key_navigation_system);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowDown);
        app.update();
        app.world().resource::<Messages<NavigationRequest>>().len()
    }

    /// Arrow keys are held back while a field has focus and work again after it blurs.
    #[test]
    fn arrows_resume_after_field_blurs() {
        let mut form = ContactForm::default();
        form.focus_next();
        assert_eq!(arrow_down_requests(form), 0);

        let mut form = ContactForm::default();
        form.focus_next();
        form.blur();
        assert_eq!(arrow_down_requests(form), 1);
    }

    #[test]
    fn throttle_admits_first_and_then_after_interval() {
        let mut throttle = WheelThrottle::default();
        assert!(throttle.admit(1.0, 0.15));
        assert!(!throttle.admit(1.05, 0.15));
        assert!(!throttle.admit(1.14, 0.15));
        assert!(throttle.admit(1.2, 0.15));
    }
}
