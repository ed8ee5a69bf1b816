use bevy::prelude::*;

use crate::navigation::config::NavigationConfig;
use crate::navigation::input::NavigationRequest;
use crate::navigation::navigator::{NavigationOutcome, SectionNavigator, TransitionToken};
use crate::navigation::observer::{SectionRevealed, VisibilityObserver};
use crate::navigation::scroll::{PageScroll, ScrollSettled};
use crate::ui::{NavLink, PageStrip, SectionPanel, Theme};

/// Emitted once a navigation took the lock and activated its target.
#[derive(Message, Debug, Clone)]
pub struct NavigationStarted {
    /// Token releasing the lock once the scroll settles.
    pub token: TransitionToken,
    /// Index of the target section.
    pub index: usize,
    /// Identifier of the target section.
    pub id: String,
}

/// Apply queued navigation requests to the navigator.
pub fn navigation_request_system(
    mut navigator: ResMut<SectionNavigator>,
    mut requests: MessageReader<NavigationRequest>,
    mut started: MessageWriter<NavigationStarted>,
) {
    for request in requests.read() {
        let outcome = match request {
            NavigationRequest::To(id) => navigator.navigate_to(id),
            NavigationRequest::Step(direction) => navigator.step(*direction),
        };
        match outcome {
            NavigationOutcome::Started { token, index } => {
                let id = navigator.active().id.clone();
                info!("navigating to section `{id}`");
                started.write(NavigationStarted { token, index, id });
            }
            ignored => debug!("navigation request {request:?} ignored: {ignored:?}"),
        }
    }
}

/// Start and advance the smooth page scroll, then move the page strip.
pub fn page_scroll_system(
    time: Res<Time>,
    config: Res<NavigationConfig>,
    mut scroll: ResMut<PageScroll>,
    mut started: MessageReader<NavigationStarted>,
    mut settled: MessageWriter<ScrollSettled>,
    mut strip: Query<&mut Node, With<PageStrip>>,
) {
    for navigation in started.read() {
        scroll.scroll_to(navigation.token, navigation.index, config.transition_secs);
    }
    if let Some(token) = scroll.tick(time.delta_secs()) {
        settled.write(ScrollSettled { token });
    }
    let Ok(mut node) = strip.single_mut() else {
        return;
    };
    node.top = Val::Vh(-scroll.offset * 100.0);
}

/// Release the navigation lock when its scroll transition completes.
pub fn release_lock_system(
    mut navigator: ResMut<SectionNavigator>,
    mut settled: MessageReader<ScrollSettled>,
) {
    for message in settled.read() {
        if navigator.finish_transition(message.token) {
            debug!("navigation lock released");
        }
    }
}

/// Reveal sections entering view and promote them when no navigation runs.
pub fn section_visibility_system(
    scroll: Res<PageScroll>,
    mut observer: ResMut<VisibilityObserver>,
    mut navigator: ResMut<SectionNavigator>,
    mut revealed: MessageWriter<SectionRevealed>,
) {
    for index in observer.observe(scroll.offset) {
        revealed.write(SectionRevealed { index });
        let Some(id) = navigator.sections().get(index).map(|section| section.id.clone()) else {
            continue;
        };
        if navigator.promote_visible(&id) {
            debug!("section `{id}` promoted by visibility");
        }
    }
}

/// Mirror the active flag onto nav-link and section-panel styling.
pub fn active_highlight_system(
    navigator: Res<SectionNavigator>,
    mut links: Query<(&NavLink, &mut BackgroundColor), Without<SectionPanel>>,
    mut panels: Query<(&SectionPanel, &mut BackgroundColor), Without<NavLink>>,
) {
    if !navigator.is_changed() {
        return;
    }
    let active = navigator.active();
    for (link, mut background) in &mut links {
        *background = if link.section == active.id {
            BackgroundColor(Theme::ACCENT)
        } else {
            BackgroundColor(Theme::NAV_IDLE)
        };
    }
    for (panel, mut background) in &mut panels {
        *background = if panel.index == active.index {
            BackgroundColor(Theme::PANEL_ACTIVE)
        } else {
            BackgroundColor(Theme::PANEL_IDLE)
        };
    }
}
