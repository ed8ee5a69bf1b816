use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

mod contact;
mod navigation;
mod particles;
mod scene;
mod ui;

use contact::{
    ContactForm, field_focus_system, form_blur_system, form_render_system, form_timer_system, form_typing_system,
    notification_render_system, submit_button_system,
};
use navigation::{
    NavigationConfig, NavigationRequest, NavigationStarted, PageScroll, ScrollSettled,
    SectionNavigator, SectionRevealed, VisibilityObserver, WheelThrottle, active_highlight_system,
    key_navigation_system, nav_link_click_system, navigation_request_system, page_scroll_system,
    release_lock_system, section_visibility_system, wheel_navigation_system,
};
use particles::{FormationCascade, formation_cascade_system, spawn_particle_field};
use scene::{
    PointerTarget, animation_tick_system, avatar_animation_system, avatar_poll_system,
    avatar_turntable_system, focus_pause_system, pointer_tracking_system, setup_scene,
    start_avatar_load,
};
use ui::{
    LoadingScreen, SECTION_IDS, loading_screen_system, reveal_animation_system,
    reveal_trigger_system, skill_fill_system, skill_trigger_system, spawn_loading_overlay,
    spawn_page,
};

// Seconds a navigation holds the lock; also the smooth-scroll duration.
const NAVIGATION_LOCK_SECS: f32 = 0.8;
// Minimum seconds between two wheel-driven navigations.
const WHEEL_THROTTLE_SECS: f32 = 0.15;
// Visible fraction at which a section counts as in view.
const VISIBILITY_THRESHOLD: f32 = 0.3;
// Delay between consecutive particles moving into a formation.
const CASCADE_STEP_SECS: f32 = 0.1;
// Number of particles in the background field.
const PARTICLE_COUNT: usize = 15;
// Frame rate the per-frame animation constants were tuned at.
const REFERENCE_FRAME_RATE: f32 = 60.0;
// Camera distance from the origin along +Z.
const CAMERA_DISTANCE: f32 = 500.0;
// Fraction of the remaining distance the camera covers per reference frame.
const CAMERA_EASING: f32 = 0.05;
// Avatar model path under assets/.
const AVATAR_PATH: &str = "models/avatar.glb";
// Seconds between avatar load-state polls.
const AVATAR_POLL_SECS: f32 = 0.1;

/// Top-level app phase: the loading overlay runs first, then the page takes input.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

// App entry point and system registration.
fn main() {
    let navigation_config = NavigationConfig::default();
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Portfolio".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn".into(),
                    ..default()
                }),
        )
        .init_state::<AppState>()
        .add_message::<NavigationRequest>()
        .add_message::<NavigationStarted>()
        .add_message::<ScrollSettled>()
        .add_message::<SectionRevealed>()
        .insert_resource(SectionNavigator::new(SECTION_IDS))
        .insert_resource(VisibilityObserver::new(
            SECTION_IDS.len(),
            navigation_config.visibility_threshold,
        ))
        .insert_resource(navigation_config)
        .init_resource::<PageScroll>()
        .init_resource::<WheelThrottle>()
        .init_resource::<FormationCascade>()
        .init_resource::<PointerTarget>()
        .init_resource::<ContactForm>()
        .init_resource::<LoadingScreen>()
        .add_systems(
            Startup,
            (
                setup_scene,
                spawn_particle_field,
                spawn_page,
                spawn_loading_overlay,
                start_avatar_load,
            ),
        )
        .add_systems(
            Update,
            (
                (pointer_tracking_system, animation_tick_system).chain(),
                focus_pause_system,
                (
                    avatar_poll_system,
                    avatar_animation_system,
                    avatar_turntable_system,
                )
                    .chain(),
                loading_screen_system.run_if(in_state(AppState::Loading)),
            ),
        )
        .add_systems(
            Update,
            (
                (
                    wheel_navigation_system,
                    key_navigation_system,
                    nav_link_click_system,
                ),
                navigation_request_system,
                (page_scroll_system, formation_cascade_system),
                release_lock_system,
                section_visibility_system,
                (active_highlight_system, reveal_trigger_system, skill_trigger_system),
                (reveal_animation_system, skill_fill_system),
            )
                .chain()
                .run_if(in_state(AppState::Ready)),
        )
        .add_systems(
            Update,
            (
                form_blur_system,
                field_focus_system,
                form_typing_system,
                submit_button_system,
                form_timer_system,
                (form_render_system, notification_render_system)
                    .run_if(resource_changed::<ContactForm>),
            )
                .chain()
                .before(key_navigation_system)
                .run_if(in_state(AppState::Ready)),
        )
        .run();
}
