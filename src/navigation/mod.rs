mod config;
mod input;
mod navigator;
mod observer;
mod scroll;
mod section;
mod systems;

pub use config::NavigationConfig;
pub use input::{
    NavigationRequest, WheelThrottle, key_navigation_system, nav_link_click_system,
    wheel_navigation_system,
};
pub use navigator::SectionNavigator;
pub use observer::{SectionRevealed, VisibilityObserver};
pub use scroll::{PageScroll, ScrollSettled};
pub use systems::{
    NavigationStarted, active_highlight_system, navigation_request_system, page_scroll_system,
    release_lock_system, section_visibility_system,
};
