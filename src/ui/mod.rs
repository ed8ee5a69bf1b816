mod content;
mod layout;
mod loading;
mod reveal;
mod skills;
mod theme;

pub use content::SECTION_IDS;
pub use layout::{NavLink, PageStrip, SectionPanel, spawn_page};
pub use loading::{LoadingScreen, loading_screen_system, spawn_loading_overlay};
pub use reveal::{reveal_animation_system, reveal_trigger_system};
pub use skills::{skill_fill_system, skill_trigger_system};
pub use theme::Theme;
