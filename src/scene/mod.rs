mod animation;
mod avatar;
mod camera;
mod clock;
mod setup;

pub use animation::{animation_tick_system, focus_pause_system};
pub use avatar::{avatar_animation_system, avatar_poll_system, avatar_turntable_system, start_avatar_load};
pub use camera::{PointerTarget, pointer_tracking_system};
pub use setup::setup_scene;
