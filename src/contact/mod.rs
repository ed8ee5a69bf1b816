mod form;
mod systems;
mod validation;
mod widgets;

pub use form::ContactForm;
pub use systems::{
    field_focus_system, form_blur_system, form_render_system, form_timer_system,
    form_typing_system, notification_render_system, submit_button_system,
};
pub use widgets::{contact_form, notification_toast};
