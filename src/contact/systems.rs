use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::contact::form::{ContactForm, FieldKind, NotificationKind, SubmissionPhase};
use crate::contact::validation::FieldState;
use crate::contact::widgets::{
    FormFieldBox, FormFieldHint, FormFieldText, NotificationText, NotificationToast, SubmitButton,
    SubmitLabel,
};
use crate::navigation::NavigationStarted;
use crate::ui::Theme;

/// Caret appended to the focused field.
const CARET: char = '|';

/// Section whose panel holds the form.
const CONTACT_SECTION: &str = "contact";

/// Drop focus on a click outside the field boxes or a navigation away from the form.
pub fn form_blur_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut navigations: MessageReader<NavigationStarted>,
    boxes: Query<&Interaction, With<FormFieldBox>>,
    mut form: ResMut<ContactForm>,
) {
    let mut left_form = false;
    for navigation in navigations.read() {
        left_form |= navigation.id != CONTACT_SECTION;
    }
    let Some(field) = form.focused() else {
        return;
    };
    let clicked_outside = mouse.get_just_pressed().next().is_some()
        && !boxes
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);
    if left_form || clicked_outside {
        form.blur();
        debug!("contact field {field:?} lost focus");
    }
}

/// Focus a field when its box is pressed.
pub fn field_focus_system(
    mut form: ResMut<ContactForm>,
    boxes: Query<(&Interaction, &FormFieldBox), Changed<Interaction>>,
) {
    for (interaction, field_box) in &boxes {
        if *interaction == Interaction::Pressed {
            form.focus(field_box.field);
        }
    }
}

/// Route keyboard text into the focused field.
pub fn form_typing_system(
    mut keys: MessageReader<KeyboardInput>,
    mut form: ResMut<ContactForm>,
) {
    for event in keys.read() {
        if !event.state.is_pressed() {
            continue;
        }
        let Some(field) = form.focused() else {
            continue;
        };
        match &event.logical_key {
            Key::Backspace => form.backspace(),
            Key::Tab => form.focus_next(),
            Key::Escape => form.blur(),
            Key::Enter if field.multiline() => form.insert("\n"),
            Key::Enter => form.focus_next(),
            _ => {
                let Some(text) = &event.text else {
                    continue;
                };
                let printable: String = text.chars().filter(|c| !c.is_control()).collect();
                if !printable.is_empty() {
                    form.insert(&printable);
                }
            }
        }
    }
}

/// Validate and start sending when the submit button is pressed.
pub fn submit_button_system(
    mut form: ResMut<ContactForm>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<SubmitButton>)>,
) {
    for interaction in &buttons {
        if *interaction != Interaction::Pressed || !form.submit_enabled() {
            continue;
        }
        match form.submit() {
            Ok(()) => info!("contact form submitted"),
            Err(err) => {
                debug!("contact form rejected: {err}");
                form.notify(format!("Cannot send: {err}"), NotificationKind::Error);
            }
        }
    }
}

/// Advance the submission and toast timers.
pub fn form_timer_system(time: Res<Time>, mut form: ResMut<ContactForm>) {
    if form.phase() == SubmissionPhase::Idle && form.notification().is_none() {
        return;
    }
    form.tick(time.delta_secs());
}

/// Text shown inside a field box and whether it is a placeholder.
fn field_display(form: &ContactForm, field: FieldKind) -> (String, bool) {
    let value = form.value(field);
    if form.focused() == Some(field) {
        (format!("{value}{CARET}"), false)
    } else if value.is_empty() {
        (field.label().to_owned(), true)
    } else {
        (value.to_owned(), false)
    }
}

/// Border colour of a field box.
fn field_border(form: &ContactForm, field: FieldKind) -> Color {
    if form.focused() == Some(field) {
        return Theme::ACCENT;
    }
    match form.state(field) {
        FieldState::Neutral => Theme::NAV_IDLE,
        FieldState::Valid => Theme::SUCCESS,
        FieldState::Invalid(_) => Theme::ERROR,
    }
}

/// Mirror the form state into field boxes, hints and the submit button.
pub fn form_render_system(
    form: Res<ContactForm>,
    mut boxes: Query<(&FormFieldBox, &mut BorderColor)>,
    mut buttons: Query<&mut BackgroundColor, With<SubmitButton>>,
    mut texts: ParamSet<(
        Query<(&FormFieldText, &mut Text, &mut TextColor)>,
        Query<(&FormFieldHint, &mut Text)>,
        Query<&mut Text, With<SubmitLabel>>,
    )>,
) {
    for (field_box, mut border) in &mut boxes {
        *border = BorderColor::all(field_border(&form, field_box.field));
    }

    for (field_text, mut text, mut color) in &mut texts.p0() {
        let (display, placeholder) = field_display(&form, field_text.field);
        text.0 = display;
        color.0 = if placeholder { Theme::MUTED } else { Theme::TEXT };
    }

    for (hint, mut text) in &mut texts.p1() {
        text.0 = match form.state(hint.field) {
            FieldState::Invalid(err) => err.to_string(),
            FieldState::Neutral | FieldState::Valid => String::new(),
        };
    }

    for mut label in &mut texts.p2() {
        label.0 = form.button_label().to_owned();
    }
    let button_color = match form.phase() {
        SubmissionPhase::Idle => Theme::ACCENT,
        SubmissionPhase::Sending(_) => Theme::MUTED,
        SubmissionPhase::Sent(_) => Theme::SUCCESS,
    };
    for mut background in &mut buttons {
        background.0 = button_color;
    }
}

/// Show, recolour or hide the corner toast.
pub fn notification_render_system(
    form: Res<ContactForm>,
    mut toasts: Query<(&mut Visibility, &mut BackgroundColor), With<NotificationToast>>,
    mut captions: Query<&mut Text, With<NotificationText>>,
) {
    let Ok((mut visibility, mut background)) = toasts.single_mut() else {
        return;
    };
    let Some(notification) = form.notification() else {
        *visibility = Visibility::Hidden;
        return;
    };
    *visibility = Visibility::Inherited;
    background.0 = match notification.kind {
        NotificationKind::Success => Theme::SUCCESS,
        NotificationKind::Error => Theme::ERROR,
    };
    if let Ok(mut caption) = captions.single_mut() {
        caption.0.clone_from(&notification.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::FieldError;
    use crate::navigation::{NavigationRequest, SectionNavigator, navigation_request_system};

    fn form_app(form: ContactForm) -> App {
        let mut app = App::new();
        app.add_message::<NavigationStarted>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(form);
        app
    }

    fn focused_on_bad_email() -> ContactForm {
        let mut form = ContactForm::default();
        form.focus(FieldKind::Email);
        form.insert("nope");
        form
    }

    /// A click that lands on no field box blurs and validates the focused field.
    #[test]
    fn outside_click_blurs_focused_field() {
        let mut app = form_app(focused_on_bad_email());
        app.add_systems(Update, form_blur_system);
        app.world_mut().spawn((
            Interaction::None,
            FormFieldBox {
                field: FieldKind::Email,
            },
        ));
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let form = app.world().resource::<ContactForm>();
        assert_eq!(form.focused(), None);
        assert_eq!(
            form.state(FieldKind::Email),
            FieldState::Invalid(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn click_on_field_box_keeps_focus() {
        let mut app = form_app(focused_on_bad_email());
        app.add_systems(Update, form_blur_system);
        app.world_mut().spawn((
            Interaction::Pressed,
            FormFieldBox {
                field: FieldKind::Email,
            },
        ));
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert_eq!(
            app.world().resource::<ContactForm>().focused(),
            Some(FieldKind::Email)
        );
    }

    fn focus_after_navigating(sections: [&str; 2], target: &str) -> Option<FieldKind> {
        let mut app = form_app(focused_on_bad_email());
        app.add_message::<NavigationRequest>()
            .insert_resource(SectionNavigator::new(sections))
            .add_systems(
                Update,
                (navigation_request_system, form_blur_system).chain(),
            );
        app.world_mut()
            .write_message(NavigationRequest::To(target.to_owned()));
        app.update();
        app.world().resource::<ContactForm>().focused()
    }

    /// Navigating to another section drops focus; navigating to the form does not.
    #[test]
    fn navigating_away_blurs() {
        assert_eq!(focus_after_navigating(["contact", "home"], "home"), None);
        assert_eq!(
            focus_after_navigating(["home", "contact"], "contact"),
            Some(FieldKind::Email)
        );
    }

    /// Pressing submit while the success label shows keeps the success toast.
    #[test]
    fn press_during_sent_is_ignored() {
        let mut form = ContactForm::default();
        for (field, text) in [
            (FieldKind::Name, "Ada"),
            (FieldKind::Email, "ada@example.com"),
            (FieldKind::Message, "Hello"),
        ] {
            form.focus(field);
            form.insert(text);
        }
        assert_eq!(form.submit(), Ok(()));
        form.tick(2.1);
        assert!(matches!(form.phase(), SubmissionPhase::Sent(_)));

        let mut app = form_app(form);
        app.add_systems(Update, submit_button_system);
        app.world_mut().spawn((Interaction::Pressed, SubmitButton));
        app.update();

        let form = app.world().resource::<ContactForm>();
        let notification = form.notification().map(|n| (n.kind, n.message.as_str()));
        assert_eq!(
            notification,
            Some((NotificationKind::Success, "Message sent successfully!"))
        );
    }

    #[test]
    fn focused_field_shows_caret() {
        let mut form = ContactForm::default();
        form.focus(FieldKind::Name);
        form.insert("Ada");
        assert_eq!(
            field_display(&form, FieldKind::Name),
            ("Ada|".to_owned(), false)
        );
    }

    /// Empty unfocused fields fall back to the placeholder label.
    #[test]
    fn empty_field_shows_placeholder() {
        let form = ContactForm::default();
        assert_eq!(
            field_display(&form, FieldKind::Email),
            ("Your email".to_owned(), true)
        );
    }

    #[test]
    fn border_follows_verdict() {
        let mut form = ContactForm::default();
        assert_eq!(field_border(&form, FieldKind::Email), Theme::NAV_IDLE);
        form.focus(FieldKind::Email);
        assert_eq!(field_border(&form, FieldKind::Email), Theme::ACCENT);
        form.insert("not-an-email");
        form.blur();
        assert_eq!(field_border(&form, FieldKind::Email), Theme::ERROR);
    }
}
