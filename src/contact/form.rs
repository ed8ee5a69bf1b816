use bevy::prelude::*;

use crate::contact::validation::{FieldState, SubmitError, validate_field};

/// Editable fields of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    /// All fields in tab order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Subject,
        FieldKind::Message,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    /// Placeholder label shown while the field is empty.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Your name",
            FieldKind::Email => "Your email",
            FieldKind::Subject => "Subject (optional)",
            FieldKind::Message => "Your message",
        }
    }

    /// Whether a blank value is rejected.
    pub fn required(self) -> bool {
        self != FieldKind::Subject
    }

    /// Whether the value must look like an email address.
    pub fn is_email(self) -> bool {
        self == FieldKind::Email
    }

    /// Whether Enter inserts a newline instead of moving focus.
    pub fn multiline(self) -> bool {
        self == FieldKind::Message
    }

    /// Next field in tab order, wrapping around.
    pub fn next(self) -> FieldKind {
        FieldKind::ALL[(self.slot() + 1) % FieldKind::ALL.len()]
    }
}

/// Simulated submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SubmissionPhase {
    /// Ready to submit.
    #[default]
    Idle,
    /// Pretending to send; seconds left.
    Sending(f32),
    /// Showing the success label; seconds left.
    Sent(f32),
}

/// Colour family of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast shown in the page corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Text shown to the visitor.
    pub message: String,
    /// Colour family.
    pub kind: NotificationKind,
    /// Seconds until it disappears.
    pub remaining: f32,
}

/// Contact form values, validation state and submission flow.
#[derive(Resource, Debug, Default)]
pub struct ContactForm {
    values: [String; 4],
    states: [FieldState; 4],
    focused: Option<FieldKind>,
    phase: SubmissionPhase,
    notification: Option<Notification>,
}

impl ContactForm {
    /// Simulated network delay.
    const SENDING_SECS: f32 = 2.0;
    /// How long the success label stays before the button resets.
    const SENT_SECS: f32 = 3.0;
    /// How long a toast stays on screen.
    const NOTIFICATION_SECS: f32 = 3.0;
    /// Idle submit-button label.
    pub const SUBMIT_LABEL: &'static str = "Send Message";

    /// Current value of `field`.
    pub fn value(&self, field: FieldKind) -> &str {
        &self.values[field.slot()]
    }

    /// Current validation verdict of `field`.
    pub fn state(&self, field: FieldKind) -> FieldState {
        self.states[field.slot()]
    }

    /// Field receiving typed text, if any.
    pub fn focused(&self) -> Option<FieldKind> {
        self.focused
    }

    /// Submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Visible toast, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Focus `field`, validating the one that loses focus.
    pub fn focus(&mut self, field: FieldKind) {
        if self.focused == Some(field) {
            return;
        }
        self.blur();
        self.focused = Some(field);
    }

    /// Drop focus and validate the field that had it.
    pub fn blur(&mut self) {
        if let Some(field) = self.focused.take() {
            self.validate(field);
        }
    }

    /// Move focus to the next field in tab order.
    pub fn focus_next(&mut self) {
        let next = self.focused.map_or(FieldKind::Name, FieldKind::next);
        self.focus(next);
    }

    /// Append typed text to the focused field and clear its verdict.
    pub fn insert(&mut self, text: &str) {
        let Some(field) = self.focused else {
            return;
        };
        let text: String = if field.multiline() {
            text.to_owned()
        } else {
            text.chars().filter(|c| *c != '\n').collect()
        };
        self.values[field.slot()].push_str(&text);
        self.states[field.slot()] = FieldState::Neutral;
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let Some(field) = self.focused else {
            return;
        };
        self.values[field.slot()].pop();
        self.states[field.slot()] = FieldState::Neutral;
    }

    /// Validate one field and store its verdict.
    pub fn validate(&mut self, field: FieldKind) -> FieldState {
        let state = validate_field(self.value(field), field.required(), field.is_email());
        self.states[field.slot()] = state;
        state
    }

    /// Validate everything and start the simulated send.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(SubmitError::Busy);
        }
        self.blur();
        let count = FieldKind::ALL
            .into_iter()
            .filter(|field| matches!(self.validate(*field), FieldState::Invalid(_)))
            .count();
        if count > 0 {
            return Err(SubmitError::Invalid { count });
        }
        self.phase = SubmissionPhase::Sending(Self::SENDING_SECS);
        Ok(())
    }

    /// Show a toast for the standard duration.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            remaining: Self::NOTIFICATION_SECS,
        });
    }

    /// Advance timers by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(notification) = &mut self.notification {
            notification.remaining -= dt;
        }
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.remaining <= 0.0)
        {
            self.notification = None;
        }
        let phase = self.phase;
        self.phase = match phase {
            SubmissionPhase::Idle => SubmissionPhase::Idle,
            SubmissionPhase::Sending(remaining) if remaining - dt > 0.0 => {
                SubmissionPhase::Sending(remaining - dt)
            }
            SubmissionPhase::Sending(_) => {
                self.reset_fields();
                self.notify("Message sent successfully!", NotificationKind::Success);
                SubmissionPhase::Sent(Self::SENT_SECS)
            }
            SubmissionPhase::Sent(remaining) if remaining - dt > 0.0 => {
                SubmissionPhase::Sent(remaining - dt)
            }
            SubmissionPhase::Sent(_) => SubmissionPhase::Idle,
        };
    }

    /// Submit-button label for the current phase.
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Idle => Self::SUBMIT_LABEL,
            SubmissionPhase::Sending(_) => "Sending...",
            SubmissionPhase::Sent(_) => "Message Sent!",
        }
    }

    /// Whether the submit button accepts presses.
    pub fn submit_enabled(&self) -> bool {
        self.phase == SubmissionPhase::Idle
    }

    fn reset_fields(&mut self) {
        self.values = Default::default();
        self.states = Default::default();
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::FieldError;

    fn type_into(form: &mut ContactForm, field: FieldKind, text: &str) {
        form.focus(field);
        form.insert(text);
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        type_into(&mut form, FieldKind::Name, "Ada");
        type_into(&mut form, FieldKind::Email, "ada@example.com");
        type_into(&mut form, FieldKind::Message, "Hello\nthere");
        form.blur();
        form
    }

    /// Blur validates, typing clears the verdict again.
    #[test]
    fn blur_validates_and_input_clears() {
        let mut form = ContactForm::default();
        type_into(&mut form, FieldKind::Email, "ada");
        form.focus(FieldKind::Message);
        assert_eq!(
            form.state(FieldKind::Email),
            FieldState::Invalid(FieldError::InvalidEmail)
        );

        form.focus(FieldKind::Email);
        form.insert("@example.com");
        assert_eq!(form.state(FieldKind::Email), FieldState::Neutral);
        form.blur();
        assert_eq!(form.state(FieldKind::Email), FieldState::Valid);
    }

    #[test]
    fn submit_rejects_missing_required_fields() {
        let mut form = ContactForm::default();
        type_into(&mut form, FieldKind::Name, "Ada");
        assert_eq!(form.submit(), Err(SubmitError::Invalid { count: 2 }));
        assert_eq!(form.state(FieldKind::Subject), FieldState::Neutral);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    /// Sending for two seconds, success for three, then back to idle.
    #[test]
    fn simulated_submission_timeline() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert_eq!(form.button_label(), "Sending...");
        assert!(!form.submit_enabled());
        assert_eq!(form.submit(), Err(SubmitError::Busy));

        form.tick(1.5);
        assert!(matches!(form.phase(), SubmissionPhase::Sending(_)));
        form.tick(0.6);
        assert_eq!(form.button_label(), "Message Sent!");
        assert_eq!(form.value(FieldKind::Name), "");
        assert_eq!(
            form.notification().map(|n| n.message.as_str()),
            Some("Message sent successfully!")
        );

        form.tick(3.1);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.button_label(), ContactForm::SUBMIT_LABEL);
        assert!(form.notification().is_none());
    }

    #[test]
    fn single_line_fields_drop_newlines() {
        let mut form = ContactForm::default();
        type_into(&mut form, FieldKind::Name, "A\nda");
        type_into(&mut form, FieldKind::Message, "a\nb");
        assert_eq!(form.value(FieldKind::Name), "Ada");
        assert_eq!(form.value(FieldKind::Message), "a\nb");
        form.backspace();
        assert_eq!(form.value(FieldKind::Message), "a\n");
    }

    #[test]
    fn tab_order_wraps() {
        let mut form = ContactForm::default();
        form.focus_next();
        assert_eq!(form.focused(), Some(FieldKind::Name));
        form.focus(FieldKind::Message);
        form.focus_next();
        assert_eq!(form.focused(), Some(FieldKind::Name));
    }
}
