use bevy::prelude::*;

use crate::contact::form::{ContactForm, FieldKind};
use crate::ui::Theme;

/// Clickable input box of one form field.
#[derive(Component, Debug, Clone, Copy)]
pub struct FormFieldBox {
    pub field: FieldKind,
}

/// Text inside a field box.
#[derive(Component, Debug, Clone, Copy)]
pub struct FormFieldText {
    pub field: FieldKind,
}

/// Validation hint under a field box.
#[derive(Component, Debug, Clone, Copy)]
pub struct FormFieldHint {
    pub field: FieldKind,
}

/// Submit button.
#[derive(Component)]
pub struct SubmitButton;

/// Submit button caption.
#[derive(Component)]
pub struct SubmitLabel;

/// Corner toast container.
#[derive(Component)]
pub struct NotificationToast;

/// Corner toast caption.
#[derive(Component)]
pub struct NotificationText;

/// Border width of input boxes.
const BORDER_PX: f32 = 2.0;

/// Contact form: one box per field plus the submit button.
pub fn contact_form() -> impl Bundle {
    (
        Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            max_width: Val::Px(560.0),
            ..default()
        },
        children![
            field_widget(FieldKind::Name),
            field_widget(FieldKind::Email),
            field_widget(FieldKind::Subject),
            field_widget(FieldKind::Message),
            submit_button(),
        ],
    )
}

fn field_widget(field: FieldKind) -> impl Bundle {
    let height = if field.multiline() { 120.0 } else { 40.0 };
    (
        Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
        children![
            (
                Button,
                Node {
                    width: Val::Percent(100.0),
                    min_height: Val::Px(height),
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                    border: UiRect::all(Val::Px(BORDER_PX)),
                    ..default()
                },
                BackgroundColor(Theme::SURFACE),
                BorderColor::all(Theme::NAV_IDLE),
                FormFieldBox { field },
                children![(
                    Text::new(field.label()),
                    TextFont {
                        font_size: Theme::BODY_SIZE,
                        ..default()
                    },
                    TextColor(Theme::MUTED),
                    FormFieldText { field },
                )],
            ),
            (
                Text::default(),
                TextFont {
                    font_size: Theme::BODY_SIZE * 0.75,
                    ..default()
                },
                TextColor(Theme::ERROR),
                FormFieldHint { field },
            ),
        ],
    )
}

fn submit_button() -> impl Bundle {
    (
        Button,
        Node {
            padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
            align_self: AlignSelf::FlexStart,
            ..default()
        },
        BackgroundColor(Theme::ACCENT),
        SubmitButton,
        children![(
            Text::new(ContactForm::SUBMIT_LABEL),
            TextFont {
                font_size: Theme::BODY_SIZE,
                ..default()
            },
            TextColor(Color::BLACK),
            SubmitLabel,
        )],
    )
}

/// Hidden toast anchored to the top-right corner.
pub fn notification_toast() -> impl Bundle {
    (
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            right: Val::Px(20.0),
            padding: UiRect::axes(Val::Px(20.0), Val::Px(12.0)),
            ..default()
        },
        BackgroundColor(Theme::SUCCESS),
        GlobalZIndex(50),
        Visibility::Hidden,
        NotificationToast,
        children![(
            Text::default(),
            TextFont {
                font_size: Theme::BODY_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            NotificationText,
        )],
    )
}
