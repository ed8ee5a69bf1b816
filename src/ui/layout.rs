use bevy::prelude::*;

use crate::contact::{contact_form, notification_toast};
use crate::navigation::SectionNavigator;
use crate::ui::content::{SKILLS, nav_caption, section_lines, section_title};
use crate::ui::reveal::RevealItem;
use crate::ui::skills::SkillBar;
use crate::ui::theme::Theme;

/// Column of full-viewport section panels moved by the page scroll.
#[derive(Component)]
pub struct PageStrip;

/// Panel rendering one section.
#[derive(Component, Debug, Clone, Copy)]
pub struct SectionPanel {
    /// Section index.
    pub index: usize,
}

/// Side-nav button targeting a section.
#[derive(Component, Debug, Clone)]
pub struct NavLink {
    /// Section identifier.
    pub section: String,
}

/// Build the page strip, its section panels, the side nav and the toast.
pub fn spawn_page(mut commands: Commands, navigator: Res<SectionNavigator>) {
    let viewport = commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            overflow: Overflow::clip(),
            ..default()
        })
        .id();

    let strip = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            PageStrip,
        ))
        .id();
    commands.entity(viewport).add_child(strip);

    for section in navigator.sections() {
        let panel = spawn_section_panel(&mut commands, &section.id, section.index);
        commands.entity(strip).add_child(panel);
    }

    spawn_side_nav(&mut commands, &navigator);
    commands.spawn(notification_toast());
}

/// Spawn one section panel with its heading and section-specific body.
fn spawn_section_panel(commands: &mut Commands, id: &str, index: usize) -> Entity {
    let panel = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Vh(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                padding: UiRect::axes(Val::Percent(10.0), Val::Px(48.0)),
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Theme::PANEL_IDLE),
            SectionPanel { index },
        ))
        .id();

    let mut order = 0;
    let heading = commands
        .spawn(revealed_text(
            section_title(id).to_owned(),
            Theme::TITLE_SIZE,
            index,
            order,
        ))
        .id();
    commands.entity(panel).add_child(heading);

    for line in section_lines(id) {
        order += 1;
        let paragraph = commands
            .spawn(revealed_text(line.to_string(), Theme::BODY_SIZE, index, order))
            .id();
        commands.entity(panel).add_child(paragraph);
    }

    match id {
        "skills" => {
            for (name, level) in SKILLS {
                order += 1;
                let row = commands.spawn(skill_row(name, level, index, order)).id();
                commands.entity(panel).add_child(row);
            }
        }
        "contact" => {
            let form = commands.spawn(contact_form()).id();
            commands.entity(panel).add_child(form);
        }
        _ => {}
    }
    panel
}

/// Text line that starts hidden and fades in with its section.
fn revealed_text(text: String, size: f32, section: usize, order: usize) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Theme::TEXT.with_alpha(0.0)),
        Node {
            top: Val::Px(RevealItem::OFFSET_PX),
            ..default()
        },
        RevealItem::new(section, order),
    )
}

/// Skill caption above an empty progress track.
fn skill_row(name: &'static str, level: f32, section: usize, order: usize) -> impl Bundle {
    (
        Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            max_width: Val::Px(560.0),
            ..default()
        },
        children![
            revealed_text(
                format!("{name}  {level:.0}%"),
                Theme::BODY_SIZE,
                section,
                order
            ),
            (
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(8.0),
                    ..default()
                },
                BackgroundColor(Theme::SURFACE),
                children![(
                    Node {
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Theme::ACCENT),
                    SkillBar::new(section, level),
                )],
            )
        ],
    )
}

/// Spawn the fixed side navigation.
fn spawn_side_nav(commands: &mut Commands, navigator: &SectionNavigator) {
    let nav = commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(24.0),
            top: Val::Percent(30.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(10.0),
            ..default()
        })
        .id();
    for section in navigator.sections() {
        let link = commands
            .spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                    ..default()
                },
                BackgroundColor(Theme::NAV_IDLE),
                NavLink {
                    section: section.id.clone(),
                },
                children![(
                    Text::new(nav_caption(&section.id)),
                    TextFont {
                        font_size: Theme::BODY_SIZE,
                        ..default()
                    },
                    TextColor(Theme::TEXT),
                )],
            ))
            .id();
        commands.entity(nav).add_child(link);
    }
}
