use bevy::prelude::*;

use crate::AppState;
use crate::ui::theme::Theme;

/// Full-screen overlay shown while the page "loads".
#[derive(Component)]
pub struct LoadingOverlay;

/// Hold-then-fade timeline of the loading overlay.
#[derive(Resource, Debug, Default)]
pub struct LoadingScreen {
    elapsed: f32,
}

impl LoadingScreen {
    /// Time the overlay stays fully opaque.
    const HOLD_SECS: f32 = 1.5;
    /// Time the overlay takes to fade out.
    const FADE_SECS: f32 = 0.5;
    /// Overlay colour at full opacity.
    const COLOR: Color = Color::srgb(0.02, 0.02, 0.05);

    /// Advance by `dt` seconds and return the overlay opacity.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        self.opacity()
    }

    /// Overlay opacity at the current time.
    pub fn opacity(&self) -> f32 {
        let fade = (self.elapsed - Self::HOLD_SECS) / Self::FADE_SECS;
        1.0 - fade.clamp(0.0, 1.0)
    }

    /// Whether the overlay finished fading.
    pub fn is_done(&self) -> bool {
        self.elapsed >= Self::HOLD_SECS + Self::FADE_SECS
    }
}

/// Spawn the loading overlay above everything else.
pub fn spawn_loading_overlay(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(LoadingScreen::COLOR),
        GlobalZIndex(100),
        LoadingOverlay,
        children![(
            Text::new("Loading..."),
            TextFont {
                font_size: Theme::BODY_SIZE,
                ..default()
            },
            TextColor(Theme::MUTED),
        )],
    ));
}

/// Fade the overlay, then remove it and enter the ready state.
pub fn loading_screen_system(
    mut commands: Commands,
    time: Res<Time>,
    mut screen: ResMut<LoadingScreen>,
    mut overlay: Query<(Entity, &mut BackgroundColor), With<LoadingOverlay>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let opacity = screen.advance(time.delta_secs());
    let Ok((entity, mut background)) = overlay.single_mut() else {
        return;
    };
    background.0.set_alpha(opacity);
    if screen.is_done() {
        commands.entity(entity).despawn();
        next_state.set(AppState::Ready);
        info!("portfolio ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_then_fades() {
        let mut screen = LoadingScreen::default();
        assert_eq!(screen.advance(1.0), 1.0);
        assert!((screen.advance(0.75) - 0.5).abs() < 1e-5);
        assert!(!screen.is_done());
        assert_eq!(screen.advance(0.25), 0.0);
        assert!(screen.is_done());
    }
}
