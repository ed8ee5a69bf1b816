use std::time::Duration;

use bevy::animation::graph::{AnimationGraph, AnimationGraphHandle, AnimationNodeIndex};
use bevy::animation::{AnimationClip, AnimationPlayer};
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::scene::camera::PointerTarget;
use crate::{AVATAR_PATH, AVATAR_POLL_SECS};

/// Where the avatar asset is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStatus {
    /// Still waiting on the asset server.
    Pending,
    /// Scene spawned into the world.
    Spawned,
    /// Load failed; no further polling.
    Failed,
}

/// Polls the avatar glTF on a fixed interval until it loads or fails.
#[derive(Resource, Debug)]
pub struct AvatarLoader {
    handle: Handle<Gltf>,
    poll: Timer,
    status: AvatarStatus,
}

impl AvatarLoader {
    /// Start tracking `handle`, checking every `interval_secs`.
    pub fn new(handle: Handle<Gltf>, interval_secs: f32) -> Self {
        Self {
            handle,
            poll: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            status: AvatarStatus::Pending,
        }
    }

    /// Tick the poll timer; true when a pending load should be checked this frame.
    pub fn should_poll(&mut self, delta: Duration) -> bool {
        self.status == AvatarStatus::Pending && self.poll.tick(delta).just_finished()
    }

    /// Record the asset server's verdict; returns the new status.
    pub fn resolve(&mut self, loaded: bool, failed: bool) -> AvatarStatus {
        if self.status == AvatarStatus::Pending {
            if failed {
                self.status = AvatarStatus::Failed;
            } else if loaded {
                self.status = AvatarStatus::Spawned;
            }
        }
        self.status
    }
}

/// Graph node looping the avatar's first clip on every player its scene spawns.
#[derive(Resource, Debug)]
pub struct AvatarAnimation {
    graph: Handle<AnimationGraph>,
    node: AnimationNodeIndex,
}

/// Clip the avatar loops: the first one the model carries.
fn looping_clip(clips: &[Handle<AnimationClip>]) -> Option<Handle<AnimationClip>> {
    clips.first().cloned()
}

/// Damped yaw that turns the avatar toward the pointer.
#[derive(Component, Debug, Clone, Copy)]
pub struct AvatarTurntable {
    /// Current yaw in radians.
    pub yaw: f32,
}

impl AvatarTurntable {
    /// Radians of yaw per scene unit of pointer offset.
    const YAW_PER_UNIT: f32 = 0.01;
    /// Fraction of the remaining yaw covered per second.
    const DAMPING: f32 = 3.0;
    /// Uniform scale bringing a metre-sized model into scene units.
    pub const SCALE: f32 = 120.0;
    /// Resting position below the particle field centre.
    pub const POSITION: Vec3 = Vec3::new(0.0, -110.0, 0.0);

    /// Ease yaw toward the pointer over `dt` seconds.
    pub fn follow(&mut self, pointer: PointerTarget, dt: f32) -> Quat {
        let target = pointer.0.x * Self::YAW_PER_UNIT;
        let t = (Self::DAMPING * dt).clamp(0.0, 1.0);
        self.yaw += (target - self.yaw) * t;
        Quat::from_rotation_y(self.yaw)
    }
}

/// Begin loading the avatar.
pub fn start_avatar_load(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle: Handle<Gltf> = asset_server.load(AVATAR_PATH);
    commands.insert_resource(AvatarLoader::new(handle, AVATAR_POLL_SECS));
}

/// Check the avatar load state and spawn it once ready.
pub fn avatar_poll_system(
    mut commands: Commands,
    time: Res<Time>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut loader: ResMut<AvatarLoader>,
) {
    if !loader.should_poll(time.delta()) {
        return;
    }
    match asset_server.load_state(&loader.handle) {
        LoadState::Failed(err) => {
            loader.resolve(false, true);
            warn!("avatar failed to load from `{AVATAR_PATH}`: {err}");
        }
        LoadState::Loaded => {
            let Some(gltf) = gltfs.get(&loader.handle) else {
                return;
            };
            let Some(scene) = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned())
            else {
                loader.resolve(false, true);
                warn!("avatar `{AVATAR_PATH}` contains no scenes");
                return;
            };
            commands.spawn((
                SceneRoot(scene),
                Transform::from_translation(AvatarTurntable::POSITION)
                    .with_scale(Vec3::splat(AvatarTurntable::SCALE)),
                AvatarTurntable { yaw: 0.0 },
            ));
            loader.resolve(true, false);
            if let Some(clip) = looping_clip(&gltf.animations) {
                let (graph, node) = AnimationGraph::from_clip(clip);
                commands.insert_resource(AvatarAnimation {
                    graph: graphs.add(graph),
                    node,
                });
            }
            info!("avatar ready ({} animation clips)", gltf.animations.len());
        }
        _ => {}
    }
}

/// Loop the avatar clip on animation players as its scene spawns them.
pub fn avatar_animation_system(
    mut commands: Commands,
    animation: Option<Res<AvatarAnimation>>,
    mut players: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
) {
    let Some(animation) = animation else {
        return;
    };
    for (entity, mut player) in &mut players {
        player.play(animation.node).repeat();
        commands
            .entity(entity)
            .insert(AnimationGraphHandle(animation.graph.clone()));
        debug!("avatar animation started on {entity}");
    }
}

/// Turn the avatar toward the pointer.
pub fn avatar_turntable_system(
    time: Res<Time>,
    pointer: Res<PointerTarget>,
    mut avatars: Query<(&mut AvatarTurntable, &mut Transform)>,
) {
    for (mut turntable, mut transform) in &mut avatars {
        transform.rotation = turntable.follow(*pointer, time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Polls fire on the interval and stop once the load resolves.
    #[test]
    fn loader_polls_until_resolved() {
        let mut loader = AvatarLoader::new(Handle::default(), 0.1);
        assert!(!loader.should_poll(Duration::from_millis(50)));
        assert!(loader.should_poll(Duration::from_millis(60)));
        assert_eq!(loader.resolve(false, false), AvatarStatus::Pending);

        assert!(loader.should_poll(Duration::from_millis(100)));
        assert_eq!(loader.resolve(true, false), AvatarStatus::Spawned);
        assert!(!loader.should_poll(Duration::from_millis(100)));
    }

    #[test]
    fn failure_is_terminal() {
        let mut loader = AvatarLoader::new(Handle::default(), 0.1);
        assert_eq!(loader.resolve(false, true), AvatarStatus::Failed);
        assert_eq!(loader.resolve(true, false), AvatarStatus::Failed);
        assert_eq!(loader.status, AvatarStatus::Failed);
    }

    /// The first clip loops; a model without clips stays still.
    #[test]
    fn loops_first_clip_only() {
        let clip = Handle::<AnimationClip>::default();
        assert_eq!(looping_clip(&[clip.clone(), clip.clone()]), Some(clip));
        assert_eq!(looping_clip(&[]), None);
    }

    #[test]
    fn turntable_eases_toward_pointer() {
        let mut turntable = AvatarTurntable { yaw: 0.0 };
        turntable.follow(PointerTarget(Vec2::new(50.0, 0.0)), 0.1);
        assert!(turntable.yaw > 0.0 && turntable.yaw < 0.5);
        for _ in 0..100 {
            turntable.follow(PointerTarget(Vec2::new(50.0, 0.0)), 0.1);
        }
        assert!((turntable.yaw - 0.5).abs() < 1e-3);
    }
}
