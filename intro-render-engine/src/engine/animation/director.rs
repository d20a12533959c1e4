use bevy::prelude::*;
use constants::timeline;

use super::playback::advance_skeletal_playback;
use super::tween::{Axis, Tween, TweenChannel, TweenTarget};
use crate::engine::assets::intro_manifest::{IntroManifest, TimelineSettings};
use crate::engine::assets::scene_assets::SceneState;
use crate::engine::camera::parallax_camera::IntroCamera;
use crate::engine::core::app_state::{FrameLoopSet, IntroState};
use crate::engine::scene::overlay::FadeOverlay;
use crate::engine::systems::frame_clock::FrameClock;

/// Frames left before the sequence may start. Counts frames, not time, so the
/// scene is guaranteed to have been drawn before the overlay starts fading.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupDeferral {
    remaining: u32,
}

impl StartupDeferral {
    pub fn new(frames: u32) -> Self {
        Self { remaining: frames }
    }

    /// Count one frame. Returns `true` once no frames remain.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

/// Tweens scheduled by the director, sampled every frame until all complete.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActiveTweens {
    tweens: Vec<Tween>,
}

impl ActiveTweens {
    pub fn new(tweens: Vec<Tween>) -> Self {
        Self { tweens }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tween> {
        self.tweens.iter()
    }

    pub fn all_finished(&self, now_secs: f32) -> bool {
        self.tweens.iter().all(|tween| tween.is_finished(now_secs))
    }
}

/// The scripted intro, every tween starting at `start_secs`.
pub fn intro_sequence(start_secs: f32, settings: &TimelineSettings) -> Vec<Tween> {
    let sequence = settings.sequence_secs;
    let mut tweens = vec![
        Tween::new(
            TweenTarget::Overlay,
            TweenChannel::Opacity,
            1.0,
            0.0,
            settings.overlay_fade_secs,
        ),
        Tween::new(
            TweenTarget::StaticModel,
            TweenChannel::Translation(Axis::X),
            timeline::STATIC_MODEL_START_X,
            timeline::STATIC_MODEL_END_X,
            sequence,
        ),
        Tween::new(
            TweenTarget::StaticModel,
            TweenChannel::Translation(Axis::Y),
            timeline::STATIC_MODEL_HEIGHT,
            timeline::STATIC_MODEL_HEIGHT,
            sequence,
        ),
        Tween::new(
            TweenTarget::StaticModel,
            TweenChannel::Rotation(Axis::Z),
            0.0,
            timeline::STATIC_MODEL_SPIN_RADIANS,
            sequence,
        ),
    ];

    let start_pose = (timeline::CAMERA_START_POSITION, timeline::CAMERA_START_ROTATION);
    let end_pose = (timeline::CAMERA_END_POSITION, timeline::CAMERA_END_ROTATION);
    for (index, axis) in [Axis::X, Axis::Y, Axis::Z].into_iter().enumerate() {
        tweens.push(Tween::new(
            TweenTarget::Camera,
            TweenChannel::Translation(axis),
            start_pose.0[index],
            end_pose.0[index],
            sequence,
        ));
        tweens.push(Tween::new(
            TweenTarget::Camera,
            TweenChannel::Rotation(axis),
            start_pose.1[index],
            end_pose.1[index],
            sequence,
        ));
    }

    tweens
        .into_iter()
        .map(|tween| tween.starting_at(start_secs))
        .collect()
}

pub fn begin_startup_deferral(mut commands: Commands, manifest: Option<Res<IntroManifest>>) {
    let frames = manifest.map_or(timeline::STARTUP_DEFERRAL_FRAMES, |manifest| {
        manifest.timeline.startup_deferral_frames
    });
    commands.insert_resource(StartupDeferral::new(frames));
}

/// Wait out the deferral, then schedule every tween and start skeletal playback.
pub fn launch_intro_sequence(
    mut commands: Commands,
    mut deferral: ResMut<StartupDeferral>,
    clock: Res<FrameClock>,
    manifest: Option<Res<IntroManifest>>,
    mut scene: ResMut<SceneState>,
    mut next_state: ResMut<NextState<IntroState>>,
) {
    if !deferral.tick() {
        return;
    }

    let settings = manifest
        .map(|manifest| manifest.timeline.clone())
        .unwrap_or_default();
    let tweens = intro_sequence(clock.elapsed(), &settings);
    info!(
        "→ Intro sequence started at {:.2}s with {} tweens",
        clock.elapsed(),
        tweens.len()
    );
    commands.insert_resource(ActiveTweens::new(tweens));

    if let Some(animation) = scene.animation.as_mut() {
        animation.playback.play();
    }

    next_state.set(IntroState::Animating);
}

/// Sample every active tween at the current frame time and write the results.
pub fn apply_tweens(
    clock: Res<FrameClock>,
    tweens: Res<ActiveTweens>,
    scene: Res<SceneState>,
    camera: Query<Entity, With<IntroCamera>>,
    overlays: Query<&MeshMaterial3d<StandardMaterial>, With<FadeOverlay>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut transforms: Query<&mut Transform>,
    mut next_state: ResMut<NextState<IntroState>>,
) {
    let now = clock.elapsed();
    let camera = camera.single().ok();

    for tween in tweens.iter() {
        let value = tween.sample(now);
        match tween.target {
            TweenTarget::Overlay => {
                for overlay in &overlays {
                    if let Some(material) = materials.get_mut(&overlay.0) {
                        material.base_color.set_alpha(value);
                    }
                }
            }
            TweenTarget::StaticModel => {
                write_transform(scene.static_model, tween.channel, value, &mut transforms)
            }
            TweenTarget::Camera => write_transform(camera, tween.channel, value, &mut transforms),
        }
    }

    if tweens.all_finished(now) {
        info!("✓ Intro sequence complete, holding final pose");
        next_state.set(IntroState::Idle);
    }
}

fn write_transform(
    entity: Option<Entity>,
    channel: TweenChannel,
    value: f32,
    transforms: &mut Query<&mut Transform>,
) {
    let Some(entity) = entity else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(entity) {
        channel.write(value, &mut transform);
    }
}

/// Startup deferral, tween sampling and skeletal playback, slotted into the frame loop.
pub struct IntroDirectorPlugin;

impl Plugin for IntroDirectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(IntroState::Starting), begin_startup_deferral)
            .add_systems(
                Update,
                (
                    launch_intro_sequence
                        .in_set(FrameLoopSet::Director)
                        .run_if(in_state(IntroState::Starting)),
                    apply_tweens
                        .in_set(FrameLoopSet::Tweens)
                        .run_if(in_state(IntroState::Animating)),
                    advance_skeletal_playback.in_set(FrameLoopSet::Playback),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::playback::ClipPlayback;
    use crate::engine::assets::scene_assets::SkeletalAnimation;
    use crate::engine::core::app_state::configure_frame_loop;
    use bevy::state::app::StatesPlugin;

    struct Harness {
        app: App,
        overlay_material: Handle<StandardMaterial>,
        static_model: Entity,
        camera: Entity,
    }

    impl Harness {
        fn new() -> Self {
            let mut app = App::new();
            app.add_plugins((MinimalPlugins, StatesPlugin))
                .init_state::<IntroState>()
                .init_resource::<FrameClock>()
                .init_resource::<SceneState>()
                .init_resource::<Assets<StandardMaterial>>()
                .init_resource::<Assets<AnimationClip>>()
                .add_plugins(IntroDirectorPlugin);
            configure_frame_loop(&mut app);

            let overlay_material = app
                .world_mut()
                .resource_mut::<Assets<StandardMaterial>>()
                .add(StandardMaterial {
                    base_color: Color::BLACK,
                    ..default()
                });
            app.world_mut()
                .spawn((FadeOverlay, MeshMaterial3d(overlay_material.clone())));
            let static_model = app.world_mut().spawn(Transform::default()).id();
            let camera = app
                .world_mut()
                .spawn((IntroCamera, Transform::from_xyz(0.0, 0.0, 70.0)))
                .id();
            app.world_mut().resource_mut::<SceneState>().static_model = Some(static_model);

            Self {
                app,
                overlay_material,
                static_model,
                camera,
            }
        }

        fn frame(&mut self, elapsed: f32) {
            self.app
                .world_mut()
                .resource_mut::<FrameClock>()
                .tick(elapsed);
            self.app.update();
        }

        fn state(&self) -> IntroState {
            *self.app.world().resource::<State<IntroState>>().get()
        }

        fn overlay_alpha(&self) -> f32 {
            self.app
                .world()
                .resource::<Assets<StandardMaterial>>()
                .get(&self.overlay_material)
                .unwrap()
                .base_color
                .alpha()
        }

        fn transform(&self, entity: Entity) -> Transform {
            *self.app.world().get::<Transform>(entity).unwrap()
        }

        /// Bind a paused player to a clip of `duration` seconds, as the model
        /// loader does once the animated scene is ready.
        fn bind_clip(&mut self, duration: f32) -> (Entity, AnimationNodeIndex) {
            let mut clip = AnimationClip::default();
            clip.set_duration(duration);
            let clip = self
                .app
                .world_mut()
                .resource_mut::<Assets<AnimationClip>>()
                .add(clip);
            let (_, node) = AnimationGraph::from_clip(clip.clone());

            let mut player = AnimationPlayer::default();
            player.play(node).pause();
            let player = self.app.world_mut().spawn(player).id();

            self.app.world_mut().resource_mut::<SceneState>().animation =
                Some(SkeletalAnimation {
                    player,
                    node,
                    clip,
                    playback: ClipPlayback::default(),
                });
            (player, node)
        }

        fn seek_time(&self, player: Entity, node: AnimationNodeIndex) -> f32 {
            self.app
                .world()
                .get::<AnimationPlayer>(player)
                .unwrap()
                .animation(node)
                .unwrap()
                .seek_time()
        }

        fn open_gate(&mut self) {
            self.app
                .world_mut()
                .resource_mut::<NextState<IntroState>>()
                .set(IntroState::Starting);
        }
    }

    #[test]
    fn deferral_counts_down_to_zero() {
        let mut deferral = StartupDeferral::new(2);
        assert!(!deferral.tick());
        assert_eq!(deferral, StartupDeferral::new(1));
        assert!(deferral.tick());
        assert!(deferral.tick());
    }

    #[test]
    fn zero_frame_deferral_starts_immediately() {
        assert!(StartupDeferral::new(0).tick());
    }

    #[test]
    fn sequence_covers_overlay_model_and_camera() {
        let tweens = intro_sequence(4.0, &TimelineSettings::default());
        assert_eq!(tweens.len(), 10);
        assert!(tweens.iter().all(|tween| tween.start_secs == 4.0));

        let fade = tweens
            .iter()
            .find(|tween| tween.target == TweenTarget::Overlay)
            .unwrap();
        assert_eq!((fade.from, fade.to, fade.duration_secs), (1.0, 0.0, 3.0));

        let camera_tweens = tweens
            .iter()
            .filter(|tween| tween.target == TweenTarget::Camera)
            .count();
        assert_eq!(camera_tweens, 6);
    }

    #[test]
    fn sequence_starts_two_frames_after_gate() {
        let mut harness = Harness::new();
        harness.frame(0.0);
        assert_eq!(harness.state(), IntroState::Loading);

        harness.open_gate();
        harness.frame(0.016);
        assert_eq!(harness.state(), IntroState::Starting);
        assert!(harness.app.world().get_resource::<ActiveTweens>().is_none());

        harness.frame(0.033);
        assert!(harness.app.world().get_resource::<ActiveTweens>().is_some());

        harness.frame(0.05);
        assert_eq!(harness.state(), IntroState::Animating);
        assert!((harness.overlay_alpha() - 1.0).abs() < 0.02);
    }

    #[test]
    fn overlay_fades_out_over_three_seconds() {
        let mut harness = Harness::new();
        harness.open_gate();
        harness.frame(0.0);
        harness.frame(0.0);
        harness.frame(0.0);
        assert_eq!(harness.state(), IntroState::Animating);
        assert_eq!(harness.overlay_alpha(), 1.0);

        harness.frame(1.5);
        let midway = harness.overlay_alpha();
        assert!(midway > 0.0 && midway < 1.0);

        harness.frame(3.0);
        assert!(harness.overlay_alpha().abs() < 1e-4);
    }

    #[test]
    fn final_pose_is_held_once_idle() {
        let mut harness = Harness::new();
        harness.open_gate();
        harness.frame(0.0);
        harness.frame(0.0);
        harness.frame(0.0);

        harness.frame(7.0);
        harness.frame(7.1);
        assert_eq!(harness.state(), IntroState::Idle);

        let model = harness.transform(harness.static_model);
        assert!((model.translation.x - timeline::STATIC_MODEL_END_X).abs() < 1e-4);
        assert!((model.translation.y - timeline::STATIC_MODEL_HEIGHT).abs() < 1e-4);

        let camera = harness.transform(harness.camera);
        assert!(camera.translation.distance(timeline::CAMERA_END_POSITION) < 1e-3);
        let expected = Quat::from_euler(EulerRot::XYZ, -0.2, -0.13, -0.02);
        assert!(camera.rotation.angle_between(expected) < 1e-3);

        harness.frame(20.0);
        assert_eq!(harness.state(), IntroState::Idle);
        assert_eq!(harness.transform(harness.camera), camera);
    }

    #[test]
    fn skeletal_clip_follows_frame_clock_and_clamps() {
        let mut harness = Harness::new();
        let (player, node) = harness.bind_clip(1.0);

        harness.open_gate();
        harness.frame(0.0);
        harness.frame(0.0);
        harness.frame(0.0);
        assert_eq!(harness.state(), IntroState::Animating);
        assert_eq!(harness.seek_time(player, node), 0.0);

        harness.frame(0.5);
        assert!((harness.seek_time(player, node) - 0.5).abs() < 1e-5);

        harness.frame(7.0);
        harness.frame(7.1);
        assert_eq!(harness.state(), IntroState::Idle);
        assert_eq!(harness.seek_time(player, node), 1.0);

        let scene = harness.app.world().resource::<SceneState>();
        assert!(scene.animation.as_ref().unwrap().playback.is_finished());
    }

    #[test]
    fn skeletal_clip_waits_for_the_sequence() {
        let mut harness = Harness::new();
        let (player, node) = harness.bind_clip(1.0);

        harness.frame(0.4);
        harness.frame(0.8);
        assert_eq!(harness.state(), IntroState::Loading);
        assert_eq!(harness.seek_time(player, node), 0.0);
    }
}
