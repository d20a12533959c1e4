use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneState;
use crate::engine::systems::frame_clock::FrameClock;

/// Playback clock of one animation clip, advanced by the frame loop. Plays
/// through once and holds the final pose.
///
/// The clip duration is only known once the clip asset has loaded; until then
/// time accumulates unclamped and is clamped on the next advance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipPlayback {
    time: f32,
    duration: Option<f32>,
    playing: bool,
    finished: bool,
}

impl ClipPlayback {
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = Some(duration.max(0.0));
    }

    pub fn duration(&self) -> Option<f32> {
        self.duration
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start from the current time. A finished clip stays finished.
    pub fn play(&mut self) {
        if !self.finished {
            self.playing = true;
        }
    }

    /// Advance by `delta` seconds and return the time to sample the clip at.
    pub fn advance(&mut self, delta: f32) -> f32 {
        if !self.playing {
            return self.time;
        }

        self.time += delta.max(0.0);

        let Some(duration) = self.duration else {
            return self.time;
        };

        if self.time >= duration {
            self.time = duration;
            self.playing = false;
            self.finished = true;
        }

        self.time
    }
}

/// Advance the skeletal animation by the frame delta and seek the engine's
/// player to the result. The player is kept paused so this is its only clock.
pub fn advance_skeletal_playback(
    clock: Res<FrameClock>,
    clips: Res<Assets<AnimationClip>>,
    mut scene: ResMut<SceneState>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let Some(animation) = scene.animation.as_mut() else {
        return;
    };

    if animation.playback.duration().is_none() {
        if let Some(clip) = clips.get(&animation.clip) {
            animation.playback.set_duration(clip.duration());
        }
    }

    let was_finished = animation.playback.is_finished();
    let seek_time = animation.playback.advance(clock.delta());
    if !was_finished && animation.playback.is_finished() {
        info!("✓ Skeletal animation finished, holding final pose");
    }

    let Ok(mut player) = players.get_mut(animation.player) else {
        return;
    };
    if let Some(active) = player.animation_mut(animation.node) {
        active.seek_to(seek_time);
    }
}
