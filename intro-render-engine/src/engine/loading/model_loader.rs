use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy::scene::SceneInstanceReady;
use constants::scene;

use super::progress::{AssetStream, AssetStreamReady};
use crate::engine::animation::playback::ClipPlayback;
use crate::engine::assets::scene_assets::{SceneState, SkeletalAnimation};

/// Root of the static model's scene instance.
#[derive(Component)]
pub struct StaticModel;

/// Root of the animated model's scene instance.
#[derive(Component)]
pub struct AnimatedModel;

/// Graph and clip to bind to the animated model's player once it exists.
#[derive(Component)]
pub struct AnimationToPlay {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
    pub clip: Handle<AnimationClip>,
}

pub fn spawn_static_model(commands: &mut Commands, model: Handle<Scene>) -> Entity {
    commands
        .spawn((
            StaticModel,
            Name::new("StaticModel"),
            SceneRoot(model),
            Transform::default(),
        ))
        .observe(on_static_model_ready)
        .id()
}

pub fn spawn_animated_model(
    commands: &mut Commands,
    graphs: &mut Assets<AnimationGraph>,
    model: Handle<Scene>,
    clip: Handle<AnimationClip>,
) -> Entity {
    let (graph, node) = AnimationGraph::from_clip(clip.clone());

    commands
        .spawn((
            AnimatedModel,
            Name::new("AnimatedModel"),
            SceneRoot(model),
            Transform::from_translation(scene::ANIMATED_MODEL_POSITION),
            AnimationToPlay {
                graph: graphs.add(graph),
                node,
                clip,
            },
        ))
        .observe(on_animated_model_ready)
        .id()
}

fn on_static_model_ready(
    _trigger: Trigger<SceneInstanceReady>,
    mut ready: EventWriter<AssetStreamReady>,
) {
    ready.write(AssetStreamReady(AssetStream::StaticModel));
}

fn on_animated_model_ready(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.run_system_cached_with(prepare_animated_model, trigger.target());
}

/// Tint every mesh, disable culling on the skinned meshes and bind the clip
/// to the scene's animation player, paused at time zero.
pub fn prepare_animated_model(
    In(root): In<Entity>,
    mut commands: Commands,
    children: Query<&Children>,
    to_play: Query<&AnimationToPlay>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut players: Query<&mut AnimationPlayer>,
    mut scene_state: ResMut<SceneState>,
    mut ready: EventWriter<AssetStreamReady>,
) {
    let [r, g, b] = scene::ANIMATED_MODEL_TINT;
    let tint = Color::srgb_u8(r, g, b);

    for descendant in children.iter_descendants(root) {
        let Ok(material) = mesh_materials.get(descendant) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = tint;
        }
        commands.entity(descendant).insert(NoFrustumCulling);
    }

    if let Ok(to_play) = to_play.get(root) {
        let player_entity = children
            .iter_descendants(root)
            .find(|entity| players.contains(*entity));

        match player_entity.map(|entity| (entity, players.get_mut(entity))) {
            Some((entity, Ok(mut player))) => {
                player.play(to_play.node).pause();
                commands
                    .entity(entity)
                    .insert(AnimationGraphHandle(to_play.graph.clone()));
                scene_state.animation = Some(SkeletalAnimation {
                    player: entity,
                    node: to_play.node,
                    clip: to_play.clip.clone(),
                    playback: ClipPlayback::default(),
                });
            }
            _ => warn!("Animated model has no animation player; it will stay in its bind pose"),
        }
    }

    ready.write(AssetStreamReady(AssetStream::AnimatedModel));
}
