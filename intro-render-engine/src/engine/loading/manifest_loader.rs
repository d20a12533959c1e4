use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::scene::MANIFEST_PATH;

use super::model_loader::spawn_animated_model;
use crate::engine::assets::intro_manifest::{AssetPaths, IntroManifest};
use crate::engine::assets::scene_assets::{IntroAssets, SceneState};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::background::spawn_background;
use crate::engine::scene::particles::{ParticleSpriteMaterial, spawn_particle_field};
use crate::engine::systems::reveal::RevealTimer;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<IntroManifest>>,
}

impl ManifestLoader {
    pub fn handle(&self) -> Option<&Handle<IntroManifest>> {
        self.handle.as_ref()
    }
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("→ Loading intro manifest from {}", MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Request every asset named by the manifest except the static model, which
/// waits for the environment map.
pub fn request_scene_assets(asset_server: &AssetServer, paths: &AssetPaths) -> IntroAssets {
    IntroAssets {
        environment_map: asset_server.load(&paths.environment_map),
        static_model: Handle::default(),
        animated_model: asset_server
            .load(GltfAssetLabel::Scene(0).from_asset(paths.animated_model.clone())),
        animated_clip: asset_server
            .load(GltfAssetLabel::Animation(0).from_asset(paths.animated_model.clone())),
        background_texture: asset_server.load(&paths.background_texture),
        particle_texture: asset_server.load(&paths.particle_texture),
    }
}

/// Apply the manifest once it is available and start the scene loads. A
/// manifest that fails to load is replaced by the compiled-in defaults.
pub fn load_manifest_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<IntroManifest>>,
    asset_server: Res<AssetServer>,
    mut assets: ResMut<IntroAssets>,
    mut scene_state: ResMut<SceneState>,
    mut reveal: ResMut<RevealTimer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut sprite_materials: ResMut<Assets<ParticleSpriteMaterial>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }
    let Some(handle) = manifest_loader.handle() else {
        return;
    };

    let manifest = match manifests.get(handle) {
        Some(manifest) => {
            info!("✓ Intro manifest loaded");
            manifest.clone()
        }
        None if matches!(asset_server.get_load_state(handle), Some(LoadState::Failed(_))) => {
            warn!("Intro manifest unavailable, using built-in settings");
            IntroManifest::default()
        }
        None => return,
    };
    loading_progress.manifest_loaded = true;

    reveal.reconfigure(
        manifest.timeline.reveal_delay_secs,
        &manifest.timeline.reveal_element_id,
    );

    *assets = request_scene_assets(&asset_server, &manifest.assets);

    spawn_background(
        &mut commands,
        &mut meshes,
        &mut materials,
        assets.background_texture.clone(),
    );
    spawn_particle_field(
        &mut commands,
        &mut meshes,
        &mut sprite_materials,
        assets.particle_texture.clone(),
        &manifest.particles,
    );
    scene_state.animated_model = Some(spawn_animated_model(
        &mut commands,
        &mut graphs,
        assets.animated_model.clone(),
        assets.animated_clip.clone(),
    ));

    commands.insert_resource(manifest);
}
