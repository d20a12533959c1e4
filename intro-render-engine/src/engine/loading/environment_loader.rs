use bevy::prelude::*;

use super::model_loader::spawn_static_model;
use crate::engine::assets::intro_manifest::IntroManifest;
use crate::engine::assets::scene_assets::{IntroAssets, SceneState};
use crate::engine::camera::parallax_camera::IntroCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::environment::equirect_to_cubemap;

/// Once the equirectangular map has loaded, project it to a cubemap, light
/// the camera with it and only then request the static model.
pub fn check_environment_loading(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    mut assets: ResMut<IntroAssets>,
    asset_server: Res<AssetServer>,
    manifest: Option<Res<IntroManifest>>,
    mut images: ResMut<Assets<Image>>,
    cameras: Query<Entity, With<IntroCamera>>,
    mut scene_state: ResMut<SceneState>,
) {
    if loading_progress.environment_loaded || !loading_progress.manifest_loaded {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };
    let Some(equirect) = images.get(&assets.environment_map) else {
        return;
    };

    loading_progress.environment_loaded = true;
    match equirect_to_cubemap(equirect, manifest.environment.face_size) {
        Ok(cubemap) => {
            let cubemap = images.add(cubemap);
            for camera in &cameras {
                commands.entity(camera).insert(EnvironmentMapLight {
                    diffuse_map: cubemap.clone(),
                    specular_map: cubemap.clone(),
                    intensity: manifest.environment.intensity,
                    ..default()
                });
            }
            info!("✓ Environment map converted to cubemap");
        }
        Err(err) => error!("Environment map unusable, continuing without it: {}", err),
    }

    assets.static_model = asset_server
        .load(GltfAssetLabel::Scene(0).from_asset(manifest.assets.static_model.clone()));
    scene_state.static_model = Some(spawn_static_model(
        &mut commands,
        assets.static_model.clone(),
    ));
}
