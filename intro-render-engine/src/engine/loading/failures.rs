use std::collections::HashSet;

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use super::manifest_loader::ManifestLoader;
use crate::engine::assets::scene_assets::IntroAssets;

/// Log every failed load once. Nothing is retried: a failed model leaves the
/// readiness gate closed.
pub fn report_failed_loads(
    asset_server: Res<AssetServer>,
    assets: Res<IntroAssets>,
    manifest_loader: Res<ManifestLoader>,
    mut reported: Local<HashSet<UntypedAssetId>>,
) {
    let manifest = manifest_loader
        .handle()
        .map(|handle| ("manifest", handle.id().untyped()));

    for (label, id) in assets.tracked().into_iter().chain(manifest) {
        if reported.contains(&id) {
            continue;
        }
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(id) {
            error!("Failed to load {}: {}", label, err);
            reported.insert(id);
        }
    }
}
