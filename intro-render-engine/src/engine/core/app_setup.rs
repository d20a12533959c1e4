use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::animation::director::IntroDirectorPlugin;
use crate::engine::assets::intro_manifest::IntroManifest;
use crate::engine::assets::scene_assets::{IntroAssets, SceneState};
use crate::engine::camera::parallax_camera::{
    ParallaxSettings, apply_camera_parallax, spawn_camera_rig,
};
use crate::engine::core::app_state::{FrameLoopSet, IntroState, configure_frame_loop};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::IntroLoadingPlugin;
use crate::engine::loading::manifest_loader::start_loading;
use crate::engine::scene::lighting::configure_lighting;
use crate::engine::scene::particles::ParticleSpriteMaterial;
use crate::engine::systems::{
    cursor::{CursorOffset, track_cursor},
    frame_clock::{FrameClock, advance_frame_clock},
    resize::{Viewport, handle_window_resize},
    reveal::{RevealTimer, reveal_pending, tick_reveal_timer},
};
// Crate tools modules
use crate::tools::debug_panel::DebugPanelPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<IntroState>()
        // Registers IntroManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<IntroManifest>::new(&["json"]))
        .add_plugins(MaterialPlugin::<ParticleSpriteMaterial>::default());

    configure_frame_loop(&mut app);

    app.init_resource::<FrameClock>()
        .init_resource::<CursorOffset>()
        .init_resource::<Viewport>()
        .init_resource::<ParallaxSettings>()
        .init_resource::<RevealTimer>()
        .init_resource::<SceneState>()
        .init_resource::<IntroAssets>();

    app.add_plugins((IntroLoadingPlugin, IntroDirectorPlugin, DebugPanelPlugin));

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                advance_frame_clock.in_set(FrameLoopSet::Clock),
                (track_cursor, handle_window_resize).in_set(FrameLoopSet::Input),
                apply_camera_parallax.in_set(FrameLoopSet::Parallax),
                // Wall clock, independent of the intro state.
                tick_reveal_timer.run_if(reveal_pending),
            ),
        );

    app
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("=== INTRO RENDER ENGINE ===");
    configure_lighting(&mut commands);
    spawn_camera_rig(&mut commands, &mut meshes, &mut materials);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
