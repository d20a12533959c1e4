use bevy::prelude::*;
use constants::{render_settings, scene, timeline};
use serde::{Deserialize, Serialize};

/// Paths of every file the scene reads, relative to the asset root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub static_model: String,
    pub animated_model: String,
    pub environment_map: String,
    pub background_texture: String,
    pub particle_texture: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            static_model: scene::STATIC_MODEL_PATH.to_string(),
            animated_model: scene::ANIMATED_MODEL_PATH.to_string(),
            environment_map: scene::ENVIRONMENT_MAP_PATH.to_string(),
            background_texture: scene::BACKGROUND_TEXTURE_PATH.to_string(),
            particle_texture: scene::PARTICLE_TEXTURE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineSettings {
    pub startup_deferral_frames: u32,
    pub overlay_fade_secs: f32,
    pub sequence_secs: f32,
    pub reveal_delay_secs: f32,
    pub reveal_element_id: String,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            startup_deferral_frames: timeline::STARTUP_DEFERRAL_FRAMES,
            overlay_fade_secs: timeline::OVERLAY_FADE_SECS,
            sequence_secs: timeline::SEQUENCE_SECS,
            reveal_delay_secs: timeline::REVEAL_DELAY_SECS,
            reveal_element_id: scene::REVEAL_ELEMENT_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub intensity: f32,
    pub face_size: u32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            intensity: render_settings::ENVIRONMENT_INTENSITY,
            face_size: render_settings::ENVIRONMENT_FACE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    pub spread: f32,
    pub size: f32,
    pub seed: u64,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: scene::PARTICLE_COUNT,
            spread: scene::PARTICLE_SPREAD,
            size: scene::PARTICLE_SIZE,
            seed: scene::PARTICLE_SEED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSettings {
    /// Location fragment that makes the debug panel visible, including the `#`.
    pub fragment: String,
    pub slider_min: f32,
    pub slider_max: f32,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            fragment: render_settings::DEBUG_FRAGMENT.to_string(),
            slider_min: render_settings::DEBUG_SLIDER_MIN,
            slider_max: render_settings::DEBUG_SLIDER_MAX,
        }
    }
}

/// Runtime configuration of the intro as a Bevy asset. Mirrors the JSON file;
/// any missing section or field falls back to the `constants` crate.
#[derive(Asset, Debug, Clone, Default, Serialize, Deserialize, TypePath, Resource, PartialEq)]
#[serde(default)]
pub struct IntroManifest {
    pub assets: AssetPaths,
    pub timeline: TimelineSettings,
    pub environment: EnvironmentSettings,
    pub particles: ParticleSettings,
    pub debug: DebugSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_compile_time_defaults() {
        let manifest: IntroManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest, IntroManifest::default());
        assert_eq!(manifest.assets.static_model, "models/axe.glb");
        assert_eq!(manifest.timeline.startup_deferral_frames, 2);
        assert_eq!(manifest.debug.fragment, "#debug");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let manifest: IntroManifest = serde_json::from_str(
            r#"{ "timeline": { "reveal_delay_secs": 4.5 }, "particles": { "count": 10 } }"#,
        )
        .unwrap();

        assert_eq!(manifest.timeline.reveal_delay_secs, 4.5);
        assert_eq!(manifest.timeline.sequence_secs, 7.0);
        assert_eq!(manifest.particles.count, 10);
        assert_eq!(manifest.particles.size, 0.5);
    }

    #[test]
    fn bundled_manifest_parses() {
        let raw = include_str!("../../../assets/intro_manifest.json");
        let manifest: IntroManifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.assets.animated_model, "models/animated-kratos.glb");
        assert_eq!(manifest.debug.slider_min, -50.0);
        assert_eq!(manifest.debug.slider_max, 50.0);
    }
}
