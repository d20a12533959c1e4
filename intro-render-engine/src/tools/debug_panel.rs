use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::engine::assets::intro_manifest::{DebugSettings, IntroManifest};
use crate::engine::assets::scene_assets::SceneState;
use crate::web::dom::location_fragment;

/// Model whose x position a slider is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderTarget {
    StaticModel,
    AnimatedModel,
}

impl SliderTarget {
    fn label(self) -> &'static str {
        match self {
            SliderTarget::StaticModel => "static x",
            SliderTarget::AnimatedModel => "animated x",
        }
    }

    fn entity(self, scene: &SceneState) -> Option<Entity> {
        match self {
            SliderTarget::StaticModel => scene.static_model,
            SliderTarget::AnimatedModel => scene.animated_model,
        }
    }
}

#[derive(Component)]
pub struct DebugPanelRoot;

/// Track of a slider; pressing or dragging on it sets the bound value.
#[derive(Component, Debug, Clone, Copy)]
pub struct DebugSlider {
    pub target: SliderTarget,
    pub min: f32,
    pub max: f32,
}

#[derive(Component)]
pub struct SliderFill(SliderTarget);

#[derive(Component)]
pub struct SliderValueText(SliderTarget);

pub fn panel_enabled(fragment: Option<&str>, settings: &DebugSettings) -> bool {
    fragment == Some(settings.fragment.as_str())
}

/// Map a node-centred cursor x in `[-0.5, 0.5]` to a slider value.
pub fn slider_value(normalized_x: f32, min: f32, max: f32) -> f32 {
    min + (normalized_x + 0.5).clamp(0.0, 1.0) * (max - min)
}

/// Fill fraction of the track for `value`.
pub fn slider_fraction(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

pub fn spawn_debug_panel(mut commands: Commands, manifest: Res<IntroManifest>) {
    let settings = &manifest.debug;
    if !panel_enabled(location_fragment().as_deref(), settings) {
        return;
    }
    info!("Debug panel enabled");

    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(260.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(8.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Debug"),
                TextFont { font_size: 18.0, ..default() },
                TextColor(Color::WHITE),
            ));

            for target in [SliderTarget::StaticModel, SliderTarget::AnimatedModel] {
                panel
                    .spawn(Node {
                        width: Val::Percent(100.0),
                        display: Display::Flex,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Text::new(target.label()),
                            TextFont { font_size: 14.0, ..default() },
                            TextColor(Color::srgb(0.8, 0.8, 0.8)),
                        ));
                        row.spawn((
                            SliderValueText(target),
                            Text::new("-"),
                            TextFont { font_size: 14.0, ..default() },
                            TextColor(Color::WHITE),
                        ));
                    });

                panel
                    .spawn((
                        DebugSlider {
                            target,
                            min: settings.slider_min,
                            max: settings.slider_max,
                        },
                        Button,
                        RelativeCursorPosition::default(),
                        BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(20.0),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|track| {
                        track.spawn((
                            SliderFill(target),
                            BackgroundColor(Color::srgb(0.30, 0.55, 0.85)),
                            Node {
                                width: Val::Percent(50.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                        ));
                    });
            }
        });
}

/// While a track is pressed, move the bound model to the value under the cursor.
pub fn drag_debug_sliders(
    sliders: Query<(&Interaction, &RelativeCursorPosition, &DebugSlider)>,
    scene: Res<SceneState>,
    mut transforms: Query<&mut Transform>,
) {
    for (interaction, cursor, slider) in &sliders {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(normalized) = cursor.normalized else {
            continue;
        };
        let Some(entity) = slider.target.entity(&scene) else {
            continue;
        };
        if let Ok(mut transform) = transforms.get_mut(entity) {
            transform.translation.x = slider_value(normalized.x, slider.min, slider.max);
        }
    }
}

/// Mirror the live model positions, including tweened ones, into the panel.
pub fn sync_debug_sliders(
    sliders: Query<&DebugSlider>,
    scene: Res<SceneState>,
    transforms: Query<&Transform>,
    mut fills: Query<(&SliderFill, &mut Node)>,
    mut labels: Query<(&SliderValueText, &mut Text)>,
) {
    for slider in &sliders {
        let Some(x) = slider
            .target
            .entity(&scene)
            .and_then(|entity| transforms.get(entity).ok())
            .map(|transform| transform.translation.x)
        else {
            continue;
        };

        for (fill, mut node) in &mut fills {
            if fill.0 == slider.target {
                node.width = Val::Percent(slider_fraction(x, slider.min, slider.max) * 100.0);
            }
        }
        for (label, mut text) in &mut labels {
            if label.0 == slider.target {
                text.0 = format!("{x:.2}");
            }
        }
    }
}

pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_debug_panel.run_if(resource_added::<IntroManifest>),
                (drag_debug_sliders, sync_debug_sliders).chain(),
            ),
        );
    }
}
