use bevy::prelude::*;

/// Quadratic ease-out, `1 - (1 - t)^2`, on progress clamped to `[0, 1]`.
pub fn power1_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Scene object a tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenTarget {
    Overlay,
    StaticModel,
    Camera,
}

/// Property of the target a tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenChannel {
    Opacity,
    Translation(Axis),
    /// One component of an intrinsic XYZ Euler rotation.
    Rotation(Axis),
}

impl TweenChannel {
    /// Write `value` into the transform. Opacity is not a transform property and is ignored.
    pub fn write(self, value: f32, transform: &mut Transform) {
        match self {
            TweenChannel::Opacity => {}
            TweenChannel::Translation(axis) => transform.translation[axis.index()] = value,
            TweenChannel::Rotation(axis) => {
                let (x, y, z) = transform.rotation.to_euler(EulerRot::XYZ);
                let mut angles = [x, y, z];
                angles[axis.index()] = value;
                transform.rotation =
                    Quat::from_euler(EulerRot::XYZ, angles[0], angles[1], angles[2]);
            }
        }
    }
}

/// Time-bounded interpolation of one scalar property, eased out. Sampled
/// against an external clock, so it never accumulates frame timing error.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: TweenTarget,
    pub channel: TweenChannel,
    pub from: f32,
    pub to: f32,
    pub start_secs: f32,
    pub duration_secs: f32,
}

impl Tween {
    pub fn new(
        target: TweenTarget,
        channel: TweenChannel,
        from: f32,
        to: f32,
        duration_secs: f32,
    ) -> Self {
        Self {
            target,
            channel,
            from,
            to,
            start_secs: 0.0,
            duration_secs,
        }
    }

    pub fn starting_at(mut self, start_secs: f32) -> Self {
        self.start_secs = start_secs;
        self
    }

    /// Normalised progress in `[0, 1]`. Zero-length tweens are complete immediately.
    pub fn progress(&self, now_secs: f32) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        ((now_secs - self.start_secs) / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_secs: f32) -> f32 {
        let progress = self.progress(now_secs);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * power1_out(progress)
    }

    pub fn is_finished(&self, now_secs: f32) -> bool {
        self.progress(now_secs) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn opacity_fade() -> Tween {
        Tween::new(TweenTarget::Overlay, TweenChannel::Opacity, 1.0, 0.0, 3.0).starting_at(10.0)
    }

    #[test]
    fn power1_out_matches_quadratic_ease() {
        assert_eq!(power1_out(0.0), 0.0);
        assert!((power1_out(0.5) - 0.75).abs() < EPSILON);
        assert_eq!(power1_out(1.0), 1.0);
        assert_eq!(power1_out(3.0), 1.0);
    }

    #[test]
    fn sample_holds_start_value_before_start() {
        let tween = opacity_fade();
        assert_eq!(tween.sample(0.0), 1.0);
        assert_eq!(tween.sample(10.0), 1.0);
    }

    #[test]
    fn sample_reaches_exact_target_at_end() {
        let tween = opacity_fade();
        assert_eq!(tween.sample(13.0), 0.0);
        assert_eq!(tween.sample(100.0), 0.0);
        assert!(tween.is_finished(13.0));
        assert!(!tween.is_finished(12.9));
    }

    #[test]
    fn sample_is_monotonic_for_a_decreasing_tween() {
        let tween = opacity_fade();
        let mut previous = tween.sample(10.0);
        for step in 1..=30 {
            let value = tween.sample(10.0 + step as f32 * 0.1);
            assert!(value <= previous + EPSILON);
            previous = value;
        }
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::new(TweenTarget::StaticModel, TweenChannel::Translation(Axis::Y), 5.0, 5.0, 0.0);
        assert!(tween.is_finished(0.0));
        assert_eq!(tween.sample(0.0), 5.0);
    }

    #[test]
    fn midpoint_is_three_quarters_along() {
        let tween = Tween::new(TweenTarget::StaticModel, TweenChannel::Translation(Axis::X), 35.0, -35.0, 7.0);
        assert!((tween.sample(3.5) - -17.5).abs() < EPSILON);
    }

    #[test]
    fn translation_channel_writes_single_axis() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        TweenChannel::Translation(Axis::Y).write(9.0, &mut transform);
        assert_eq!(transform.translation, Vec3::new(1.0, 9.0, 3.0));
    }

    #[test]
    fn rotation_channels_compose_into_xyz_euler() {
        let mut transform = Transform::default();
        TweenChannel::Rotation(Axis::X).write(-0.32, &mut transform);
        TweenChannel::Rotation(Axis::Y).write(-0.91, &mut transform);
        TweenChannel::Rotation(Axis::Z).write(-0.25, &mut transform);

        let expected = Quat::from_euler(EulerRot::XYZ, -0.32, -0.91, -0.25);
        assert!(transform.rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn opacity_channel_leaves_transform_untouched() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        TweenChannel::Opacity.write(0.5, &mut transform);
        assert_eq!(transform, Transform::from_xyz(1.0, 2.0, 3.0));
    }
}
