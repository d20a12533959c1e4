use bevy::prelude::*;
use constants::{scene, timeline};

use crate::web::dom::reveal_element;

/// One-shot wall-clock timer that reveals a page element. Independent of the
/// loading and animation state.
#[derive(Resource, Debug, Clone)]
pub struct RevealTimer {
    timer: Timer,
    element_id: String,
    revealed: bool,
}

impl Default for RevealTimer {
    fn default() -> Self {
        Self::new(timeline::REVEAL_DELAY_SECS, scene::REVEAL_ELEMENT_ID)
    }
}

impl RevealTimer {
    pub fn new(delay_secs: f32, element_id: impl Into<String>) -> Self {
        Self {
            timer: Timer::from_seconds(delay_secs, TimerMode::Once),
            element_id: element_id.into(),
            revealed: false,
        }
    }

    /// Change the delay and target without restarting the elapsed time.
    pub fn reconfigure(&mut self, delay_secs: f32, element_id: &str) {
        self.timer
            .set_duration(std::time::Duration::from_secs_f32(delay_secs.max(0.0)));
        self.element_id = element_id.to_string();
    }

    /// Advance the timer; returns `true` on the single tick that crosses the delay.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        if self.revealed {
            return false;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Run condition: the element has not been revealed yet.
pub fn reveal_pending(reveal: Res<RevealTimer>) -> bool {
    !reveal.is_revealed()
}

pub fn tick_reveal_timer(time: Res<Time<Real>>, mut reveal: ResMut<RevealTimer>) {
    if !reveal.tick(time.delta()) {
        return;
    }

    match reveal_element(reveal.element_id()) {
        Ok(()) => info!("✓ Revealed page element '{}'", reveal.element_id()),
        Err(err) => error!("Failed to reveal page element: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fires_once_after_delay() {
        let mut reveal = RevealTimer::new(12.0, "div1");
        assert!(!reveal.tick(Duration::from_secs(11)));
        assert!(reveal.tick(Duration::from_secs(1)));
        assert!(reveal.is_revealed());
        assert!(!reveal.tick(Duration::from_secs(30)));
    }

    #[test]
    fn reconfigure_keeps_elapsed_time() {
        let mut reveal = RevealTimer::new(12.0, "div1");
        reveal.tick(Duration::from_secs(5));
        reveal.reconfigure(6.0, "banner");
        assert!(reveal.tick(Duration::from_secs(1)));
        assert_eq!(reveal.element_id(), "banner");
    }

    #[test]
    fn default_matches_page_layout() {
        let reveal = RevealTimer::default();
        assert_eq!(reveal.element_id(), "div1");
        assert!(!reveal.is_revealed());
    }
}
