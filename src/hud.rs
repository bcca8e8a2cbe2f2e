//! HUD sink
//!
//! Score/lives readout and the terminal screens (start, game over, win).

use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;

/// Overlay screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    GameOver,
    Win,
}

impl Screen {
    /// Overlay shown for a phase, if any
    pub fn for_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Start => Some(Screen::Start),
            GamePhase::GameOver => Some(Screen::GameOver),
            GamePhase::Win => Some(Screen::Win),
            GamePhase::Playing => None,
        }
    }
}

pub trait HudSink {
    /// Called after any change to score or lives
    fn update_stats(&mut self, score: u32, lives: u32);

    /// Show an overlay with the final score
    fn show_screen(&mut self, screen: Screen, final_score: u32);

    /// Hide every overlay
    fn hide_screens(&mut self);
}

/// Keeps what a real HUD would display
#[derive(Debug, Clone, Default)]
pub struct HudState {
    pub score: u32,
    pub lives: u32,
    /// Visible overlay and the score it shows
    pub screen: Option<(Screen, u32)>,
    /// Number of stat updates received
    pub updates: u32,
}

impl HudSink for HudState {
    fn update_stats(&mut self, score: u32, lives: u32) {
        self.score = score;
        self.lives = lives;
        self.updates += 1;
    }

    fn show_screen(&mut self, screen: Screen, final_score: u32) {
        log::debug!("Showing {:?} screen (score {})", screen, final_score);
        self.screen = Some((screen, final_score));
    }

    fn hide_screens(&mut self) {
        self.screen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_for_phase() {
        assert_eq!(Screen::for_phase(GamePhase::Start), Some(Screen::Start));
        assert_eq!(Screen::for_phase(GamePhase::Win), Some(Screen::Win));
        assert_eq!(Screen::for_phase(GamePhase::Playing), None);
    }

    #[test]
    fn test_hud_state_tracks_screens() {
        let mut hud = HudState::default();
        hud.show_screen(Screen::GameOver, 120);
        assert_eq!(hud.screen, Some((Screen::GameOver, 120)));
        hud.hide_screens();
        assert_eq!(hud.screen, None);
    }
}
