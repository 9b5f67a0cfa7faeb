//! AppleDroid - collect apples before the countdown runs out
//!
//! Core modules:
//! - `sim`: Session state machine, spawn placement, round clock, collisions
//! - `renderer`: Renderer capability and a headless implementation
//! - `platform`: Clock and input abstraction
//! - `settings`: Data-driven game balance
//! - `ui`: Menus and HUD layout

pub mod audio;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{AppError, PlatformError, SimError};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Target frame rate; one simulation tick per frame
    pub const FRAME_RATE: u32 = 60;
    pub const GAME_TITLE: &str = "AppleDroid v0.6";

    /// Countdown budget at round start (seconds)
    pub const COUNTDOWN_DEFAULT: f64 = 10.0;
    /// Time bonus for collecting the primary apple (seconds)
    pub const PRIMARY_TIME_BONUS: f64 = 1.0;
    /// Time bonus for the gold apple, double the primary bonus
    pub const SECONDARY_TIME_BONUS: f64 = 2.0;

    /// Probability that an absent gold apple appears at a check
    pub const SECONDARY_SPAWN_CHANCE: f64 = 0.60;
    /// Seconds between gold apple spawn/despawn checks
    pub const SECONDARY_CHECK_INTERVAL: f64 = 2.5;

    /// Minimum spawn distance from the screen edge and around HUD text
    pub const EDGE_MARGIN: f32 = 4.0;
    pub const TEXT_MARGIN: f32 = 4.0;
    /// Minimum spawn distance from the player
    pub const PLAYER_MARGIN: f32 = 60.0;
    /// Spawn attempts before giving up on a configuration
    pub const SPAWN_RETRY_CAP: u32 = 10_000;

    /// Player movement per tick on each axis (pixels)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// 1/sqrt(2), keeps diagonal speed equal to straight speed
    pub const DIAGONAL_FACTOR: f32 = 0.7071;
    /// Menu key repeat delay (seconds)
    pub const INPUT_DEBOUNCE: f64 = 0.1;

    /// Sprite footprints (full width/height after scaling)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(72.0, 84.0);
    pub const APPLE_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const GOLD_APPLE_SIZE: Vec2 = Vec2::new(40.0, 40.0);

    /// Home positions
    pub const PLAYER_HOME: Vec2 = Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0);
    pub const APPLE_HOME: Vec2 = Vec2::new(200.0, 200.0);
    pub const GOLD_APPLE_HOME: Vec2 = Vec2::new(700.0, 550.0);
}

/// Round to one decimal place (countdown display precision)
#[inline]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a percentage position (0-100 on each axis) to screen pixels
#[inline]
pub fn percent_to_screen(x_pct: f32, y_pct: f32, width: u32, height: u32) -> glam::Vec2 {
    glam::Vec2::new(width as f32 * x_pct / 100.0, height as f32 * y_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(9.93), 9.9);
        assert_eq!(round_tenths(10.03), 10.0);
        assert_eq!(round_tenths(-0.04), 0.0);
    }

    #[test]
    fn test_percent_to_screen() {
        let p = percent_to_screen(50.0, 6.0, 800, 600);
        assert_eq!(p, glam::Vec2::new(400.0, 36.0));
    }
}
