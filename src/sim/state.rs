//! Session state and core simulation types
//!
//! One `Session` exists per process. It owns the round clock, score,
//! player and both collectibles; placement and collision code only borrow
//! from it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::collectible::{Collectible, CollectibleKind, PlacementRules};
use super::geometry::{Rect, ScreenBounds};
use crate::consts::*;
use crate::error::SimError;
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::ui::Menu;

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Main menu
    Start,
    /// Key reference, back to Start only
    Controls,
    /// Credits, back to Start only
    About,
    /// Round in progress
    Playing,
    /// Round over, restart or return to Start
    Ended,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ScreenChanged { from: Screen, to: Screen },
    RoundStarted,
    RoundEnded { score: u32 },
    Collected(CollectibleKind),
    SecondarySpawned,
    SecondaryDespawned,
    MenuMoved,
    QuitRequested,
}

/// HUD text boxes reported by the renderer this frame.
///
/// `None` means the text was never drawn; spawn placement refuses to run
/// without them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HudBoxes {
    pub score: Option<Rect>,
    pub timer: Option<Rect>,
}

/// The player's sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub footprint: Vec2,
    pub home: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_HOME,
            footprint: PLAYER_SIZE,
            home: PLAYER_HOME,
        }
    }
}

impl Player {
    /// Player at the center of `bounds`
    pub fn centered(bounds: ScreenBounds) -> Self {
        let home = bounds.size() / 2.0;
        Self {
            pos: home,
            home,
            ..Default::default()
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_size(self.pos, self.footprint)
    }

    pub fn respawn(&mut self) {
        self.pos = self.home;
    }

    /// Move one tick in the held directions, keeping the sprite on screen.
    ///
    /// Opposing keys resolve to down/right. Diagonal steps are scaled so the
    /// speed matches straight movement.
    pub fn step(
        &mut self,
        up: bool,
        down: bool,
        left: bool,
        right: bool,
        speed: f32,
        bounds: ScreenBounds,
    ) {
        let mut vel = Vec2::ZERO;
        if up {
            vel.y = -speed;
        }
        if down {
            vel.y = speed;
        }
        if left {
            vel.x = -speed;
        }
        if right {
            vel.x = speed;
        }
        if vel.x != 0.0 && vel.y != 0.0 {
            vel *= DIAGONAL_FACTOR;
        }

        let half = self.footprint / 2.0;
        self.pos = (self.pos + vel).clamp(half, (bounds.size() - half).max(half));
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    pub screen: Screen,
    pub menu: Menu,
    pub clock: RoundClock,
    /// Score of the running round
    pub score: u32,
    /// Score of the last finished round (end screen)
    pub last_score: u32,
    pub player: Player,
    pub primary: Collectible,
    pub secondary: Collectible,
    pub high_scores: HighScores,
    pub(crate) settings: Settings,
    pub(crate) rules: PlacementRules,
    pub(crate) rng: Pcg32,
    seed: u64,
    pub(crate) quit_requested: bool,
}

impl Session {
    /// Create the session on the start screen
    pub fn new(settings: Settings, now: f64) -> Result<Self, SimError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let rules = PlacementRules::from_settings(&settings);
        log::info!("Session seed {seed}");

        Ok(Self {
            screen: Screen::Start,
            menu: Menu::for_screen(Screen::Start),
            clock: RoundClock::new(settings.countdown_default),
            score: 0,
            last_score: 0,
            player: Player::centered(rules.bounds),
            primary: Collectible::primary(),
            secondary: Collectible::secondary(now),
            high_scores: HighScores::new(),
            settings,
            rules,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            quit_requested: false,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> ScreenBounds {
        self.rules.bounds
    }

    /// Seconds left in the round (0 outside a round)
    pub fn remaining(&self, now: f64) -> f64 {
        if self.screen == Screen::Playing {
            self.clock.remaining(now)
        } else {
            0.0
        }
    }

    /// Collectibles currently on screen, in collision order
    pub fn active_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        [&self.primary, &self.secondary]
            .into_iter()
            .filter(|c| c.is_present())
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub(crate) fn set_screen(&mut self, to: Screen, events: &mut Vec<GameEvent>) {
        let from = self.screen;
        if from == to {
            return;
        }
        log::info!("Screen {:?} -> {:?}", from, to);
        self.screen = to;
        self.menu = Menu::for_screen(to);
        events.push(GameEvent::ScreenChanged { from, to });
    }

    /// Enter a round from Start or Ended
    pub(crate) fn start_round(&mut self, now: f64, events: &mut Vec<GameEvent>) {
        self.clock.start(now, self.settings.countdown_default);
        self.score = 0;
        self.secondary.set_present(false);
        if let Some(timer) = self.secondary.timer.as_mut() {
            timer.last_spawn_check = now;
        }
        self.set_screen(Screen::Playing, events);
        events.push(GameEvent::RoundStarted);
        log::info!(
            "Round started with {:.1}s on the clock",
            self.settings.countdown_default
        );
    }

    /// Countdown reached zero
    pub(crate) fn end_round(
        &mut self,
        now: f64,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), SimError> {
        // Only fallible step; nothing is reset if it fails
        self.secondary.respawn_secondary(&mut self.rng, &self.rules)?;
        self.secondary.set_present(false);

        let score = self.score;
        let elapsed = self.clock.elapsed(now);
        if let Some(rank) = self.high_scores.add_score(score, elapsed) {
            log::info!("Score {score} ranked #{rank}");
        }

        self.last_score = score;
        self.score = 0;
        self.clock.reset_budget(self.settings.countdown_default);
        self.primary.respawn_home();
        self.player.respawn();

        events.push(GameEvent::RoundEnded { score });
        self.set_screen(Screen::Ended, events);
        log::info!("Round ended after {elapsed:.1}s with score {score}");
        Ok(())
    }

    /// Drop the running round and return to the start screen.
    ///
    /// Used when a collaborator fails mid-round and no position data can be
    /// trusted.
    pub fn abort_round(&mut self, reason: &str) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.screen != Screen::Playing {
            return events;
        }
        log::warn!("Aborting round: {reason}");
        self.score = 0;
        self.clock.reset_budget(self.settings.countdown_default);
        self.primary.respawn_home();
        self.secondary.set_present(false);
        self.player.respawn();
        self.set_screen(Screen::Start, &mut events);
        events
    }

    /// Off-round invariants: no gold apple, player parked at home
    pub(crate) fn park(&mut self) {
        self.secondary.set_present(false);
        self.player.respawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Settings {
        Settings {
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(seeded(), 0.0).expect("valid settings");
        assert_eq!(session.screen, Screen::Start);
        assert_eq!(session.score, 0);
        assert_eq!(session.seed(), 42);
        assert_eq!(session.player.pos, PLAYER_HOME);
        assert_eq!(session.active_collectibles().count(), 1);
    }

    #[test]
    fn test_failed_end_round_keeps_round_intact() {
        let mut session = Session::new(seeded(), 0.0).expect("valid settings");
        let mut events = Vec::new();
        session.start_round(0.0, &mut events);
        session.score = 5;
        session.clock.add_bonus(3.0);

        // No playing tick yet, so the gold apple has no exclusion inputs
        let result = session.end_round(13.0, &mut events);
        assert!(matches!(result, Err(SimError::Configuration(_))));
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.score, 5);
        assert_eq!(session.last_score, 0);
        assert_eq!(session.clock.budget(), 13.0);
        assert!(session.high_scores.is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            countdown_default: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(settings, 0.0),
            Err(SimError::Configuration(_))
        ));
    }

    #[test]
    fn test_player_step_diagonal() {
        let mut player = Player::default();
        let bounds = ScreenBounds::new(800, 600);
        player.step(false, true, false, true, 4.0, bounds);
        let moved = player.pos - PLAYER_HOME;
        assert!((moved.x - 4.0 * DIAGONAL_FACTOR).abs() < 1e-4);
        assert!((moved.y - 4.0 * DIAGONAL_FACTOR).abs() < 1e-4);
    }

    #[test]
    fn test_player_stays_on_screen() {
        let mut player = Player::default();
        let bounds = ScreenBounds::new(800, 600);
        for _ in 0..500 {
            player.step(true, false, true, false, 4.0, bounds);
        }
        assert_eq!(player.pos, PLAYER_SIZE / 2.0);
    }

    #[test]
    fn test_opposing_keys_resolve_down_right() {
        let mut player = Player::default();
        player.step(true, true, true, true, 4.0, ScreenBounds::new(800, 600));
        assert!(player.pos.x > PLAYER_HOME.x);
        assert!(player.pos.y > PLAYER_HOME.y);
    }
}
