//! Per-frame session update
//!
//! `Session::tick` is called once per rendered frame with the wall-clock
//! time and the HUD boxes the renderer just reported.

use glam::Vec2;

use super::collectible::{ExclusionInputs, SpawnDecision};
use super::collision::{self, CollisionEvent};
use super::state::{GameEvent, HudBoxes, Screen, Session};
use super::CollectibleKind;
use crate::error::SimError;
use crate::ui::MenuItem;

/// Debounced menu signal (at most one per debounce window)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNav {
    Up,
    Down,
    Confirm,
}

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held direction keys (continuous movement)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Menu navigation
    pub nav: Option<MenuNav>,
    /// Close the game from any screen
    pub quit: bool,
    /// Demo mode - steer toward the nearest collectible
    pub idle_mode: bool,
}

impl TickInput {
    pub fn confirm() -> Self {
        Self {
            nav: Some(MenuNav::Confirm),
            ..Default::default()
        }
    }
}

impl Session {
    /// Advance the session by one frame
    pub fn tick(
        &mut self,
        input: &TickInput,
        now: f64,
        hud: &HudBoxes,
    ) -> Result<Vec<GameEvent>, SimError> {
        let mut events = Vec::new();

        if input.quit {
            self.quit_requested = true;
            events.push(GameEvent::QuitRequested);
            return Ok(events);
        }

        match self.screen {
            Screen::Playing => {
                let input = if input.idle_mode {
                    self.autopilot(input)
                } else {
                    input.clone()
                };
                self.tick_playing(&input, now, hud, &mut events)?;
            }
            _ => self.tick_menu(input, now, &mut events),
        }

        if self.screen != Screen::Playing {
            self.park();
        }
        Ok(events)
    }

    fn tick_menu(&mut self, input: &TickInput, now: f64, events: &mut Vec<GameEvent>) {
        match input.nav {
            Some(MenuNav::Up) => {
                self.menu.move_up();
                events.push(GameEvent::MenuMoved);
            }
            Some(MenuNav::Down) => {
                self.menu.move_down();
                events.push(GameEvent::MenuMoved);
            }
            Some(MenuNav::Confirm) => {
                if let Some(item) = self.menu.selected() {
                    self.activate(item, now, events);
                }
            }
            None => {}
        }
    }

    fn activate(&mut self, item: MenuItem, now: f64, events: &mut Vec<GameEvent>) {
        match item {
            MenuItem::Play | MenuItem::Restart => self.start_round(now, events),
            MenuItem::Controls => self.set_screen(Screen::Controls, events),
            MenuItem::About => self.set_screen(Screen::About, events),
            MenuItem::MainMenu | MenuItem::Back => self.set_screen(Screen::Start, events),
            MenuItem::Quit => {
                self.quit_requested = true;
                events.push(GameEvent::QuitRequested);
            }
        }
    }

    fn tick_playing(
        &mut self,
        input: &TickInput,
        now: f64,
        hud: &HudBoxes,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), SimError> {
        let bounds = self.rules.bounds;
        self.player.step(
            input.up,
            input.down,
            input.left,
            input.right,
            self.settings.player_speed,
            bounds,
        );

        // 1. Clock
        let remaining = self.clock.remaining(now);
        log::trace!("t={now:.2} remaining={remaining:.1} score={}", self.score);

        // 2. Exclusion inputs
        let missing = |what: &str| {
            SimError::Configuration(format!("{what} text box requested before it was drawn"))
        };
        let inputs = ExclusionInputs {
            score_text: hud.score.ok_or_else(|| missing("score"))?,
            timer_text: hud.timer.ok_or_else(|| missing("timer"))?,
            player: self.player.rect(),
        };
        self.primary.update_exclusion_inputs(inputs);
        self.secondary.update_exclusion_inputs(inputs);

        // 3. Gold apple presence
        let decision = self.secondary.run_spawn_check(
            now,
            self.settings.secondary_check_interval,
            self.settings.secondary_spawn_chance,
            &mut self.rng,
            &self.rules,
        )?;
        match decision {
            Some(SpawnDecision::Spawn) => {
                log::debug!("Gold apple spawned at {}", self.secondary.pos);
                events.push(GameEvent::SecondarySpawned);
            }
            Some(SpawnDecision::Despawn) => {
                log::debug!("Gold apple despawned");
                events.push(GameEvent::SecondaryDespawned);
            }
            Some(SpawnDecision::Stay) | None => {}
        }

        // 4. Collisions
        let hits = collision::resolve(&self.player.rect(), [&self.primary, &self.secondary]);
        for hit in hits {
            self.apply_collision(hit)?;
            events.push(GameEvent::Collected(hit.kind));
        }

        // 5. Timeout
        if self.clock.is_expired(now) {
            self.end_round(now, events)?;
        }
        Ok(())
    }

    fn apply_collision(&mut self, hit: CollisionEvent) -> Result<(), SimError> {
        match hit.kind {
            CollectibleKind::Primary => {
                self.primary.respawn_primary(false, &mut self.rng, &self.rules)?;
                self.clock.add_bonus(self.settings.primary_bonus);
            }
            CollectibleKind::Secondary => {
                self.secondary.set_present(false);
                self.clock.add_bonus(self.settings.secondary_bonus);
            }
        }
        self.score += 1;
        log::debug!("Collected {:?}, score {}", hit.kind, self.score);
        Ok(())
    }

    /// Replace direction keys with a heading toward the nearest collectible
    fn autopilot(&self, input: &TickInput) -> TickInput {
        let mut input = input.clone();
        let target = self
            .active_collectibles()
            .map(|c| c.pos)
            .min_by(|a, b| {
                let da = a.distance_squared(self.player.pos);
                let db = b.distance_squared(self.player.pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(target) = target {
            let delta: Vec2 = target - self.player.pos;
            // Stop short of overshooting so the sprite doesn't jitter
            let deadzone = self.settings.player_speed;
            input.left = delta.x < -deadzone;
            input.right = delta.x > deadzone;
            input.up = delta.y < -deadzone;
            input.down = delta.y > deadzone;
        }
        input
    }
}
