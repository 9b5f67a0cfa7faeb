//! Collectibles (apple and gold apple)
//!
//! Both kinds share one struct. The gold apple carries a `SpawnTimer`
//! which gates its presence; a despawned gold apple keeps its position
//! and timer and is only hidden.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{
    ExclusionMode, ExclusionZone, Rect, ScreenBounds, ZoneSource, player_zone, text_zone,
};
use super::spawn::{SpawnRequest, plan_with_fallback};
use crate::consts::*;
use crate::error::SimError;
use crate::round_tenths;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Regular apple, always on screen during a round
    Primary,
    /// Gold apple, appears and disappears on a timer
    Secondary,
}

/// Outcome of a gold apple presence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnDecision {
    Spawn,
    Despawn,
    Stay,
}

/// Presence gate for the gold apple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub present: bool,
    pub last_spawn_check: f64,
}

impl SpawnTimer {
    pub fn new(now: f64) -> Self {
        Self {
            present: false,
            last_spawn_check: now,
        }
    }

    /// Elapsed time is compared in tenths, like the round clock
    pub fn is_due(&self, now: f64, interval: f64) -> bool {
        round_tenths(now - self.last_spawn_check) >= interval
    }

    /// Run one check at `now`.
    ///
    /// A present item always despawns. An absent one appears when `roll()`
    /// is below `chance`; `roll` is not called at all when present.
    pub fn check(&mut self, now: f64, chance: f64, roll: impl FnOnce() -> f64) -> SpawnDecision {
        self.last_spawn_check = now;
        if self.present {
            self.present = false;
            SpawnDecision::Despawn
        } else if roll() < chance {
            self.present = true;
            SpawnDecision::Spawn
        } else {
            SpawnDecision::Stay
        }
    }
}

/// Latest HUD text boxes and player box, refreshed every playing tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionInputs {
    pub score_text: Rect,
    pub timer_text: Rect,
    pub player: Rect,
}

/// Placement parameters shared by every respawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRules {
    pub bounds: ScreenBounds,
    pub edge_margin: f32,
    pub text_margin: f32,
    pub player_margin: f32,
    pub mode: ExclusionMode,
    pub retry_cap: u32,
}

impl PlacementRules {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bounds: ScreenBounds::new(settings.screen_width, settings.screen_height),
            edge_margin: settings.edge_margin,
            text_margin: settings.text_margin,
            player_margin: settings.player_margin,
            mode: settings.exclusion_mode,
            retry_cap: settings.spawn_retry_cap,
        }
    }
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Center position
    pub pos: Vec2,
    /// Full width/height
    pub footprint: Vec2,
    /// Fixed position used when forced home
    pub home: Vec2,
    /// Presence gate (gold apple only)
    pub timer: Option<SpawnTimer>,
    exclusion: Option<ExclusionInputs>,
}

impl Collectible {
    pub fn primary() -> Self {
        Self {
            kind: CollectibleKind::Primary,
            pos: APPLE_HOME,
            footprint: APPLE_SIZE,
            home: APPLE_HOME,
            timer: None,
            exclusion: None,
        }
    }

    pub fn secondary(now: f64) -> Self {
        Self {
            kind: CollectibleKind::Secondary,
            pos: GOLD_APPLE_HOME,
            footprint: GOLD_APPLE_SIZE,
            home: GOLD_APPLE_HOME,
            timer: Some(SpawnTimer::new(now)),
            exclusion: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_size(self.pos, self.footprint)
    }

    /// Items without a timer are always present
    pub fn is_present(&self) -> bool {
        self.timer.is_none_or(|t| t.present)
    }

    pub fn set_present(&mut self, present: bool) {
        if let Some(timer) = self.timer.as_mut() {
            timer.present = present;
        }
    }

    /// Store the boxes the next random respawn must avoid
    pub fn update_exclusion_inputs(&mut self, inputs: ExclusionInputs) {
        self.exclusion = Some(inputs);
    }

    pub fn exclusion_inputs(&self) -> Option<&ExclusionInputs> {
        self.exclusion.as_ref()
    }

    /// Zones for this item's footprint built from the stored inputs
    pub fn exclusion_zones(&self, rules: &PlacementRules) -> Result<Vec<ExclusionZone>, SimError> {
        let inputs = self.exclusion.ok_or_else(|| {
            SimError::Configuration(format!(
                "{:?} respawn requested before any HUD/player boxes were recorded",
                self.kind
            ))
        })?;

        let text = |rect, source| {
            text_zone(
                rect,
                source,
                self.footprint,
                rules.text_margin,
                rules.edge_margin,
                rules.bounds,
            )
        };
        Ok(vec![
            text(inputs.score_text, ZoneSource::ScoreText),
            text(inputs.timer_text, ZoneSource::TimerText),
            player_zone(
                inputs.player,
                self.footprint,
                rules.player_margin,
                rules.edge_margin,
                rules.bounds,
            ),
        ])
    }

    /// Move to a random valid position
    pub fn respawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        rules: &PlacementRules,
    ) -> Result<(), SimError> {
        let zones = self.exclusion_zones(rules)?;
        self.pos = plan_with_fallback(
            rng,
            &SpawnRequest {
                kind: self.kind,
                bounds: rules.bounds,
                footprint: self.footprint,
                edge_margin: rules.edge_margin,
                zones: &zones,
                mode: rules.mode,
                retry_cap: rules.retry_cap,
            },
        )?;
        Ok(())
    }

    pub fn respawn_home(&mut self) {
        self.pos = self.home;
    }

    /// Apple respawn: home when `to_default`, otherwise random
    pub fn respawn_primary<R: Rng>(
        &mut self,
        to_default: bool,
        rng: &mut R,
        rules: &PlacementRules,
    ) -> Result<(), SimError> {
        if to_default {
            self.respawn_home();
            Ok(())
        } else {
            self.respawn_random(rng, rules)
        }
    }

    /// Gold apple respawn: always random
    pub fn respawn_secondary<R: Rng>(
        &mut self,
        rng: &mut R,
        rules: &PlacementRules,
    ) -> Result<(), SimError> {
        self.respawn_random(rng, rules)
    }

    /// Run the presence check if its interval elapsed, repositioning on spawn.
    /// Returns `None` when no check was due.
    pub fn run_spawn_check<R: Rng>(
        &mut self,
        now: f64,
        interval: f64,
        chance: f64,
        rng: &mut R,
        rules: &PlacementRules,
    ) -> Result<Option<SpawnDecision>, SimError> {
        let Some(timer) = self.timer.as_mut() else {
            return Ok(None);
        };
        if !timer.is_due(now, interval) {
            return Ok(None);
        }

        let decision = timer.check(now, chance, || rng.random::<f64>());
        if decision == SpawnDecision::Spawn {
            self.respawn_secondary(rng, rules)?;
        }
        Ok(Some(decision))
    }
}
