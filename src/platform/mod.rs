//! Platform abstraction layer
//!
//! Handles the host-side collaborators of the session:
//! - Time (monotonic clock)
//! - Input polling and menu debounce
//! - A scripted demo input for headless runs

use std::time::Instant;

use crate::error::PlatformError;
use crate::sim::{MenuNav, Screen, TickInput};

/// Monotonic time source in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Seconds since construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Enter or space
    pub confirm: bool,
    /// Window close
    pub quit: bool,
}

/// Polled once per frame
pub trait InputSource {
    fn poll(&mut self, now: f64, screen: Screen) -> Result<RawKeys, PlatformError>;
}

/// Turns held keys into at most one menu signal per `delay` seconds.
///
/// Priority is up, then down, then confirm. Direction keys are passed
/// through undebounced for movement.
#[derive(Debug, Clone, Copy)]
pub struct MenuDebouncer {
    delay: f64,
    last_accept: f64,
}

impl MenuDebouncer {
    pub fn new(delay: f64, now: f64) -> Self {
        Self {
            delay,
            last_accept: now,
        }
    }

    pub fn filter(&mut self, keys: RawKeys, now: f64) -> TickInput {
        let mut nav = None;
        if now - self.last_accept > self.delay {
            nav = if keys.up {
                Some(MenuNav::Up)
            } else if keys.down {
                Some(MenuNav::Down)
            } else if keys.confirm {
                Some(MenuNav::Confirm)
            } else {
                None
            };
            if nav.is_some() {
                self.last_accept = now;
            }
        }

        TickInput {
            up: keys.up,
            down: keys.down,
            left: keys.left,
            right: keys.right,
            nav,
            quit: keys.quit,
            idle_mode: false,
        }
    }
}

/// Headless stand-in for a keyboard: presses Play, lets the autopilot play
/// `rounds` rounds, then walks the end menu up to Quit.
///
/// Presses are spaced `PRESS_INTERVAL` apart so each one clears the menu
/// debounce.
#[derive(Debug, Clone)]
pub struct DemoInput {
    rounds: u32,
    rounds_started: u32,
    last_screen: Option<Screen>,
    last_press: f64,
    round_started_at: f64,
    quit_armed: bool,
}

impl DemoInput {
    const PRESS_INTERVAL: f64 = 0.25;
    /// Autopilot hands off after this long so bonuses cannot keep a round alive
    const AUTOPILOT_SECONDS: f64 = 30.0;

    pub fn new(rounds: u32, now: f64) -> Self {
        Self {
            rounds: rounds.max(1),
            rounds_started: 0,
            last_screen: None,
            last_press: now,
            round_started_at: now,
            quit_armed: false,
        }
    }

    /// Whether the host should run the autopilot this frame
    pub fn wants_autopilot(&self, screen: Screen, now: f64) -> bool {
        screen == Screen::Playing && now - self.round_started_at < Self::AUTOPILOT_SECONDS
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self, now: f64, screen: Screen) -> Result<RawKeys, PlatformError> {
        if self.last_screen != Some(screen) {
            if screen == Screen::Playing {
                self.rounds_started += 1;
                self.round_started_at = now;
            }
            self.last_screen = Some(screen);
            self.quit_armed = false;
        }
        if screen == Screen::Playing || now - self.last_press < Self::PRESS_INTERVAL {
            return Ok(RawKeys::default());
        }
        self.last_press = now;

        let confirm = RawKeys {
            confirm: true,
            ..Default::default()
        };
        let keys = match screen {
            Screen::Start | Screen::Ended if self.rounds_started < self.rounds => confirm,
            // Quit is the last item of both menus, one step up from the first
            Screen::Start | Screen::Ended if !self.quit_armed => {
                self.quit_armed = true;
                RawKeys {
                    up: true,
                    ..Default::default()
                }
            }
            _ => confirm,
        };
        Ok(keys)
    }
}
