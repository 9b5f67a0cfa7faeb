//! Session simulation module
//!
//! All gameplay logic lives here. No rendering, input polling or audio:
//! those reach the session only as tick arguments and returned events.
//! - Wall-clock time is passed in by the caller
//! - Randomness comes from the session's seeded RNG

pub mod clock;
pub mod collectible;
pub mod collision;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::RoundClock;
pub use collectible::{
    Collectible, CollectibleKind, ExclusionInputs, PlacementRules, SpawnDecision, SpawnTimer,
};
pub use collision::{CollisionEvent, resolve};
pub use geometry::{
    ExclusionMode, ExclusionZone, Rect, ScreenBounds, ZoneSource, clamp_to_screen, inflate,
    point_in_rect, point_in_rect_strict,
};
pub use spawn::{SpawnRequest, plan, plan_with_fallback};
pub use state::{GameEvent, HudBoxes, Player, Screen, Session};
pub use tick::{MenuNav, TickInput};
