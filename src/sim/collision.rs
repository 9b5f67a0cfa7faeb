//! Player/collectible collision detection
//!
//! Pure detector: reports which active collectibles the player touches.
//! Score, timer and respawn effects are applied by the session.

use super::collectible::{Collectible, CollectibleKind};
use super::geometry::Rect;

/// The player touched a collectible this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub kind: CollectibleKind,
}

/// Check the player box against every present collectible.
///
/// Uses the two-axis overlap test, unlike spawn exclusion. Every hit is
/// reported, in the order the collectibles are given.
pub fn resolve<'a>(
    player_box: &Rect,
    collectibles: impl IntoIterator<Item = &'a Collectible>,
) -> Vec<CollisionEvent> {
    collectibles
        .into_iter()
        .filter(|c| c.is_present() && player_box.overlaps(&c.rect()))
        .map(|c| CollisionEvent { kind: c.kind })
        .collect()
}
