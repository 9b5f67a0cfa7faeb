//! Random spawn placement
//!
//! Draws integer positions uniformly inside the screen (minus the item's
//! half-size and an edge margin) until one lands outside every exclusion
//! zone.

use glam::Vec2;
use rand::Rng;

use super::CollectibleKind;
use super::geometry::{ExclusionMode, ExclusionZone, ScreenBounds, ZoneSource, item_half};
use crate::error::SimError;

/// Everything a placement request needs besides the RNG
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest<'a> {
    pub kind: CollectibleKind,
    pub bounds: ScreenBounds,
    pub footprint: Vec2,
    pub edge_margin: f32,
    pub zones: &'a [ExclusionZone],
    pub mode: ExclusionMode,
    pub retry_cap: u32,
}

/// Inclusive integer range for the item's center on each axis
pub fn spawn_range(
    bounds: ScreenBounds,
    footprint: Vec2,
    edge_margin: f32,
) -> Result<(glam::IVec2, glam::IVec2), SimError> {
    let half = item_half(footprint);
    let min = (half + Vec2::splat(edge_margin)).as_ivec2();
    let max = ((bounds.size() - footprint / 2.0).floor() - Vec2::splat(edge_margin)).as_ivec2();

    if min.x > max.x || min.y > max.y {
        return Err(SimError::Configuration(format!(
            "footprint {}x{} with margin {} does not fit a {}x{} screen",
            footprint.x, footprint.y, edge_margin, bounds.width, bounds.height
        )));
    }
    Ok((min, max))
}

/// Find a random position outside every zone.
///
/// Gives up with `SpawnExhausted` after `retry_cap` draws.
pub fn plan<R: Rng>(rng: &mut R, req: &SpawnRequest<'_>) -> Result<Vec2, SimError> {
    let (min, max) = spawn_range(req.bounds, req.footprint, req.edge_margin)?;

    for _ in 0..req.retry_cap {
        let candidate = Vec2::new(
            rng.random_range(min.x..=max.x) as f32,
            rng.random_range(min.y..=max.y) as f32,
        );
        if !req.zones.iter().any(|z| z.rejects(candidate, req.mode)) {
            return Ok(candidate);
        }
    }

    Err(SimError::SpawnExhausted {
        kind: req.kind,
        attempts: req.retry_cap,
    })
}

/// `plan`, retrying once without the player zone if the first pass is
/// exhausted. The player zone is the least important one: an apple next to
/// the player is still playable, an apple under the HUD is not.
pub fn plan_with_fallback<R: Rng>(
    rng: &mut R,
    req: &SpawnRequest<'_>,
) -> Result<Vec2, SimError> {
    match plan(rng, req) {
        Err(SimError::SpawnExhausted { attempts, .. }) => {
            log::warn!(
                "{:?} spawn exhausted after {} attempts, retrying without player zone",
                req.kind,
                attempts
            );
            let text_zones: Vec<ExclusionZone> = req
                .zones
                .iter()
                .filter(|z| z.source != ZoneSource::Player)
                .copied()
                .collect();
            plan(
                rng,
                &SpawnRequest {
                    zones: &text_zones,
                    ..*req
                },
            )
        }
        other => other,
    }
}
