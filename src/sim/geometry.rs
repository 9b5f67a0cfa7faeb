//! Rectangle geometry for spawn exclusion
//!
//! Rects are center + half-extents in screen pixels (y down). Containment
//! uses half-open ranges `[min, max)` on each axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed screen size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Box of a sprite/text with the given full size centred at `center`
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size / 2.0)
    }

    pub fn from_edges(min: Vec2, max: Vec2) -> Self {
        Self::new((min + max) / 2.0, (max - min) / 2.0)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    /// Two-axis overlap with open intervals (touching edges do not overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}

/// Expand a rect symmetrically
pub fn inflate(rect: Rect, margin_x: f32, margin_y: f32) -> Rect {
    Rect::new(rect.center, rect.half + Vec2::new(margin_x, margin_y))
}

/// Pull any edge that leaves the screen back to `inset` from that boundary.
///
/// Without this a zone hugging an edge would extend to negative coordinates
/// and its range checks would match points that are nowhere near it.
pub fn clamp_to_screen(rect: Rect, bounds: ScreenBounds, inset: Vec2) -> Rect {
    let size = bounds.size();
    let mut min = rect.min();
    let mut max = rect.max();

    if min.x < 0.0 {
        min.x = inset.x;
    }
    if max.x > size.x {
        max.x = size.x - inset.x;
    }
    if min.y < 0.0 {
        min.y = inset.y;
    }
    if max.y > size.y {
        max.y = size.y - inset.y;
    }

    Rect::from_edges(min, max)
}

#[inline]
fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min && value < max
}

/// Loose containment: the point is inside the x-range OR inside the y-range.
///
/// This excludes whole horizontal and vertical bands through the rect, not
/// just the rect itself.
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    let (min, max) = (rect.min(), rect.max());
    in_range(point.x, min.x, max.x) || in_range(point.y, min.y, max.y)
}

/// Standard containment on both axes
pub fn point_in_rect_strict(point: Vec2, rect: &Rect) -> bool {
    let (min, max) = (rect.min(), rect.max());
    in_range(point.x, min.x, max.x) && in_range(point.y, min.y, max.y)
}

/// Which containment test spawn placement uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExclusionMode {
    /// Single-axis bands (matches the shipped game's placement)
    #[default]
    Loose,
    /// Two-axis rectangle test
    Strict,
}

/// What an exclusion zone protects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSource {
    ScoreText,
    TimerText,
    Player,
}

/// Screen area a collectible's center may not be placed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    pub rect: Rect,
    pub source: ZoneSource,
}

impl ExclusionZone {
    pub fn rejects(&self, point: Vec2, mode: ExclusionMode) -> bool {
        match mode {
            ExclusionMode::Loose => point_in_rect(point, &self.rect),
            ExclusionMode::Strict => point_in_rect_strict(point, &self.rect),
        }
    }
}

/// Half of an item footprint, truncated to whole pixels
#[inline]
pub fn item_half(footprint: Vec2) -> Vec2 {
    (footprint / 2.0).floor()
}

/// Zone around a HUD text box for an item of the given footprint
pub fn text_zone(
    text: Rect,
    source: ZoneSource,
    footprint: Vec2,
    text_margin: f32,
    edge_margin: f32,
    bounds: ScreenBounds,
) -> ExclusionZone {
    let grow = item_half(footprint) + Vec2::splat(text_margin);
    let rect = inflate(text, grow.x, grow.y);
    ExclusionZone {
        rect: clamp_to_screen(rect, bounds, Vec2::splat(edge_margin)),
        source,
    }
}

/// Zone around the player for an item of the given footprint
pub fn player_zone(
    player: Rect,
    footprint: Vec2,
    player_margin: f32,
    edge_margin: f32,
    bounds: ScreenBounds,
) -> ExclusionZone {
    let grow = item_half(footprint) + Vec2::splat(player_margin);
    let rect = inflate(player, grow.x, grow.y);
    ExclusionZone {
        rect: clamp_to_screen(rect, bounds, grow + Vec2::splat(edge_margin)),
        source: ZoneSource::Player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: ScreenBounds = ScreenBounds::new(800, 600);

    #[test]
    fn test_inflate() {
        let r = Rect::from_size(Vec2::new(100.0, 100.0), Vec2::new(20.0, 10.0));
        let grown = inflate(r, 4.0, 6.0);
        assert_eq!(grown.center, r.center);
        assert_eq!(grown.min(), Vec2::new(86.0, 89.0));
        assert_eq!(grown.max(), Vec2::new(114.0, 111.0));
    }

    #[test]
    fn test_clamp_to_screen_left_edge() {
        // Zone spills past the left and top edges
        let r = Rect::from_edges(Vec2::new(-50.0, -10.0), Vec2::new(100.0, 80.0));
        let clamped = clamp_to_screen(r, BOUNDS, Vec2::new(84.0, 4.0));
        assert_eq!(clamped.min(), Vec2::new(84.0, 4.0));
        assert_eq!(clamped.max(), Vec2::new(100.0, 80.0));
    }

    #[test]
    fn test_clamp_to_screen_right_edge() {
        let r = Rect::from_edges(Vec2::new(700.0, 500.0), Vec2::new(900.0, 650.0));
        let clamped = clamp_to_screen(r, BOUNDS, Vec2::new(10.0, 20.0));
        assert_eq!(clamped.max(), Vec2::new(790.0, 580.0));
        assert_eq!(clamped.min(), Vec2::new(700.0, 500.0));
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let r = Rect::from_edges(Vec2::new(10.0, 10.0), Vec2::new(50.0, 50.0));
        assert_eq!(clamp_to_screen(r, BOUNDS, Vec2::splat(4.0)), r);
    }

    #[test]
    fn test_point_in_rect_single_axis() {
        let r = Rect::from_edges(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
        // Inside x-range only
        assert!(point_in_rect(Vec2::new(150.0, 500.0), &r));
        // Inside y-range only
        assert!(point_in_rect(Vec2::new(700.0, 150.0), &r));
        // Outside both
        assert!(!point_in_rect(Vec2::new(700.0, 500.0), &r));
        // Max edge is exclusive
        assert!(!point_in_rect(Vec2::new(200.0, 200.0), &r));
        assert!(point_in_rect(Vec2::new(100.0, 700.0), &r));
    }

    #[test]
    fn test_point_in_rect_strict() {
        let r = Rect::from_edges(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
        assert!(point_in_rect_strict(Vec2::new(150.0, 150.0), &r));
        assert!(!point_in_rect_strict(Vec2::new(150.0, 500.0), &r));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::from_size(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0));
        assert!(a.overlaps(&a));
        let touching = Rect::from_size(Vec2::new(140.0, 100.0), Vec2::new(40.0, 40.0));
        assert!(!a.overlaps(&touching));
        let diagonal = Rect::from_size(Vec2::new(130.0, 130.0), Vec2::new(40.0, 40.0));
        assert!(a.overlaps(&diagonal));
        // Shares an x-range but not a y-range
        let below = Rect::from_size(Vec2::new(100.0, 300.0), Vec2::new(40.0, 40.0));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_player_zone_clamped_at_corner() {
        let player = Rect::from_size(Vec2::new(20.0, 20.0), Vec2::new(72.0, 84.0));
        let zone = player_zone(player, Vec2::new(40.0, 40.0), 60.0, 4.0, BOUNDS);
        // 20 half + 60 margin + 4 edge
        assert_eq!(zone.rect.min(), Vec2::new(84.0, 84.0));
        assert_eq!(zone.source, ZoneSource::Player);
    }

    #[test]
    fn test_text_zone_grows_by_item_half() {
        let text = Rect::from_size(Vec2::new(400.0, 100.0), Vec2::new(120.0, 40.0));
        let zone = text_zone(text, ZoneSource::ScoreText, Vec2::new(40.0, 40.0), 4.0, 4.0, BOUNDS);
        assert_eq!(zone.rect.min(), Vec2::new(316.0, 56.0));
        assert_eq!(zone.rect.max(), Vec2::new(484.0, 144.0));
    }

    proptest! {
        #[test]
        fn loose_rejects_everything_strict_rejects(
            px in 0.0f32..800.0, py in 0.0f32..600.0,
            cx in 0.0f32..800.0, cy in 0.0f32..600.0,
            hw in 1.0f32..200.0, hh in 1.0f32..200.0,
        ) {
            let zone = ExclusionZone {
                rect: Rect::new(Vec2::new(cx, cy), Vec2::new(hw, hh)),
                source: ZoneSource::Player,
            };
            let p = Vec2::new(px, py);
            if zone.rejects(p, ExclusionMode::Strict) {
                prop_assert!(zone.rejects(p, ExclusionMode::Loose));
            }
        }
    }
}
