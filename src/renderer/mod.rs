//! Rendering module
//!
//! The session never draws. The host draws each frame through a `Renderer`
//! and hands the text boxes it got back to the next tick, where they become
//! spawn exclusion zones.

use glam::Vec2;

use crate::error::PlatformError;
use crate::sim::{CollectibleKind, HudBoxes, Rect, Screen, Session};
use crate::ui::{EndScreenLayout, HudLayout, MENU_FONT_SIZE, TextItem, TextStyle};

/// Sprite assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Player,
    Apple,
    GoldApple,
}

impl SpriteId {
    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteId::Player => "droid.png",
            SpriteId::Apple => "purple_apple.png",
            SpriteId::GoldApple => "gold_apple.png",
        }
    }
}

/// Drawing capability
pub trait Renderer {
    /// Draw a sprite centred at `pos`
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2) -> Result<(), PlatformError>;

    /// Draw text centred at `pos` and return its on-screen box
    fn draw_text(&mut self, content: &str, style: TextStyle, pos: Vec2)
    -> Result<Rect, PlatformError>;
}

/// Renderer with no output. Text boxes use fixed glyph metrics.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub sprites_drawn: u64,
    pub texts_drawn: u64,
}

impl HeadlessRenderer {
    /// Average glyph advance as a fraction of the font size
    const GLYPH_ASPECT: f32 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_size(content: &str, style: TextStyle) -> Vec2 {
        let chars = content.chars().count() as f32;
        Vec2::new(chars * style.font_size * Self::GLYPH_ASPECT, style.font_size)
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2) -> Result<(), PlatformError> {
        self.sprites_drawn += 1;
        log::trace!("sprite {:?} at {}", sprite, pos);
        Ok(())
    }

    fn draw_text(
        &mut self,
        content: &str,
        style: TextStyle,
        pos: Vec2,
    ) -> Result<Rect, PlatformError> {
        self.texts_drawn += 1;
        log::trace!("text {:?} at {}", content, pos);
        Ok(Rect::from_size(pos, Self::text_size(content, style)))
    }
}

fn draw_item<R: Renderer + ?Sized>(
    renderer: &mut R,
    item: &TextItem,
) -> Result<Rect, PlatformError> {
    renderer.draw_text(&item.content, item.style, item.pos)
}

/// Draw one frame of the session and return the HUD text boxes.
///
/// Boxes are only produced while playing; menu screens have no HUD. The end
/// screen shows the finished round's score and the session best above its
/// menu.
pub fn draw_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    session: &Session,
    now: f64,
) -> Result<HudBoxes, PlatformError> {
    let bounds = session.bounds();

    if session.screen == Screen::Ended {
        let best = session.high_scores.top_score().unwrap_or(0);
        let end = EndScreenLayout::new(session.last_score, best, bounds);
        draw_item(renderer, &end.score)?;
        draw_item(renderer, &end.best)?;
    }

    if session.screen != Screen::Playing {
        let style = TextStyle {
            font_size: MENU_FONT_SIZE,
        };
        for (item, pos) in session.menu.button_positions(bounds) {
            renderer.draw_text(item.label(), style, pos)?;
        }
        return Ok(HudBoxes::default());
    }

    let hud = HudLayout::new(session.score, session.remaining(now), bounds);
    let score = draw_item(renderer, &hud.score)?;
    let timer = draw_item(renderer, &hud.timer)?;

    renderer.draw_sprite(SpriteId::Player, session.player.pos)?;
    for collectible in session.active_collectibles() {
        let sprite = match collectible.kind {
            CollectibleKind::Primary => SpriteId::Apple,
            CollectibleKind::Secondary => SpriteId::GoldApple,
        };
        renderer.draw_sprite(sprite, collectible.pos)?;
    }

    Ok(HudBoxes {
        score: Some(score),
        timer: Some(timer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::TickInput;

    #[test]
    fn test_text_box_centred() {
        let mut renderer = HeadlessRenderer::new();
        let style = TextStyle { font_size: 20.0 };
        let rect = renderer
            .draw_text("Score: 0", style, Vec2::new(400.0, 36.0))
            .expect("headless draw");
        assert_eq!(rect.size(), Vec2::new(80.0, 20.0));
        assert_eq!(rect.min(), Vec2::new(360.0, 26.0));
        assert_eq!(renderer.texts_drawn, 1);
    }

    #[test]
    fn test_menu_frame_has_no_hud() {
        let mut renderer = HeadlessRenderer::new();
        let session = Session::new(Settings::default(), 0.0).expect("valid settings");
        let hud = draw_frame(&mut renderer, &session, 0.0).expect("headless draw");
        assert!(hud.score.is_none() && hud.timer.is_none());
        // Start menu: Play, Controls, About, Quit
        assert_eq!(renderer.texts_drawn, 4);
        assert_eq!(renderer.sprites_drawn, 0);
    }

    #[test]
    fn test_playing_frame_feeds_tick() {
        let mut renderer = HeadlessRenderer::new();
        let mut session = Session::new(Settings::default(), 0.0).expect("valid settings");
        session
            .tick(&TickInput::confirm(), 0.0, &HudBoxes::default())
            .expect("start round");
        assert_eq!(session.screen, Screen::Playing);

        let hud = draw_frame(&mut renderer, &session, 0.1).expect("headless draw");
        let score = hud.score.expect("score box");
        assert!(score.center.y < hud.timer.expect("timer box").center.y);
        // Player and apple; the gold apple starts absent
        assert_eq!(renderer.sprites_drawn, 2);

        session
            .tick(&TickInput::default(), 0.1, &hud)
            .expect("tick with drawn hud");
    }

    /// Keeps every string it is asked to draw
    #[derive(Default)]
    struct TextRecorder {
        texts: Vec<String>,
    }

    impl Renderer for TextRecorder {
        fn draw_sprite(&mut self, _sprite: SpriteId, _pos: Vec2) -> Result<(), PlatformError> {
            Ok(())
        }

        fn draw_text(
            &mut self,
            content: &str,
            style: TextStyle,
            pos: Vec2,
        ) -> Result<Rect, PlatformError> {
            self.texts.push(content.to_string());
            Ok(Rect::from_size(pos, HeadlessRenderer::text_size(content, style)))
        }
    }

    #[test]
    fn test_end_screen_shows_last_and_best_score() {
        let mut session = Session::new(Settings::default(), 0.0).expect("valid settings");
        session
            .tick(&TickInput::confirm(), 0.0, &HudBoxes::default())
            .expect("start round");
        let hud = draw_frame(&mut TextRecorder::default(), &session, 0.0).expect("draw");

        session.score = 5;
        session
            .tick(&TickInput::default(), 10.2, &hud)
            .expect("round times out");
        assert_eq!(session.screen, Screen::Ended);
        assert_eq!(session.score, 0);

        let mut recorder = TextRecorder::default();
        draw_frame(&mut recorder, &session, 10.2).expect("draw");
        assert_eq!(
            recorder.texts,
            vec!["Score: 5", "Best: 5", "Restart", "Main Menu", "Quit"]
        );
    }
}
