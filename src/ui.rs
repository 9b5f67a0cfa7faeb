//! Menus and HUD layout
//!
//! Positions are percentages of the screen, converted with
//! `percent_to_screen` when drawn.

use glam::Vec2;

use crate::percent_to_screen;
use crate::sim::{Screen, ScreenBounds};

/// A selectable text button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Controls,
    About,
    Quit,
    Restart,
    MainMenu,
    Back,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Controls => "Controls",
            MenuItem::About => "About",
            MenuItem::Quit => "Quit",
            MenuItem::Restart => "Restart",
            MenuItem::MainMenu => "Main Menu",
            MenuItem::Back => "Back",
        }
    }
}

const START_ITEMS: &[MenuItem] = &[
    MenuItem::Play,
    MenuItem::Controls,
    MenuItem::About,
    MenuItem::Quit,
];
const END_ITEMS: &[MenuItem] = &[MenuItem::Restart, MenuItem::MainMenu, MenuItem::Quit];
const BACK_ITEMS: &[MenuItem] = &[MenuItem::Back];

/// Vertical position (percent) of the first button and the spacing between buttons
const START_MENU_TOP: f32 = 43.5;
const END_MENU_TOP: f32 = 39.0;
const BACK_MENU_TOP: f32 = 85.0;
const MENU_SPACING: f32 = 11.0;
pub const MENU_FONT_SIZE: f32 = 40.0;

/// Button list for one screen with a wrapping selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: &'static [MenuItem],
    selected: usize,
}

impl Menu {
    /// Menu shown on `screen`, first item selected. Empty while playing.
    pub fn for_screen(screen: Screen) -> Self {
        let items = match screen {
            Screen::Start => START_ITEMS,
            Screen::Controls | Screen::About => BACK_ITEMS,
            Screen::Ended => END_ITEMS,
            Screen::Playing => &[],
        };
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<MenuItem> {
        self.items.get(self.selected).copied()
    }

    /// Move selection up, wrapping from the first item to the last
    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Move selection down, wrapping from the last item to the first
    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    /// Screen position of each button's center
    pub fn button_positions(&self, bounds: ScreenBounds) -> Vec<(MenuItem, Vec2)> {
        let top = if self.items == START_ITEMS {
            START_MENU_TOP
        } else if self.items == END_ITEMS {
            END_MENU_TOP
        } else {
            BACK_MENU_TOP
        };
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let y = top + i as f32 * MENU_SPACING;
                (*item, percent_to_screen(50.0, y, bounds.width, bounds.height))
            })
            .collect()
    }
}

/// Font size for drawn text; the renderer derives metrics from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
}

/// One line of text to draw centred at `pos`
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub content: String,
    pub style: TextStyle,
    pub pos: Vec2,
}

pub const SCORE_FONT_SIZE: f32 = 40.0;
pub const TIMER_FONT_SIZE: f32 = 25.0;
const SCORE_POS_PCT: (f32, f32) = (50.0, 6.0);
const TIMER_POS_PCT: (f32, f32) = (50.0, 11.5);

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

pub fn timer_label(remaining: f64) -> String {
    format!("Timer: {:.1}", remaining.max(0.0))
}

/// Score and timer text drawn during a round
#[derive(Debug, Clone, PartialEq)]
pub struct HudLayout {
    pub score: TextItem,
    pub timer: TextItem,
}

impl HudLayout {
    pub fn new(score: u32, remaining: f64, bounds: ScreenBounds) -> Self {
        Self {
            score: TextItem {
                content: score_label(score),
                style: TextStyle {
                    font_size: SCORE_FONT_SIZE,
                },
                pos: percent_to_screen(
                    SCORE_POS_PCT.0,
                    SCORE_POS_PCT.1,
                    bounds.width,
                    bounds.height,
                ),
            },
            timer: TextItem {
                content: timer_label(remaining),
                style: TextStyle {
                    font_size: TIMER_FONT_SIZE,
                },
                pos: percent_to_screen(
                    TIMER_POS_PCT.0,
                    TIMER_POS_PCT.1,
                    bounds.width,
                    bounds.height,
                ),
            },
        }
    }
}

pub const END_SCORE_FONT_SIZE: f32 = 70.0;
pub const BEST_SCORE_FONT_SIZE: f32 = 30.0;
const END_SCORE_POS_PCT: (f32, f32) = (50.0, 8.0);
const BEST_SCORE_POS_PCT: (f32, f32) = (50.0, 20.0);

pub fn best_score_label(best: u32) -> String {
    format!("Best: {best}")
}

/// Final and best score shown above the end menu
#[derive(Debug, Clone, PartialEq)]
pub struct EndScreenLayout {
    pub score: TextItem,
    pub best: TextItem,
}

impl EndScreenLayout {
    pub fn new(last_score: u32, best: u32, bounds: ScreenBounds) -> Self {
        let at = |(x, y): (f32, f32)| percent_to_screen(x, y, bounds.width, bounds.height);
        Self {
            score: TextItem {
                content: score_label(last_score),
                style: TextStyle {
                    font_size: END_SCORE_FONT_SIZE,
                },
                pos: at(END_SCORE_POS_PCT),
            },
            best: TextItem {
                content: best_score_label(best),
                style: TextStyle {
                    font_size: BEST_SCORE_FONT_SIZE,
                },
                pos: at(BEST_SCORE_POS_PCT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_menu_wraps() {
        let mut menu = Menu::for_screen(Screen::Start);
        assert_eq!(menu.selected(), Some(MenuItem::Play));
        menu.move_up();
        assert_eq!(menu.selected(), Some(MenuItem::Quit));
        menu.move_down();
        assert_eq!(menu.selected(), Some(MenuItem::Play));
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.selected(), Some(MenuItem::About));
    }

    #[test]
    fn test_end_menu() {
        let mut menu = Menu::for_screen(Screen::Ended);
        assert_eq!(menu.items().len(), 3);
        menu.move_down();
        assert_eq!(menu.selected(), Some(MenuItem::MainMenu));
    }

    #[test]
    fn test_playing_has_no_menu() {
        let mut menu = Menu::for_screen(Screen::Playing);
        menu.move_down();
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn test_button_positions() {
        let menu = Menu::for_screen(Screen::Start);
        let positions = menu.button_positions(ScreenBounds::new(800, 600));
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[0], (MenuItem::Play, Vec2::new(400.0, 261.0)));
    }

    #[test]
    fn test_hud_labels() {
        assert_eq!(score_label(3), "Score: 3");
        assert_eq!(timer_label(9.3), "Timer: 9.3");
        assert_eq!(timer_label(-0.1), "Timer: 0.0");

        let hud = HudLayout::new(0, 10.0, ScreenBounds::new(800, 600));
        assert_eq!(hud.score.pos, Vec2::new(400.0, 36.0));
        assert_eq!(hud.timer.pos, Vec2::new(400.0, 69.0));
        assert_eq!(hud.timer.content, "Timer: 10.0");
    }

    #[test]
    fn test_end_screen_layout() {
        let end = EndScreenLayout::new(5, 7, ScreenBounds::new(800, 600));
        assert_eq!(end.score.content, "Score: 5");
        assert_eq!(end.score.pos, Vec2::new(400.0, 48.0));
        assert_eq!(end.best.content, "Best: 7");
        // Both sit above the first end-menu button
        let buttons = Menu::for_screen(Screen::Ended).button_positions(ScreenBounds::new(800, 600));
        assert!(end.best.pos.y < buttons[0].1.y);
    }
}
