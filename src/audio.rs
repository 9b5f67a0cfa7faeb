//! Sound effects
//!
//! The game only decides *which* sound plays; output is delegated to an
//! `AudioSink`. Playback is fire-and-forget.

use crate::settings::Settings;
use crate::sim::{CollectibleKind, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Menu selection moved
    MenuSelection,
    /// Gold apple appeared
    GoldAppleSpawn,
    /// Regular apple collected
    AppleCollect,
    /// Gold apple collected
    GoldAppleCollect,
}

impl SoundEffect {
    /// Sound for a session event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::MenuMoved => Some(SoundEffect::MenuSelection),
            GameEvent::SecondarySpawned => Some(SoundEffect::GoldAppleSpawn),
            GameEvent::Collected(CollectibleKind::Primary) => Some(SoundEffect::AppleCollect),
            GameEvent::Collected(CollectibleKind::Secondary) => Some(SoundEffect::GoldAppleCollect),
            _ => None,
        }
    }

    /// Asset file name
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::MenuSelection => "menu_selection.wav",
            SoundEffect::GoldAppleSpawn => "gold_apple_spawn_sound.wav",
            SoundEffect::AppleCollect => "purple_apple_collision.wav",
            SoundEffect::GoldAppleCollect => "gold_apple_collision.wav",
        }
    }
}

/// Audio output capability
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs what would play
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {:.2}", effect.file_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>, settings: &Settings) -> Self {
        if sink.is_none() {
            log::warn!("No audio sink - audio disabled");
        }
        Self {
            sink,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.volume();
        if volume <= 0.0 {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.play(effect, volume);
        }
    }

    /// Play the sounds for a tick's events
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<SoundEffect>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.0.borrow_mut().push(effect);
        }
    }

    fn manager(settings: &Settings) -> (AudioManager, Rc<RefCell<Vec<SoundEffect>>>) {
        let played = Rc::new(RefCell::new(Vec::new()));
        let sink = Box::new(Recorder(Rc::clone(&played)));
        (AudioManager::new(Some(sink), settings), played)
    }

    #[test]
    fn test_events_map_to_sounds() {
        let (mut audio, played) = manager(&Settings::default());
        audio.play_events(&[
            GameEvent::MenuMoved,
            GameEvent::RoundStarted,
            GameEvent::Collected(CollectibleKind::Secondary),
            GameEvent::SecondarySpawned,
        ]);
        assert_eq!(
            *played.borrow(),
            vec![
                SoundEffect::MenuSelection,
                SoundEffect::GoldAppleCollect,
                SoundEffect::GoldAppleSpawn
            ]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let (mut audio, played) = manager(&settings);
        audio.play(SoundEffect::AppleCollect);
        assert!(played.borrow().is_empty());

        audio.set_muted(false);
        audio.play(SoundEffect::AppleCollect);
        assert_eq!(played.borrow().len(), 1);
    }
}
