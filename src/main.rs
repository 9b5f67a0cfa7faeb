//! AppleDroid entry point
//!
//! Runs the session loop headless: scripted demo input, the autopilot during
//! rounds, and a renderer that only measures text.

use std::time::Duration;

use apple_droid::AppError;
use apple_droid::audio::{AudioManager, LogSink};
use apple_droid::platform::{Clock, DemoInput, InputSource, MenuDebouncer, MonotonicClock};
use apple_droid::renderer::{HeadlessRenderer, draw_frame};
use apple_droid::settings::Settings;
use apple_droid::sim::{HudBoxes, Session};

/// Rounds the demo input plays before quitting
const DEMO_ROUNDS: u32 = 1;

fn main() {
    env_logger::init();
    log::info!("{} (headless) starting...", apple_droid::consts::GAME_TITLE);

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let settings = Settings::load();
    let frame = Duration::from_secs_f64(settings.frame_duration());
    let debounce = settings.input_debounce;

    let clock = MonotonicClock::default();
    let mut session = Session::new(settings, clock.now())?;

    let mut audio = AudioManager::new(Some(Box::new(LogSink)), session.settings());
    let mut input = DemoInput::new(DEMO_ROUNDS, clock.now());
    let mut debouncer = MenuDebouncer::new(debounce, clock.now());
    let mut renderer = HeadlessRenderer::new();
    // Nothing has been drawn before the first frame
    let mut hud = HudBoxes::default();

    while !session.should_quit() {
        let now = clock.now();

        let keys = match input.poll(now, session.screen) {
            Ok(keys) => keys,
            Err(e) => {
                session.abort_round(&e.to_string());
                return Err(e.into());
            }
        };
        let mut tick_input = debouncer.filter(keys, now);
        tick_input.idle_mode = input.wants_autopilot(session.screen, now);

        let events = session.tick(&tick_input, now, &hud)?;
        audio.play_events(&events);

        hud = match draw_frame(&mut renderer, &session, now) {
            Ok(hud) => hud,
            Err(e) => {
                session.abort_round(&e.to_string());
                return Err(e.into());
            }
        };

        let spent = Duration::from_secs_f64((clock.now() - now).max(0.0));
        if let Some(rest) = frame.checked_sub(spent) {
            std::thread::sleep(rest);
        }
    }

    log::info!(
        "Quit after last score {} (best {})",
        session.last_score,
        session.high_scores.top_score().unwrap_or(0)
    );
    Ok(())
}
