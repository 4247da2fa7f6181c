//! Integration tests for a full widget session.
//!
//! This test file verifies:
//! - A complete focus session from warm-up to heatmap
//! - Completion side effects (sound, log increment) fire exactly once
//! - Break completions are not logged as focus sessions
//! - State survives a restart through a shared store

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use focusdeck_core::{
    AmbientTrack, App, AudioSink, Event, Intensity, MemStore, SoundId, TimerMode, TimerSettings,
};

/// Sink that records what it was asked to play.
#[derive(Default)]
struct RecordingSink {
    played_once: Rc<RefCell<Vec<String>>>,
    looping: Rc<RefCell<Vec<(AmbientTrack, u8)>>>,
}

impl AudioSink for RecordingSink {
    fn play_once(&mut self, url: &str) {
        self.played_once.borrow_mut().push(url.to_string());
    }
    fn play_loop(&mut self, track: AmbientTrack, volume: u8) {
        self.looping.borrow_mut().push((track, volume));
    }
    fn stop(&mut self, _track: AmbientTrack) {}
}

fn short_settings() -> TimerSettings {
    TimerSettings {
        focus_minutes: 1,
        short_break_minutes: 1,
        long_break_minutes: 1,
        sound: SoundId::Bell,
    }
}

fn run_to_completion(app: &mut App<&MemStore>) -> Event {
    app.start().expect("start accepted");
    let token = app.timer().pending_warmup().expect("warm-up pending");
    app.warmup_elapsed(token).expect("warm-up elapses");
    let total = app.timer().seconds_remaining();
    for _ in 0..total - 1 {
        assert!(app.tick().is_none());
    }
    app.tick().expect("final tick completes")
}

#[test]
fn test_focus_session_end_to_end() {
    let store = MemStore::new();
    let played = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink {
        played_once: Rc::clone(&played),
        ..Default::default()
    };
    let mut app = App::with_sink(&store, Box::new(sink));
    app.edit_settings(short_settings());

    let event = run_to_completion(&mut app);
    assert!(matches!(
        event,
        Event::SessionCompleted {
            mode: TimerMode::Focus,
            ..
        }
    ));

    // Completion sound played exactly once, with the configured choice.
    assert_eq!(played.borrow().as_slice(), [SoundId::Bell.url()]);

    // Exactly one focus session logged today.
    let today = Local::now().date_naive();
    assert_eq!(app.session_log().count_on(today), 1);

    // The heatmap ends today at the top tier (today is the all-time max).
    let cells = app.heatmap();
    assert_eq!(cells.len(), 84);
    let last = cells.last().unwrap();
    assert_eq!(last.date, today);
    assert_eq!(last.intensity, Intensity::Level4);

    // Timer is idle at zero; no further ticks do anything.
    assert!(!app.timer().is_running());
    assert_eq!(app.timer().seconds_remaining(), 0);
    assert!(app.tick().is_none());
}

#[test]
fn test_break_completion_is_not_logged() {
    let store = MemStore::new();
    let mut app = App::new(&store);
    app.edit_settings(short_settings());
    app.set_mode(TimerMode::ShortBreak);

    let event = run_to_completion(&mut app);
    assert!(matches!(
        event,
        Event::SessionCompleted {
            mode: TimerMode::ShortBreak,
            ..
        }
    ));
    assert!(app.session_log().is_empty());
}

#[test]
fn test_reset_during_warmup_never_starts() {
    let store = MemStore::new();
    let mut app = App::new(&store);
    app.start();
    let token = app.timer().pending_warmup().unwrap();
    app.reset();

    // The scheduled delay fires after the reset.
    assert!(app.warmup_elapsed(token).is_none());
    assert!(!app.timer().is_running());
    assert_eq!(
        app.timer().seconds_remaining(),
        app.timer().total_secs()
    );
}

#[test]
fn test_state_survives_restart() {
    let store = MemStore::new();
    let todo_id;
    {
        let mut app = App::new(&store);
        app.edit_settings(short_settings());
        app.set_mode(TimerMode::LongBreak);
        app.set_volume(AmbientTrack::Rain, 70);
        todo_id = app.add_todo("write tests").unwrap();
        app.toggle_todo(todo_id);
        app.toggle_focus_mode();
        let _ = run_to_completion(&mut app);
    }

    let app = App::new(&store);
    assert_eq!(app.timer().mode(), TimerMode::LongBreak);
    assert_eq!(app.timer().settings().focus_minutes, 1);
    assert_eq!(app.mixer().volume(AmbientTrack::Rain), 70);
    assert!(app.focus_mode());
    let items = app.todos().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, todo_id);
    assert!(items[0].done);
    // The long-break completion was not a focus session.
    assert!(app.session_log().is_empty());
}

#[test]
fn test_restart_reasserts_ambient_playback() {
    let store = MemStore::new();
    {
        let mut app = App::new(&store);
        app.set_volume(AmbientTrack::Forest, 45);
    }

    let looping = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink {
        looping: Rc::clone(&looping),
        ..Default::default()
    };
    let _app = App::with_sink(&store, Box::new(sink));
    // Volume > 0 means looping, re-derived on restore.
    assert_eq!(looping.borrow().as_slice(), [(AmbientTrack::Forest, 45)]);
}

#[test]
fn test_corrupt_records_fall_back_to_defaults() {
    use focusdeck_core::Store;

    let store = MemStore::new();
    store.write("pomodoro_settings", "{broken").unwrap();
    store.write("pomodoro_stats", "[1,2,3]").unwrap();

    let app = App::new(&store);
    assert_eq!(app.timer().settings().focus_minutes, 25);
    assert!(app.session_log().is_empty());
}
