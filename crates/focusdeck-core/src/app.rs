//! Top-level widget session.
//!
//! `App` is the host side of the timer's completion contract: it owns
//! the store, one persistent cell per stateful entity, the timer and
//! the audio sink, and turns timer events into side effects (completion
//! sound, session log increment). All mutation is single-threaded and
//! event-driven; the embedding UI drives the once-per-second tick and
//! the warm-up delay.

use chrono::{Local, Timelike};
use uuid::Uuid;

use crate::audio::{AmbientTrack, AudioSink, NullSink};
use crate::events::Event;
use crate::mixer::AmbientMixer;
use crate::stats::{window_view, DayCell, SessionLog, WINDOW_DAYS};
use crate::store::{keys, load, save, StateCell, Store};
use crate::theme::Theme;
use crate::timer::{SessionTimer, TimerMode, TimerSettings, WarmupToken};
use crate::todo::TodoList;

pub struct App<S: Store> {
    store: S,
    sink: Box<dyn AudioSink>,
    timer: SessionTimer,
    theme: StateCell<Theme>,
    focus_mode: StateCell<bool>,
    log: StateCell<SessionLog>,
    mixer: StateCell<AmbientMixer>,
    todos: StateCell<TodoList>,
}

impl<S: Store> App<S> {
    /// Restore a session from the store, falling back to defaults for
    /// any record that is missing or unreadable.
    pub fn new(store: S) -> Self {
        Self::with_sink(store, Box::new(NullSink))
    }

    pub fn with_sink(store: S, sink: Box<dyn AudioSink>) -> Self {
        let settings: TimerSettings = load(&store, keys::SETTINGS, TimerSettings::default());
        let mode: TimerMode = load(&store, keys::MODE, TimerMode::Focus);
        let timer = SessionTimer::new(settings, mode);
        let theme = StateCell::load(&store, keys::THEME, Theme::default());
        let focus_mode = StateCell::load(&store, keys::FOCUS_MODE, false);
        let log = StateCell::load(&store, keys::STATS, SessionLog::new());
        let mixer = StateCell::load(&store, keys::AMBIENT_VOLUMES, AmbientMixer::new());
        let todos = StateCell::load(&store, keys::TODOS, TodoList::new());
        let mut app = Self {
            store,
            sink,
            timer,
            theme,
            focus_mode,
            log,
            mixer,
            todos,
        };
        // Re-assert the level-triggered playback rule on restore.
        app.mixer.get().apply(app.sink.as_mut());
        app
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    /// Begin the warm-up. The embedding UI owns the 5 s delay and calls
    /// [`Self::warmup_elapsed`] with [`SessionTimer::pending_warmup`]'s
    /// token when it expires.
    pub fn start(&mut self) -> Option<Event> {
        self.timer.start()
    }

    pub fn warmup_elapsed(&mut self, token: WarmupToken) -> Option<Event> {
        self.timer.warmup_elapsed(token)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.timer.pause()
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.timer.reset()
    }

    /// Once-per-second tick. On a natural focus completion this plays
    /// the completion sound and records the session, exactly once.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.timer.tick()?;
        if let Event::SessionCompleted { mode, .. } = &event {
            self.sink.play_once(self.timer.settings().sound.url());
            if *mode == TimerMode::Focus {
                let today = Local::now().date_naive();
                self.log
                    .update(&self.store, |log| log.record_completion(today));
            }
        }
        Some(event)
    }

    pub fn set_mode(&mut self, mode: TimerMode) -> Option<Event> {
        let event = self.timer.set_mode(mode);
        save(&self.store, keys::MODE, &mode);
        event
    }

    pub fn edit_settings(&mut self, settings: TimerSettings) {
        self.timer.set_settings(settings);
        save(&self.store, keys::SETTINGS, self.timer.settings());
    }

    // ── Stats ────────────────────────────────────────────────────────

    pub fn session_log(&self) -> &SessionLog {
        self.log.get()
    }

    /// The 12-week heatmap ending today.
    pub fn heatmap(&self) -> Vec<DayCell> {
        window_view(self.log.get(), Local::now().date_naive(), WINDOW_DAYS)
    }

    // ── Ambient mixer ────────────────────────────────────────────────

    pub fn mixer(&self) -> &AmbientMixer {
        self.mixer.get()
    }

    pub fn set_volume(&mut self, track: AmbientTrack, volume: u8) {
        self.mixer
            .update(&self.store, |m| m.set_volume(track, volume));
        self.mixer.get().apply(self.sink.as_mut());
    }

    pub fn mute_all(&mut self) {
        self.mixer.update(&self.store, |m| m.mute_all());
        self.mixer.get().apply(self.sink.as_mut());
    }

    // ── To-do list ───────────────────────────────────────────────────

    pub fn todos(&self) -> &TodoList {
        self.todos.get()
    }

    pub fn add_todo(&mut self, text: &str) -> Option<Uuid> {
        let mut added = None;
        self.todos.update(&self.store, |list| {
            added = list.add(text);
        });
        added
    }

    pub fn toggle_todo(&mut self, id: Uuid) {
        self.todos.update(&self.store, |list| list.toggle(id));
    }

    pub fn remove_todo(&mut self, id: Uuid) {
        self.todos.update(&self.store, |list| list.remove(id));
    }

    // ── Appearance ───────────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        *self.theme.get()
    }

    /// The theme to render right now, with `Dynamic` resolved against
    /// the local hour.
    pub fn active_theme(&self) -> Theme {
        self.theme.get().resolve(Local::now().hour())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(&self.store, theme);
    }

    pub fn focus_mode(&self) -> bool {
        *self.focus_mode.get()
    }

    pub fn toggle_focus_mode(&mut self) {
        self.focus_mode.update(&self.store, |v| *v = !*v);
    }
}
