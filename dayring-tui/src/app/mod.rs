use time::OffsetDateTime;

use crate::config::{parse_bedtime, DayringConfig};
use crate::rings::{frame_for_block, frame_for_rest, CueTracker, RingFrame};
use crate::schedule::{BlockProgress, Phase, PhaseResolver, PhaseSpan};
use crate::theme::Theme;

mod focus;
mod navigation;
mod state;
pub use focus::{FocusCommand, FocusSession};
pub use state::{SettingsField, SettingsForm, TaskOverlay, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,

    // Persisted settings and the active palette derived from them
    pub config: DayringConfig,
    pub theme: Theme,
    pub theme_index: usize,

    // Schedule state, refreshed once per tick
    pub resolver: PhaseResolver,
    pub phase: Option<Phase>,
    pub phase_span: Option<PhaseSpan>,
    pub block_progress: Option<BlockProgress>,
    pub ring_frame: RingFrame,
    pub now: OffsetDateTime,

    // Part/hour chime
    pub cue: CueTracker,
    pub cue_muted: bool,

    // Focus session and its task prompt overlay
    pub focus: FocusSession,
    pub task_overlay: Option<TaskOverlay>,

    // Settings form, present while the settings view is open
    pub settings_form: Option<SettingsForm>,

    pub status_message: Option<String>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(config: DayringConfig, now: OffsetDateTime) -> Self {
        let theme = crate::theme::by_name(&config.theme);
        let resolver = PhaseResolver::new(config.bedtime_time(), now);
        Self {
            running: true,
            current_view: View::Clock,
            config,
            theme,
            theme_index: 0,
            resolver,
            phase: None,
            phase_span: None,
            block_progress: None,
            ring_frame: RingFrame::default(),
            now,
            cue: CueTracker::new(),
            cue_muted: false,
            focus: FocusSession::default(),
            task_overlay: None,
            settings_form: None,
            status_message: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Advance the clock to `now`: resolve the phase, refresh block progress
    /// and the ring frame. Returns whether the part/hour cue should sound.
    pub fn tick(&mut self, now: OffsetDateTime) -> anyhow::Result<bool> {
        self.now = now;
        let phase = self.resolver.resolve(now)?;
        self.phase = Some(phase);

        let span = self.resolver.milestones().phase_span(phase);
        self.phase_span = Some(span);
        if let Some(block) = phase.block_index() {
            let progress = BlockProgress::compute(block, span.start, now);
            let fired = self.cue.observe(progress.hour, progress.part);
            self.ring_frame = frame_for_block(&progress);
            self.block_progress = Some(progress);
            Ok(fired)
        } else {
            // Leaving a block forgets the counters, so re-entering one never
            // chimes off a stale pair.
            self.cue.reset();
            self.block_progress = None;
            self.ring_frame = frame_for_rest(span.completion(now));
            Ok(false)
        }
    }

    pub fn toggle_mute(&mut self) {
        self.cue_muted = !self.cue_muted;
        self.set_status(if self.cue_muted {
            "Cue muted".to_string()
        } else {
            "Cue unmuted".to_string()
        });
    }

    /// The focus hotkey: opens the task prompt when idle, stops the session
    /// when live. Returns the remote notification to fire, if any.
    pub fn toggle_focus(&mut self) -> Option<FocusCommand> {
        match self.focus {
            FocusSession::Idle => {
                self.focus.request_start();
                self.task_overlay = Some(TaskOverlay::default());
                None
            }
            FocusSession::AwaitingTask => None,
            FocusSession::Focusing { .. } => {
                let cmd = self.focus.stop();
                self.set_status("Focus session ended".to_string());
                cmd
            }
        }
    }

    /// Submit the task overlay's input. A blank task keeps the overlay open
    /// with an error instead of starting anything.
    pub fn submit_task(&mut self) -> Option<FocusCommand> {
        let overlay = self.task_overlay.as_mut()?;
        let task = overlay.input.value.clone();
        match self.focus.submit_task(&task) {
            Some(cmd) => {
                self.task_overlay = None;
                self.set_status(format!("Focusing: {}", task.trim()));
                Some(cmd)
            }
            None => {
                overlay.error = Some("Task cannot be empty".to_string());
                None
            }
        }
    }

    pub fn cancel_task_overlay(&mut self) {
        self.focus.cancel_input();
        self.task_overlay = None;
    }

    /// Validate the settings form and fold it back into the config. Returns
    /// the updated config for persistence, or None when validation failed
    /// (the form stays open with an error).
    pub fn commit_settings(&mut self) -> Option<DayringConfig> {
        let form = self.settings_form.as_mut()?;
        let bedtime = form.bedtime.value.trim().to_string();
        if parse_bedtime(&bedtime).is_none() {
            form.error = Some(format!("Invalid bedtime \"{}\" (expected HH:MM)", bedtime));
            return None;
        }

        self.config.bedtime = bedtime;
        self.config.endpoint_url = form.endpoint_url.value.trim().to_string();
        self.config.access_token = form.access_token.value.trim().to_string();
        self.settings_form = None;
        self.navigate_to(View::Clock);
        Some(self.config.clone())
    }

    /// Apply the highlighted theme and return the config to persist.
    pub fn confirm_theme(&mut self) -> DayringConfig {
        let theme = crate::theme::THEMES[self.theme_index];
        self.theme = theme;
        self.config.theme = theme.name.to_string();
        self.navigate_to(View::Clock);
        self.set_status(format!("Theme: {}", theme.name));
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::Duration;

    fn app_at(now: OffsetDateTime) -> App {
        App::new(DayringConfig::default(), now)
    }

    #[test]
    fn tick_resolves_phase_and_frame() {
        // Default bedtime 23:00 -> block 1 starts 07:30.
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        let fired = app.tick(datetime!(2026-03-10 08:00 UTC)).unwrap();
        assert!(!fired, "first tick never chimes");
        assert_eq!(app.phase, Some(Phase::Block1));
        assert!(app.phase_span.is_some());
        let progress = app.block_progress.unwrap();
        assert_eq!((progress.hour, progress.part), (1, 3));
        assert_eq!(app.ring_frame.part_segments, 3);
    }

    #[test]
    fn part_boundary_chimes_once() {
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        let t0 = datetime!(2026-03-10 08:05 UTC);
        assert!(!app.tick(t0).unwrap());
        assert!(!app.tick(t0 + Duration::seconds(1)).unwrap());
        // 08:06 crosses into part 4.
        assert!(app.tick(datetime!(2026-03-10 08:06 UTC)).unwrap());
        assert!(!app.tick(datetime!(2026-03-10 08:06:01 UTC)).unwrap());
    }

    #[test]
    fn outside_blocks_rings_clear_and_cue_resets() {
        let mut app = app_at(datetime!(2026-03-10 12:25 UTC));
        app.tick(datetime!(2026-03-10 12:25 UTC)).unwrap();
        assert!(app.phase.unwrap().is_block());

        let fired = app.tick(datetime!(2026-03-10 23:30 UTC)).unwrap();
        assert!(!fired);
        assert_eq!(app.phase, Some(Phase::Sleep));
        assert_eq!(app.block_progress, None);
        assert_eq!(app.ring_frame.hour_segments, 0);
        assert!(app.ring_frame.inner_fraction > 0.0);

        // Back in a block: first observation after the reset stays silent.
        assert!(!app.tick(datetime!(2026-03-11 08:00 UTC)).unwrap());
    }

    #[test]
    fn focus_toggle_opens_prompt_then_stops() {
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        assert_eq!(app.toggle_focus(), None);
        assert!(app.task_overlay.is_some());

        app.task_overlay.as_mut().unwrap().input = TextInput::from_str("ship release");
        let cmd = app.submit_task();
        assert_eq!(cmd, Some(FocusCommand::NotifyStart("ship release".to_string())));
        assert!(app.task_overlay.is_none());
        assert!(app.focus.is_focusing());

        assert_eq!(app.toggle_focus(), Some(FocusCommand::NotifyStop));
        assert_eq!(app.focus, FocusSession::Idle);
    }

    #[test]
    fn blank_task_keeps_overlay_open_with_error() {
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        app.toggle_focus();
        assert_eq!(app.submit_task(), None);
        let overlay = app.task_overlay.as_ref().unwrap();
        assert!(overlay.error.is_some());
        assert_eq!(app.focus, FocusSession::AwaitingTask);
    }

    #[test]
    fn settings_commit_rejects_bad_bedtime() {
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        app.navigate_to(View::Settings);
        app.settings_form.as_mut().unwrap().bedtime = TextInput::from_str("25:99");
        assert_eq!(app.commit_settings(), None);
        assert!(app.settings_form.as_ref().unwrap().error.is_some());
        assert_eq!(app.config.bedtime, "23:00");
    }

    #[test]
    fn settings_commit_updates_config() {
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        app.navigate_to(View::Settings);
        {
            let form = app.settings_form.as_mut().unwrap();
            form.bedtime = TextInput::from_str("22:30");
            form.endpoint_url = TextInput::from_str("https://hub.example/api ");
        }
        let config = app.commit_settings().unwrap();
        assert_eq!(config.bedtime, "22:30");
        assert_eq!(config.endpoint_url, "https://hub.example/api");
        assert_eq!(app.current_view, View::Clock);
    }

    #[test]
    fn confirm_theme_applies_and_persists_name() {
        let mut app = app_at(datetime!(2026-03-10 08:00 UTC));
        app.navigate_to(View::ThemePicker);
        app.select_next();
        let config = app.confirm_theme();
        assert_eq!(config.theme, "green");
        assert_eq!(app.theme.name, "green");
    }
}
