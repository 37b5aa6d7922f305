// ============================================================================
// STATE STORE - the single record of application data for a session
// ============================================================================

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the root theme attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Flashcard {
    pub id: Uuid,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub id: Uuid,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ChatRecord {
    pub id: Uuid,
    pub text: String,
    pub from_user: bool,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    pub date: NaiveDate,
    pub seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroSessions {
    pub today: u32,
    pub total: u32,
    pub last_date: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
    pub flashcards: Vec<Flashcard>,
    pub images: Vec<GalleryImage>,
    pub events: Vec<CalendarEvent>,
    pub notes: Vec<Note>,
    pub chat_history: Vec<ChatRecord>,
    pub study_history: Vec<StudySession>,
    /// Zero-based month, 0 = January.
    pub current_month: u32,
    pub current_year: i32,
    /// Elapsed study time in seconds.
    pub study_time: u64,
    pub pomodoro_sessions: PomodoroSessions,
    pub current_note_id: Option<Uuid>,
}

impl AppState {
    /// Fresh state seeded from the given date.
    pub fn new(today: NaiveDate, theme: Theme) -> Self {
        Self {
            theme,
            flashcards: Vec::new(),
            images: Vec::new(),
            events: Vec::new(),
            notes: Vec::new(),
            chat_history: Vec::new(),
            study_history: Vec::new(),
            current_month: today.month0(),
            current_year: today.year(),
            study_time: 0,
            pomodoro_sessions: PomodoroSessions {
                today: 0,
                total: 0,
                last_date: today.format("%a %b %d %Y").to_string(),
            },
            current_note_id: None,
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// One ambient timer tick. Returns the new elapsed total.
    pub fn tick_study_time(&mut self) -> u64 {
        self.study_time = self.study_time.saturating_add(1);
        self.study_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_state_is_seeded_from_date() {
        let state = AppState::new(date(2026, 10, 18), Theme::Light);
        assert_eq!(state.current_month, 9);
        assert_eq!(state.current_year, 2026);
        assert_eq!(state.study_time, 0);
        assert_eq!(state.pomodoro_sessions.last_date, "Sun Oct 18 2026");
        assert!(state.flashcards.is_empty());
        assert!(state.current_note_id.is_none());
    }

    #[test]
    fn toggle_twice_restores_theme() {
        let mut state = AppState::new(date(2026, 1, 1), Theme::Dark);
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn study_time_saturates() {
        let mut state = AppState::new(date(2026, 1, 1), Theme::Light);
        state.study_time = u64::MAX;
        assert_eq!(state.tick_study_time(), u64::MAX);
    }
}
