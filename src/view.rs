// ============================================================================
// VIEW RENDERERS - state snapshot in, declarative view description out
// ============================================================================
//
// Nothing here touches the terminal. The painter in `ui` draws whatever these
// functions last produced, so each one can be tested on a bare `AppState`.

use crate::i18n::Locale;
use crate::state::{AppState, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Flashcards,
    Gallery,
    Calendar,
    Chat,
    Timer,
    Notes,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Flashcards,
        Section::Gallery,
        Section::Calendar,
        Section::Chat,
        Section::Timer,
        Section::Notes,
    ];

    /// Stable identifier carried by navigation controls.
    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Flashcards => "flashcards",
            Section::Gallery => "gallery",
            Section::Calendar => "calendar",
            Section::Chat => "chat",
            Section::Timer => "timer",
            Section::Notes => "notes",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn title(self, locale: Locale) -> &'static str {
        let t = &locale.strings().section_titles;
        match self {
            Section::Dashboard => t.dashboard,
            Section::Flashcards => t.flashcards,
            Section::Gallery => t.gallery,
            Section::Calendar => t.calendar,
            Section::Chat => t.chat,
            Section::Timer => t.timer,
            Section::Notes => t.notes,
        }
    }
}

pub const SUN_ICON: &str = "☀️";
pub const MOON_ICON: &str = "🌙";

/// Where a theme toggle control sits; the sidebar one also carries a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePlacement {
    Header,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub icon: &'static str,
    pub label: Option<&'static str>,
}

/// Dark theme offers the way back to light, and vice versa.
pub fn theme_toggle_view(theme: Theme, locale: Locale, placement: TogglePlacement) -> ToggleView {
    let s = locale.strings();
    let (icon, label) = match theme {
        Theme::Dark => (SUN_ICON, s.light_mode),
        Theme::Light => (MOON_ICON, s.dark_mode),
    };
    ToggleView {
        icon,
        label: match placement {
            TogglePlacement::Header => None,
            TogglePlacement::Sidebar => Some(label),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsView {
    pub flashcards: usize,
    pub images: usize,
    pub events: usize,
    pub study_hours: u64,
}

impl StatsView {
    pub fn study_time_label(&self) -> String {
        format!("{}h", self.study_hours)
    }
}

/// Counters are read straight off the store. Study time is shown in whole
/// units of sixty ticks, matching the refresh cadence of the ambient timer.
pub fn stats_view(state: &AppState) -> StatsView {
    StatsView {
        flashcards: state.flashcards.len(),
        images: state.images.len(),
        events: state.events.len(),
        study_hours: state.study_time / 60,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureView {
    Placeholder(&'static str),
    Items(Vec<String>),
}

impl FeatureView {
    fn from_items<T>(items: &[T], placeholder: &'static str, label: impl Fn(&T) -> String) -> Self {
        if items.is_empty() {
            FeatureView::Placeholder(placeholder)
        } else {
            FeatureView::Items(items.iter().map(label).collect())
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, FeatureView::Placeholder(_))
    }
}

pub fn flashcards_view(state: &AppState, locale: Locale) -> FeatureView {
    FeatureView::from_items(&state.flashcards, locale.strings().no_flashcards, |c| {
        c.front.clone()
    })
}

pub fn gallery_view(state: &AppState, locale: Locale) -> FeatureView {
    FeatureView::from_items(&state.images, locale.strings().no_images, |i| {
        i.caption.clone()
    })
}

pub fn notes_view(state: &AppState, locale: Locale) -> FeatureView {
    FeatureView::from_items(&state.notes, locale.strings().no_notes, |n| n.title.clone())
}

pub fn upcoming_events_view(state: &AppState, locale: Locale) -> FeatureView {
    FeatureView::from_items(&state.events, locale.strings().no_upcoming_events, |e| {
        format!("{} {}", e.date.format("%d/%m"), e.title)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub label: String,
    pub body: &'static str,
}

pub fn calendar_view(state: &AppState, locale: Locale) -> CalendarView {
    let month = locale.month_name(state.current_month).unwrap_or("?");
    CalendarView {
        label: format!("{} {}", month, state.current_year),
        body: locale.strings().calendar_in_development,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroView {
    pub today: u32,
    pub total: u32,
    pub last_date: String,
    pub study_clock: String,
}

pub fn pomodoro_view(state: &AppState) -> PomodoroView {
    let secs = state.study_time;
    PomodoroView {
        today: state.pomodoro_sessions.today,
        total: state.pomodoro_sessions.total,
        last_date: state.pomodoro_sessions.last_date.clone(),
        study_clock: format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Flashcard;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), Theme::Light)
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("settings"), None);
    }

    #[test]
    fn toggle_icon_matches_theme() {
        let header = theme_toggle_view(Theme::Light, Locale::PtBr, TogglePlacement::Header);
        assert_eq!(header, ToggleView { icon: MOON_ICON, label: None });

        let sidebar = theme_toggle_view(Theme::Dark, Locale::PtBr, TogglePlacement::Sidebar);
        assert_eq!(sidebar.icon, SUN_ICON);
        assert_eq!(sidebar.label, Some("Modo Claro"));

        let sidebar = theme_toggle_view(Theme::Light, Locale::En, TogglePlacement::Sidebar);
        assert_eq!(sidebar.label, Some("Dark Mode"));
    }

    #[test]
    fn stats_hours_floor_study_time() {
        let mut st = state();
        assert_eq!(stats_view(&st).study_time_label(), "0h");
        st.study_time = 59;
        assert_eq!(stats_view(&st).study_hours, 0);
        st.study_time = 125;
        assert_eq!(stats_view(&st).study_hours, 2);
    }

    #[test]
    fn empty_collections_render_placeholders() {
        let st = state();
        assert_eq!(
            flashcards_view(&st, Locale::PtBr),
            FeatureView::Placeholder(
                "Nenhum flashcard ainda. Clique em \"Criar Flashcard\" para começar!"
            )
        );
        assert!(gallery_view(&st, Locale::En).is_placeholder());
        assert!(notes_view(&st, Locale::En).is_placeholder());
        assert_eq!(
            upcoming_events_view(&st, Locale::PtBr),
            FeatureView::Placeholder("Nenhum evento próximo")
        );
    }

    #[test]
    fn populated_collection_lists_items() {
        let mut st = state();
        st.flashcards.push(Flashcard {
            id: Uuid::new_v4(),
            front: "Pressão arterial normal?".to_string(),
            back: "120/80".to_string(),
        });
        assert_eq!(
            flashcards_view(&st, Locale::PtBr),
            FeatureView::Items(vec!["Pressão arterial normal?".to_string()])
        );
        assert_eq!(stats_view(&st).flashcards, 1);
    }

    #[test]
    fn calendar_label_uses_month_table() {
        let mut st = state();
        st.current_month = 0;
        assert_eq!(calendar_view(&st, Locale::PtBr).label, "Janeiro 2026");
        st.current_month = 11;
        assert_eq!(calendar_view(&st, Locale::PtBr).label, "Dezembro 2026");
        assert_eq!(calendar_view(&st, Locale::En).label, "December 2026");
        assert_eq!(calendar_view(&st, Locale::PtBr).body, "Calendário em desenvolvimento!");
    }

    #[test]
    fn pomodoro_clock_formats_seconds() {
        let mut st = state();
        st.study_time = 3723;
        let view = pomodoro_view(&st);
        assert_eq!(view.study_clock, "01:02:03");
        assert_eq!(view.today, 0);
        assert_eq!(view.last_date, "Sun Oct 18 2026");
    }
}
