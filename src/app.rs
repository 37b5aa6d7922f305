// ============================================================================
// APPLICATION CONTEXT - state store, rendered page, controls and tasks
// ============================================================================
//
// One `App` exists per run. Every handler and renderer takes it by reference;
// there is no global state. Controls are the named things a user can press;
// `activate` is the single entry point that wires each one to its effect.

use std::time::Duration;

use chrono::NaiveDate;
use ratatui::layout::Rect;
use tui_textarea::TextArea;

use crate::config::Config;
use crate::i18n::Locale;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::state::AppState;
use crate::view::{
    self, CalendarView, FeatureView, PomodoroView, Section, StatsView, TogglePlacement,
    ToggleView,
};

/// One ambient timer firing; `study_time` counts these as seconds.
pub const STUDY_TICK: Duration = Duration::from_secs(1);

/// Stats re-render on every sixtieth tick, so the hours figure always reads
/// `study_time / 60`.
pub const STATS_REFRESH_TICKS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ThemeToggle,
    ThemeToggleSidebar,
    MenuToggle,
    CloseSidebar,
    SidebarOverlay,
    /// Blank space inside the open sidebar; swallows clicks.
    SidebarPanel,
    Nav(Section),
    AddFlashcard,
    AddImage,
    AddNote,
    SendMessage,
    ModalBackdrop,
}

/// Work the scheduler hands back when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    StudyTick,
    ChatReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub author: Author,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Notice(&'static str),
    Help,
}

/// Latest output of every renderer. The painter reads only from here, so a
/// value changes on screen exactly when its renderer runs.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub theme_attr: &'static str,
    pub header_toggle: ToggleView,
    pub sidebar_toggle: ToggleView,
    pub stats: StatsView,
    pub upcoming_events: FeatureView,
    pub flashcards: FeatureView,
    pub gallery: FeatureView,
    pub calendar: CalendarView,
    pub notes: FeatureView,
    pub pomodoro: PomodoroView,
}

impl RenderedPage {
    fn from_state(state: &AppState, locale: Locale) -> Self {
        Self {
            theme_attr: state.theme.as_str(),
            header_toggle: view::theme_toggle_view(state.theme, locale, TogglePlacement::Header),
            sidebar_toggle: view::theme_toggle_view(state.theme, locale, TogglePlacement::Sidebar),
            stats: view::stats_view(state),
            upcoming_events: view::upcoming_events_view(state, locale),
            flashcards: view::flashcards_view(state, locale),
            gallery: view::gallery_view(state, locale),
            calendar: view::calendar_view(state, locale),
            notes: view::notes_view(state, locale),
            pomodoro: view::pomodoro_view(state),
        }
    }
}

pub struct App {
    pub state: AppState,
    pub config: Config,
    pub locale: Locale,
    pub page: RenderedPage,
    pub scheduler: Scheduler<Task>,
    pub study_timer: Option<TaskHandle>,

    // Navigation
    pub active_section: Section,
    pub sidebar_open: bool,
    pub sidebar_cursor: usize,
    pub modal: Option<Modal>,

    // Chat: transient transcript, not part of the store
    pub chat_transcript: Vec<ChatEntry>,
    pub chat_scroll: u16,
    pub textarea: TextArea<'static>,

    // Painter feedback for mouse support
    pub viewport_width: u16,
    pub control_areas: Vec<(Control, Rect)>,
    pub modal_area: Rect,
}

impl App {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        let locale = config.ui.locale;
        let state = AppState::new(today, config.ui.theme);
        let page = RenderedPage::from_state(&state, locale);
        Self {
            state,
            config,
            locale,
            page,
            scheduler: Scheduler::new(),
            study_timer: None,
            active_section: Section::Dashboard,
            sidebar_open: false,
            sidebar_cursor: 0,
            modal: None,
            chat_transcript: Vec::new(),
            chat_scroll: 0,
            textarea: TextArea::new(vec![String::new()]),
            viewport_width: u16::MAX,
            control_areas: Vec::new(),
            modal_area: Rect::default(),
        }
    }

    /// Builds the context and runs every section initializer in order.
    pub fn start(config: Config, today: NaiveDate) -> Self {
        tracing::info!("starting dashboard");
        let mut app = Self::new(config, today);
        app.init_theme();
        app.init_navigation();
        app.init_flashcards();
        app.init_gallery();
        app.init_calendar();
        app.init_chat();
        app.init_timer();
        app.init_notes();
        app.render_stats();
        app.render_upcoming_events();
        app.start_study_timer();
        tracing::info!(
            theme = app.state.theme.as_str(),
            month = app.state.current_month,
            year = app.state.current_year,
            "dashboard started"
        );
        app
    }

    // ------------------------------------------------------------------
    // Initializers
    // ------------------------------------------------------------------

    fn init_theme(&mut self) {
        self.apply_theme();
    }

    fn init_navigation(&mut self) {
        self.active_section = Section::Dashboard;
        self.sidebar_open = false;
    }

    fn init_flashcards(&mut self) {
        self.render_flashcards();
    }

    fn init_gallery(&mut self) {
        self.render_gallery();
    }

    fn init_calendar(&mut self) {
        self.render_calendar();
    }

    fn init_chat(&mut self) {
        self.clear_chat_input();
    }

    fn init_timer(&mut self) {
        self.render_pomodoro();
        tracing::info!("timer section ready");
    }

    fn init_notes(&mut self) {
        self.render_notes();
    }

    fn start_study_timer(&mut self) {
        if self.study_timer.is_none() {
            let handle = self
                .scheduler
                .schedule_repeating(STUDY_TICK, Task::StudyTick);
            self.study_timer = Some(handle);
        }
    }

    // ------------------------------------------------------------------
    // Renderers: recompute one piece of the page from the store
    // ------------------------------------------------------------------

    pub fn apply_theme(&mut self) {
        let theme = self.state.theme;
        self.page.theme_attr = theme.as_str();
        self.page.header_toggle =
            view::theme_toggle_view(theme, self.locale, TogglePlacement::Header);
        self.page.sidebar_toggle =
            view::theme_toggle_view(theme, self.locale, TogglePlacement::Sidebar);
    }

    pub fn render_stats(&mut self) {
        self.page.stats = view::stats_view(&self.state);
    }

    pub fn render_upcoming_events(&mut self) {
        self.page.upcoming_events = view::upcoming_events_view(&self.state, self.locale);
    }

    pub fn render_flashcards(&mut self) {
        self.page.flashcards = view::flashcards_view(&self.state, self.locale);
    }

    pub fn render_gallery(&mut self) {
        self.page.gallery = view::gallery_view(&self.state, self.locale);
    }

    pub fn render_calendar(&mut self) {
        self.page.calendar = view::calendar_view(&self.state, self.locale);
    }

    pub fn render_notes(&mut self) {
        self.page.notes = view::notes_view(&self.state, self.locale);
    }

    pub fn render_pomodoro(&mut self) {
        self.page.pomodoro = view::pomodoro_view(&self.state);
    }

    // ------------------------------------------------------------------
    // Control wiring
    // ------------------------------------------------------------------

    pub fn activate(&mut self, control: Control) {
        tracing::debug!(?control, "control activated");
        let s = self.locale.strings();
        match control {
            Control::ThemeToggle | Control::ThemeToggleSidebar => self.toggle_theme(),
            Control::MenuToggle => self.open_sidebar(),
            Control::CloseSidebar | Control::SidebarOverlay => self.close_sidebar(),
            Control::SidebarPanel => {}
            Control::Nav(section) => self.navigate(section),
            Control::AddFlashcard => self.open_modal(Modal::Notice(s.flashcards_in_development)),
            Control::AddImage => self.open_modal(Modal::Notice(s.gallery_in_development)),
            Control::AddNote => self.open_modal(Modal::Notice(s.notes_in_development)),
            Control::SendMessage => self.send_message(),
            Control::ModalBackdrop => self.close_modal(),
        }
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.state.toggle_theme();
        self.apply_theme();
        tracing::debug!(theme = theme.as_str(), "theme toggled");
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width <= self.config.ui.narrow_width
    }

    /// Deactivates everything, then activates `section` and every nav
    /// control that targets it.
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
        if let Some(idx) = Section::ALL.iter().position(|s| *s == section) {
            self.sidebar_cursor = idx;
        }
        if self.is_narrow() {
            self.close_sidebar();
        }
    }

    /// Navigates by section identifier. Unknown identifiers change nothing.
    pub fn navigate_to(&mut self, id: &str) -> bool {
        match Section::from_id(id) {
            Some(section) => {
                self.navigate(section);
                true
            }
            None => {
                tracing::warn!(id, "no section with this id");
                false
            }
        }
    }

    pub fn is_section_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
        if let Some(idx) = Section::ALL.iter().position(|s| *s == self.active_section) {
            self.sidebar_cursor = idx;
        }
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    pub fn chat_input(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_chat_input(&mut self, text: &str) {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        self.textarea = TextArea::new(lines);
    }

    pub fn clear_chat_input(&mut self) {
        self.textarea = TextArea::new(vec![String::new()]);
    }

    /// Posts the trimmed input and queues the canned reply. Blank input is
    /// ignored and left in place.
    pub fn send_message(&mut self) {
        let input = self.chat_input();
        let message = input.trim();
        if message.is_empty() {
            return;
        }
        let message = message.to_string();
        self.add_message_to_chat(message, Author::User);
        self.clear_chat_input();
        self.scheduler
            .schedule_once(self.config.chat.reply_delay(), Task::ChatReply);
    }

    pub fn add_message_to_chat(&mut self, text: String, author: Author) {
        self.chat_transcript.push(ChatEntry { author, text });
        self.chat_scroll = 0;
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advances the scheduler and runs whatever came due.
    pub fn advance(&mut self, elapsed: Duration) {
        for task in self.scheduler.advance(elapsed) {
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::StudyTick => self.on_study_tick(),
            Task::ChatReply => {
                let reply = self.config.canned_reply().to_string();
                self.add_message_to_chat(reply, Author::Bot);
                tracing::debug!("canned chat reply posted");
            }
        }
    }

    fn on_study_tick(&mut self) {
        let elapsed = self.state.tick_study_time();
        self.render_pomodoro();
        if elapsed % STATS_REFRESH_TICKS == 0 {
            self.render_stats();
            tracing::debug!(study_time = elapsed, "stats refreshed");
        }
    }
}
