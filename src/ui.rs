// ============================================================================
// RENDERING (Drawing) - paints the rendered page; records clickable areas
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Author, Control, Modal};
use crate::i18n::{Locale, Strings};
use crate::state::Theme;
use crate::view::{FeatureView, Section};

const SIDEBAR_WIDTH: u16 = 30;

/// Colors chosen by the root theme attribute.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub active_bg: Color,
    pub active_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                active_bg: Color::Blue,
                active_fg: Color::White,
            },
            Theme::Dark => Self {
                bg: Color::Rgb(24, 24, 32),
                fg: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                active_bg: Color::Cyan,
                active_fg: Color::Black,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    fn active(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Get centered popup area for overlays
pub fn get_popup_area(frame_width: u16, frame_height: u16, width_percent: u16, height_percent: u16) -> Rect {
    let width = frame_width.saturating_mul(width_percent) / 100;
    let height = frame_height.saturating_mul(height_percent) / 100;
    let x = (frame_width.saturating_sub(width)) / 2;
    let y = (frame_height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

// Helper: Split a rectangular area into N equal horizontal chunks
fn split_equal_horizontal(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let pct = 100 / count as u16;
    let constraints = vec![Constraint::Percentage(pct); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

// Helper: Render a bordered button and register it as a control
fn render_control(
    frame: &mut ratatui::Frame,
    app: &mut App,
    control: Control,
    text: &str,
    area: Rect,
    style: Style,
) {
    let btn = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(btn, area);
    app.control_areas.push((control, area));
}

fn palette(app: &App) -> Palette {
    Palette::for_theme(app.state.theme)
}

pub fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let size = frame.size();
    app.viewport_width = size.width;
    app.control_areas.clear();
    app.modal_area = Rect::default();

    let pal = palette(app);
    frame.render_widget(Block::default().style(pal.base()), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(frame, app, chunks[0]);

    match app.active_section {
        Section::Dashboard => draw_dashboard(frame, app, chunks[1]),
        Section::Flashcards => draw_feature_section(frame, app, chunks[1], Section::Flashcards),
        Section::Gallery => draw_feature_section(frame, app, chunks[1], Section::Gallery),
        Section::Calendar => draw_calendar(frame, app, chunks[1]),
        Section::Chat => draw_chat(frame, app, chunks[1]),
        Section::Timer => draw_timer(frame, app, chunks[1]),
        Section::Notes => draw_feature_section(frame, app, chunks[1], Section::Notes),
    }

    draw_footer(frame, app, chunks[2]);

    if app.sidebar_open {
        draw_sidebar(frame, app, size);
    }

    if let Some(modal) = app.modal.clone() {
        draw_modal(frame, app, &modal);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let pal = palette(app);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(10),
            Constraint::Length(7),
        ])
        .split(area);

    let menu = app.locale.strings().menu;
    render_control(frame, app, Control::MenuToggle, menu, chunks[0], pal.base().fg(pal.accent));

    let tabs = split_equal_horizontal(chunks[1], Section::ALL.len());
    for (section, rect) in Section::ALL.into_iter().zip(tabs) {
        let style = if app.is_section_active(section) {
            pal.active()
        } else {
            pal.base().fg(pal.accent)
        };
        let title = section.title(app.locale);
        render_control(frame, app, Control::Nav(section), title, rect, style);
    }

    let icon = app.page.header_toggle.icon;
    render_control(frame, app, Control::ThemeToggle, icon, chunks[2], pal.base());
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let pal = palette(app);
    let s = app.locale.strings();
    let hint = if app.active_section == Section::Chat {
        s.footer_hint_chat
    } else {
        s.footer_hint
    };
    let para = Paragraph::new(hint).style(pal.base().fg(pal.muted).italic());
    frame.render_widget(para, area);
}

fn feature_lines(view: &FeatureView, pal: Palette) -> Vec<Line<'static>> {
    match view {
        FeatureView::Placeholder(text) => {
            vec![Line::from(Span::styled(*text, Style::default().fg(pal.muted)))]
        }
        FeatureView::Items(items) => items
            .iter()
            .map(|item| Line::from(format!("• {item}")))
            .collect(),
    }
}

fn draw_dashboard(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let pal = palette(app);
    let s = app.locale.strings();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let stats = &app.page.stats;
    let counters = [
        (s.stat_flashcards, stats.flashcards.to_string()),
        (s.stat_images, stats.images.to_string()),
        (s.stat_events, stats.events.to_string()),
        (s.stat_study_time, stats.study_time_label()),
    ];
    let boxes = split_equal_horizontal(chunks[0], counters.len());
    for ((label, value), rect) in counters.into_iter().zip(boxes) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(value, Style::default().fg(pal.accent).bold())),
            Line::from(Span::styled(label, Style::default().fg(pal.muted))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .style(pal.base());
        frame.render_widget(card, rect);
    }

    let upcoming = Paragraph::new(feature_lines(&app.page.upcoming_events, pal))
        .block(
            Block::default()
                .title(s.upcoming_events_title)
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true })
        .style(pal.base());
    frame.render_widget(upcoming, chunks[1]);
}

fn draw_feature_section(frame: &mut ratatui::Frame, app: &mut App, area: Rect, section: Section) {
    let pal = palette(app);
    let s: &Strings = app.locale.strings();
    let (control, button, view) = match section {
        Section::Flashcards => (Control::AddFlashcard, s.add_flashcard, &app.page.flashcards),
        Section::Gallery => (Control::AddImage, s.add_image, &app.page.gallery),
        _ => (Control::AddNote, s.add_note, &app.page.notes),
    };
    let lines = feature_lines(view, pal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[0]);

    render_control(frame, app, control, button, controls[0], pal.base().fg(Color::Green));

    let grid = Paragraph::new(lines)
        .block(
            Block::default()
                .title(section.title(app.locale))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true })
        .style(pal.base());
    frame.render_widget(grid, chunks[1]);
}

fn draw_calendar(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let pal = palette(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("◄ ", Style::default().fg(pal.accent)),
        Span::styled(
            app.page.calendar.label.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ►", Style::default().fg(pal.accent)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL))
    .style(pal.base());
    frame.render_widget(header, chunks[0]);

    let body = Paragraph::new(Span::styled(
        app.page.calendar.body,
        Style::default().fg(pal.muted),
    ))
    .block(
        Block::default()
            .title(Section::Calendar.title(app.locale))
            .borders(Borders::ALL),
    )
    .style(pal.base());
    frame.render_widget(body, chunks[1]);
}

fn chat_lines(app: &App, pal: Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in &app.chat_transcript {
        let (icon, style) = match entry.author {
            Author::User => ("👤", Style::default().fg(pal.accent)),
            Author::Bot => ("🤖", Style::default().fg(Color::Green)),
        };
        for (i, text) in entry.text.split('\n').enumerate() {
            let prefix = if i == 0 { format!("{icon} ") } else { "   ".to_string() };
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::raw(text.to_string()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

// Input box contents with a visible caret
fn textarea_lines_with_cursor(app: &App, pal: Palette) -> Vec<Line<'static>> {
    let (cursor_row, cursor_col) = app.textarea.cursor();
    let mut lines = Vec::new();
    for (idx, line) in app.textarea.lines().iter().enumerate() {
        if idx == cursor_row {
            let char_col = cursor_col.min(line.chars().count());
            let mut with_caret = String::new();
            for (i, c) in line.chars().enumerate() {
                if i == char_col {
                    with_caret.push('|');
                }
                with_caret.push(c);
            }
            if char_col == line.chars().count() {
                with_caret.push('|');
            }
            lines.push(Line::from(Span::styled(with_caret, Style::default().fg(pal.accent))));
        } else {
            lines.push(Line::from(line.clone()));
        }
    }
    lines
}

fn draw_chat(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let pal = palette(app);
    let s = app.locale.strings();
    let input_height = (app.textarea.lines().len().min(6) as u16 + 2).max(3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(input_height)])
        .split(area);

    // Transcript is pinned to the newest entry unless scrolled back
    let lines = chat_lines(app, pal);
    let visible = chunks[0].height.saturating_sub(2);
    let offset = transcript_offset(lines.len(), visible, &mut app.chat_scroll);
    let transcript = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Section::Chat.title(app.locale))
                .borders(Borders::ALL),
        )
        .scroll((offset, 0))
        .style(pal.base());
    frame.render_widget(transcript, chunks[0]);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(chunks[1]);

    let input_lines = if app.chat_input().is_empty() {
        vec![
            Line::from(Span::styled("|", Style::default().fg(pal.accent))),
            Line::from(Span::styled(s.chat_placeholder, Style::default().fg(pal.muted))),
        ]
    } else {
        textarea_lines_with_cursor(app, pal)
    };
    let input = Paragraph::new(input_lines)
        .block(Block::default().borders(Borders::ALL))
        .style(pal.base());
    frame.render_widget(input, input_row[0]);

    render_control(frame, app, Control::SendMessage, s.send, input_row[1], pal.base().fg(Color::Green));
}

/// Top line of the transcript window. `scroll` counts lines back from the
/// newest entry and is clamped to what can actually be scrolled.
fn transcript_offset(total_lines: usize, visible: u16, scroll: &mut u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(visible);
    *scroll = (*scroll).min(max_scroll);
    max_scroll - *scroll
}

fn draw_timer(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let pal = palette(app);
    let s = app.locale.strings();
    let p = &app.page.pomodoro;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            p.study_clock.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{}: {}", s.pomodoro_today, p.today)),
        Line::from(format!("{}: {}", s.pomodoro_total, p.total)),
        Line::from(Span::styled(
            format!("{}: {}", s.pomodoro_last_date, p.last_date),
            Style::default().fg(pal.muted),
        )),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Section::Timer.title(app.locale))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .style(pal.base());
    frame.render_widget(panel, area);
}

fn draw_sidebar(frame: &mut ratatui::Frame, app: &mut App, size: Rect) {
    let pal = palette(app);
    let s = app.locale.strings();

    let area = Rect {
        x: size.x,
        y: size.y,
        width: SIDEBAR_WIDTH.min(size.width),
        height: size.height,
    };

    // Only the uncovered screen closes the sidebar; the panel itself blocks
    // clicks so nothing under it is hit through blank space.
    let outside = Rect {
        x: area.right(),
        width: size.right().saturating_sub(area.right()),
        ..size
    };
    if outside.width > 0 {
        app.control_areas.push((Control::SidebarOverlay, outside));
    }
    app.control_areas.push((Control::SidebarPanel, area));
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(s.app_title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(pal.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); Section::ALL.len()];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(3));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, section) in Section::ALL.into_iter().enumerate() {
        let style = if app.is_section_active(section) {
            pal.active()
        } else if idx == app.sidebar_cursor {
            pal.base().fg(pal.accent).add_modifier(Modifier::UNDERLINED)
        } else {
            pal.base()
        };
        let entry = Paragraph::new(format!(" {}  {}", idx + 1, section.title(app.locale)))
            .style(style);
        frame.render_widget(entry, rows[idx]);
        app.control_areas.push((Control::Nav(section), rows[idx]));
    }

    let n = Section::ALL.len();
    let toggle = &app.page.sidebar_toggle;
    let toggle_text = match toggle.label {
        Some(label) => format!("{} {}", toggle.icon, label),
        None => toggle.icon.to_string(),
    };
    render_control(frame, app, Control::ThemeToggleSidebar, &toggle_text, rows[n + 1], pal.base());
    render_control(frame, app, Control::CloseSidebar, s.close, rows[n + 2], pal.base().fg(Color::Red));
}

fn draw_modal(frame: &mut ratatui::Frame, app: &mut App, modal: &Modal) {
    let pal = palette(app);
    let s = app.locale.strings();
    let size = frame.size();
    let area = get_popup_area(size.width, size.height, 60, 40);
    app.modal_area = area;

    let (title, body): (&str, Vec<Line<'static>>) = match modal {
        Modal::Notice(text) => (s.notice_title, vec![Line::from(""), Line::from(*text)]),
        Modal::Help => (s.help_title, help_lines(app.locale)),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(pal.base().fg(pal.accent));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let para = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(pal.base());
    frame.render_widget(para, chunks[0]);

    let hint = Paragraph::new(s.dismiss_hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(pal.muted).italic());
    frame.render_widget(hint, chunks[1]);
}

fn help_lines(locale: Locale) -> Vec<Line<'static>> {
    locale.strings().help_lines.iter().map(|l| Line::from(*l)).collect()
}
