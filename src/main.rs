// ============================================================================
// STUDYDASH - terminal study dashboard
// ============================================================================
//
// 1. CLI & config        - flags layered over config.toml
// 2. Startup             - logging, stale state cleanup, terminal setup
// 3. Main loop           - draw, poll input, advance scheduled tasks
// ============================================================================

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

use studydash::i18n::Locale;
use studydash::state::Theme;
use studydash::{App, Config, events, logging, storage, ui};

#[derive(Debug, Parser)]
#[command(name = "studydash", about = "Terminal study dashboard", version)]
struct Cli {
    /// Config file, defaults to <config dir>/studydash/config.toml
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Starting theme
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Interface language
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// Log level for the studydash target (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Keep whatever an earlier run left in the state directory
    #[arg(long)]
    no_clear: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load(&path)?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = ?err, "startup aborted");
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).context("loading configuration")?;
    let data_dir = config.storage.resolve_data_dir()?;
    let log_path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| logging::default_log_path(&data_dir));
    logging::init(&config.logging.level, &log_path).context("initializing logging")?;
    tracing::info!("studydash v{}", env!("CARGO_PKG_VERSION"));

    if !cli.no_clear {
        storage::clear_persisted_state_or_warn(&data_dir);
    }

    let app = App::start(config, Local::now().date_naive());

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    drop(terminal);
    drop(guard);
    tracing::info!("studydash exited");
    res
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
/// Dropping it restores the terminal, including on early `?` returns.
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { enhanced: false };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
        // Lets Shift+Enter arrive as Enter with SHIFT set
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            guard.enhanced = true;
        }
        tracing::debug!(enhanced = guard.enhanced, "terminal ready");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        if let Err(err) = restore_terminal(&mut io::stdout(), self.enhanced) {
            tracing::warn!(error = %err, "could not restore terminal");
        }
    }
}

fn restore_terminal<W: Write>(out: &mut W, enhanced: bool) -> io::Result<()> {
    if enhanced {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(out, LeaveAlternateScreen, event::DisableMouseCapture, cursor::Show)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let frame_rate = Duration::from_millis(250);
    let mut last_advance = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        let timeout = app
            .scheduler
            .next_due_in()
            .map_or(frame_rate, |due| due.min(frame_rate));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if events::handle_key(&mut app, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => events::handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        app.advance(now - last_advance);
        last_advance = now;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"light\"\nlocale = \"pt-BR\"\n").unwrap();

        let cli = Cli::parse_from([
            "studydash",
            "--config",
            path.to_str().unwrap(),
            "--theme",
            "dark",
            "--locale",
            "en",
            "--log-level",
            "debug",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.ui.locale, Locale::En);
        assert_eq!(config.logging.level, "debug");
        assert!(!cli.no_clear);
    }

    #[test]
    fn restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
        assert!(!text.contains("\x1b[<1u"));

        let mut out = Vec::new();
        restore_terminal(&mut out, true).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\x1b[<1u"));
    }

    #[test]
    fn bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer\n").unwrap();
        let cli = Cli::parse_from(["studydash", "--config", path.to_str().unwrap()]);
        assert!(load_config(&cli).is_err());
    }
}
