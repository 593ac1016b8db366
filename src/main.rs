use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use termdots::app::App;
use termdots::clock::{SystemTimeSource, ThreadClock, TimeSource};
use termdots::config::Config;
use termdots::engine::reference::ReferenceDates;
use termdots::engine::{DerivedState, compute_derived};
use termdots::event::{AppEvent, EventHandler};
use termdots::ui::components::dashboard::Dashboard;
use termdots::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "termdots",
    version,
    about = "Countdown to the end of the term, one dot per day"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Read config from this file instead of the default location")]
    config: Option<PathBuf>,

    #[arg(long, help = "Draw the current-day dot without pulsing")]
    no_animate: bool,

    #[arg(long, help = "Print the current countdown as JSON and exit")]
    snapshot: bool,

    #[arg(long, help = "Write logs to this file (filter with RUST_LOG)")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Write the effective settings back to the config file")]
    save_config: bool,
}

#[derive(Serialize)]
struct SnapshotReport<'a> {
    references: &'a ReferenceDates,
    #[serde(flatten)]
    state: &'a DerivedState,
    dots: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        install_tracing(path)?;
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = resolve_config(&cli, &config_path)?;

    let refs = ReferenceDates::local()?;
    let time = SystemTimeSource;

    if cli.snapshot {
        let state = compute_derived(time.now(), &refs);
        let report = SnapshotReport {
            references: &refs,
            state: &state,
            dots: state.progress.total_days(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(
            requested = %config.theme,
            available = ?Theme::available_themes(),
            "unknown theme, using default"
        );
        Theme::default()
    });
    tracing::info!(theme = %theme.name, animate = config.animate, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(config.frame_interval());
    let mut app = App::new(refs, ThreadClock::new(), theme, config);

    let tick_tx = events.sender();
    app.mount(
        time.now(),
        Box::new(move || {
            let _ = tick_tx.send(AppEvent::Tick);
        }),
    );

    let result = run_app(&mut terminal, &mut app, &events, &time);
    app.unmount();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{err:#}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// File values, then flag overrides. A config file that does not parse is an
/// error wherever it lives.
fn resolve_config(cli: &Cli, path: &Path) -> Result<Config> {
    let mut config = Config::load_from(path)?;
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if cli.no_animate {
        config.animate = false;
    }
    config.normalize();
    if cli.save_config {
        config.save_to(path)?;
        tracing::info!(path = %path.display(), "saved config");
    }
    Ok(config)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    time: &impl TimeSource,
) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|frame| render(frame, app))?;
            app.mark_drawn();
        }

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick => app.on_tick(time.now()),
            AppEvent::Frame => {}
            AppEvent::Resize(_, _) => app.invalidate(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let Some(snapshot) = app.snapshot() else {
        return;
    };
    frame.render_widget(
        Dashboard::new(&snapshot, &app.theme, app.pulse_elapsed()),
        frame.area(),
    );
}

fn install_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}
