use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use awacs_dashboard::data::duration::parse_duration;
use awacs_dashboard::{
    events, export, ui, App, DashboardState, DataSource, FileSource, Palette, Settings,
    StreamSource,
};

/// Poll interval for push-based sources (TCP).
const STREAM_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "awacs-dashboard", version)]
#[command(about = "Terminal dashboard for device connectivity and firmware versions")]
struct Args {
    /// Path to a JSON device snapshot
    #[arg(short, long, default_value = "devices.json", conflicts_with = "connect")]
    file: PathBuf,

    /// Connect to a TCP endpoint streaming snapshots (host:port)
    #[arg(short, long, conflicts_with = "file")]
    connect: Option<String>,

    /// Refresh interval for --file, e.g. "1s" or "500ms"
    #[arg(short, long)]
    refresh: Option<String>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the aggregated series for --file to a JSON file and exit
    #[arg(short, long, conflicts_with = "connect")]
    export: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    let log_file = args.log_file.clone().unwrap_or_else(|| settings.log_file.clone());
    let _guard = setup_tracing(&log_file, args.verbose);

    let refresh = match args.refresh {
        Some(ref s) => parse_duration(s).context("invalid --refresh")?,
        None => settings.refresh_interval()?,
    };
    let palette = settings.palette()?;

    if let Some(ref export_path) = args.export {
        return export_once(&args.file, export_path, &palette);
    }

    if let Some(ref addr) = args.connect {
        return run_with_tcp(addr, palette);
    }

    run_tui(Box::new(FileSource::new(&args.file)), palette, refresh)
}

/// Log to a file; stdout belongs to the TUI. The guard must stay alive
/// until exit so buffered lines are flushed.
fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("awacs_dashboard={level}")));

    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("awacs-dashboard.log"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .init();

    guard
}

/// Read the snapshot file once, aggregate it and write the export.
fn export_once(snapshot_path: &Path, export_path: &Path, palette: &Palette) -> Result<()> {
    let mut source = FileSource::new(snapshot_path);
    let Some(snapshot) = source.poll() else {
        anyhow::bail!(
            "could not load {}: {}",
            snapshot_path.display(),
            source.error().unwrap_or("no data")
        );
    };

    let state = DashboardState::apply(None, snapshot, palette);
    export::write_export(&state, export_path)?;

    println!("Exported dashboard state to: {}", export_path.display());
    Ok(())
}

fn run_with_tcp(addr: &str, palette: Palette) -> Result<()> {
    // Kept alive for the TUI's lifetime; the stream task runs on it
    let rt = tokio::runtime::Runtime::new()?;

    let source = rt.block_on(async {
        println!("Connecting to {}...", addr);
        let stream = tokio::net::TcpStream::connect(addr)
            .await
            .with_context(|| format!("Failed to connect to {}", addr))?;
        info!(addr, "connected to snapshot stream");
        Ok::<_, anyhow::Error>(StreamSource::spawn(stream, addr))
    })?;

    let _enter = rt.enter();
    run_tui(Box::new(source), palette, STREAM_POLL_INTERVAL)
}

fn run_tui(source: Box<dyn DataSource>, palette: Palette, refresh: Duration) -> Result<()> {
    // Detect the theme before raw mode takes over the terminal
    let mut app = App::new(source, palette);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    app.reload_data();
    let result = run_app(&mut terminal, &mut app, refresh);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!(error = %e, "dashboard exited with error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(Event::Key(key)) = events::poll_event(Duration::from_millis(100))? {
            events::handle_key_event(app, key);
        }

        if last_refresh.elapsed() >= refresh {
            app.reload_data();
            last_refresh = Instant::now();
        }
    }

    info!("dashboard stopped");
    Ok(())
}
