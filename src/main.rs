use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use toaster::App;
use toaster::config::{self, ConfigResult};
use toaster::scheduler::ManualClock;
use toaster::toast::ToastHost;

/// Transient toast notifications in the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Transient toast notifications with auto-dismiss timing"
)]
struct Args {
    /// Show this message as a toast on startup
    #[arg(short, long)]
    message: Option<String>,

    /// Severity of the startup toast: info, success, error or warning
    /// (anything else is treated as info)
    #[arg(short, long, default_value = "info")]
    severity: String,

    /// How long the startup toast stays, in milliseconds
    #[arg(short, long)]
    duration: Option<u64>,

    /// Run without a terminal: advance a virtual clock to this many
    /// milliseconds and print the display tree
    #[arg(long, value_name = "MS")]
    dump_at: Option<u64>,

    /// Config file to use instead of ~/.config/toaster/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/toaster-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    if let Some(at) = args.dump_at {
        print!("{}", dump_at(&args, config_result, at));
        return Ok(());
    }

    let terminal = init_terminal()?;
    let result = run(terminal, &args, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TOASTER DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/toaster-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== TOASTER DEBUG SESSION STARTED ===");
}

/// Headless mode: replay the startup toasts on a manual clock
fn dump_at(args: &Args, config_result: ConfigResult, at_ms: u64) -> String {
    let clock = ManualClock::new();
    let mut host = ToastHost::with_clock(clock.clone(), config_result.config.toast);

    if let Some(warning) = &config_result.warning {
        host.notify_str(warning, "warning", None);
    }
    if let Some(message) = &args.message {
        host.notify_str(message, &args.severity, args.duration);
    }

    clock.set(Duration::from_millis(at_ms));
    host.tick();
    host.tree().to_markup()
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, args: &Args, config_result: ConfigResult) -> Result<()> {
    let mut app = App::new(&config_result.config);

    if let Some(warning) = config_result.warning {
        app.flashes.flash(warning, "warning");
    }
    app.drain_flashes();

    if let Some(message) = &args.message {
        app.toasts.notify_str(message, &args.severity, args.duration);
    }

    loop {
        app.tick();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
