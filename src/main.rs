use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod app;
mod bot;
mod config;
mod dropdown;
mod error;
mod help_line;
mod history_pane;
mod layout;
mod notification;
mod poller;
mod scroll;
mod summary;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::App;
use error::DashError;

/// Terminal dashboard for a simulated trading bot
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal dashboard for a simulated trading bot"
)]
struct Args {
    /// Status endpoint to poll (overrides the configured poller URL)
    #[arg(long)]
    status_url: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/botdash-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/botdash-debug.log")
            .expect("Failed to open /tmp/botdash-debug.log");

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

        log::debug!("=== BOTDASH DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Rejected before the terminal starts so the error stays readable
    let status_url = resolve_status_url(&args, &config_result.config)?;

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config, status_url);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== BOTDASH DEBUG SESSION ENDED ===");

    Ok(())
}

/// Resolve the poller URL: the CLI flag wins and must parse as a URL;
/// the configured URL only applies while `[poller] enabled` is set.
fn resolve_status_url(args: &Args, config: &config::Config) -> Result<Option<String>, DashError> {
    if let Some(url) = &args.status_url {
        reqwest::Url::parse(url).map_err(|_| DashError::InvalidStatusUrl(url.clone()))?;
        return Ok(Some(url.clone()));
    }

    if config.poller.enabled {
        return Ok(config.poller.url.clone());
    }

    Ok(None)
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
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
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

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_error(&warning);
    }

    setup_poller(&mut app);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the poller worker thread and its update channel
fn setup_poller(app: &mut App) {
    let Some(url) = app.poller.url().map(str::to_string) else {
        return;
    };

    let (update_tx, update_rx) = std::sync::mpsc::channel();
    app.poller.attach_updates(update_rx);
    poller::worker::spawn_worker(url, update_tx);
}
