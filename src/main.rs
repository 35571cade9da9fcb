mod app;
mod catalog;
mod config;
mod error;
mod events;
mod i18n;
mod log;
mod model;
mod picker;
mod selector;
mod settings;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use config::Config;
use error::PickerError;
use events::EventHandler;
use selector::{MentionSelector, OpenSignal, open_channel};
use settings::{JsonFileStore, SettingsStore};

/// Command line options
#[derive(Debug, Default)]
struct Args {
    catalog: Option<PathBuf>,
    settings: Option<PathBuf>,
    open: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" | "--settings" | "-s" => {
                if i + 1 < args.len() {
                    let path = PathBuf::from(&args[i + 1]);
                    if matches!(args[i].as_str(), "--catalog" | "-c") {
                        parsed.catalog = Some(path);
                    } else {
                        parsed.settings = Some(path);
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: {} requires a path argument", args[i]);
                }
            }
            "--open" => parsed.open = true,
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    parsed
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    let args = parse_args();
    let config = Config::load().with_overrides(args.catalog, args.settings);

    let (mut app, signal) = build_app(&config)?;

    let store = JsonFileStore::new(config.settings_path());
    log::log(&format!("Settings file: {}", store.path().display()));

    if args.open {
        app.trigger.fire();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, signal, &store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}

/// Load the catalog and wire the selector to a fresh open trigger.
fn build_app(config: &Config) -> error::Result<(App, OpenSignal)> {
    let providers = catalog::load(config.catalog().as_deref())?;
    log::log(&format!("Loaded {} providers", providers.len()));

    let (trigger, signal) = open_channel();
    let selector = MentionSelector::new(providers, config.translator(), config.menu_height());
    Ok((App::new(selector, trigger), signal))
}

async fn run_app<B: Backend, S: SettingsStore>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    signal: OpenSignal,
    store: &S,
) -> error::Result<()> {
    app.selector.mount(signal, store).await;

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    let result = loop {
        app.tick();

        // Render
        if let Err(e) = terminal.draw(|frame| tui::ui::render(frame, app)) {
            break Err(PickerError::Terminal(e.to_string()));
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        for action in EventHandler::handle_event(app, &event) {
                            app.dispatch(action, store).await;
                        }
                    }
                    Some(Err(e)) => break Err(PickerError::Io(e)),
                    None => break Ok(()),
                }
            }
            // Picks up open requests fired outside of terminal events
            _ = tick.tick() => {}
        }

        if app.should_quit {
            break Ok(());
        }
    };

    app.selector.unmount();
    log::log("=== mention-picker exiting ===");
    result
}
