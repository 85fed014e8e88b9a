use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use ghbrowse::app::App;
use ghbrowse::cli::{parse_args, CliCommand, USAGE, VERSION};
use ghbrowse::config::AppConfig;
use ghbrowse::logging::init_tracing;
use ghbrowse::terminal::{setup_panic_hook, TerminalManager};
use ghbrowse::ui;

/// Spinner frame interval.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let query = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("ghbrowse {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run { query } => query,
    };

    color_eyre::install()?;

    let config = AppConfig::from_env()?;
    if let Some(path) = init_tracing(&config) {
        eprintln!("Logging to {}", path.display());
    }
    tracing::info!(version = VERSION, ?config, "Starting ghbrowse");

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::from_config(&config, runtime.handle().clone())?;
    if let Some(query) = query {
        app.query = query;
        app.submit_search();
    }

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    // Pending fetches are abandoned with the runtime.
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("ghbrowse exited");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut search_rx = app.search.subscribe();
    let mut repo_list_rx = app.repo_list.subscribe();
    let mut connection_rx = app.connection.subscribe();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::error!(error = %err, "Terminal event stream failed");
                    return Err(err.into());
                }
                None => return Ok(()),
            },

            Ok(()) = search_rx.changed() => app.mark_dirty(),
            Ok(()) = repo_list_rx.changed() => app.mark_dirty(),
            Ok(()) = connection_rx.changed() => app.mark_dirty(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
