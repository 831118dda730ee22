use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use termfolio::app::{App, AppEvent};
use termfolio::content::ContentDocument;
use termfolio::schema::person_schema;
use termfolio::tracing_setup;
use termfolio::view;

/// One typewriter character per tick, matching the original's 10 ms
/// reveal interval.
const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// A terminal-emulator-styled personal portfolio
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "A fake-terminal portfolio driven by a JSON content document", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the content document
    #[arg(value_name = "CONTENT", default_value = "data/content.json")]
    content: PathBuf,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Don't echo submitted command lines into the transcript
    #[arg(long)]
    no_echo: bool,

    /// Print the structured Person metadata as JSON and exit
    #[arg(long)]
    dump_schema: bool,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.dump_schema {
        let document = ContentDocument::load_from_file(&args.content)
            .with_context(|| format!("loading {}", args.content.display()))?;
        println!("{}", serde_json::to_string_pretty(&person_schema(&document))?);
        return Ok(());
    }

    let log_path = args
        .log_file
        .unwrap_or_else(|| std::env::temp_dir().join("termfolio.log"));
    tracing_setup::init_global(&log_path);
    tracing::info!(content = %args.content.display(), "starting");

    let mut app = App::new(args.content, !args.no_echo);
    app.bootstrap();

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();
    result
}

fn run(mut terminal: ratatui::DefaultTerminal, app: &mut App) -> AnyhowResult<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal
            .draw(|frame| view::draw(frame, app))
            .context("drawing frame")?;

        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event_poll(timeout).context("polling terminal events")? {
            match event_read().context("reading terminal event")? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_event(AppEvent::Key(key));
                }
                // Resize is picked up by the next draw.
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.handle_event(AppEvent::Tick);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
