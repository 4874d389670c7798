//! Terminal landing screen (default binary).
//!
//! Draws the animated ocean landing page, lets the user pick a menu entry
//! with keys or mouse, and prints the chosen entry after restoring the
//! terminal.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use tui_lagoon::cli::{parse_args, CliArgs, USAGE};
use tui_lagoon::config::LagoonConfig;
use tui_lagoon::engine::{AnimationClock, LandingPage};
use tui_lagoon::input::{handle_key_event, left_click, ClickTracker};
use tui_lagoon::term::{CellStyler, CrosstermStyler, PlainStyler, TerminalRenderer};
use tui_lagoon::types::{Canvas, LandingAction};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        print!("{}", USAGE);
        return Ok(());
    }
    init_logging(&cli)?;

    // Config problems surface before the terminal is touched.
    let config = match &cli.config {
        Some(path) => LagoonConfig::load(path)?,
        None => LagoonConfig::default(),
    };

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut page = LandingPage::new(w, h);
    let rejected = config.apply(&mut page);
    if rejected > 0 {
        info!("{} config value(s) ignored", rejected);
    }
    let clock = config.clock(cli.fps);

    let styler: Box<dyn CellStyler> = if cli.no_color || config.no_color {
        Box::new(PlainStyler)
    } else {
        Box::new(CrosstermStyler::new())
    };
    let mut term = TerminalRenderer::new(styler);
    term.enter()?;
    info!("landing page started at {}x{}, tick {}ms", w, h, clock.interval_ms());

    let result = run(&mut term, &mut page, clock);

    // Always try to restore terminal state.
    let choice = settle(result, term.exit())?;
    info!("landing page closed, choice: {:?}", choice);
    if let Some(label) = choice {
        println!("{}", label);
    }
    Ok(())
}

/// A failed terminal restore is logged; the run's own result is returned.
fn settle<T>(result: Result<T>, restored: Result<()>) -> Result<T> {
    if let Err(e) = restored {
        warn!("failed to restore terminal: {:#}", e);
    }
    result
}

fn init_logging(cli: &CliArgs) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let log_file = File::create(path)
        .map_err(|e| anyhow!("cannot create log file {}: {}", path.display(), e))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

/// Returns the confirmed menu label, or `None` when the user quit.
fn run(
    term: &mut TerminalRenderer,
    page: &mut LandingPage,
    mut clock: AnimationClock,
) -> Result<Option<String>> {
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let mut clicks = ClickTracker::new();
    let mut frame = Canvas::default();

    loop {
        // Render.
        page.render_into(&mut frame);
        term.draw_swap(&mut frame)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(clock.timeout_ms(now_ms()));
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key),
                Event::Mouse(mouse) => left_click(mouse).and_then(|(x, y)| {
                    page.menu_item_at(x, y)
                        .map(|item| clicks.menu_click(x, y, item, now_ms()))
                }),
                Event::Resize(w, h) => {
                    page.resize(w, h);
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                debug!("action {}", action.as_str());
                match action {
                    LandingAction::Quit => return Ok(None),
                    LandingAction::Confirm => return Ok(Some(page.selected_label().to_string())),
                    other => {
                        page.apply(other);
                    }
                }
            }
        }

        // Tick.
        if clock.poll(now_ms()) {
            page.tick();
        }
    }
}
