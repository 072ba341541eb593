use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use waypost::{
    search, site_index, Key, Navigator, OverlayController, Phase, ScoredResult, MAX_RESULTS,
};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query { text, json, limit } => run_query(&text, json, limit),
        Commands::Records { json } => run_records(json),
        Commands::Interactive => run_interactive(),
    }
}

fn run_query(text: &str, json: bool, limit: Option<usize>) -> Result<()> {
    let mut results = search(site_index(), text);
    if let Some(limit) = limit {
        results.truncate(limit.min(MAX_RESULTS));
    }

    if json {
        let out = serde_json::to_string_pretty(&results).context("serializing results")?;
        println!("{}", out);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results. Try one of:");
        for suggestion in waypost::NO_RESULT_SUGGESTIONS {
            println!("  {}", suggestion);
        }
        return Ok(());
    }

    println!(
        "Found {} result{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );
    for result in &results {
        print_result(result);
    }
    Ok(())
}

fn print_result(result: &ScoredResult) {
    let record = &result.record;
    println!(
        "  {} [{}] {} ({})  score {}",
        record.category.icon(),
        record.category.label(),
        record.title,
        record.url,
        result.score
    );
    if !record.content.is_empty() {
        println!("      {}", record.content);
    }
}

fn run_records(json: bool) -> Result<()> {
    let index = site_index();
    if json {
        let out = serde_json::to_string_pretty(index.records()).context("serializing records")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} records", index.len());
    for record in index.records() {
        println!(
            "  {} [{}] {} -> {}",
            record.category.icon(),
            record.category.label(),
            record.title,
            record.url
        );
    }
    Ok(())
}

/// Prints the destination instead of routing; the terminal has no SPA
/// router to hand the url to.
#[derive(Default)]
struct PrintNavigator {
    destination: Option<String>,
}

impl Navigator for PrintNavigator {
    fn navigate(&mut self, url: &str) {
        self.destination = Some(url.to_string());
    }
}

fn run_interactive() -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        bail!("interactive mode needs a TTY (try `waypost query <text>` instead)");
    }

    let mut overlay = OverlayController::new(site_index());
    let mut navigator = PrintNavigator::default();
    let mut typed = String::new();

    overlay.open();
    enable_raw_mode().context("entering raw mode")?;
    let outcome = interactive_loop(&mut overlay, &mut navigator, &mut typed);
    disable_raw_mode().context("leaving raw mode")?;
    outcome?;

    if let Some(url) = navigator.destination {
        println!("open {}", url);
    }
    Ok(())
}

fn interactive_loop(
    overlay: &mut OverlayController<'_>,
    navigator: &mut PrintNavigator,
    typed: &mut String,
) -> Result<()> {
    render(overlay, typed)?;

    while overlay.is_open() {
        // Wake at the debounce deadline even when no key arrives.
        let timeout = overlay
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(100));

        if event::poll(timeout).context("polling terminal events")? {
            let Event::Key(key) = event::read().context("reading terminal event")? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => overlay.key(Key::Escape, navigator),
                KeyCode::Enter => overlay.key(Key::Enter, navigator),
                KeyCode::Up => overlay.key(Key::ArrowUp, navigator),
                KeyCode::Down => overlay.key(Key::ArrowDown, navigator),
                KeyCode::Backspace => {
                    typed.pop();
                    overlay.input(typed, Instant::now());
                }
                KeyCode::Char('c')
                    if key
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL) =>
                {
                    overlay.close();
                }
                KeyCode::Char(c) => {
                    typed.push(c);
                    overlay.input(typed, Instant::now());
                }
                _ => {}
            }
        }

        overlay.tick(Instant::now());
        if overlay.is_open() {
            render(overlay, typed)?;
        }
    }
    Ok(())
}

/// Redraw the overlay. Raw mode needs explicit carriage returns.
fn render(overlay: &OverlayController<'_>, typed: &str) -> Result<()> {
    use crossterm::cursor::MoveTo;
    use crossterm::terminal::{Clear, ClearType};

    let mut out = std::io::stdout();
    crossterm::queue!(out, Clear(ClearType::All), MoveTo(0, 0))
        .context("clearing terminal")?;

    write!(out, "Search: {}_\r\n\r\n", typed)?;

    match overlay.phase() {
        Some(Phase::Empty) => {
            write!(out, "Type to search. Esc closes.\r\n")?;
        }
        Some(Phase::Querying) => {
            write!(out, "Searching...\r\n")?;
        }
        Some(Phase::Results) => {
            for (i, result) in overlay.results().iter().enumerate() {
                let marker = if overlay.selected() == Some(i) { ">" } else { " " };
                write!(
                    out,
                    "{} {} [{}] {} ({})\r\n",
                    marker,
                    result.record.category.icon(),
                    result.record.category.label(),
                    result.record.title,
                    result.record.url
                )?;
            }
            write!(out, "\r\nArrows navigate, Enter selects, Esc closes.\r\n")?;
        }
        Some(Phase::NoResults) => {
            write!(out, "No results found. Try:\r\n")?;
            for suggestion in overlay.suggestions() {
                write!(out, "  {}\r\n", suggestion)?;
            }
        }
        None => {}
    }

    out.flush().context("flushing terminal")?;
    Ok(())
}
