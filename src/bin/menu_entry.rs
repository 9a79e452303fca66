use std::path::PathBuf;

use anyhow::{Context, Result};
use catering_scaler::config::Settings;
use catering_scaler::models::Variant;
use catering_scaler::observability::init_logging;
use catering_scaler::tui::app::{AppAction, EntryApp, EntryOutcome};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Enter ingredients by hand and view the scaled shopping list and recipe
#[derive(Parser)]
#[command(name = "menu_entry", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ingredient sheet flavour, overrides the configured one
    #[arg(long, value_enum)]
    variant: Option<Variant>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref()).context("Failed to load configuration")?;
    // Anything chattier would draw over the alternate screen
    init_logging("warn")?;

    let mut app = EntryApp::new(
        args.variant.unwrap_or(settings.variant),
        settings.manual_ingredient_count,
        settings.default_guests()?,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e);
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match app.handle_key(key.code) {
                AppAction::Continue => {}
                action @ (AppAction::Done | AppAction::Cancel) => break Ok(action),
            },
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    match result? {
        AppAction::Done => match app.into_context().outcome {
            Some(EntryOutcome::Generated(report)) => {
                print!("{}", report.shopping_list);
                println!();
                print!("{}", report.recipe);
            }
            Some(EntryOutcome::Failed(error)) => eprintln!("Could not generate: {}", error),
            Some(EntryOutcome::Empty) | None => println!("No ingredients entered."),
        },
        _ => println!("Entry cancelled."),
    }

    Ok(())
}
