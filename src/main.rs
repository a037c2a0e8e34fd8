mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod report;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::RandomSensorSource;
use error::Result;
use logic::{critical_flag_self_check, Simulation};
use models::Report;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::ReportScreen;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging on stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check) => run_check(),
        Some(Commands::Run) | None => run_simulation(cli),
    }
}

fn run_check() -> Result<()> {
    let records = critical_flag_self_check()?;

    for record in &records {
        println!(
            "Hour {}: alert={}, critical={}, conditions={}",
            record.hour,
            record.alert,
            record.critical,
            record.conditions_label()
        );
    }
    println!("Self-check passed: critical flag raised at hour {}", records.len());
    Ok(())
}

fn run_simulation(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.clone())?;

    // CLI flags take priority over the config file
    if let Some(intervals) = cli.intervals {
        config.simulation.intervals = intervals;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    config.validate()?;

    let seed = config.simulation.seed;
    let mut source = RandomSensorSource::new(config.sensors, seed);
    let simulation = Simulation::new(config.simulation.intervals);

    tracing::debug!(
        "Rules: {}",
        simulation
            .engine()
            .list_rules()
            .iter()
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let report = simulation.run(&mut source, seed);

    if cli.interactive {
        return run_viewer(report);
    }

    println!("{}", report::render(&report, config.report.format)?);
    Ok(())
}

fn run_viewer(report: Report) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(report);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let screen = ReportScreen::new(&app.report, app.visible_records())
                .with_selection(app.view_state.selected_index)
                .alerts_only(app.alerts_only);
            f.render_widget(screen, area);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                    KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                    KeyCode::Home => app.select_first(),
                    KeyCode::End => app.select_last(),
                    KeyCode::Char('a') => app.toggle_alert_filter(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
