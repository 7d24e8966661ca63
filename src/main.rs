//! Segplot - plot 2D line segments in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use segplot::app::App;
use segplot::geometry::Segment;
use segplot::input;
use segplot::intersect::{find_intersections, format_report, Algorithm};
use segplot::plot::{svg, Bounds, ColorPalette};
use segplot::ui;
use segplot::util::LayoutConfig;
use segplot::SegplotError;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "segplot", version)]
#[command(about = "Plot 2D line segments read from stdin", long_about = None)]
struct Args {
    /// File to read segments from instead of stdin
    input: Option<PathBuf>,

    /// Print every intersection point and mark them on the plot
    #[arg(short, long)]
    intersections: bool,

    /// Intersection search to run
    #[arg(long, value_enum, default_value_t = Algorithm::Sweep)]
    algorithm: Algorithm,

    /// Also write the plot to an SVG file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not open the interactive plot view
    #[arg(long)]
    no_display: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log filter directive used with --log
    #[arg(long, default_value = "debug")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::try_new(&args.log_level)?)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting segplot");
    }

    let config = LayoutConfig::default();
    let (segments, source_name) = read_input(&args).map_err(|e| {
        tracing::error!(input_error = e.is_input_error(), "Failed to read segments: {}", e);
        e
    })?;
    tracing::info!(segments = segments.len(), source = %source_name, "Input read");

    let intersections = if args.intersections {
        let found = find_intersections(&segments, args.algorithm);
        let mut stdout = io::stdout().lock();
        stdout.write_all(format_report(&found).as_bytes())?;
        stdout.flush()?;
        Some(found)
    } else {
        None
    };

    if let Some(path) = &args.output {
        let bounds = Bounds::from_segments(&segments).padded(config.plot.padding_factor);
        svg::export(
            path,
            &segments,
            intersections.as_deref().unwrap_or_default(),
            &bounds,
            ColorPalette::default(),
            &config.svg,
        )?;
    }

    if args.no_display || !io::stdout().is_terminal() {
        tracing::info!("Interactive view skipped");
        return Ok(());
    }

    let mut app = App::new(segments, args.algorithm, config.plot, source_name);
    if let Some(found) = intersections {
        app = app.with_intersections(found);
    }
    run_terminal(app)?;

    tracing::info!("Segplot exited");
    Ok(())
}

/// Read segments from the input file, or from stdin with a prompt when interactive.
fn read_input(args: &Args) -> segplot::Result<(Vec<Segment>, String)> {
    if let Some(path) = &args.input {
        let segments = input::read_segments_from_path(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        return Ok((segments, name));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stdout = io::stdout();
        write!(stdout, "Enter the number of segments: ")?;
        stdout.flush()?;
    }
    Ok((input::read_segments(stdin.lock())?, "stdin".to_string()))
}

fn terminal_error(err: io::Error) -> SegplotError {
    SegplotError::Terminal(err.to_string())
}

fn run_terminal(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    tracing::info!(segments = app.segments.len(), "Viewer opened");

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (_, KeyCode::Esc)
            | (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => break,

            // Zoom; '+' usually arrives with SHIFT held
            (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => app.zoom_in(),
            (_, KeyCode::Char('-')) | (_, KeyCode::Char('_')) => app.zoom_out(),

            // Pan
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.pan(-1, 0);
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.pan(1, 0);
            },
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.pan(0, 1);
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.pan(0, -1);
            },
            (KeyModifiers::NONE, KeyCode::Char('0')) => app.reset_view(),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('i')) => app.toggle_intersections(),
            (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_palette(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                app.status = "Help: q=quit, +/-=zoom, hjkl=pan, 0=reset, i=intersections, c=palette, T=theme, y/Y=copy".to_string();
            },

            // Clipboard
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_segments(),
            (KeyModifiers::SHIFT, KeyCode::Char('Y')) => app.copy_intersections(),

            _ => {},
        }
    }

    tracing::info!("Viewer closed");
    Ok(())
}
