// Algoscope: step-by-step data structure and algorithm visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use algoscope::config::Config;
use algoscope::player::scheduler::DeadlineScheduler;
use algoscope::session::{Session, VisualizerKind};
use algoscope::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <visualizer> [options]", program_name);
    eprintln!();
    eprintln!("Visualizers:");
    for kind in VisualizerKind::ALL {
        eprintln!("  {:<15} {}", kind.slug(), kind.name());
    }
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --capacity N       Maximum stack/queue/list size (default 20)");
    eprintln!("  --interval-ms N    Auto-play delay between steps (default 1000)");
    eprintln!("  --seed N           Seed for random structures");
    eprintln!("  --log FILE         Write tracing output to FILE");
    eprintln!("  --log-filter F     Tracing filter (default: $ALGOSCOPE_LOG or info)");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} bst --seed 42", program_name);
}

/// Route tracing to the log file; the TUI owns the terminal
fn init_tracing(config: &Config) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algoscope");

    let config = match Config::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: could not open log file: {}", e);
    }

    let kind = config.visualizer;
    let files = kind.resource_files();
    eprintln!("Starting {} visualizer...", kind.name());
    eprintln!("Explanation: {}  Reference code: {}", files.explanation, files.code);
    tracing::info!(visualizer = kind.slug(), capacity = config.capacity, "Session started");

    let session = Session::new(config, DeadlineScheduler::new());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
