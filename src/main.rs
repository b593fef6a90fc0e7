// exprtree: arithmetic expression parser with parse tree visualization

use std::io::{self, IsTerminal};

use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use exprtree::config::{Cli, Config};
use exprtree::repl;
use exprtree::ui::App;

/// Install a stderr subscriber filtered by `RUST_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    // One-shot mode: report each expression given on the command line
    if !cli.exprs.is_empty() {
        init_logging();
        let mut stdout = io::stdout().lock();
        let mut all_ok = true;
        for expr in &cli.exprs {
            all_ok &= repl::report_line(expr, &config, &mut stdout)?;
        }
        if !all_ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    if cli.plain || !io::stdin().is_terminal() {
        init_logging();
        let stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        repl::run(stdin, &mut stdout, &config)?;
        return Ok(());
    }

    // Logs would draw over the alternate screen unless asked for
    if cli.log {
        init_logging();
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
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
