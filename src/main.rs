//! Gridpaint binary
//!
//! Acquires the terminal, runs the interactive session, and restores the
//! terminal unconditionally on the way out.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gridpaint::app;
use gridpaint::terminal::Terminal;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut terminal = match Terminal::init() {
        Ok(terminal) => terminal,
        Err(e) => {
            // nothing was rendered, stderr is still the original stream
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = app::run(&mut terminal);
    terminal.finalize();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
