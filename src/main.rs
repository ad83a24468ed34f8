//! Binary entry point: resolve configuration, start file logging, open the
//! student database, and hand everything to the menu loop.
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use log::error;
use student_crud::{logging::init_logging, open_store, App, AppConfig};

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // Logging is best effort; the menu works without it.
    let _logger = match init_logging(&config) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let conn = match open_store(&config.database) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=app_exit module=app status=error reason=store_unavailable");
            eprintln!("Error connecting to the student database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut app = App::new(conn, stdin.lock(), stdout).with_color(color);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=app status=error error={err:#}");
            eprintln!("Console error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
