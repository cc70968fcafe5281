//! Console entry point for the student database.
//!
//! # Responsibility
//! - Load runtime config and start optional file logging.
//! - Seed sample records and hand stdin/stdout to the console loop.

use std::process::ExitCode;
use studentdb_core::{
    core_version, init_logging, seed_sample_data, Console, InMemoryStudentRepository,
    RuntimeConfig, StudentService,
};

fn main() -> ExitCode {
    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("studentdb: {err}; using defaults");
            RuntimeConfig::default()
        }
    };
    if let Some(log_dir) = config.log_dir.as_deref() {
        // Logging is best-effort; the console works without it.
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("studentdb: logging disabled: {err}");
        }
    }

    log::info!(
        "event=cli_start module=cli status=ok version={} log_level={}",
        core_version(),
        config.log_level
    );

    let mut service = StudentService::new(InMemoryStudentRepository::new());
    if let Err(err) = seed_sample_data(&mut service) {
        log::error!("event=seed module=cli status=error error={err}");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), service);
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=console_run module=cli status=error error={err}");
            eprintln!("studentdb: {err}");
            ExitCode::FAILURE
        }
    }
}
