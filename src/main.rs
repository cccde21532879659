use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use setcal::config::Settings;
use setcal::engine::Engine;
use setcal::error::{Result, SetcalError};

fn init_logging(settings: &Settings) {
    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log));
    // stdout is reserved for calculator output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("setcal");
        return Err(SetcalError::Usage(format!(
            "expected exactly one argument, usage: {} <FILE>",
            program_name
        )));
    }
    let path = &args[1];

    let settings = Settings::load()?;
    init_logging(&settings);
    info!(path = %path, max_rows = settings.max_rows, "running script");

    let file = File::open(path).map_err(|source| SetcalError::File {
        path: path.clone(),
        source,
    })?;
    let engine = Engine::new(settings);
    let mut stdout = io::stdout().lock();
    let result = engine.execute(BufReader::new(file), &mut stdout);
    // keep whatever was printed before a failure
    stdout.flush()?;
    result.map(|_| ())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, line = ?e.line(), "script failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
