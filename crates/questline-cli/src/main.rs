//! Questline demo entry point.

use std::error::Error;
use std::io::Write;

use questline_cli::config::DemoConfig;
use questline_cli::runner::run_scenario;
use questline_cli::scenario::Scenario;
use questline_cli::telemetry::init_tracing;
use questline_core::clock::SystemClock;

fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = DemoConfig::from_env()?;

    init_tracing(config.log_format);
    tracing::info!("Starting Questline demo");

    let scenario = match &config.scenario_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scenario");
            Scenario::load(path)?
        }
        None => Scenario::builtin(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_scenario(&scenario, &SystemClock, config.print_events, &mut out)?;
    out.flush()?;

    if summary.rejected > 0 {
        tracing::warn!(rejected = summary.rejected, "some commands were rejected");
    }
    Ok(())
}
