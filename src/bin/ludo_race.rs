//! Races four tokens home with simulated annealing.
//!
//! Set `RUST_LOG=info` to see progress every tenth of the run.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;
use u_anneal::ludo::{LudoRace, TOKENS};
use u_anneal::sa::{SaConfig, SaRunner};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    enable_tracing();

    let config = SaConfig::default()
        .with_initial_temperature(50.0)
        .with_cooling_rate(0.90)
        .with_max_iterations(5000);

    match SaRunner::run(&LudoRace, [0; TOKENS], &config) {
        Ok(result) => {
            println!("\n=== Result ===");
            println!("Best token positions: {:?}", result.best);
            println!("Total distance remaining: {}", result.best_cost);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "annealing failed");
            ExitCode::FAILURE
        }
    }
}
