//! Domain-agnostic simulated annealing.
//!
//! - **Simulated Annealing (SA)**: single-solution trajectory optimization
//!   with geometric cooling and the Metropolis acceptance rule. The caller
//!   supplies the initial state, a cost function, and a neighbor function;
//!   randomness comes from an injected RNG so runs are reproducible.
//! - **Ludo**: a small token-race problem used to demonstrate and test the
//!   annealer.
//!
//! # Example
//!
//! ```
//! use u_anneal::ludo::{LudoRace, BOARD_LENGTH};
//! use u_anneal::sa::{SaConfig, SaRunner};
//!
//! let config = SaConfig::default()
//!     .with_initial_temperature(50.0)
//!     .with_cooling_rate(0.90)
//!     .with_max_iterations(5000)
//!     .with_seed(1);
//! let result = SaRunner::run(&LudoRace, [0, 0, 0, 0], &config).unwrap();
//! assert!(result.best.iter().all(|&p| p <= BOARD_LENGTH));
//! assert!(result.best_cost < 228.0);
//! ```

pub mod error;
pub mod ludo;
pub mod random;
pub mod sa;

pub use error::{ConfigError, SaError};
