//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima. Temperature decays geometrically, once per iteration.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod observer;
mod runner;
mod schedule;
mod types;

pub use config::SaConfig;
pub use observer::{IterationReport, NoopObserver, SaObserver, TracingObserver};
pub use runner::{anneal, SaResult, SaRunner};
pub use schedule::GeometricCooling;
pub use types::SaProblem;
