//! SA execution loop.

use super::config::SaConfig;
use super::observer::{IterationReport, NoopObserver, SaObserver, TracingObserver};
use super::schedule::GeometricCooling;
use super::types::SaProblem;
use crate::error::SaError;
use crate::random::rng_from_seed;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature of the last executed iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled every report interval, plus the final value.
    pub cost_history: Vec<f64>,
}

impl<S: Clone> SaResult<S> {
    /// Splits the result into `(best, best_cost)`.
    pub fn into_best(self) -> (S, f64) {
        (self.best, self.best_cost)
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization starting from `initial`.
    ///
    /// The RNG is seeded from `config.seed` (entropy if unset) and progress
    /// is reported through a [`TracingObserver`].
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, SaError<P::Error>> {
        Self::run_with_cancel(problem, initial, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The token is checked before every iteration. A cancelled run still
    /// returns the best solution found so far, with `cancelled` set.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, SaError<P::Error>> {
        let mut rng = rng_from_seed(config.seed);
        let mut observer = TracingObserver::new(config.effective_report_interval());
        Self::run_with(
            problem,
            initial,
            config,
            &mut rng,
            &mut observer,
            cancel.as_deref(),
        )
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, SaError<P::Error>> {
        Self::run_with(problem, initial, config, rng, &mut NoopObserver, None)
    }

    /// Runs SA with an explicit RNG, observer, and cancellation flag.
    pub fn run_with<P, R, O>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<&AtomicBool>,
    ) -> Result<SaResult<P::Solution>, SaError<P::Error>>
    where
        P: SaProblem,
        R: Rng,
        O: SaObserver + ?Sized,
    {
        search(
            initial,
            |s: &P::Solution| problem.cost(s),
            |s: &P::Solution, rng: &mut R| problem.neighbor(s, rng),
            config,
            rng,
            observer,
            cancel,
        )
    }
}

/// Minimizes `cost_fn` from `initial`, returning `(best_state, best_cost)`.
///
/// Closure form of [`SaRunner`]: `neighbor_fn` gets the current state and the
/// shared RNG, and must return a new state.
///
/// # Errors
///
/// Fails with [`SaError::Config`] before any evaluation if `config` is
/// invalid, and with [`SaError::InitialState`] or [`SaError::Evaluation`] as
/// soon as `cost_fn` or `neighbor_fn` returns an error.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use std::convert::Infallible;
/// use rand::rngs::StdRng;
/// use u_anneal::random::create_rng;
/// use u_anneal::sa::{anneal, SaConfig};
///
/// let config = SaConfig::default().with_max_iterations(2000);
/// let mut rng = create_rng(42);
/// let (x, cost) = anneal(
///     8.0_f64,
///     |x: &f64| Ok::<_, Infallible>((x - 3.0).powi(2)),
///     |x: &f64, rng: &mut StdRng| Ok(x + rng.random_range(-0.5..0.5)),
///     &config,
///     &mut rng,
/// )
/// .unwrap();
/// assert!(cost <= 25.0);
/// assert!((x - 3.0).powi(2) == cost);
/// ```
pub fn anneal<S, E, R, C, N>(
    initial: S,
    cost_fn: C,
    neighbor_fn: N,
    config: &SaConfig,
    rng: &mut R,
) -> Result<(S, f64), SaError<E>>
where
    S: Clone,
    R: Rng,
    C: FnMut(&S) -> Result<f64, E>,
    N: FnMut(&S, &mut R) -> Result<S, E>,
{
    search(
        initial,
        cost_fn,
        neighbor_fn,
        config,
        rng,
        &mut NoopObserver,
        None,
    )
    .map(SaResult::into_best)
}

fn search<S, E, R, C, N, O>(
    initial: S,
    mut cost_fn: C,
    mut neighbor_fn: N,
    config: &SaConfig,
    rng: &mut R,
    observer: &mut O,
    cancel: Option<&AtomicBool>,
) -> Result<SaResult<S>, SaError<E>>
where
    S: Clone,
    R: Rng,
    C: FnMut(&S) -> Result<f64, E>,
    N: FnMut(&S, &mut R) -> Result<S, E>,
    O: SaObserver + ?Sized,
{
    if let Err(err) = config.validate() {
        debug!(error = %err, "rejecting annealing config");
        return Err(err.into());
    }

    let max_iterations = config.max_iterations;
    let history_interval = config.effective_report_interval();

    // Initialize
    let mut current_cost = cost_fn(&initial).map_err(SaError::InitialState)?;
    let mut best = initial.clone();
    let mut best_cost = current_cost;
    let mut current = initial;

    let mut cooling = GeometricCooling::new(config.initial_temperature, config.cooling_rate);
    let mut total_iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;

    let mut cost_history = Vec::with_capacity(max_iterations / history_interval + 2);
    cost_history.push(best_cost);

    debug!(
        initial_cost = current_cost,
        initial_temperature = config.initial_temperature,
        cooling_rate = config.cooling_rate,
        max_iterations,
        "annealing started"
    );

    for iteration in 1..=max_iterations {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }

        // Cool down before the acceptance test
        let temperature = cooling.step();

        let candidate = neighbor_fn(&current, rng)
            .map_err(|source| SaError::Evaluation { iteration, source })?;
        let candidate_cost =
            cost_fn(&candidate).map_err(|source| SaError::Evaluation { iteration, source })?;
        let delta = candidate_cost - current_cost;

        // Metropolis acceptance criterion
        let accept = if delta <= 0.0 {
            true
        } else {
            let probability = (-delta / temperature).exp();
            rng.random_range(0.0..1.0) < probability
        };

        if accept {
            if delta < 0.0 {
                improving_moves += 1;
            }
            current = candidate;
            current_cost = candidate_cost;
            accepted_moves += 1;

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
            }
        }

        total_iterations = iteration;

        observer.on_iteration(&IterationReport {
            iteration,
            max_iterations,
            temperature,
            current_cost,
            best_cost,
            accepted: accept,
        });

        if iteration.is_multiple_of(history_interval) {
            cost_history.push(best_cost);
        }
    }

    // Final history entry
    if cost_history
        .last()
        .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
    {
        cost_history.push(best_cost);
    }

    debug!(
        best_cost,
        iterations = total_iterations,
        accepted_moves,
        cancelled,
        "annealing finished"
    );

    Ok(SaResult {
        best,
        best_cost,
        iterations: total_iterations,
        final_temperature: cooling.current(),
        accepted_moves,
        improving_moves,
        cancelled,
        cost_history,
    })
}
