//! Progress observation.
//!
//! The search loop does no formatting or output of its own. After every
//! iteration it hands an [`IterationReport`] to an [`SaObserver`]; what is
//! done with it is up to the observer.

use tracing::info;

/// Snapshot of the search after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    /// 1-based iteration index.
    pub iteration: usize,
    /// Total iteration budget of the run.
    pub max_iterations: usize,
    /// Temperature used for this iteration's acceptance test.
    pub temperature: f64,
    /// Cost of the current solution after this iteration.
    pub current_cost: f64,
    /// Best cost found so far.
    pub best_cost: f64,
    /// Whether this iteration's candidate was accepted.
    pub accepted: bool,
}

/// Receives a report once per iteration.
///
/// Any `FnMut(&IterationReport)` closure is an observer.
pub trait SaObserver {
    fn on_iteration(&mut self, report: &IterationReport);
}

impl<F> SaObserver for F
where
    F: FnMut(&IterationReport),
{
    fn on_iteration(&mut self, report: &IterationReport) {
        self(report)
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SaObserver for NoopObserver {
    fn on_iteration(&mut self, _report: &IterationReport) {}
}

/// Emits a `tracing` event every `interval` iterations.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    interval: usize,
}

impl TracingObserver {
    /// Creates an observer reporting every `interval` iterations (min 1).
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }
}

impl SaObserver for TracingObserver {
    fn on_iteration(&mut self, report: &IterationReport) {
        if report.iteration.is_multiple_of(self.interval) {
            info!(
                iteration = report.iteration,
                max_iterations = report.max_iterations,
                temperature = report.temperature,
                best_cost = report.best_cost,
                "annealing progress"
            );
        }
    }
}
