//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, the acceptance
/// criterion, and best-solution tracking. The initial solution is
/// supplied to the runner directly.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use std::convert::Infallible;
/// use u_anneal::sa::SaProblem;
///
/// struct TspProblem { distances: Vec<Vec<f64>> }
///
/// impl SaProblem for TspProblem {
///     type Solution = Vec<usize>;
///     type Error = Infallible;
///
///     fn cost(&self, tour: &Vec<usize>) -> Result<f64, Infallible> {
///         Ok(tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum())
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Result<Vec<usize>, Infallible> {
///         let mut new = tour.clone();
///         let i = rng.random_range(0..new.len());
///         let j = rng.random_range(0..new.len());
///         new.swap(i, j);
///         Ok(new)
///     }
/// }
/// ```
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Error raised by [`cost`](Self::cost) or [`neighbor`](Self::neighbor).
    ///
    /// Use [`std::convert::Infallible`] when evaluation cannot fail.
    type Error;

    /// Computes the cost of a solution. Lower is better.
    ///
    /// Must return a finite value for every valid solution.
    fn cost(&self, solution: &Self::Solution) -> Result<f64, Self::Error>;

    /// Generates a neighbor of the current solution.
    ///
    /// The returned value is a fresh solution; `solution` itself is only
    /// borrowed and stays valid as the current state if the candidate is
    /// rejected. The neighbor should be "close" to the current solution
    /// (small perturbation).
    fn neighbor<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Result<Self::Solution, Self::Error>;
}
