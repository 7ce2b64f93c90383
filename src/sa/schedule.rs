//! Geometric cooling schedule.

/// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
///
/// Iterating yields the temperatures of iterations 1, 2, 3, ... — the
/// initial temperature itself is never produced, because the first
/// acceptance test already runs on the once-decayed value.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::GeometricCooling;
///
/// let temps: Vec<f64> = GeometricCooling::new(100.0, 0.5).take(3).collect();
/// assert_eq!(temps, vec![50.0, 25.0, 12.5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeometricCooling {
    initial: f64,
    alpha: f64,
    current: f64,
}

impl GeometricCooling {
    /// Creates a schedule starting at `initial` with cooling factor `alpha`.
    pub fn new(initial: f64, alpha: f64) -> Self {
        Self {
            initial,
            alpha,
            current: initial,
        }
    }

    /// Closed-form temperature at iteration `i`: `T0 * alpha^i`.
    pub fn temperature_at(&self, i: usize) -> f64 {
        self.initial * self.alpha.powf(i as f64)
    }

    /// Temperature of the most recent step (`T0` before the first step).
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Advances one iteration and returns the new temperature.
    pub fn step(&mut self) -> f64 {
        self.current *= self.alpha;
        self.current
    }
}

impl Iterator for GeometricCooling {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.step())
    }
}
