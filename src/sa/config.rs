//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing algorithm.
///
/// The temperature follows a geometric schedule: it is multiplied by
/// `cooling_rate` once per iteration, before the acceptance test, so
/// iteration `i` runs at `initial_temperature * cooling_rate^i`.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.90)
///     .with_max_iterations(5000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.effective_report_interval(), 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature `T0`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor `alpha` in (0, 1). Higher = slower cooling.
    ///
    /// Typical values: 0.90–0.99.
    pub cooling_rate: f64,

    /// Number of iterations executed. There is no early stopping.
    pub max_iterations: usize,

    /// Iterations between progress reports and cost history samples.
    ///
    /// `None` reports roughly ten times per run.
    pub report_interval: Option<usize>,

    /// Random seed used when the runner builds its own RNG.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            max_iterations: 1000,
            report_interval: None,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Report cadence actually used by the runner.
    pub fn effective_report_interval(&self) -> usize {
        self.report_interval
            .unwrap_or(self.max_iterations / 10)
            .max(1)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the temperature is not a positive finite
    /// number, the cooling rate is outside (0, 1), the iteration budget is
    /// zero, or an explicit report interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t0 = self.initial_temperature;
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature(t0));
        }
        let alpha = self.cooling_rate;
        if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(ConfigError::CoolingRateOutOfRange(alpha));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.report_interval == Some(0) {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}
