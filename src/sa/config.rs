//! Annealing configuration.

use crate::error::{Error, Result};

/// Parameters of one annealing run.
///
/// Defaults: start hot at 300, cool geometrically by 1% per level,
/// stop at 20, with 200 proposal steps per temperature level.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_steps_per_temperature(400)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// The run stops once the temperature falls to this value or below.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_next = factor * T`.
    pub cooling_factor: f64,

    /// Number of propose/accept steps at each temperature level.
    pub steps_per_temperature: usize,

    /// Scale factor applied to the temperature inside the Metropolis
    /// acceptance probability. Leave at 1.0 for the plain Metropolis
    /// criterion.
    pub metropolis_scale: f64,

    /// Random seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 300.0,
            min_temperature: 20.0,
            cooling_factor: 0.99,
            steps_per_temperature: 200,
            metropolis_scale: 1.0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_steps_per_temperature(mut self, n: usize) -> Self {
        self.steps_per_temperature = n;
        self
    }

    pub fn with_metropolis_scale(mut self, scale: f64) -> Self {
        self.metropolis_scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature <= 0.0 {
            return Err(Error::Config("initial_temperature must be positive".into()));
        }
        if self.min_temperature <= 0.0 {
            return Err(Error::Config("min_temperature must be positive".into()));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::Config(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(Error::Config(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.steps_per_temperature == 0 {
            return Err(Error::Config(
                "steps_per_temperature must be at least 1".into(),
            ));
        }
        if self.metropolis_scale <= 0.0 {
            return Err(Error::Config("metropolis_scale must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 300.0).abs() < 1e-10);
        assert!((config.min_temperature - 20.0).abs() < 1e-10);
        assert!((config.cooling_factor - 0.99).abs() < 1e-10);
        assert_eq!(config.steps_per_temperature, 200);
        assert!((config.metropolis_scale - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_factor() {
        for factor in [0.0, 1.0, 1.5, -0.3] {
            let config = AnnealConfig::default().with_cooling_factor(factor);
            assert!(config.validate().is_err(), "factor {factor} accepted");
        }
    }

    #[test]
    fn test_validate_zero_steps() {
        let config = AnnealConfig::default().with_steps_per_temperature(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_scale() {
        let config = AnnealConfig::default().with_metropolis_scale(0.0);
        assert!(config.validate().is_err());
    }
}
