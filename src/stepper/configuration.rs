//! Run configuration
//!
//! Holds what stays fixed for a whole run: grid side, coefficient, number of
//! steps and how often to keep a snapshot.

use crate::error::{HeatError, Result, validate_epsilon};
use crate::stepper::STABILITY_BOUND;

/// Parameters of one simulation run
///
/// # Coefficient
///
/// `epsilon` is `D · Δt / Δx²`. The explicit five-point scheme stays bounded
/// only for `epsilon ≤ 1/4`; larger values are accepted and the run diverges.
/// See [`SimulationConfiguration::is_stable`].
///
/// # Example
///
/// ```rust
/// use heat_rs::stepper::SimulationConfiguration;
///
/// let config = SimulationConfiguration::new(101, 0.2, 2700).with_snapshot_interval(300);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.snapshot_steps(), vec![0, 300, 600, 900, 1200, 1500, 1800, 2100, 2400, 2700]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfiguration {
    /// Grid side N
    pub grid_size: usize,

    /// Diffusion coefficient ε
    pub epsilon: f64,

    /// Number of sequential advances
    pub time_steps: usize,

    /// Keep every k-th state (step 0 and the final step are always kept).
    /// `None` keeps only the initial and final states.
    pub snapshot_interval: Option<usize>,
}

impl SimulationConfiguration {
    /// Configuration keeping only the initial and final states
    pub fn new(grid_size: usize, epsilon: f64, time_steps: usize) -> Self {
        Self {
            grid_size,
            epsilon,
            time_steps,
            snapshot_interval: None,
        }
    }

    /// Keep a snapshot every `interval` steps
    pub fn with_snapshot_interval(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// 101×101 plate, ε = 0.2, 2700 steps, snapshot every 300
    pub fn classic() -> Self {
        Self::new(101, 0.2, 2700).with_snapshot_interval(300)
    }

    /// True when `epsilon` is within the explicit-scheme stability bound
    pub fn is_stable(&self) -> bool {
        self.epsilon <= STABILITY_BOUND
    }

    /// Steps at which a snapshot is recorded, in increasing order
    pub fn snapshot_steps(&self) -> Vec<usize> {
        let mut steps = vec![0];
        if let Some(interval) = self.snapshot_interval
            && interval > 0 {
                steps.extend((interval..=self.time_steps).step_by(interval));
            }
        if steps.last() != Some(&self.time_steps) {
            steps.push(self.time_steps);
        }
        steps
    }

    /// Validate configuration
    ///
    /// Does not check the stability bound; see [`Self::is_stable`].
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(HeatError::config("grid size must be at least 1"));
        }
        validate_epsilon(self.epsilon)?;
        if self.time_steps == 0 {
            return Err(HeatError::config("time steps must be greater than 0"));
        }
        if self.snapshot_interval == Some(0) {
            return Err(HeatError::config("snapshot interval must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        let config = SimulationConfiguration::classic();
        assert_eq!(config.grid_size, 101);
        assert_eq!(config.epsilon, 0.2);
        assert_eq!(config.time_steps, 2700);
        assert!(config.is_stable());
        assert_eq!(config.snapshot_steps().len(), 10);
    }

    #[test]
    fn test_validation() {
        assert!(SimulationConfiguration::new(0, 0.2, 10).validate().is_err());
        assert!(SimulationConfiguration::new(5, 0.0, 10).validate().is_err());
        assert!(SimulationConfiguration::new(5, 0.2, 0).validate().is_err());
        assert!(SimulationConfiguration::new(5, 0.2, 10).with_snapshot_interval(0).validate().is_err());
    }

    #[test]
    fn test_unstable_coefficient_is_valid() {
        let config = SimulationConfiguration::new(5, 0.3, 10);
        assert!(config.validate().is_ok());
        assert!(!config.is_stable());
    }

    #[test]
    fn test_snapshot_steps_includes_final() {
        let config = SimulationConfiguration::new(5, 0.2, 10).with_snapshot_interval(4);
        assert_eq!(config.snapshot_steps(), vec![0, 4, 8, 10]);

        let endpoints_only = SimulationConfiguration::new(5, 0.2, 7);
        assert_eq!(endpoints_only.snapshot_steps(), vec![0, 7]);
    }
}
