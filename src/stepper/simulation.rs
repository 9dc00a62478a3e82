//! Simulation runner
//!
//! Threads a grid through `time_steps` sequential advances of one stepper,
//! keeping snapshots along the way. The runner owns no numerics: swapping the
//! stepper changes how each step is computed, not what is computed.

use std::collections::HashMap;
use std::time::Instant;

use crate::error::{HeatError, Result};
use crate::grid::Grid;
use crate::stepper::{STABILITY_BOUND, SimulationConfiguration, Stepper};

/// Outcome of a run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// `(step, grid)` pairs in increasing step order
    pub snapshots: Vec<(usize, Grid)>,

    /// Grid after the last step
    pub final_state: Grid,

    /// Free-form run information (stepper, ε, timing, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    pub fn new(snapshots: Vec<(usize, Grid)>, final_state: Grid) -> Self {
        Self {
            snapshots,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of snapshots kept
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot taken at `step`, if one was kept
    pub fn snapshot_at(&self, step: usize) -> Option<&Grid> {
        self.snapshots
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, grid)| grid)
    }

    /// Total heat of every snapshot, in snapshot order
    pub fn heat_history(&self) -> Vec<(usize, f64)> {
        self.snapshots
            .iter()
            .map(|(step, grid)| (*step, grid.total_heat()))
            .collect()
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// A stepper paired with an initial grid
///
/// # Example
///
/// ```rust
/// use heat_rs::grid::HeatSource;
/// use heat_rs::stepper::{Simulation, SimulationConfiguration, StencilStepper};
///
/// let config = SimulationConfiguration::new(21, 0.2, 50).with_snapshot_interval(10);
/// let initial = HeatSource::centered_point(1.0).apply_to(21).unwrap();
/// let simulation = Simulation::new(Box::new(StencilStepper::new()), initial);
///
/// let result = simulation.run(&config).unwrap();
/// assert_eq!(result.len(), 6);
/// assert_eq!(result.get_metadata("stepper"), Some("Stencil"));
/// ```
pub struct Simulation {
    stepper: Box<dyn Stepper>,
    initial: Grid,
}

impl Simulation {
    pub fn new(stepper: Box<dyn Stepper>, initial: Grid) -> Self {
        Self { stepper, initial }
    }

    pub fn stepper(&self) -> &dyn Stepper {
        self.stepper.as_ref()
    }

    pub fn initial_state(&self) -> &Grid {
        &self.initial
    }

    /// Check configuration, initial grid and stepper agree on N
    pub fn validate(&self, config: &SimulationConfiguration) -> Result<()> {
        config.validate()?;
        self.initial.ensure_size(config.grid_size)?;
        if let Some(n) = self.stepper.grid_size()
            && n != config.grid_size {
                return Err(HeatError::square(n, self.initial.shape()));
            }
        Ok(())
    }

    /// Run `config.time_steps` advances
    ///
    /// An `epsilon` above the stability bound is reported with `log::warn!`
    /// and otherwise left alone; so is the first non-finite state.
    pub fn run(&self, config: &SimulationConfiguration) -> Result<SimulationResult> {
        self.validate(config)?;

        if !config.is_stable() {
            log::warn!(
                "epsilon = {} exceeds the stability bound {STABILITY_BOUND}; the run will diverge",
                config.epsilon
            );
        }

        log::info!(
            "starting {} run: n = {}, epsilon = {}, {} steps",
            self.stepper.name(),
            config.grid_size,
            config.epsilon,
            config.time_steps
        );

        let snapshot_steps = config.snapshot_steps();
        let mut next_snapshot = snapshot_steps.iter().skip(1).peekable();
        let mut snapshots = Vec::with_capacity(snapshot_steps.len());
        snapshots.push((0, self.initial.clone()));

        let started = Instant::now();
        let mut state = self.initial.clone();
        let mut reported_non_finite = false;

        for step in 1..=config.time_steps {
            state = self.stepper.advance(&state, config.epsilon)?;

            if !reported_non_finite && !state.is_finite() {
                log::warn!("non-finite temperature at step {step}");
                reported_non_finite = true;
            }

            if next_snapshot.peek() == Some(&&step) {
                snapshots.push((step, state.clone()));
                next_snapshot.next();
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        log::info!("{} run finished in {elapsed:.3} s", self.stepper.name());

        let mut result = SimulationResult::new(snapshots, state);
        result.add_metadata("stepper", self.stepper.name());
        result.add_metadata("grid size", &config.grid_size.to_string());
        result.add_metadata("epsilon", &config.epsilon.to_string());
        result.add_metadata("time steps", &config.time_steps.to_string());
        result.add_metadata("elapsed (s)", &elapsed.to_string());

        Ok(result)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("stepper", &self.stepper.name())
            .field("grid size", &self.initial.size())
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
