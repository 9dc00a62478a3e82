//! 2D Heat Diffusion on a Square Plate
//!
//! u_{k+1} = u_k + ε·L u_k,   L = five-point Laplacian, zero edges
//!
//! Runs the classic configuration (101×101, ε = 0.2, 2700 steps, unit heat
//! at the centre) with the sparse and stencil steppers, checks they agree,
//! then repeats a smaller run with the dense stepper, whose N²×N² matrix is
//! too large for the full grid.
//!
//! Writes `heat_output/evolution.png` (snapshot panel) and
//! `heat_output/final_state.csv`.

use heat_rs::{
    grid::HeatSource,
    output::{export_grid_csv, plot_snapshots, CsvConfig, PlotConfig},
    stepper::{Simulation, SimulationConfiguration, SimulationResult, StepperKind},
};
use std::error::Error;
use std::time::Instant;

fn run(kind: StepperKind, config: &SimulationConfiguration) -> Result<SimulationResult, Box<dyn Error>> {
    let initial = HeatSource::centered_point(1.0).apply_to(config.grid_size)?;

    let start = Instant::now();
    let simulation = Simulation::new(kind.create(config.grid_size)?, initial);
    let result = simulation.run(config)?;
    let elapsed = start.elapsed();

    println!(
        "✓ {:<14} {:>4}×{:<4} {:>5} steps in {:.3}s (total heat {:.6})",
        kind.name(),
        config.grid_size,
        config.grid_size,
        config.time_steps,
        elapsed.as_secs_f64(),
        result.final_state.total_heat(),
    );

    Ok(result)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== 2D Heat Diffusion ===\n");

    let config = SimulationConfiguration::classic();

    println!("Simulation:");
    println!("  Grid: {}×{}", config.grid_size, config.grid_size);
    println!("  Epsilon: {} (stable: {})", config.epsilon, config.is_stable());
    println!("  Time steps: {}", config.time_steps);
    println!("  Snapshots: {:?}\n", config.snapshot_steps());

    // Full grid with the O(N²) steppers
    let sparse = run(StepperKind::Sparse, &config)?;
    let stencil = run(StepperKind::Stencil, &config)?;

    let difference = sparse.final_state.max_abs_difference(&stencil.final_state)?;
    println!("\nMax |sparse - stencil| after {} steps: {:.3e}", config.time_steps, difference);

    // Reduced grid for the dense stepper
    let small = SimulationConfiguration::new(31, config.epsilon, 300).with_snapshot_interval(100);
    println!();
    let dense = run(StepperKind::Dense, &small)?;
    let reference = run(StepperKind::Stencil, &small)?;
    let difference = dense.final_state.max_abs_difference(&reference.final_state)?;
    println!("\nMax |dense - stencil| after {} steps: {:.3e}", small.time_steps, difference);

    // Output
    std::fs::create_dir_all("heat_output")?;

    let plot_config = PlotConfig::panel(
        format!("Heat diffusion, {}×{}, ε = {}", config.grid_size, config.grid_size, config.epsilon),
        3,
    );
    plot_snapshots(&stencil, "heat_output/evolution.png", Some(&plot_config))?;
    println!("\n✓ Snapshot panel written to heat_output/evolution.png");

    let csv_config = CsvConfig::default()
        .with_metadata(true)
        .add_custom("stepper", StepperKind::Stencil.name())
        .add_custom("time steps", &config.time_steps.to_string());
    export_grid_csv(&stencil.final_state, "heat_output/final_state.csv", Some(&csv_config))?;
    println!("✓ Final grid written to heat_output/final_state.csv");

    Ok(())
}
