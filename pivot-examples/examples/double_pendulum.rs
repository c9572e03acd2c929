//! The canonical double-pendulum trace.
//!
//! Reproduces the classic scenario: 0.5 m rods of 0.1 kg, released from
//! (π/3, −π/4) with a small push on the lower rod, sampled at 50 frames per
//! second over 20 seconds. Renders the path each bob sweeps through the
//! plane; the chaotic motion fills the window quickly.
//!
//! # Usage
//!
//! ```text
//! cargo run --example double_pendulum
//! cargo run --example double_pendulum -- trajectory.json
//! ```
//!
//! Passing a path writes the sampled trajectory as JSON before plotting.

use std::{error::Error, f64::consts::PI, fs::File, io::BufWriter};

use pivot_components::double_pendulum::{Dynamics, Input, Parameters, State, bob_traces};
use pivot_observers::{PlotObserver, ShowConfig};
use pivot_solvers::transient::{dormand_prince, uniform_sample_times};
use serde::Serialize;

const ROD_LENGTH: f64 = 0.5; // m
const BOB_MASS: f64 = 0.1; // kg
const T_START: f64 = 0.0;
const T_END: f64 = 20.0;
const FRAMES_PER_SECOND: f64 = 50.0;

/// Trajectory layout for the optional JSON export.
#[derive(Serialize)]
struct SampledTrajectory {
    times: Vec<f64>,
    states: Vec<State>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let parameters = Parameters::from_si(ROD_LENGTH, BOB_MASS);
    let initial = Input::new(parameters, State::from_si([PI / 3.0, -PI / 4.0, 0.0, 0.065]));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = ((T_END - T_START) * FRAMES_PER_SECOND) as usize;
    let sample_times = uniform_sample_times(T_START, T_END, frames);

    let solution = dormand_prince::solve_unobserved(
        &Dynamics,
        &initial,
        &sample_times,
        &dormand_prince::Config::default(),
    )?;

    println!(
        "{} samples in {} accepted steps ({} rejected, {} derivative evaluations)",
        solution.samples.len(),
        solution.stats.steps_accepted,
        solution.stats.steps_rejected,
        solution.stats.derivative_evals,
    );

    let states: Vec<State> = solution
        .samples
        .iter()
        .map(|sample| State::from_si(sample.y))
        .collect();

    if let Some(path) = std::env::args().nth(1) {
        let trajectory = SampledTrajectory {
            times: solution.samples.iter().map(|sample| sample.t).collect(),
            states: states.clone(),
        };
        serde_json::to_writer_pretty(BufWriter::new(File::create(&path)?), &trajectory)?;
        println!("wrote {path}");
    }

    let [first, second] = bob_traces(&parameters, &states);

    let mut obs = PlotObserver::<2>::new(["Upper bob", "Lower bob"]);
    obs.record_series(0, &first);
    obs.record_series(1, &second);

    obs.show(
        ShowConfig::new()
            .title("Double pendulum — 20 s of bob traces")
            .legend(),
    )?;

    Ok(())
}
