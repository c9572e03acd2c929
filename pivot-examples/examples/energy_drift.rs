//! Energy drift of the integrated double pendulum.
//!
//! The dynamics conserve mechanical energy, so any drift along an integrated
//! trajectory is integrator error. This example integrates the reference
//! scenario at default tolerances and plots the relative energy drift on a
//! log axis; it stays many orders of magnitude below the energy scale.
//!
//! ```text
//! cargo run --example energy_drift
//! ```

use std::{error::Error, f64::consts::PI};

use pivot_components::double_pendulum::{Dynamics, Input, Parameters, State, mechanical_energy};
use pivot_observers::{PlotObserver, ShowConfig};
use pivot_solvers::transient::{dormand_prince, uniform_sample_times};
use uom::si::energy::joule;

fn main() -> Result<(), Box<dyn Error>> {
    let parameters = Parameters::from_si(0.5, 0.1);
    let initial_state = State::from_si([PI / 3.0, -PI / 4.0, 0.0, 0.065]);
    let initial = Input::new(parameters, initial_state);

    let sample_times = uniform_sample_times(0.0, 20.0, 1000);

    let solution = dormand_prince::solve_unobserved(
        &Dynamics,
        &initial,
        &sample_times,
        &dormand_prince::Config::default(),
    )?;

    let initial_energy = mechanical_energy(&parameters, &initial_state).get::<joule>();

    let mut obs = PlotObserver::<1>::new(["Relative energy drift"]);
    for sample in &solution.samples {
        let energy = mechanical_energy(&parameters, &State::from_si(sample.y)).get::<joule>();
        let drift = ((energy - initial_energy) / initial_energy).abs();
        obs.record(sample.t, [Some(drift)]);
    }

    obs.show(
        ShowConfig::new()
            .title("Double pendulum — relative energy drift at default tolerances")
            .legend()
            .log_y(),
    )?;

    Ok(())
}
