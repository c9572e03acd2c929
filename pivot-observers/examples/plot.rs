//! Interactive visualizations of the transient solvers.
//!
//! Each mode integrates a damped harmonic oscillator with the adaptive
//! Dormand–Prince solver and opens an interactive plot window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- solution
//! cargo run --example plot --features plot -- steps
//! ```
//!
//! # Modes
//!
//! - **solution** — Overlays the integrated position on the analytical
//!   solution; the traces are indistinguishable at default tolerances.
//!
//! - **steps** — Plots the accepted step sizes and scaled error norms on a
//!   log axis, showing the controller holding the error just under its
//!   bound while the step size settles.

use std::{convert::Infallible, error::Error};

use pivot_core::{
    Model,
    ode::{Integratable, State},
};
use pivot_observers::{PlotObserver, ShowConfig};
use pivot_solvers::transient::dormand_prince;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "solution".into());
    match mode.as_str() {
        "solution" => solution(),
        "steps" => steps(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [solution|steps]");
            std::process::exit(1);
        }
    }
}

/// Damped harmonic oscillator: ẋ = v, v̇ = −2ζω₀v − ω₀²x.
struct Oscillator {
    zeta: f64,
    omega0: f64,
}

impl Model for Oscillator {
    type Input = State<2>;
    type Output = [f64; 2];
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let [position, velocity] = input.y;
        Ok([
            velocity,
            -2.0 * self.zeta * self.omega0 * velocity - self.omega0.powi(2) * position,
        ])
    }
}

impl Integratable<2> for Oscillator {
    fn apply_state(_initial_conditions: &Self::Input, state: State<2>) -> Self::Input {
        state
    }

    fn extract_state(input: &Self::Input) -> State<2> {
        *input
    }

    fn extract_derivative(output: &Self::Output) -> [f64; 2] {
        *output
    }
}

const ZETA: f64 = 0.1;
const OMEGA0: f64 = 1.0;
const T_END: f64 = 30.0;

fn sample_times() -> Vec<f64> {
    (1..=600).map(|i| T_END * f64::from(i) / 600.0).collect()
}

/// Analytical position for x(0) = 1, v(0) = 0:
/// x(t) = e^(−ζt) · [cos(ω_d·t) + (ζ/ω_d)·sin(ω_d·t)]
fn analytical(t: f64) -> f64 {
    let omega_d = (OMEGA0.powi(2) - ZETA.powi(2)).sqrt();
    (-ZETA * t).exp() * ((omega_d * t).cos() + (ZETA / omega_d) * (omega_d * t).sin())
}

/// Integrate the oscillator and overlay the analytical solution.
fn solution() -> Result<(), Box<dyn Error>> {
    let model = Oscillator {
        zeta: ZETA,
        omega0: OMEGA0,
    };
    let initial = State {
        t: 0.0,
        y: [1.0, 0.0],
    };

    let result = dormand_prince::solve_unobserved(
        &model,
        &initial,
        &sample_times(),
        &dormand_prince::Config::default(),
    )?;

    let mut obs = PlotObserver::<2>::new(["Dormand–Prince", "Analytical"]);
    for sample in &result.samples {
        obs.record(sample.t, [Some(sample.y[0]), Some(analytical(sample.t))]);
    }

    obs.show(
        ShowConfig::new()
            .title("Damped oscillator (ζ=0.1) — Dormand–Prince vs. analytical")
            .legend(),
    )?;

    Ok(())
}

/// Plot the controller's step sizes and error norms on a log axis.
fn steps() -> Result<(), Box<dyn Error>> {
    let model = Oscillator {
        zeta: ZETA,
        omega0: OMEGA0,
    };
    let initial = State {
        t: 0.0,
        y: [1.0, 0.0],
    };

    let mut obs = PlotObserver::<2>::new(["Step size", "Error norm"]);

    dormand_prince::solve(
        &model,
        &initial,
        &[T_END],
        &dormand_prince::Config::default(),
        |event: &dormand_prince::Event<2>| {
            obs.record(
                event.state.t,
                [Some(event.step_size), Some(event.error_norm)],
            );
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title("Dormand–Prince step control on the damped oscillator")
            .legend()
            .log_y(),
    )?;

    Ok(())
}
