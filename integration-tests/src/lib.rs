//! Shared fixtures for the Pivot integration tests.

use std::f64::consts::PI;

use pivot_components::double_pendulum::{Input, Parameters, State};

/// Reference parameters: 0.5 m rods with 0.1 kg bobs.
#[must_use]
pub fn reference_parameters() -> Parameters {
    Parameters::from_si(0.5, 0.1)
}

/// Reference release state: (π/3, −π/4) with a small push on the lower rod.
#[must_use]
pub fn reference_initial() -> Input {
    Input::new(
        reference_parameters(),
        State::from_si([PI / 3.0, -PI / 4.0, 0.0, 0.065]),
    )
}
