use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use super::{Parameters, State};

/// Planar position of a pendulum bob, measured from the fixed pivot.
///
/// `x` points right and `y` points up, so a pendulum hanging straight down
/// has negative `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BobPosition {
    pub x: Length,
    pub y: Length,
}

/// Cartesian positions of both bobs for a single state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BobPositions {
    /// End of the rod attached to the pivot.
    pub first: BobPosition,
    /// End of the outer rod.
    pub second: BobPosition,
}

impl BobPositions {
    /// Converts a state's angles into Cartesian bob positions.
    ///
    /// The second bob hangs from the first, so its position is the first
    /// bob's position plus the outer rod's offset.
    #[must_use]
    pub fn from_state(parameters: &Parameters, state: &State) -> Self {
        let l = parameters.rod_length;
        let [phi_1, phi_2, ..] = state.to_si();

        let first = BobPosition {
            x: l * phi_1.sin(),
            y: -l * phi_1.cos(),
        };
        let second = BobPosition {
            x: first.x + l * phi_2.sin(),
            y: first.y - l * phi_2.cos(),
        };

        Self { first, second }
    }

    /// Returns both positions as SI pairs, first bob then second.
    #[must_use]
    pub fn to_si(&self) -> [[f64; 2]; 2] {
        [
            [self.first.x.value, self.first.y.value],
            [self.second.x.value, self.second.y.value],
        ]
    }
}

/// Converts a sampled trajectory into one plot-ready polyline per bob.
///
/// Each polyline holds `[x, y]` SI pairs in trajectory order, matching the
/// point format the plotting observers consume.
#[must_use]
pub fn bob_traces(parameters: &Parameters, states: &[State]) -> [Vec<[f64; 2]>; 2] {
    let mut first = Vec::with_capacity(states.len());
    let mut second = Vec::with_capacity(states.len());

    for state in states {
        let [a, b] = BobPositions::from_state(parameters, state).to_si();
        first.push(a);
        second.push(b);
    }

    [first, second]
}
