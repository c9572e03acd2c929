use serde::{Deserialize, Serialize};
use uom::{
    si::{
        ISQ, Quantity, SI,
        angle::radian,
        energy::joule,
        f64::{Angle, Energy, Time},
        time::second,
    },
    typenum::{N1, P1, P2, Z0},
};

/// Angular momentum is an energy multiplied by a time (kg·m²/s).
///
/// `uom` has no named quantity for it, so it is defined here from its
/// dimensions.
pub type AngularMomentum = Quantity<ISQ<P2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// The canonical state of the double pendulum.
///
/// Angles measure each rod's displacement from vertical. The momenta are the
/// generalized momenta conjugate to those angles, not mass times velocity.
/// The solver-facing vector order is fixed: `[phi_1, phi_2, p_1, p_2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub phi_1: Angle,
    pub phi_2: Angle,
    pub p_1: AngularMomentum,
    pub p_2: AngularMomentum,
}

impl State {
    /// Creates a state from SI values in the fixed vector order
    /// (rad, rad, kg·m²/s, kg·m²/s).
    #[must_use]
    pub fn from_si([phi_1, phi_2, p_1, p_2]: [f64; 4]) -> Self {
        Self {
            phi_1: Angle::new::<radian>(phi_1),
            phi_2: Angle::new::<radian>(phi_2),
            p_1: angular_momentum_si(p_1),
            p_2: angular_momentum_si(p_2),
        }
    }

    /// Returns the state as SI values in the fixed vector order.
    #[must_use]
    pub fn to_si(&self) -> [f64; 4] {
        [
            self.phi_1.value,
            self.phi_2.value,
            self.p_1.value,
            self.p_2.value,
        ]
    }
}

/// Builds an [`AngularMomentum`] from its SI value (kg·m²/s).
fn angular_momentum_si(value: f64) -> AngularMomentum {
    Energy::new::<joule>(value) * Time::new::<second>(1.0)
}
