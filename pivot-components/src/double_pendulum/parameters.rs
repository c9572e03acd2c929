use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Mass},
    length::meter,
    mass::kilogram,
};

/// Physical parameters of the double pendulum.
///
/// Both rods share the same length and mass. Gravity is the standard-gravity
/// constant rather than a parameter; see [`super::Dynamics`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub rod_length: Length,
    pub bob_mass: Mass,
}

impl Parameters {
    /// Creates parameters from dimensioned quantities.
    #[must_use]
    pub fn new(rod_length: Length, bob_mass: Mass) -> Self {
        Self {
            rod_length,
            bob_mass,
        }
    }

    /// Creates parameters from SI values (m and kg).
    #[must_use]
    pub fn from_si(rod_length: f64, bob_mass: f64) -> Self {
        Self::new(
            Length::new::<meter>(rod_length),
            Mass::new::<kilogram>(bob_mass),
        )
    }
}
