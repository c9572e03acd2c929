//! A planar double pendulum in canonical (Hamiltonian) coordinates.
//!
//! Two identical uniform rods swing from a fixed pivot; the configuration is
//! the pair of rod angles measured from vertical, paired with the generalized
//! momenta conjugate to them. [`Dynamics`] evaluates the equations of motion,
//! [`BobPositions`] converts a state into Cartesian bob coordinates, and
//! [`mechanical_energy`] reports the conserved total energy, which is the
//! usual sanity check on an integrated trajectory.

mod cartesian;
mod dynamics;
mod energy;
mod parameters;
mod state;

pub use cartesian::{BobPosition, BobPositions, bob_traces};
pub use dynamics::{Dynamics, Input, Output};
pub use energy::mechanical_energy;
pub use parameters::Parameters;
pub use state::{AngularMomentum, State};
