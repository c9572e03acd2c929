//! Numerical solvers for the Pivot framework.
//!
//! - [`transient::dormand_prince`] — adaptive embedded Runge–Kutta 5(4)
//!   integration with local error control
//! - [`transient::runge_kutta`] — fixed-step classic Runge–Kutta 4
//!   integration
//!
//! Both solvers integrate any [`pivot_core::ode::Integratable`] model and
//! return states at caller-requested sample times.

pub mod transient;
