//! Core traits and types for the Pivot framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! physics components build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`ode`] — the state-vector representation used by ODE solvers and the
//!   [`ode::Integratable`] trait that adapts a model to it

mod model;
mod observer;
pub mod ode;

pub use model::{Model, Snapshot};
pub use observer::Observer;
