//! Reusable observers for the Pivot framework.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across the transient solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasStepSize`], [`HasErrorNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TimeLimit`] — stops any transient solver once events pass a time bound
//! - [`PlotObserver`] — collects named traces and displays them via egui
//!   (requires the `plot` feature, which adds `eframe` and `egui_plot`)
//!
//! [`Observer`]: pivot_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStepSize`]: traits::HasStepSize
//! [`HasErrorNorm`]: traits::HasErrorNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod time_limit;

pub use time_limit::TimeLimit;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
