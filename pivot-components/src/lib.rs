//! Physics components for the Pivot framework.

pub mod double_pendulum;
