//! Example applications for the Pivot framework.
//!
//! See the `examples/` directory; run each with
//! `cargo run --example <name>`.
