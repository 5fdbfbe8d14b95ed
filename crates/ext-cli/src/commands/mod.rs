//! Command implementations for ext-cli

pub mod order;

pub use order::{run_check, run_order};
