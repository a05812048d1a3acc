//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use simple::{run_simple, run_simple_with};
