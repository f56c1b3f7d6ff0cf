//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckConfig, CheckResult, check_word};
pub use simple::run_simple;
