//! Command implementations

pub mod show;
pub mod simple;

pub use show::{run_restart, run_show};
pub use simple::run_simple;
