//! Command implementations for bm-cli

pub mod check;
pub mod generate;

pub use check::run_check;
pub use generate::run_generate;
