//! CLI library components for juz-tools.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
