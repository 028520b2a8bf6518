//! Nota fiscal extraction client (CLI)

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod workflow;
