//! Command handlers for the Architect CLI.

pub mod config;
pub mod generate;
pub mod interactive;
