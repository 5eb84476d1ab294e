//! Command-line interface for the sentimen binary.

pub mod args;
pub mod commands;
pub mod output;
