//! CLI command handlers

pub mod commands;

pub use commands::{compare, resolve_layout, show_layout};
