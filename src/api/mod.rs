//! HTTP API module
//!
//! Accepts the two product tables as CSV text and returns the add, delete
//! and price-change views plus the output table. Run with `sheetcmp-server`.

pub mod handlers;
pub mod server;

pub use server::{build_router, run_api_server};
