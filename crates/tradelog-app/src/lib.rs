//! Operator CLI for the trading journal settings store.
//!
//! Wires the full pipeline together: app config, file adapter, settings
//! store, and the derived dashboard view, behind a small set of
//! subcommands.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
