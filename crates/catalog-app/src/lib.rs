//! # Catalog Application
//!
//! Command-line flags, configuration, error types and the scripted demo run used by the
//! `catalog` binary.

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;

pub use cli::Cli;
pub use config::DemoConfig;
pub use demo::DemoReport;
pub use error::{AppError, Result};
