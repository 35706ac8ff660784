//! Infrastructure layer module
//!
//! Host-facing plumbing around the pure services:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
