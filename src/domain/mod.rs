//! Domain layer for Captain
//!
//! Workflow catalog, mention and hint block models. No I/O.

pub mod models;
