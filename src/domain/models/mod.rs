//! Domain models

pub mod config;
pub mod hint;
pub mod mention;
pub mod workflow;

pub use config::{Config, HintConfig, LoggingConfig};
pub use hint::{HintEntry, LineKind, Theme};
pub use mention::{Mention, MentionResolution};
pub use workflow::{Workflow, WorkflowCatalog};
