pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod source;
pub mod ui;

pub use config::{load_config, Config};
pub use error::{ChangelogError, Result};
pub use generator::{compound_changelog, Generator, CREDIT_LINE};
pub use source::{ChangelogSource, ItemPools, MemorySource, SnapshotSource, TagSet};
