pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CheckerConfig, CliConfig};
pub use crate::core::{client::AbuseIpDbClient, processor::TargetProcessor};
pub use domain::model::{LookupOutcome, ResultMapping, RunReport};
pub use utils::error::{CheckError, FailureKind, Result};
