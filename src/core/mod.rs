pub mod client;
pub mod processor;
pub mod targets;

pub use crate::domain::model::{LookupOutcome, ReportSummary, ResultMapping, RunReport};
pub use crate::domain::ports::{ConfigProvider, ReputationSource, Storage};
pub use crate::utils::error::Result;
