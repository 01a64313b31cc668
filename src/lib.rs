pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::ReportDriver;
pub use app::runner::{SourceSelection, StatsRunner};
pub use config::StatsConfig;
pub use crate::core::{aggregator::VacancyAggregator, estimator::SalaryEstimator};
pub use utils::error::{Result, StatsError};
