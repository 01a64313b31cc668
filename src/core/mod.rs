pub mod aggregator;
pub mod estimator;

pub use crate::domain::model::{KeywordStats, PageResult, RawVacancy};
pub use crate::domain::ports::JobSource;
pub use crate::utils::error::Result;
