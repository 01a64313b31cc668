use crate::app::report::ReportDriver;
use crate::app::sources::{HeadHunterSource, SuperJobSource};
use crate::config::toml_config::StatsConfig;
use crate::core::aggregator::VacancyAggregator;
use crate::core::estimator::SalaryEstimator;
use crate::domain::model::SourceReport;
use crate::domain::ports::JobSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceSelection {
    pub superjob: bool,
    pub headhunter: bool,
}

impl SourceSelection {
    pub fn is_empty(&self) -> bool {
        !self.superjob && !self.headhunter
    }
}

/// Owns the selected sources and the driver for one batch run.
pub struct StatsRunner {
    driver: ReportDriver,
    sources: Vec<Box<dyn JobSource>>,
}

impl StatsRunner {
    /// Validates settings and builds every selected source up front, so
    /// configuration faults surface before the first request.
    pub fn from_settings(settings: &StatsConfig, selection: SourceSelection) -> Result<Self> {
        settings.validate()?;

        let mut sources: Vec<Box<dyn JobSource>> = Vec::new();
        if selection.superjob {
            sources.push(Box::new(SuperJobSource::new(settings.superjob.clone())?));
        }
        if selection.headhunter {
            sources.push(Box::new(HeadHunterSource::new(settings.headhunter.clone())?));
        }

        let aggregator = VacancyAggregator::new(
            SalaryEstimator::new(settings.estimator.local_currency.clone()),
            settings.page_cap(),
        );

        Ok(Self::with_sources(ReportDriver::new(aggregator), sources))
    }

    pub fn with_sources(driver: ReportDriver, sources: Vec<Box<dyn JobSource>>) -> Self {
        Self { driver, sources }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn run(&self, keywords: &[String]) -> Vec<SourceReport> {
        let mut reports = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            reports.push(self.driver.run(source.as_ref(), keywords).await);
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StatsError;

    #[test]
    fn test_superjob_without_key_fails_early() {
        let selection = SourceSelection {
            superjob: true,
            headhunter: true,
        };
        let result = StatsRunner::from_settings(&StatsConfig::default(), selection);
        assert!(matches!(result, Err(StatsError::MissingConfigError { .. })));
    }

    #[test]
    fn test_headhunter_needs_no_key() {
        let selection = SourceSelection {
            superjob: false,
            headhunter: true,
        };
        let runner = StatsRunner::from_settings(&StatsConfig::default(), selection).unwrap();
        assert_eq!(runner.source_names(), vec!["HeadHunterMoscow"]);
    }

    #[test]
    fn test_superjob_listed_before_headhunter() {
        let mut settings = StatsConfig::default();
        settings.superjob.api_key = Some("v3.r.key".to_string());
        let selection = SourceSelection {
            superjob: true,
            headhunter: true,
        };

        let runner = StatsRunner::from_settings(&settings, selection).unwrap();

        assert_eq!(
            runner.source_names(),
            vec!["SuperJobMoscow", "HeadHunterMoscow"]
        );
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = StatsConfig::default();
        settings.headhunter.endpoint = "not a url".to_string();
        let selection = SourceSelection {
            superjob: false,
            headhunter: true,
        };

        assert!(StatsRunner::from_settings(&settings, selection).is_err());
    }

    #[test]
    fn test_empty_selection() {
        assert!(SourceSelection::default().is_empty());
    }
}
