use crate::core::estimator::SalaryEstimator;
use crate::domain::model::{KeywordStats, RawVacancy};
use crate::domain::ports::JobSource;
use crate::utils::error::Result;

pub const DEFAULT_PAGE_CAP: u64 = 40;

/// Running sum and count of accepted salary estimates.
#[derive(Debug, Default, Clone, Copy)]
struct SalaryTally {
    sum: f64,
    count: u64,
}

impl SalaryTally {
    fn add(&mut self, estimate: f64) {
        self.sum += estimate;
        self.count += 1;
    }

    fn average(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        (self.sum / self.count as f64).trunc() as i64
    }
}

/// Walks a job source's result pages for one keyword and averages the
/// salary estimates found on them.
#[derive(Debug, Clone)]
pub struct VacancyAggregator {
    estimator: SalaryEstimator,
    page_cap: u64,
}

impl VacancyAggregator {
    pub fn new(estimator: SalaryEstimator, page_cap: u64) -> Self {
        Self {
            estimator,
            page_cap,
        }
    }

    pub async fn aggregate(&self, keyword: &str, source: &dyn JobSource) -> Result<KeywordStats> {
        // Page 0 tells us how much there is; it fails the keyword outright.
        let first = source.fetch_page(keyword, 0).await?;
        let found = first.found;
        let last_page = first.pages.min(self.page_cap);

        tracing::debug!(
            "{} '{}': found {} vacancies over {} pages, walking {}",
            source.name(),
            keyword,
            found,
            first.pages,
            last_page
        );

        let mut tally = SalaryTally::default();
        self.tally_page(&mut tally, &first.items);

        for page in 1..last_page {
            match source.fetch_page(keyword, page).await {
                Ok(result) => self.tally_page(&mut tally, &result.items),
                Err(e) if e.is_transient() => {
                    tracing::warn!(
                        "{} '{}': skipping page {} after transient failure: {}",
                        source.name(),
                        keyword,
                        page,
                        e
                    );
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        let stats = KeywordStats {
            found,
            processed: tally.count,
            average: tally.average(),
        };
        tracing::info!(
            "{} '{}': found={} processed={} average={}",
            source.name(),
            keyword,
            stats.found,
            stats.processed,
            stats.average
        );
        Ok(stats)
    }

    fn tally_page(&self, tally: &mut SalaryTally, items: &[RawVacancy]) {
        for estimate in items.iter().filter_map(|v| self.estimator.estimate_vacancy(v)) {
            tally.add(estimate);
        }
    }
}

impl Default for VacancyAggregator {
    fn default() -> Self {
        Self::new(SalaryEstimator::default(), DEFAULT_PAGE_CAP)
    }
}
