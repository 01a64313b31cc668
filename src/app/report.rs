use crate::core::aggregator::VacancyAggregator;
use crate::domain::model::{KeywordRow, SourceReport};
use crate::domain::ports::JobSource;

/// Runs the aggregator for every keyword against one source. A keyword that
/// fails is reported and left out; the rest still run.
pub struct ReportDriver {
    aggregator: VacancyAggregator,
}

impl ReportDriver {
    pub fn new(aggregator: VacancyAggregator) -> Self {
        Self { aggregator }
    }

    pub async fn run(&self, source: &dyn JobSource, keywords: &[String]) -> SourceReport {
        tracing::info!(
            "🔍 Collecting {} keywords from {}",
            keywords.len(),
            source.name()
        );

        let mut rows = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            match self.aggregator.aggregate(keyword, source).await {
                Ok(stats) => rows.push(KeywordRow {
                    keyword: keyword.clone(),
                    stats,
                }),
                Err(e) => {
                    tracing::error!(
                        "❌ {} '{}' failed: {} (Category: {:?}, Severity: {:?})",
                        source.name(),
                        keyword,
                        e,
                        e.category(),
                        e.severity()
                    );
                    eprintln!(
                        "❌ {}: skipping '{}': {}",
                        source.name(),
                        keyword,
                        e.user_friendly_message()
                    );
                }
            }
        }

        SourceReport {
            title: source.name().to_string(),
            rows,
        }
    }
}
