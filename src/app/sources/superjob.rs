use crate::app::sources::{build_client, fetch_json};
use crate::config::toml_config::SuperJobConfig;
use crate::domain::model::{PageResult, RawVacancy};
use crate::domain::ports::JobSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_credential;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    #[serde(default)]
    objects: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    payment_from: Option<f64>,
    #[serde(default)]
    payment_to: Option<f64>,
}

/// SuperJob vacancy search (`api.superjob.ru`). Salaries are always quoted
/// in roubles, so vacancies carry no currency code.
pub struct SuperJobSource {
    config: SuperJobConfig,
    api_key: String,
    client: Client,
}

impl SuperJobSource {
    /// Fails with a configuration error when no application key is set.
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let api_key = validate_credential("superjob.api_key", &config.api_key)?.to_string();
        let client = build_client(config.timeout_seconds)?;
        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    // The API only reports a total; the page count is derived from it.
    fn page_count(&self, total: u64) -> u64 {
        total / u64::from(self.config.per_page.max(1)) + 1
    }
}

#[async_trait]
impl JobSource for SuperJobSource {
    fn name(&self) -> &str {
        &self.config.title
    }

    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<PageResult> {
        let params = [
            ("keyword", keyword.to_string()),
            ("town", self.config.town.to_string()),
            ("catalogues", self.config.catalogue.to_string()),
            ("no_agreement", u8::from(self.config.no_agreement).to_string()),
            ("count", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];

        tracing::debug!(
            "Requesting {} page {} for '{}'",
            self.config.endpoint,
            page,
            keyword
        );

        let request = self
            .client
            .get(&self.config.endpoint)
            .header(APP_ID_HEADER, &self.api_key)
            .query(&params);

        let response: SearchResponse =
            fetch_json(self.name(), &self.config.endpoint, request).await?;

        Ok(PageResult {
            found: response.total,
            pages: self.page_count(response.total),
            items: response
                .objects
                .into_iter()
                .map(|v| RawVacancy {
                    salary_from: v.payment_from,
                    salary_to: v.payment_to,
                    currency: None,
                })
                .collect(),
        })
    }
}
