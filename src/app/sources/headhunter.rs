use crate::app::sources::{build_client, fetch_json};
use crate::config::toml_config::HeadHunterConfig;
use crate::domain::model::{PageResult, RawVacancy};
use crate::domain::ports::JobSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    found: u64,
    pages: u64,
    #[serde(default)]
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<Vacancy> for RawVacancy {
    fn from(vacancy: Vacancy) -> Self {
        match vacancy.salary {
            Some(salary) => RawVacancy {
                salary_from: salary.from,
                salary_to: salary.to,
                currency: salary.currency,
            },
            None => RawVacancy::default(),
        }
    }
}

/// HeadHunter vacancy search (`api.hh.ru`), which reports its page count.
pub struct HeadHunterSource {
    config: HeadHunterConfig,
    client: Client,
}

impl HeadHunterSource {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = build_client(config.timeout_seconds)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl JobSource for HeadHunterSource {
    fn name(&self) -> &str {
        &self.config.title
    }

    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<PageResult> {
        let params = [
            ("text", keyword.to_string()),
            ("area", self.config.area.clone()),
            ("period", self.config.period_days.to_string()),
            ("only_with_salary", self.config.only_with_salary.to_string()),
            ("per_page", self.config.per_page.to_string()),
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
            .header(USER_AGENT, &self.config.user_agent)
            .query(&params);

        let response: SearchResponse =
            fetch_json(self.name(), &self.config.endpoint, request).await?;

        Ok(PageResult {
            found: response.found,
            pages: response.pages,
            items: response.items.into_iter().map(RawVacancy::from).collect(),
        })
    }
}
