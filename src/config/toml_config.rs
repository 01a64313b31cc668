use crate::core::aggregator::DEFAULT_PAGE_CAP;
use crate::core::estimator::DEFAULT_LOCAL_CURRENCY;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub estimator: EstimatorConfig,
    pub aggregation: AggregationConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub local_currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub page_cap: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub title: String,
    pub endpoint: String,
    pub area: String,
    pub period_days: u32,
    pub per_page: u32,
    pub only_with_salary: bool,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub title: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub town: u32,
    pub catalogue: u32,
    pub per_page: u32,
    pub no_agreement: bool,
    pub timeout_seconds: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            local_currency: DEFAULT_LOCAL_CURRENCY.to_string(),
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            page_cap: DEFAULT_PAGE_CAP as u32,
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            title: "HeadHunterMoscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: "1".to_string(),
            period_days: 30,
            per_page: 50,
            only_with_salary: true,
            user_agent: concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            title: "SuperJobMoscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            api_key: None,
            town: 4,
            catalogue: 48,
            per_page: 50,
            no_agreement: true,
            timeout_seconds: None,
        }
    }
}

impl StatsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPERJOB_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn page_cap(&self) -> u64 {
        u64::from(self.aggregation.page_cap)
    }
}

impl Validate for StatsConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("estimator.local_currency", &self.estimator.local_currency)?;
        validate_positive_number("aggregation.page_cap", self.aggregation.page_cap, 1)?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_range("headhunter.per_page", self.headhunter.per_page, 1, 100)?;
        validate_non_empty_string("headhunter.user_agent", &self.headhunter.user_agent)?;

        validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validate_range("superjob.per_page", self.superjob.per_page, 1, 100)?;

        Ok(())
    }
}
