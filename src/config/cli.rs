use crate::app::runner::SourceSelection;
use crate::config::toml_config::StatsConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Key variable read by earlier releases of the tool and its `.env` files.
pub const LEGACY_SUPERJOB_KEY_VAR: &str = "SUPER_JOB_KEY";

/// Loads `.env` from the working directory or its parents, if present.
/// Variables already set in the process environment win.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programming salaries from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Get vacancies from SuperJob
    #[arg(short = 's', long = "superjob")]
    pub superjob: bool,

    /// Get vacancies from HeadHunter
    #[arg(short = 'H', long = "headhunter")]
    pub headhunter: bool,

    /// Keywords to search for
    pub keywords: Vec<String>,

    /// Optional TOML file overriding endpoints and search parameters
    #[arg(short, long)]
    pub config: Option<String>,

    /// SuperJob application key
    #[arg(long, env = "SUPERJOB_KEY", hide_env_values = true)]
    pub superjob_key: Option<String>,

    #[arg(long, help = "Override the number of pages walked per keyword")]
    pub page_cap: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn selection(&self) -> SourceSelection {
        SourceSelection {
            superjob: self.superjob,
            headhunter: self.headhunter,
        }
    }

    /// Loads the config file (or defaults) and applies command line overrides.
    pub fn load_settings(&self) -> Result<StatsConfig> {
        let mut settings = match &self.config {
            Some(path) => StatsConfig::from_file(path)?,
            None => StatsConfig::default(),
        };

        // --superjob-key / SUPERJOB_KEY, then SUPER_JOB_KEY, then the config file
        let env_key = self
            .superjob_key
            .clone()
            .or_else(|| std::env::var(LEGACY_SUPERJOB_KEY_VAR).ok());
        if let Some(key) = env_key {
            settings.superjob.api_key = Some(key);
        }
        if let Some(cap) = self.page_cap {
            settings.aggregation.page_cap = cap;
        }

        Ok(settings)
    }
}
