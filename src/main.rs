use clap::Parser;
use vacancy_stats::app::table::render_report;
use vacancy_stats::utils::error::ErrorSeverity;
use vacancy_stats::config::cli::load_dotenv;
use vacancy_stats::utils::logger;
use vacancy_stats::{CliConfig, StatsRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before parsing, so clap sees SUPERJOB_KEY from .env too.
    let dotenv_path = load_dotenv();
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Some(path) = &dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let selection = config.selection();
    if selection.is_empty() {
        tracing::debug!("No job source selected, nothing to do");
        return Ok(());
    }

    // 載入並驗證配置；任何配置錯誤都在發出請求前中止
    let runner = match config
        .load_settings()
        .and_then(|settings| StatsRunner::from_settings(&settings, selection))
    {
        Ok(runner) => runner,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    tracing::info!(
        "Starting vacancy-stats for {} keywords via {}",
        config.keywords.len(),
        runner.source_names().join(", ")
    );

    for report in runner.run(&config.keywords).await {
        println!("{}", render_report(&report));
    }

    Ok(())
}
