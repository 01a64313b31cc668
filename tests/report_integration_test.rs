use anyhow::Result;
use httpmock::prelude::*;
use vacancy_stats::app::table::render_report;
use vacancy_stats::domain::model::KeywordStats;
use vacancy_stats::{SourceSelection, StatsConfig, StatsError, StatsRunner};

fn headhunter_only() -> SourceSelection {
    SourceSelection {
        superjob: false,
        headhunter: true,
    }
}

fn superjob_only() -> SourceSelection {
    SourceSelection {
        superjob: true,
        headhunter: false,
    }
}

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

#[tokio::test]
async fn test_end_to_end_single_vacancy() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Go")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "found": 1,
                "pages": 1,
                "items": [{"salary": {"from": 100000, "to": null, "currency": "RUR"}}]
            }));
    });

    let mut settings = StatsConfig::default();
    settings.headhunter.endpoint = server.url("/vacancies");

    let runner = StatsRunner::from_settings(&settings, headhunter_only())?;
    let reports = runner.run(&keywords(&["Go"])).await;

    api_mock.assert_hits(1);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].title, "HeadHunterMoscow");
    assert_eq!(reports[0].rows.len(), 1);
    assert_eq!(reports[0].rows[0].keyword, "Go");
    assert_eq!(
        reports[0].rows[0].stats,
        KeywordStats {
            found: 1,
            processed: 1,
            average: 120000
        }
    );

    let rendered = render_report(&reports[0]);
    assert!(rendered.contains("120000"));
    Ok(())
}

#[tokio::test]
async fn test_failing_keyword_does_not_stop_the_run() -> Result<()> {
    let server = MockServer::start();
    let broken_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Haskell");
        then.status(500);
    });
    let ok_mock = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("text", "Rust");
        then.status(200).json_body(serde_json::json!({
            "found": 2,
            "pages": 1,
            "items": [
                {"salary": {"from": 200000, "to": 300000, "currency": "RUR"}},
                {"salary": {"from": 5000, "to": null, "currency": "EUR"}}
            ]
        }));
    });

    let mut settings = StatsConfig::default();
    settings.headhunter.endpoint = server.url("/vacancies");

    let runner = StatsRunner::from_settings(&settings, headhunter_only())?;
    let reports = runner.run(&keywords(&["Haskell", "Rust"])).await;

    broken_mock.assert_hits(1);
    ok_mock.assert_hits(1);
    let rows = &reports[0].rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].keyword, "Rust");
    assert_eq!(rows[0].stats.found, 2);
    assert_eq!(rows[0].stats.processed, 1);
    assert_eq!(rows[0].stats.average, 250000);
    Ok(())
}

#[tokio::test]
async fn test_superjob_walk_respects_page_cap() -> Result<()> {
    let server = MockServer::start();
    let page_mocks: Vec<_> = (0..4)
        .map(|page| {
            server.mock(|when, then| {
                when.method(GET)
                    .path("/2.0/vacancies/")
                    .header("X-Api-App-Id", "v3.r.integration")
                    .query_param("page", page.to_string());
                then.status(200).json_body(serde_json::json!({
                    "total": 500,
                    "objects": [{"payment_from": 100000, "payment_to": 200000}]
                }));
            })
        })
        .collect();

    let mut settings = StatsConfig::default();
    settings.superjob.endpoint = server.url("/2.0/vacancies/");
    settings.superjob.api_key = Some("v3.r.integration".to_string());
    settings.aggregation.page_cap = 3;

    let runner = StatsRunner::from_settings(&settings, superjob_only())?;
    let reports = runner.run(&keywords(&["Python"])).await;

    page_mocks[0].assert_hits(1);
    page_mocks[1].assert_hits(1);
    page_mocks[2].assert_hits(1);
    page_mocks[3].assert_hits(0);

    assert_eq!(reports[0].title, "SuperJobMoscow");
    assert_eq!(
        reports[0].rows[0].stats,
        KeywordStats {
            found: 500,
            processed: 3,
            average: 150000
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_superjob_key_aborts_before_requests() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200)
            .json_body(serde_json::json!({"total": 0, "objects": []}));
    });

    let mut settings = StatsConfig::default();
    settings.superjob.endpoint = server.url("/2.0/vacancies/");

    let result = StatsRunner::from_settings(&settings, superjob_only());

    assert!(matches!(result, Err(StatsError::MissingConfigError { .. })));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_zero_salaries_report_zero_average() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(serde_json::json!({
            "total": 2,
            "objects": [
                {"payment_from": 0, "payment_to": 0},
                {"payment_from": null, "payment_to": null}
            ]
        }));
    });

    let mut settings = StatsConfig::default();
    settings.superjob.endpoint = server.url("/2.0/vacancies/");
    settings.superjob.api_key = Some("v3.r.integration".to_string());

    let runner = StatsRunner::from_settings(&settings, superjob_only())?;
    let reports = runner.run(&keywords(&["1C"])).await;

    assert_eq!(
        reports[0].rows[0].stats,
        KeywordStats {
            found: 2,
            processed: 0,
            average: 0
        }
    );
    Ok(())
}
