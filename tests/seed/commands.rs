//! Command handlers driven with the fixture config.

use crate::stub_server::StubServer;
use chrono::NaiveDate;
use nest_seed::commands::{export, household, logs, validate};
use nest_seed::ValidateArgs;
use seed_core::{CategoryWarning, HouseholdDataset, SeedConfig};
use seed_generator::DayPlan;
use seed_populate::CommonPopulateArgs;
use seed_populate_jsonl::JsonlExportArgs;
use seed_populate_rest::{RestConnectionArgs, RestPopulateArgs};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn common(dry_run: bool) -> CommonPopulateArgs {
    CommonPopulateArgs {
        config: fixture("seed_config.yaml"),
        days: None,
        batch_size: None,
        seed: None,
        pause_ms: None,
        dry_run,
    }
}

fn rest_args(api_url: Option<String>, dry_run: bool) -> RestPopulateArgs {
    RestPopulateArgs {
        connection: RestConnectionArgs {
            api_url,
            api_key: Some("anon-test-key".to_string()),
            timeout_secs: 5,
        },
        common: common(dry_run),
    }
}

#[test]
fn test_generated_logs_cover_window() {
    let config = SeedConfig::from_file(fixture("seed_config.yaml")).unwrap();
    let records = logs::generate_logs(&config, today()).unwrap();

    // window_days: 2 means today and the two days before
    let days = 3;
    assert!(records.len() >= (DayPlan::MIN_RECORDS * days) as usize);
    assert!(records.len() <= (DayPlan::MAX_RECORDS * days) as usize);

    let first_day = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
    assert!(records
        .iter()
        .all(|r| r.start_time().date() >= first_day && r.start_time().date() <= today()));
    assert!(records
        .iter()
        .all(|r| r.subject_id() == "c9adebed-db95-4aef-b6f9-8e0057b45dc2"));
}

#[test]
fn test_same_seed_same_logs() {
    let config = SeedConfig::from_file(fixture("seed_config.yaml")).unwrap();
    let a = serde_json::to_value(logs::generate_logs(&config, today()).unwrap()).unwrap();
    let b = serde_json::to_value(logs::generate_logs(&config, today()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_logs_oversized_window_is_rejected() {
    let mut args = rest_args(None, true);
    args.common.days = Some(u32::MAX);

    let err = logs::run_logs(args, today()).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("exceeds the maximum"), "{message}");
}

#[test]
fn test_unseeded_export_replays_from_its_seed() {
    let temp_dir = TempDir::new().unwrap();
    let unseeded = temp_dir.path().join("unseeded.yaml");
    let yaml = std::fs::read_to_string(fixture("seed_config.yaml"))
        .unwrap()
        .replace("seed: 42\n", "");
    std::fs::write(&unseeded, yaml).unwrap();

    let export_to = |dir: &str, seed: Option<u64>| {
        let mut common = common(false);
        common.config = unseeded.clone();
        common.seed = seed;
        let args = JsonlExportArgs {
            output_dir: temp_dir.path().join(dir),
            common,
        };
        export::run_export(args, today()).unwrap()
    };

    let seed = export_to("first", None);
    assert_eq!(export_to("replay", Some(seed)), seed);

    let mut compared = 0;
    for entry in std::fs::read_dir(temp_dir.path().join("first")).unwrap() {
        let path = entry.unwrap().path();
        let replayed = temp_dir.path().join("replay").join(path.file_name().unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            std::fs::read_to_string(&replayed).unwrap(),
            "{path:?}"
        );
        compared += 1;
    }
    // logs.jsonl holds both the activity history and the baby logs
    assert_eq!(compared, HouseholdDataset::TABLES.len());
}

#[tokio::test]
async fn test_logs_dry_run_needs_no_backend() {
    let args = RestPopulateArgs {
        connection: RestConnectionArgs {
            api_url: None,
            api_key: None,
            timeout_secs: 5,
        },
        common: common(true),
    };
    logs::run_logs(args, today()).await.unwrap();
}

#[tokio::test]
async fn test_logs_without_backend_url_fails() {
    let err = logs::run_logs(rest_args(None, false), today())
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("--api-url"));
}

#[tokio::test]
async fn test_logs_submit_stops_at_failing_batch() {
    let server = StubServer::start(vec![(201, ""), (500, r#"{"message":"boom"}"#)]).await;

    let err = logs::run_logs(rest_args(Some(server.url()), false), today())
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("stopped at batch 2"), "{message}");
    assert!(message.contains("HTTP 500"), "{message}");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.target == "/rest/v1/logs"));
    assert_eq!(requests[0].json().as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_household_submits_tables_in_order() {
    let server = StubServer::start(vec![]).await;

    household::run_household(rest_args(Some(server.url()), false), today())
        .await
        .unwrap();

    let targets: Vec<String> = server.requests().into_iter().map(|r| r.target).collect();
    let mut tables: Vec<&str> = targets
        .iter()
        .map(|t| t.trim_start_matches("/rest/v1/"))
        .collect();
    tables.dedup();
    assert_eq!(tables, HouseholdDataset::TABLES.to_vec());

    // Transactions carry the household from the config
    let transactions = server
        .requests()
        .into_iter()
        .find(|r| r.target == "/rest/v1/finance_transactions")
        .unwrap();
    assert_eq!(
        transactions.json()[0]["household_id"],
        "9ba2bdbc-9a60-42f5-b797-cc8d838ed1c5"
    );
}

#[test]
fn test_export_writes_logs_and_household_tables() {
    let temp_dir = TempDir::new().unwrap();
    let args = JsonlExportArgs {
        output_dir: temp_dir.path().join("out"),
        common: common(false),
    };

    export::run_export(args, today()).unwrap();

    let out = temp_dir.path().join("out");
    let logs = std::fs::read_to_string(out.join("logs.jsonl")).unwrap();
    assert!(logs.lines().count() >= (DayPlan::MIN_RECORDS * 3) as usize);
    let first: serde_json::Value = serde_json::from_str(logs.lines().next().unwrap()).unwrap();
    assert_eq!(first["child_id"], "c9adebed-db95-4aef-b6f9-8e0057b45dc2");

    // Baby logs for the household child are appended, not written over the history
    let baby_logs = logs
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .filter(|row| row["child_id"] == "c37bb4d5-43bd-41ca-9692-1b3c4dae24f2")
        .count();
    assert_eq!(baby_logs, 14 * 9);

    for table in HouseholdDataset::TABLES {
        assert!(out.join(format!("{table}.jsonl")).exists(), "{table}");
    }
    let accounts = std::fs::read_to_string(out.join("finance_accounts.jsonl")).unwrap();
    assert_eq!(accounts.lines().count(), 2);
}

#[test]
fn test_validate_reports_malformed_and_drifted_ids() {
    let report = validate::run_validate(ValidateArgs {
        config: fixture("drifted_config.yaml"),
        compare: Some(fixture("seed_config.yaml")),
    })
    .unwrap();

    assert!(report.audit.iter().any(|w| matches!(
        w,
        CategoryWarning::MalformedId { name, .. } if name == "formula"
    )));

    let drifted: Vec<&str> = report
        .drift
        .iter()
        .filter_map(|w| match w {
            CategoryWarning::Drift { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(drifted, vec!["formula", "sleep"]);
}

#[test]
fn test_validate_clean_config() {
    let report = validate::run_validate(ValidateArgs {
        config: fixture("seed_config.yaml"),
        compare: None,
    })
    .unwrap();
    assert!(report.is_clean());
}
