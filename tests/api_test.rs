//! End-to-end test: boots the real router over a synthetic dataset file and
//! drives every route through an HTTP client.

use std::io::Write;
use std::sync::Arc;

use placedash::config::AppConfig;
use placedash::store::RecordStore;
use placedash::{routes, AppState};
use reqwest::StatusCode;
use serde_json::Value;
use tempfile::NamedTempFile;

const DATASET: &str = r#"{
    "companies": [
        {
            "company_name": "Acme Corp",
            "engagement_type": ["Full Time"],
            "compensation": {"ctc_lpa": 24.0, "base_lpa": 18.0},
            "role": ["SDE"],
            "selection_stats": {"students_selected": 4}
        },
        {
            "company_name": "Globex",
            "engagement_type": ["Internship", "PPO"],
            "compensation": {"ctc_lpa": 8.0},
            "role": ["Data Analyst Intern"],
            "selection_stats": {"students_selected": 10}
        },
        {
            "company_name": "Initech",
            "engagement_type": ["Internship"],
            "role": ["SDE Intern"]
        }
    ]
}"#;

/// Spin up the axum app on a random port against a tempfile dataset,
/// returning the base URL.
async fn start_server(dataset: &str) -> String {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(dataset.as_bytes()).expect("write dataset");

    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_path: file.path().display().to_string(),
        frontend_url: "http://localhost:5173".to_string(),
    };
    let store = Arc::new(RecordStore::load(&config.data_path));
    let app = routes::api_router().with_state(AppState { store, config });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn summary_reflects_the_dataset() {
    let base = start_server(DATASET).await;
    let body: Value = reqwest::get(format!("{base}/api/stats/summary"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    let stats = &body["data"];
    assert_eq!(stats["total_companies"], 3);
    assert_eq!(stats["highest_package_lpa"], 24.0);
    assert_eq!(stats["average_package_lpa"], 16.0);
    assert_eq!(stats["median_package_lpa"], 16.0);
    assert_eq!(stats["full_time_count"], 1);
    assert_eq!(stats["internship_count"], 2);
    assert_eq!(stats["ppo_count"], 1);
    assert_eq!(stats["total_students_placed"], 14);
    assert_eq!(stats["total_offers"], 14);
    assert_eq!(
        stats["package_distribution"],
        serde_json::json!([8.0, 24.0])
    );
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn list_without_params_returns_all_sorted_by_name() {
    let base = start_server(DATASET).await;
    let body: Value = reqwest::get(format!("{base}/api/companies"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["company_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Acme Corp", "Globex", "Initech"]);
}

#[tokio::test]
async fn list_filters_and_sorts_from_query_string() {
    let base = start_server(DATASET).await;
    let body: Value = reqwest::get(format!(
        "{base}/api/companies?engagement_type=Internship&sort_by=ctc&order=desc"
    ))
    .await
    .expect("request")
    .json()
    .await
    .expect("json");

    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["company_name"].as_str().unwrap())
        .collect();
    // Initech has no compensation, sorts as 0 under descending ctc.
    assert_eq!(names, ["Globex", "Initech"]);
}

#[tokio::test]
async fn detail_lookup_is_case_insensitive_and_url_decoded() {
    let base = start_server(DATASET).await;
    let body: Value = reqwest::get(format!("{base}/api/companies/acme%20corp"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    assert_eq!(body["data"]["company_name"], "Acme Corp");
    assert_eq!(body["data"]["compensation"]["ctc_lpa"], 24.0);
}

#[tokio::test]
async fn unknown_company_returns_not_found_envelope() {
    let base = start_server(DATASET).await;
    let response = reqwest::get(format!("{base}/api/companies/Hooli"))
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("json");
    assert!(body["data"].is_null());
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Company not found");
}

#[tokio::test]
async fn malformed_dataset_serves_empty_but_stays_up() {
    let base = start_server("{this is not json").await;

    let health: Value = reqwest::get(format!("{base}/health/ready"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(health["data"]["status"], "ok");
    assert_eq!(health["data"]["companies_loaded"], 0);

    let summary: Value = reqwest::get(format!("{base}/api/stats/summary"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(summary["data"]["total_companies"], 0);
    assert_eq!(summary["data"]["average_package_lpa"], 0.0);

    let companies: Value = reqwest::get(format!("{base}/api/companies"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(companies["data"], serde_json::json!([]));
}

#[tokio::test]
async fn liveness_probe_is_plain_ok() {
    let base = start_server(DATASET).await;
    let response = reqwest::get(format!("{base}/health/live"))
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), "OK");
}
