//! End-to-end test of the scoring pipeline.
//!
//! Drives `run` with a real URL file against mock registry and hosting
//! servers, and checks the NDJSON records that come out the other side:
//! one record per valid URL, in input order, with invalid lines reported
//! on the error stream and skipped.

use repo_trust::Host;
use std::io::Write;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

const RECORD_FIELDS: &[&str] = &[
    "URL",
    "NetScore",
    "NetScore_Latency",
    "RampUp",
    "RampUp_Latency",
    "Correctness",
    "Correctness_Latency",
    "BusFactor",
    "BusFactor_Latency",
    "ResponsiveMaintainer",
    "ResponsiveMaintainer_Latency",
    "License",
    "License_Latency",
];

async fn start_mock_server() -> wiremock::MockServer {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;

    // Registry metadata for the npm package, pointing back at a repository
    Mock::given(method("GET"))
        .and(path("/left-pad"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"repository": {"type": "git", "url": "git+https://github.com/stevemao/left-pad.git"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    // Both repositories carry a license; everything else degrades
    for repo in ["owner/repo", "stevemao/left-pad"] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{repo}/license")))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_score_pipeline_end_to_end() {
    let server = start_mock_server().await;

    let dir = tempfile::tempdir().unwrap();
    let url_file = dir.path().join("urls.txt");
    let mut file = std::fs::File::create(&url_file).unwrap();
    writeln!(file, "https://github.com/owner/repo").unwrap();
    writeln!(file, "totally bogus").unwrap();
    writeln!(file, "https://www.npmjs.com/package/left-pad").unwrap();
    drop(file);

    let mut host = TestHost::new();
    let result = repo_trust::run(
        &mut host,
        [
            "repo-trust",
            url_file.to_str().unwrap(),
            "--github-token",
            "test-token",
            "--hosting-api-url",
            &server.uri(),
            "--registry-url",
            &server.uri(),
        ],
    )
    .await;

    assert!(result.is_ok(), "pipeline should tolerate per-URL failures: {result:?}");

    // Invalid line is reported but does not abort the batch
    assert!(host.error_str().contains("Invalid URL: totally bogus"));

    let output = host.output_str();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2, "one record per valid URL, got: {output}");

    let records: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| serde_json::from_str(line).expect("each output line is a standalone JSON object"))
        .collect();

    // Records come out in input order and carry the original input URL,
    // even when resolution rewrote it
    assert_eq!(records[0]["URL"], "https://github.com/owner/repo");
    assert_eq!(records[1]["URL"], "https://www.npmjs.com/package/left-pad");

    for record in &records {
        for field in RECORD_FIELDS {
            assert!(record.get(*field).is_some(), "record is missing field {field}: {record}");
        }

        let net_score = record["NetScore"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&net_score), "NetScore out of range: {net_score}");

        // Only License succeeded (weight 1 of 7)
        assert!((record["License"].as_f64().unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((net_score - 1.0 / 7.0).abs() < 1e-3);

        assert!(record["NetScore_Latency"].as_f64().unwrap() >= 0.0);
    }
}

#[tokio::test]
async fn test_missing_url_file_is_an_error() {
    let mut host = TestHost::new();
    let result = repo_trust::run(
        &mut host,
        [
            "repo-trust",
            "does/not/exist.txt",
            "--github-token",
            "test-token",
            "--hosting-api-url",
            "http://127.0.0.1:1",
            "--registry-url",
            "http://127.0.0.1:1",
        ],
    )
    .await;

    assert!(result.is_err());
    assert!(host.output_str().is_empty());
    assert_eq!(host.exit_code, Some(1));

    // The fatal condition surfaces as a single structured error record
    let record: serde_json::Value = serde_json::from_str(host.error_str().trim()).unwrap();
    assert!(record["Error"].is_string());
}
