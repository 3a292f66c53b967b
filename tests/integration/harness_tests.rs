//! Integration tests for the harness
//!
//! These tests use wiremock to serve the targets and run the real
//! `HttpFetcher` under every strategy.

use fetch_bench::config::{load_config, HarnessConfig, HttpConfig};
use fetch_bench::harness::{Harness, RunRecord};
use fetch_bench::strategy::{FailurePolicy, ParallelConcurrent, Sequential};
use fetch_bench::{BenchError, FetchError, HttpFetcher, ResourceFetcher};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server kept alive on its own runtime so the harness can block freely
struct TestServer {
    runtime: Runtime,
    server: MockServer,
}

impl TestServer {
    fn start() -> Self {
        let runtime = Runtime::new().expect("Failed to build server runtime");
        let server = runtime.block_on(MockServer::start());
        Self { runtime, server }
    }

    fn page(&self, route: &str, body: &str, delay_ms: u64) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(body)
                        .set_delay(Duration::from_millis(delay_ms)),
                )
                .mount(&self.server),
        );
    }

    fn status(&self, route: &str, status: u16) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status))
                .mount(&self.server),
        );
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.server.uri(), route)
    }
}

fn http_fetcher() -> Arc<dyn ResourceFetcher> {
    let config = HttpConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..HttpConfig::default()
    };
    Arc::new(HttpFetcher::from_config(&config).expect("Failed to build fetcher"))
}

fn run(harness: &Harness) -> (Vec<RunRecord>, String) {
    let mut buf = Vec::new();
    let records = harness.run(&mut buf).expect("Failed to write report");
    (records, String::from_utf8(buf).expect("Report is not UTF-8"))
}

fn elapsed_of(record: &RunRecord) -> Duration {
    record.outcome.as_ref().expect("Run failed").elapsed
}

#[test]
fn test_standard_plan_against_mock_server() {
    let server = TestServer::start();
    server.page("/alpha", &"a".repeat(120), 200);
    server.page("/beta", &"b".repeat(50), 100);
    server.page("/gamma", "héllo", 150);

    let targets = vec![server.url("/alpha"), server.url("/beta"), server.url("/gamma")];
    let harness_runtime = Runtime::new().unwrap();
    let settings = HarnessConfig {
        sequential_passes: 1,
        wait_for_key: false,
        ..HarnessConfig::default()
    };
    let harness = Harness::standard(
        targets.clone(),
        http_fetcher(),
        harness_runtime.handle().clone(),
        &settings,
    );

    let (records, output) = run(&harness);

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.outcome.is_ok()));

    // Every run reports the same three lines in target order
    let expected: Vec<String> = [(0, 120), (1, 50), (2, 5)]
        .iter()
        .map(|(i, len)| {
            format!(
                "{:>25}\tdownloaded: {:>10} characters long.",
                targets[*i], len
            )
        })
        .collect();
    let result_lines: Vec<&str> = output
        .lines()
        .filter(|l| l.contains("\tdownloaded:"))
        .collect();
    assert_eq!(result_lines.len(), 9);
    for chunk in result_lines.chunks(3) {
        assert_eq!(chunk, expected.as_slice());
    }

    // Sequential pays the sum of the latencies, parallel roughly the max
    let sequential = elapsed_of(&records[0]);
    let parallel = elapsed_of(&records[2]);
    assert!(sequential >= Duration::from_millis(450));
    assert!(parallel >= Duration::from_millis(200));
    assert!(parallel < sequential);
}

#[test]
fn test_http_error_aborts_fail_fast_runs() {
    let server = TestServer::start();
    server.page("/ok", "fine", 0);
    server.status("/broken", 500);
    server.page("/never", "unreached", 0);

    let targets = vec![server.url("/ok"), server.url("/broken"), server.url("/never")];
    let harness_runtime = Runtime::new().unwrap();
    let fetcher = http_fetcher();
    let harness = Harness::new(targets.clone())
        .with_run(
            "Sequential",
            Sequential::new(Arc::clone(&fetcher), FailurePolicy::FailFast),
        )
        .with_run(
            "ParallelConcurrent",
            ParallelConcurrent::new(fetcher, FailurePolicy::FailFast, harness_runtime.handle().clone()),
        );

    let (records, output) = run(&harness);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Sequential");
    assert!(lines[1].starts_with(&format!("{:>25}\tdownloaded:", targets[0])));
    assert_eq!(
        lines[2],
        format!("Run failed: Fetching {} returned HTTP 500", targets[1])
    );
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "ParallelConcurrent");
    assert_eq!(
        lines[5],
        format!("Run failed: Fetching {} returned HTTP 500", targets[1])
    );
    assert_eq!(lines.len(), 6);
    assert!(!output.contains("Total execution time"));

    for record in &records {
        match &record.outcome {
            Err(BenchError::Fetch(FetchError::Status { url, status })) => {
                assert_eq!(url, &targets[1]);
                assert_eq!(*status, 500);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}

#[test]
fn test_collect_results_from_config_file() {
    let server = TestServer::start();
    server.page("/one", "12345", 0);
    server.status("/missing", 404);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[http]
timeout-secs = 5
connect-timeout-secs = 1

[harness]
failure-policy = "collect-results"
sequential-passes = 1
wait-for-key = false
"#,
    )
    .unwrap();
    file.flush().unwrap();
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.harness.failure_policy, FailurePolicy::CollectResults);

    let targets = vec![server.url("/one"), server.url("/missing")];
    let fetcher: Arc<dyn ResourceFetcher> =
        Arc::new(HttpFetcher::from_config(&config.http).unwrap());
    let harness_runtime = Runtime::new().unwrap();
    let harness = Harness::standard(
        targets.clone(),
        fetcher,
        harness_runtime.handle().clone(),
        &config.harness,
    );

    let (records, output) = run(&harness);

    assert!(records.iter().all(|r| r.outcome.is_ok()));
    assert_eq!(output.matches("Total execution time: ").count(), 3);
    let failure = format!(
        "{:>25}\tfailed: Fetching {} returned HTTP 404",
        targets[1], targets[1]
    );
    assert_eq!(output.matches(failure.as_str()).count(), 3);
    for record in &records {
        let metrics = record.outcome.as_ref().unwrap();
        assert_eq!(metrics.summary.succeeded, 1);
        assert_eq!(metrics.summary.failed, 1);
    }
}
