//! Integration tests for the page analyzer
//!
//! These tests use wiremock to serve pages and link targets and exercise the
//! full fetch, parse, traverse and verify cycle.

use page_lens::analyzer::{traverse, LinkStatus, LinkVerifier, VerificationPool};
use page_lens::document::parse_document;
use page_lens::{analyze_url, AnalysisError, AnalysisResult, Analyzer, AnalyzerConfig, HtmlVersion};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Verifier stub that reports every link reachable and records the URLs
#[derive(Default, Clone)]
struct ReachableVerifier {
    urls: Arc<Mutex<Vec<String>>>,
}

impl ReachableVerifier {
    fn checked_urls(&self) -> Vec<String> {
        let mut urls = self.urls.lock().unwrap().clone();
        urls.sort();
        urls
    }
}

impl LinkVerifier for ReachableVerifier {
    async fn check(&self, url: &str) -> LinkStatus {
        self.urls.lock().unwrap().push(url.to_string());
        LinkStatus::Reachable
    }
}

/// Verifier stub that tracks how many checks run at the same time
#[derive(Default)]
struct InstrumentedVerifier {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl LinkVerifier for InstrumentedVerifier {
    async fn check(&self, _url: &str) -> LinkStatus {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(25)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);
        LinkStatus::Broken
    }
}

/// Mounts `body` as an HTML page at `route`
async fn serve_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Returns a URL on a local port that nothing is listening on
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_end_to_end_fixture() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "/",
        r#"<html><head><title>T</title></head><body><h1>A</h1><a href="/x">i</a><a href="http://ext.com">e</a><form action="/do-login"></form></body></html>"#,
    )
    .await;

    let base_url = mock_server.uri();
    let analyzer = Analyzer::with_verifier(AnalyzerConfig::default(), ReachableVerifier::default())
        .expect("Failed to create analyzer");
    let result = analyzer.analyze(&base_url).await.expect("Analysis failed");

    assert_eq!(result.url, base_url);
    assert_eq!(result.title.as_deref(), Some("T"));
    assert_eq!(result.headings.len(), 1);
    assert_eq!(result.heading_count("h1"), 1);
    assert_eq!(result.internal_links, 1);
    assert_eq!(result.external_links, 1);
    assert_eq!(result.broken_links, 0);
    assert!(result.has_login_form);
    assert_eq!(result.html_version, HtmlVersion::Unknown);
}

#[tokio::test]
async fn test_links_resolved_against_input_url() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "/",
        r#"<a href="/x">i</a><a href="y">j</a><a href="http://ext.com">e</a>"#,
    )
    .await;

    let verifier = ReachableVerifier::default();
    let analyzer = Analyzer::with_verifier(AnalyzerConfig::default(), verifier.clone())
        .expect("Failed to create analyzer");
    let base_url = mock_server.uri();
    let result = analyzer.analyze(&base_url).await.expect("Analysis failed");

    assert_eq!(result.internal_links, 2);
    assert_eq!(result.external_links, 1);

    let mut expected = vec![
        format!("{}/x", base_url),
        format!("{}/y", base_url),
        "http://ext.com".to_string(),
    ];
    expected.sort();
    assert_eq!(verifier.checked_urls(), expected);
}

#[tokio::test]
async fn test_broken_links_detected_over_http() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dead_host = closed_port_url();

    serve_page(
        &mock_server,
        "/",
        &format!(
            r#"<!DOCTYPE html><html><body>
            <a href="/ok">ok</a>
            <a href="/missing">missing</a>
            <a href="{base}/ok">absolute ok</a>
            <a href="{dead}/gone">dead host</a>
            </body></html>"#,
            base = base_url,
            dead = dead_host
        ),
    )
    .await;
    serve_page(&mock_server, "/ok", "<html>fine</html>").await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = analyze_url(&base_url).await.expect("Analysis failed");

    assert_eq!(result.internal_links, 2);
    assert_eq!(result.external_links, 2);
    assert_eq!(result.broken_links, 2);
    assert!(result.broken_links <= result.total_links());
    assert_eq!(result.html_version, HtmlVersion::Html5);
}

#[tokio::test]
async fn test_slow_link_counts_as_broken() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    serve_page(&mock_server, "/", r#"<a href="/slow">slow</a><a href="/fast">fast</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;
    serve_page(&mock_server, "/fast", "ok").await;

    let config = AnalyzerConfig {
        link_timeout_secs: 1,
        ..Default::default()
    };
    let analyzer = Analyzer::new(config).expect("Failed to create analyzer");
    let result = analyzer.analyze(&base_url).await.expect("Analysis failed");

    assert_eq!(result.internal_links, 2);
    assert_eq!(result.broken_links, 1);
}

#[tokio::test]
async fn test_every_link_check_accounted_for() {
    let mock_server = MockServer::start().await;
    let anchors: String = (0..25)
        .map(|i| format!(r#"<a href="/page{}">p</a>"#, i))
        .collect();
    serve_page(&mock_server, "/", &format!("<body>{}</body>", anchors)).await;

    let analyzer = Analyzer::with_verifier(AnalyzerConfig::default(), InstrumentedVerifier::default())
        .expect("Failed to create analyzer");
    let result = analyzer
        .analyze(&mock_server.uri())
        .await
        .expect("Analysis failed");

    // Every check reports broken, so the count proves all of them finished
    assert_eq!(result.internal_links, 25);
    assert_eq!(result.broken_links, 25);
}

#[tokio::test]
async fn test_instrumented_verifier_never_exceeds_limit() {
    let verifier = Arc::new(InstrumentedVerifier::default());
    let mut pool = VerificationPool::new(verifier.clone(), 5);

    let anchors: String = (0..40)
        .map(|i| format!(r#"<a href="http://ext{}.test">e</a>"#, i))
        .collect();
    let document = parse_document(&anchors);
    let mut result = AnalysisResult::new("http://site.test");
    traverse(&document, "http://site.test", &mut result, &mut pool).await;
    let broken = pool.finish().await;

    assert_eq!(result.external_links, 40);
    assert_eq!(broken, 40);
    assert_eq!(verifier.calls.load(Ordering::SeqCst), 40);
    let max = verifier.max_in_flight.load(Ordering::SeqCst);
    assert!(max <= 5, "observed {} concurrent checks", max);
    assert_eq!(verifier.in_flight.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_200_status_is_error() {
    let mock_server = MockServer::start().await;
    for code in [204u16, 302, 400, 404, 500, 502, 503] {
        let route = format!("/code/{}", code);
        Mock::given(method("GET"))
            .and(path(route.as_str()))
            .respond_with(ResponseTemplate::new(code))
            .mount(&mock_server)
            .await;

        let url = format!("{}{}", mock_server.uri(), route);
        let err = analyze_url(&url).await.expect_err("Expected status error");
        assert!(
            matches!(err, AnalysisError::Status { code: c } if c == code),
            "unexpected error for {}: {:?}",
            code,
            err
        );
    }
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    let err = analyze_url(&closed_port_url())
        .await
        .expect_err("Expected fetch error");
    assert!(matches!(err, AnalysisError::Fetch(_)));
    assert!(err.to_string().starts_with("failed to fetch URL:"));
}

#[tokio::test]
async fn test_truncated_body_is_parse_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");

    // Promises 1000 bytes, sends a few, then closes the connection
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 1000\r\n\r\n<html><he",
            )
            .await
            .expect("Failed to write response");
        socket.shutdown().await.ok();
    });

    let err = analyze_url(&format!("http://{}", addr))
        .await
        .expect_err("Expected parse error");
    server.await.expect("Server task failed");

    assert!(matches!(err, AnalysisError::Parse(_)), "unexpected error: {:?}", err);
    assert!(err.to_string().starts_with("failed to parse HTML: "));
}

#[tokio::test]
async fn test_version_and_headings_from_served_page() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "/",
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
        <html><head><title>Old</title><title>New</title></head>
        <body><h2>a</h2><h2>b</h2><h6>c</h6>
        <form id="search"><input name="q"></form>
        </body></html>"#,
    )
    .await;

    let analyzer = Analyzer::with_verifier(AnalyzerConfig::default(), ReachableVerifier::default())
        .expect("Failed to create analyzer");
    let result = analyzer
        .analyze(&mock_server.uri())
        .await
        .expect("Analysis failed");

    assert_eq!(result.html_version, HtmlVersion::Xhtml1_0);
    assert_eq!(result.title.as_deref(), Some("New"));
    assert_eq!(result.heading_count("h2"), 2);
    assert_eq!(result.heading_count("h6"), 1);
    assert_eq!(result.heading_count("h1"), 0);
    assert_eq!(result.total_links(), 0);
    assert!(!result.has_login_form);
}
