//! End-to-end pipeline tests against an in-process HTTP server.

use http_enumgen::{generate, GenerateOptions, PageFetcher, Source};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────── fixtures ───────────────────────

const STATUS_PAGE: &str = r##"<!doctype html>
<html><body>
<main>
  <section>
    <h2>Informational responses</h2>
    <div class="section-content">
      <dl>
        <dt id="100"><a href="/en-US/docs/Web/HTTP/Status/100"><code>100 Continue</code></a></dt>
        <dd>This interim response indicates that the client should continue the request.</dd>
        <dt id="101"><a href="/en-US/docs/Web/HTTP/Status/101"><code>101 Switching Protocols</code></a></dt>
        <dd>This code is sent in response to an Upgrade request header from the client.</dd>
      </dl>
    </div>
  </section>
  <section>
    <h2>Redirection messages</h2>
    <div class="section-content">
      <dl>
        <dt id="306"><a href="#"><code>306 unused</code></a></dt>
        <dd>This response code is no longer used.</dd>
      </dl>
    </div>
  </section>
  <section>
    <h2>Client error responses</h2>
    <div class="section-content">
      <dl>
        <dt id="418"><a href="/en-US/docs/Web/HTTP/Status/418"><code>418 I'm a teapot</code></a></dt>
        <dd>The server refuses the attempt to brew coffee with a teapot.</dd>
      </dl>
    </div>
  </section>
</main>
</body></html>"##;

const HEADER_PAGE: &str = r#"<!doctype html>
<html><body>
<table class="wikitable">
  <tbody>
    <tr><th>Name</th><th>Description</th><th>Example</th><th>Status</th></tr>
    <tr>
      <td>A-IM</td>
      <td>Acceptable instance-manipulations for the request.<sup class="reference">[10]</sup></td>
      <td><code>A-IM: feed</code></td>
      <td>Permanent</td>
    </tr>
    <tr>
      <td>Accept</td>
      <td>Media type(s) that is/are acceptable for the response.</td>
      <td><code>Accept: text/html</code></td>
      <td>Permanent</td>
    </tr>
    <tr>
      <td>Accept-Charset</td>
      <td>Character sets that are acceptable.</td>
      <td><code>Accept-Charset: utf-8</code></td>
      <td>Permanent</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

async fn serve(route: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

// ─────────────────────── fetcher ───────────────────────

#[tokio::test]
async fn fetcher_returns_body() {
    let server = serve("/Status", STATUS_PAGE).await;
    let fetcher = PageFetcher::new(None).unwrap();

    let body = fetcher
        .fetch(&format!("{}/Status", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, STATUS_PAGE);
}

#[tokio::test]
async fn fetcher_does_not_fail_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let body = PageFetcher::new(None)
        .unwrap()
        .fetch(&server.uri())
        .await
        .unwrap();
    assert_eq!(body, "gone");
}

#[tokio::test]
async fn fetcher_propagates_transport_errors() {
    // Nothing listens on port 9 in the test environment.
    let result = PageFetcher::new(None)
        .unwrap()
        .fetch("http://127.0.0.1:9/Status")
        .await;
    assert!(matches!(result, Err(http_enumgen::EnumGenError::Http(_))));
}

// ─────────────────────── generate ───────────────────────

#[tokio::test]
async fn status_pipeline_writes_file() {
    let server = serve("/Status", STATUS_PAGE).await;
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("h2tp").join("StatusCode.cs");

    let report = generate(
        Source::StatusCodes,
        GenerateOptions {
            url: Some(format!("{}/Status", server.uri())),
            output: Some(out.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, report.document);
    assert_eq!(report.stats.rows, 4);
    assert_eq!(report.stats.members, 3);
    assert_eq!(report.stats.sentinels_skipped, 1);
    assert_eq!(report.bytes, written.len());

    assert!(written.contains("Continue=100,"));
    assert!(written.contains("SwitchingProtocols=101,"));
    assert!(written.contains("IAmATeapot=418,"));
    assert!(!written.contains("unused"));
    assert!(written.contains("case RfcStatusCode.SwitchingProtocols: {return \"Switching Protocols\";}"));
}

#[tokio::test]
async fn header_pipeline_writes_file() {
    let server = serve("/wiki/List_of_HTTP_header_fields", HEADER_PAGE).await;
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("Header.cs");

    let report = generate(
        Source::Headers,
        GenerateOptions {
            url: Some(format!("{}/wiki/List_of_HTTP_header_fields", server.uri())),
            output: Some(out.clone()),
            namespace: Some("Acme.Http".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(report.stats.members, 3);
    assert!(written.starts_with("using System.Diagnostics;\r\n\r\nnamespace Acme.Http;"));
    assert!(written.contains("Acceptable instance-manipulations for the request.\r\n</summary>"));
    assert!(!written.contains("[10]"));
    assert!(written.contains("case RfcHeader.AIM: {return \"a-im\";}"));
    assert!(written.contains("case RfcHeader.AcceptCharset: {return \"accept-charset\";}"));
}

#[tokio::test]
async fn rerun_is_byte_identical() {
    let server = serve("/Status", STATUS_PAGE).await;
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("StatusCode.cs");
    let options = GenerateOptions {
        url: Some(format!("{}/Status", server.uri())),
        output: Some(out.clone()),
        ..Default::default()
    };

    generate(Source::StatusCodes, options.clone()).await.unwrap();
    let first = std::fs::read(&out).unwrap();
    generate(Source::StatusCodes, options).await.unwrap();
    let second = std::fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn dry_run_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("status.html");
    std::fs::write(&input, STATUS_PAGE).unwrap();
    let out = dir.path().join("StatusCode.cs");

    let report = generate(
        Source::StatusCodes,
        GenerateOptions {
            input: Some(input.clone()),
            output: Some(out.clone()),
            dry_run: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(!out.exists());
    assert!(report.output.is_none());
    assert_eq!(report.origin, input.display().to_string());
    assert!(report.document.contains("Continue=100,"));
}

#[tokio::test]
async fn missing_input_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = generate(
        Source::Headers,
        GenerateOptions {
            input: Some(dir.path().join("missing.html")),
            dry_run: true,
            ..Default::default()
        },
    )
    .await;

    assert!(matches!(result, Err(http_enumgen::EnumGenError::Io(_))));
}
