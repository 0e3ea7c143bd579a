use super::*;
use crate::gateway::{FunctionCall, GatewayError};
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn call(name: &str, arguments: &str) -> FunctionCall {
    FunctionCall {
        name: name.to_string(),
        arguments: arguments.to_string(),
    }
}

fn resolver() -> DefaultResolver {
    DefaultResolver::new(Duration::from_secs(5)).unwrap()
}

// ========================================================================
// ResolverRequest
// ========================================================================

#[test]
fn test_request_from_page_call() {
    let request =
        ResolverRequest::from_function_call(&call("get_page_content", r#"{"url": "https://a.b/c"}"#))
            .unwrap();
    assert_eq!(
        request,
        ResolverRequest::FetchPage {
            url: "https://a.b/c".to_string()
        }
    );
    assert_eq!(request.function_name(), "get_page_content");
}

#[test]
fn test_request_from_file_call() {
    let request =
        ResolverRequest::from_function_call(&call("get_txt_content", r#"{"file": "notes.txt"}"#))
            .unwrap();
    assert_eq!(
        request,
        ResolverRequest::ReadFile {
            file: "notes.txt".to_string()
        }
    );
    assert_eq!(request.function_name(), "get_txt_content");
}

#[test]
fn test_request_unknown_function() {
    let err = ResolverRequest::from_function_call(&call("os.system", r#"{"cmd": "rm -rf /"}"#))
        .unwrap_err();
    assert!(matches!(err, GatewayError::UnknownFunction(ref name) if name == "os.system"));
}

#[test]
fn test_request_bad_arguments() {
    let cases = [
        ("get_txt_content", "not json"),
        ("get_txt_content", r#"{"url": "https://a.b"}"#),
        ("get_page_content", r#"{"url": 42}"#),
    ];

    for (name, arguments) in cases {
        let err = ResolverRequest::from_function_call(&call(name, arguments)).unwrap_err();
        assert!(
            matches!(err, GatewayError::InvalidArguments { .. }),
            "Failed for {} {}",
            name,
            arguments
        );
    }
}

// ========================================================================
// Path validation
// ========================================================================

#[test]
fn test_validate_txt_paths() {
    assert!(validate_text_path("notes.txt").is_ok());
    assert!(validate_text_path("dir/Notes.TXT").is_ok());
    assert!(validate_text_path("  spaced.txt ").is_ok());
}

#[test]
fn test_validate_rejects_other_files() {
    assert!(matches!(
        validate_text_path("secrets.env"),
        Err(ResolveError::NotTextFile(_))
    ));
    assert!(matches!(
        validate_text_path("Makefile"),
        Err(ResolveError::NotTextFile(_))
    ));
    assert!(matches!(
        validate_text_path(""),
        Err(ResolveError::InvalidPath(_))
    ));
    assert!(matches!(
        validate_text_path("bad\0.txt"),
        Err(ResolveError::InvalidPath(_))
    ));
}

// ========================================================================
// Text files
// ========================================================================

#[tokio::test]
async fn test_read_existing_file() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "Line one. Line two.").unwrap();

    let text = resolver()
        .read_text_file(file.path().to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(text, "Line one. Line two.");
}

#[tokio::test]
async fn test_read_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let err = resolver()
        .read_text_file(missing.to_str().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::FileNotFound { .. }));
    assert!(err.to_string().starts_with("The file was not found"));
}

#[tokio::test]
async fn test_read_directory_is_read_error() {
    let dir = tempfile::Builder::new().suffix(".txt").tempdir().unwrap();

    let err = resolver()
        .read_text_file(dir.path().to_str().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::ReadError { .. }));
}

#[tokio::test]
async fn test_resolve_dispatches_to_file() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "dispatched").unwrap();

    let request = ResolverRequest::ReadFile {
        file: file.path().to_str().unwrap().to_string(),
    };
    assert_eq!(resolver().resolve(&request).await.unwrap(), "dispatched");
}

// ========================================================================
// Web pages
// ========================================================================

#[test]
fn test_html_to_text_strips_markup() {
    let text = html_to_text("<html><body><h1>Title</h1><p>Hello world.</p></body></html>");
    assert!(text.contains("Title"));
    assert!(text.contains("Hello world."));
    assert!(!text.contains("<p>"));
}

#[tokio::test]
async fn test_fetch_html_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><body><p>Beethoven was a composer.</p></body></html>",
            "text/html; charset=utf-8",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let text = resolver()
        .fetch_page(&format!("{}/article", server.uri()))
        .await
        .unwrap();
    assert!(text.contains("Beethoven was a composer."));
    assert!(!text.contains("<body>"));
}

#[tokio::test]
async fn test_fetch_plain_text_page_is_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<not markup>", "text/plain"))
        .mount(&server)
        .await;

    let text = resolver()
        .resolve(&ResolverRequest::FetchPage { url: server.uri() })
        .await
        .unwrap();
    assert_eq!(text, "<not markup>");
}

#[tokio::test]
async fn test_fetch_page_without_content_type_is_treated_as_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes("<p>Untyped <b>markup</b></p>".as_bytes()),
        )
        .mount(&server)
        .await;

    let text = resolver().fetch_page(&server.uri()).await.unwrap();
    assert!(text.contains("Untyped"));
    assert!(!text.contains("<p>"));
}

#[tokio::test]
async fn test_fetch_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = resolver().fetch_page(&server.uri()).await.unwrap_err();
    assert!(matches!(err, ResolveError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_rejects_bad_urls() {
    for url in ["not a url", "file:///etc/passwd", "ftp://example.com/a.txt"] {
        let err = resolver().fetch_page(url).await.unwrap_err();
        assert!(
            matches!(err, ResolveError::InvalidUrl { .. }),
            "Failed for {}",
            url
        );
    }
}
