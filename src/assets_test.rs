use super::*;

#[test]
fn retryable_statuses() {
    assert!(FetchError::Status(429).retryable());
    assert!(FetchError::Status(500).retryable());
    assert!(FetchError::Status(599).retryable());
    assert!(!FetchError::Status(404).retryable());
    assert!(!FetchError::Status(200).retryable());
}

#[test]
fn request_errors_are_retryable_decode_errors_are_not() {
    assert!(FetchError::Request("connection reset".into()).retryable());
    assert!(!FetchError::Decode("invalid utf-8".into()).retryable());
}

#[test]
fn error_messages() {
    assert_eq!(FetchError::Status(404).to_string(), "unexpected status 404");
    assert_eq!(FetchError::Decode("x".into()).to_string(), "decode failed: x");
}

#[test]
fn http_fetcher_builds_with_default_timeouts() {
    assert!(HttpFetcher::new(FetchTimeouts::default()).is_ok());
}

#[tokio::test]
async fn http_fetcher_reports_unsupported_scheme_as_request_error() {
    let fetcher = HttpFetcher::new(FetchTimeouts::default()).unwrap();
    let err = fetcher.fetch_text("ftp://example.invalid/a.svg").await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}
