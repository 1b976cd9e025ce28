//! Integration tests for [`shortener::ShortenClient`] against a local stub endpoint.
//!
//! The stub is a `mockito` server for status/body scenarios and a raw TCP listener that
//! never answers for the timeout scenario. No external network access.

use std::time::{Duration, Instant};

use mockito::Matcher;
use shortener::{ErrorKind, ShortenClient, ShortenError};
use tokio::net::TcpListener;

const API_PATH: &str = "/api/test-key";

fn client_for(server: &mockito::ServerGuard) -> ShortenClient {
    ShortenClient::new(format!("{}{}", server.url(), API_PATH), Duration::from_secs(5))
}

/// **Test: 200 with a URL body returns exactly that URL (trimmed).**
#[tokio::test]
async fn test_shorten_success_returns_trimmed_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", API_PATH)
        .match_query(Matcher::UrlEncoded(
            "s".to_string(),
            "https://example.com/some/long/path?x=1".to_string(),
        ))
        .with_status(200)
        .with_body("  https://short.ly/abc\n")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let short = client
        .shorten("https://example.com/some/long/path?x=1")
        .await
        .expect("shorten should succeed");

    assert_eq!(short, "https://short.ly/abc");
    mock.assert_async().await;
}

/// **Test: bare domain is normalized before it is sent.**
#[tokio::test]
async fn test_shorten_normalizes_bare_domain() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", API_PATH)
        .match_query(Matcher::UrlEncoded(
            "s".to_string(),
            "https://example.com".to_string(),
        ))
        .with_status(200)
        .with_body("https://short.ly/xyz")
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.try_shorten("example.com").await.as_deref(),
        Some("https://short.ly/xyz")
    );
    mock.assert_async().await;
}

/// **Test: invalid input never reaches the endpoint.**
#[tokio::test]
async fn test_shorten_invalid_input_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("https://short.ly/never")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    for input in ["", "not a url", "localhost", "mailto:someone@example.com"] {
        let err = client.shorten(input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {:?}", input);
        assert!(client.try_shorten(input).await.is_none());
    }

    mock.assert_async().await;
}

/// **Test: 500 maps to a remote failure and `try_shorten` returns None.**
#[tokio::test]
async fn test_shorten_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", API_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.shorten("https://example.com").await.unwrap_err();
    assert!(matches!(err, ShortenError::Status(s) if s.as_u16() == 500));
    assert_eq!(err.kind(), ErrorKind::RemoteFailure);
    assert!(client.try_shorten("https://example.com").await.is_none());
}

/// **Test: other 2xx codes are failures even when the body looks like a short URL.**
#[tokio::test]
async fn test_shorten_non_200_success_code_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    for code in [201, 202, 203] {
        let mock = server
            .mock("GET", API_PATH)
            .match_query(Matcher::Any)
            .with_status(code)
            .with_body("https://short.ly/abc")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.shorten("https://example.com").await.unwrap_err();
        assert!(
            matches!(err, ShortenError::Status(s) if s.as_u16() == code as u16),
            "code {}: got {:?}",
            code,
            err
        );
        assert_eq!(err.kind(), ErrorKind::RemoteFailure);
        assert!(client.try_shorten("https://example.com").await.is_none());

        mock.remove_async().await;
    }
}

/// **Test: 200 with a body that is not a URL is an unexpected response.**
#[tokio::test]
async fn test_shorten_unexpected_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", API_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>quota exceeded</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedResponse);
    assert!(client.try_shorten("https://example.com").await.is_none());
}

/// **Test: a stalled endpoint yields a timeout within the configured bound.**
///
/// The listener accepts connections and holds them open without writing a response.
#[tokio::test]
async fn test_shorten_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stall = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let timeout = Duration::from_millis(300);
    let client = ShortenClient::new(format!("http://{}{}", addr, API_PATH), timeout);

    let started = Instant::now();
    let err = client.shorten("https://example.com").await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, ShortenError::Timeout), "got {:?}", err);
    assert_eq!(err.kind(), ErrorKind::RemoteFailure);
    assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);

    stall.abort();
}

/// **Test: connection refused maps to a remote failure, not a panic.**
#[tokio::test]
async fn test_shorten_connection_refused() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let client = ShortenClient::new(format!("http://{}{}", addr, API_PATH), Duration::from_secs(2));
    let err = client.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteFailure);
}
