//! Integration tests for [`SwapiClient`] against an in-process HTTP server.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use rowboard_swapi::{SwapiClient, SwapiError};

/// Serve `router` on an ephemeral local port and return the listing URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/people/")
}

// ---------------------------------------------------------------------------
// Test: a 200 response yields results in server order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_people_preserves_result_order() {
    let router = Router::new().route(
        "/api/people/",
        get(|| async {
            Json(json!({
                "count": 3,
                "results": [
                    {"name": "Luke Skywalker", "height": "172", "mass": "77", "hair_color": "blond", "gender": "male"},
                    {"name": "C-3PO", "height": "167", "mass": "75", "hair_color": "n/a"},
                    {"name": "R2-D2", "height": "96", "mass": "32", "hair_color": "n/a"},
                ],
            }))
        }),
    );
    let client = SwapiClient::new(serve(router).await);

    let people = client.fetch_people().await.unwrap();

    let names: Vec<&str> = people.results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Luke Skywalker", "C-3PO", "R2-D2"]);
    assert_eq!(people.results[0].hair_color, "blond");
}

// ---------------------------------------------------------------------------
// Test: non-2xx becomes ApiError with status and body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_is_api_error() {
    let router = Router::new().route(
        "/api/people/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let client = SwapiClient::new(serve(router).await);

    let err = client.fetch_people().await.unwrap_err();

    assert_matches!(
        err,
        SwapiError::ApiError { status: 503, ref body } if body == "maintenance"
    );
    assert_eq!(err.to_string(), "Network response was not ok (HTTP 503)");
}

// ---------------------------------------------------------------------------
// Test: a successful body without `results` is an empty listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn body_without_results_is_empty_listing() {
    let router = Router::new().route(
        "/api/people/",
        get(|| async { Json(json!({"count": 0})) }),
    );
    let client = SwapiClient::new(serve(router).await);

    let listing = client.fetch_people().await.unwrap();

    assert!(listing.results.is_empty());
}

// ---------------------------------------------------------------------------
// Test: a body that is not JSON is a decode failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_json_body_is_request_error() {
    let router = Router::new().route("/api/people/", get(|| async { "<html>oops</html>" }));
    let client = SwapiClient::new(serve(router).await);

    let err = client.fetch_people().await.unwrap_err();

    assert_matches!(err, SwapiError::Request(_));
}

// ---------------------------------------------------------------------------
// Test: unreachable host is a transport failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_endpoint_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SwapiClient::new(format!("http://{addr}/api/people/"));
    let err = client.fetch_people().await.unwrap_err();

    assert_matches!(err, SwapiError::Request(_));
    assert!(err.to_string().starts_with("HTTP request failed"));
}
