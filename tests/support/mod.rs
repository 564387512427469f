// Shared primitives for one-time bootstrapping of the gateway under test and
// the stub Hostaway upstream it proxies.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::json;

use review_server::Settings;

// Global base URL used by all tests after the gateway publishes its bound address.
static GATEWAY_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the bootstrap path runs only once.
static STACK_READY: OnceLock<()> = OnceLock::new();

// Upstream request timeout configured into the gateway. The stub's slow
// route sleeps for longer than this to force the timeout path.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(1);

// Stub Hostaway upstream. Scenario selection is keyed off the request so a
// single instance can serve every test: the bearer token picks the review
// behavior, the client_id picks the token-exchange behavior.
fn stub_upstream_app() -> axum::Router {
    async fn access_tokens(body: String) -> Response {
        if body.contains("client_id=locked-out") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"status": "fail", "message": "invalid client credentials"})),
            )
                .into_response();
        }

        Json(json!({
            "token_type": "Bearer",
            "expires_in": 15_897_600,
            "access_token": "upstream-access-token"
        }))
        .into_response()
    }

    async fn reviews(headers: HeaderMap) -> Response {
        let authorization = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if authorization.contains("real-token") {
            return Json(json!({
                "status": "success",
                "result": [{
                    "id": 1,
                    "rating": 9,
                    "guestName": "Real Guest",
                    "submittedAt": "2024-01-01 00:00:00",
                    "reviewCategory": []
                }],
                "count": 1,
                "offset": null
            }))
            .into_response();
        }
        if authorization.contains("error-token") {
            return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
        }
        if authorization.contains("slow-token") {
            tokio::time::sleep(UPSTREAM_TIMEOUT * 3).await;
        }

        Json(json!({"status": "success", "result": []})).into_response()
    }

    axum::Router::new()
        .route("/accessTokens", post(access_tokens))
        .route("/reviews", get(reviews))
}

// Ensure the stub upstream and the gateway are running; return the gateway URL.
pub fn ensure_gateway() -> &'static str {
    STACK_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the servers outlive individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Bind both servers to ephemeral ports to avoid collisions.
                let upstream_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind upstream test port");
                let upstream_addr = upstream_listener.local_addr().expect("get upstream addr");
                tokio::spawn(async move {
                    axum::serve(upstream_listener, stub_upstream_app())
                        .await
                        .expect("stub upstream failed");
                });

                let settings = Settings {
                    base_url: format!("http://{upstream_addr}"),
                    timeout: UPSTREAM_TIMEOUT,
                    connect_timeout: UPSTREAM_TIMEOUT,
                };
                let state = review_server::build_state(&settings).expect("gateway state");

                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind gateway test port");
                let addr = listener.local_addr().expect("get gateway addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                review_server::run(listener, state)
                    .await
                    .expect("gateway failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    GATEWAY_URL
        .get()
        .expect("gateway url should be initialized")
        .as_str()
}

// Wait for URL publication and then wait for the socket to accept connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = GATEWAY_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("gateway did not become ready in time");
}
