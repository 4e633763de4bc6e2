//! Root Lambda - Handles the / acknowledgement endpoint.

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::{error_response, json_response, Config};
use tracing::info;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    info!(method = %event.method(), path = %event.uri().path(), "Handling request");

    if event.method() != Method::GET {
        return error_response(405, "Method not allowed");
    }

    json_response(200, &serde_json::json!({ "message": "root" }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    shared::telemetry::init(&config);

    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_acknowledgement() {
        let response = handler(Request::default()).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(&response), serde_json::json!({ "message": "root" }));
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        let request = lambda_http::http::Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::Empty)
            .unwrap();

        let response = handler(request).await.unwrap();
        assert_eq!(response.status(), 405);
        assert_eq!(body_json(&response)["success"], false);
    }
}
