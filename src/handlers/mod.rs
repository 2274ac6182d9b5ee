//! HTTP request handlers and method/path dispatch

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::Arc;

use crate::config::Config;
use crate::proxy::handler::proxy_handler;
use crate::proxy::target::is_api_path;

pub mod cors;
mod shutdown;
mod static_files;

/// Create the main router
pub fn create_router(config: Arc<Config>) -> Router {
    Router::new()
        .route(
            "/shutdown",
            post(shutdown::shutdown_handler)
                .options(cors::preflight_handler)
                .fallback(route_request),
        )
        .fallback(route_request)
        .with_state(config)
}

/// Dispatch by method and path: CORS preflight, API proxy, static files,
/// or 404
async fn route_request(State(config): State<Arc<Config>>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if method == Method::OPTIONS {
        cors::preflight_handler().await
    } else if method == Method::GET {
        if is_api_path(&path) {
            proxy_handler(config, request).await
        } else {
            static_files::serve_static(&config, request).await
        }
    } else if method == Method::HEAD {
        static_files::serve_static(&config, request).await
    } else if method == Method::POST {
        if is_api_path(&path) {
            proxy_handler(config, request).await
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use tower::ServiceExt;

    fn test_router(web_root: &std::path::Path) -> Router {
        let config = Arc::new(Config::new(8080, web_root).unwrap());
        create_router(config)
    }

    fn static_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_preflight_on_any_path() {
        let app = test_router(&std::env::temp_dir());
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/anything/at/all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(response.headers()["access-control-allow-headers"], "*");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_preflight_on_shutdown_path() {
        let app = test_router(&std::env::temp_dir());
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/shutdown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_post_to_unknown_path_is_404() {
        let app = test_router(&std::env::temp_dir());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/not-the-api")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_file_is_404() {
        let app = test_router(&static_dir("web_dev_server_empty_root"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-file.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_serves_existing_file() {
        let dir = static_dir("web_dev_server_static_root");
        std::fs::write(dir.join("hello.txt"), "hello").unwrap();

        let app = test_router(&dir);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/hello.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"hello");
    }

    #[tokio::test]
    async fn test_get_directory_resolves_index() {
        let dir = static_dir("web_dev_server_index_root");
        std::fs::write(dir.join("index.html"), "<html>home</html>").unwrap();

        let app = test_router(&dir);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<html>home</html>");
    }

    #[tokio::test]
    async fn test_get_shutdown_is_a_static_lookup() {
        let app = test_router(&static_dir("web_dev_server_shutdown_root"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/shutdown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // No file named "shutdown" in the web root
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unhandled_method_is_404() {
        let app = test_router(&std::env::temp_dir());
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/thing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
