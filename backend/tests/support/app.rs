use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use comicsdb::db::CatalogStore;
use comicsdb::http::{create_router, AppState};

/// Response parts collected for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Router over a seeded store, plus a handle on the store.
pub fn seeded_app() -> (Router, Arc<CatalogStore>) {
    app_with_store(CatalogStore::seeded())
}

pub fn app_with_store(store: CatalogStore) -> (Router, Arc<CatalogStore>) {
    let store = Arc::new(store);
    let router = create_router(AppState::new(Arc::clone(&store)));
    (router, store)
}

/// Send one request. A body, when given, is sent with a matching `Content-Length`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, text.len());
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
