use std::sync::Arc;

use axum::body::Body;
use axum::extract::Extension;
use axum::extract::RawQuery;
use axum::extract::Request;
use axum::middleware;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing;
use axum::Json;
use axum::Router;
use common::http::buffer_body;
use common::ENDPOINT_PATH;
use tracing::debug;
use url::form_urlencoded;

use crate::CreateDefinitionRequest;
use crate::CreateDefinitionResponse;
use crate::Definitions;
use crate::Result;

/// Number the request got when it reached the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestNumber(pub u64);

async fn get(
    Extension(provider): Extension<Arc<Definitions>>,
    Extension(RequestNumber(num_req)): Extension<RequestNumber>,
    RawQuery(query): RawQuery,
) -> Result<String> {
    let word = query.and_then(|query| form_value(query.as_bytes(), "word"));

    provider.get(num_req, word.as_deref()).await
}

async fn create(
    Extension(provider): Extension<Arc<Definitions>>,
    Extension(RequestNumber(num_req)): Extension<RequestNumber>,
    body: Body,
) -> Result<Json<CreateDefinitionResponse>> {
    let body = buffer_body(body).await?;
    let request = CreateDefinitionRequest {
        word: form_value(&body, "word"),
        definition: form_value(&body, "definition"),
    };

    Ok(Json(provider.create(num_req, request).await?))
}

async fn count_request(
    Extension(provider): Extension<Arc<Definitions>>,
    mut req: Request,
    next: Next,
) -> Response {
    let num_req = provider.next_request_number();
    debug!("request #{num_req}: {} {}", req.method(), req.uri());
    req.extensions_mut().insert(RequestNumber(num_req));

    next.run(req).await
}

/// First value of `key` in a url-encoded form.
fn form_value(input: &[u8], key: &str) -> Option<String> {
    form_urlencoded::parse(input)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Mounts the endpoint at the root and, when configured, under the deployment prefix.
pub fn attach_routes(router: Router, path_prefix: Option<&str>) -> Router {
    let endpoint = Router::new()
        .route(ENDPOINT_PATH, routing::get(get).post(create))
        .route(
            &format!("{ENDPOINT_PATH}/"),
            routing::get(get).post(create),
        )
        .route_layer(middleware::from_fn(count_request));

    let router = router.merge(endpoint.clone());
    match path_prefix {
        Some(prefix) => router.nest(prefix, endpoint),
        None => router,
    }
}
