pub mod definitions;

use std::sync::Arc;

use axum::Extension;
use axum::Router;
use common::config::Config;
use tower::ServiceBuilder;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::Definitions;
use crate::PlatformError;

pub fn attach_routes(mut router: Router, provider: &Arc<Definitions>, cfg: &Config) -> Router {
    router = definitions::attach_routes(router, cfg.server.path_prefix.as_deref());

    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    router
        .fallback(invalid_endpoint)
        .layer(Extension(provider.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn invalid_endpoint(Extension(provider): Extension<Arc<Definitions>>) -> PlatformError {
    PlatformError::NotFound(provider.messages().endpoint_invalid_msg.clone())
}
