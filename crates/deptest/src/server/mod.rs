mod cli;
mod context;
mod external;
mod logging;
mod resources;
mod transforms;

#[cfg(test)]
mod testing;

pub use cli::ServeOptions;
pub use context::{AppContext, ContextConfig, SharedContext};

use std::sync::Arc;

use axum::http::{Method, Uri};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use deptest_core::service::{ServiceInfo, ROUTES};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::error::handle_panic;
use crate::prelude::{eprintln, *};

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let ctx = Arc::new(AppContext::new(&ContextConfig {
        jwt_secret: options.jwt_secret.clone(),
        external_url: options.external_url.clone(),
    }));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{addr}");

    if global.verbose {
        eprintln!("Server listening on http://{}", addr);
        eprintln!("API index: http://{}/", addr);
        eprintln!("Upstream for /api/external: {}", options.external_url);
        for route in ROUTES {
            eprintln!("  {:<6} {}", route.method, route.path);
        }
    }

    axum::serve(listener, router(ctx))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Full route table with the boundary, access log and CORS layers applied
pub fn router(ctx: SharedContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route(
            "/api/users",
            get(resources::list_users).post(resources::create_user),
        )
        .route("/api/users/{id}", get(resources::get_user))
        .route(
            "/api/posts",
            get(resources::list_posts).post(resources::create_post),
        )
        .route("/api/posts/{id}", get(resources::get_post))
        .route("/api/external", get(transforms::external))
        .route("/api/login", post(transforms::login))
        .route("/api/markdown", post(transforms::markdown))
        .route("/api/util", get(transforms::util))
        .route("/api/serialize", post(transforms::serialize))
        .route("/api/encrypt", post(transforms::encrypt))
        .route("/api/decode", get(transforms::decode))
        .route("/api/template", post(transforms::template))
        .route("/api/parse-url", get(transforms::parse_url))
        .route("/api/cache", get(transforms::cache))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(logging::log_request))
        .layer(cors)
        .with_state(ctx)
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo::new(env!("CARGO_PKG_VERSION")))
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Cannot {} {}", method, uri.path()))
}
