use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use repository::Repository;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use util::load_config;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

pub mod contact;
pub mod event;
pub mod healthz;
pub mod newsletter;
mod request;
mod response;
pub mod sponsor;

pub async fn serve(
    repository: Repository,
    config_name: &str,
) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "novafest", description = "NovaFest site API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = load_config(config_name)?;
    let origins = config
        .get("cors")
        .and_then(|cors| cors.get("allowed_origins"))
        .and_then(|origins| origins.as_array())
        .context("cors.allowed_origins is missing from the config")?
        .iter()
        .map(|origin| {
            let origin = origin
                .as_str()
                .context("cors.allowed_origins entries must be strings")?;
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // events
    let event_router = Router::new()
        .route("/", get(event::get_events))
        .route("/:slug", get(event::get_event))
        .fallback(get_404)
        .with_state(repository.clone());

    // sponsors
    let sponsor_router = Router::new()
        .route("/", get(sponsor::get_sponsors))
        .route("/tier/:tier", get(sponsor::get_sponsors_by_tier))
        .fallback(get_404)
        .with_state(repository.clone());

    // contact form
    let contact_router = Router::new()
        .route("/", post(contact::post_contact))
        .fallback(get_404)
        .with_state(repository.clone());

    // newsletter signups
    let newsletter_router = Router::new()
        .route("/", post(newsletter::post_newsletter))
        .fallback(get_404)
        .with_state(repository.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/api/events", event_router)
        .nest("/api/sponsors", sponsor_router)
        .nest("/api/contact", contact_router)
        .nest("/api/newsletter", newsletter_router)
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .fallback(get_404);

    Ok(router)
}

async fn get_404() -> StatusCode {
    StatusCode::NOT_FOUND
}
