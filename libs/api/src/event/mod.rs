use axum::{
    extract::{Path, State},
    Json,
};
use repository::Repository;

pub mod response;

use crate::response::{ApiError, ApiResponse, IntoApiResponse};

use self::response::EventResponse;

/// List the whole programme
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events successfully", body = [EventResponse])
    )
)]
pub async fn get_events(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<EventResponse>>> {
    let events = repo.event.find_all().await.into_response("500-001")?;

    let response =
        Json(events.into_iter().map(EventResponse::from).collect());

    Ok(response)
}

/// Look one event up by its slug
#[utoipa::path(
    get,
    path = "/api/events/:slug",
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "No event under that slug")
    ),
    params(
        ("slug", description = "event slug"),
    )
)]
pub async fn get_event(
    State(repo): State<Repository>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<EventResponse>> {
    let event = repo
        .event
        .find_by_slug(&slug)
        .await
        .into_response("500-002")?;

    let Some(event) = event else {
        return Err(ApiError::NotFound(format!(
            "no event matches slug {slug}"
        )));
    };

    Ok(Json(EventResponse::from(event)))
}
