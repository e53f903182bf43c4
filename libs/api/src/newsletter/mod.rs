use axum::{extract::State, http::StatusCode, Json};
use entity::prelude::*;
use repository::Repository;
use serde_json::Value;

pub mod request;
pub mod response;

use crate::response::{ApiError, ApiResponse, IntoApiResponse};

use self::{request::parse_form, response::SubscribeResponse};

/// Sign an address up for festival updates
#[utoipa::path(
    post,
    path = "/api/newsletter",
    responses(
        (status = 201, description = "Subscription stored", body = SubscribeResponse),
        (status = 400, description = "The address was rejected")
    )
)]
pub async fn post_newsletter(
    State(repo): State<Repository>,
    Json(body): Json<Value>,
) -> ApiResponse<(StatusCode, Json<SubscribeResponse>)> {
    let email = parse_form(&body).map_err(ApiError::ValidationError)?;

    // Signups share the contact store, filed under their own type.
    let subscription = NewContact {
        name: "Newsletter subscriber".to_string(),
        email,
        phone: None,
        contact_type: ContactType::Newsletter,
        message: "Subscribed to the NovaFest newsletter".to_string(),
    };

    repo.contact
        .create(subscription)
        .await
        .into_response("500-006")?;

    Ok((
        StatusCode::CREATED,
        Json(SubscribeResponse {
            message: "You're on the list! See you at NovaFest.".to_string(),
        }),
    ))
}
