use axum::{extract::State, http::StatusCode, Json};
use repository::Repository;
use serde_json::Value;

pub mod request;
pub mod response;

use crate::response::{ApiError, ApiResponse, IntoApiResponse};

use self::{request::parse_form, response::SubmitContactResponse};

/// Take a contact form submission
#[utoipa::path(
    post,
    path = "/api/contact",
    responses(
        (status = 201, description = "Message stored", body = SubmitContactResponse),
        (status = 400, description = "One or more fields were rejected")
    )
)]
pub async fn post_contact(
    State(repo): State<Repository>,
    Json(body): Json<Value>,
) -> ApiResponse<(StatusCode, Json<SubmitContactResponse>)> {
    let form = parse_form(&body).map_err(ApiError::ValidationError)?;

    let contact =
        repo.contact.create(form).await.into_response("500-005")?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitContactResponse {
            message: "Thanks for reaching out! The crew will reply within \
                      two days."
                .to_string(),
            id: contact.id,
        }),
    ))
}

#[cfg(test)]
mod test {
    use axum::response::IntoResponse;
    use repository::init_repository;

    use super::*;

    #[tokio::test]
    async fn post_contact_stores_the_submission() {
        // Arrange
        let repo = init_repository();
        let body = serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com",
            "type": "press",
            "message": "Requesting a media pass for the weekend."
        });

        // Act
        let result = post_contact(State(repo.clone()), Json(body)).await;

        // Assert
        let (status, Json(response)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let stored = repo
            .contact
            .find_by_id(&response.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.email, "grace@example.com");
        assert_eq!(stored.message, "Requesting a media pass for the weekend.");
    }

    #[tokio::test]
    async fn post_contact_reports_every_bad_field_with_400() {
        // Arrange
        let repo = init_repository();
        let body = serde_json::json!({ "name": "Grace" });

        // Act
        let result = post_contact(State(repo.clone()), Json(body)).await;

        // Assert
        let error = result.err().unwrap();
        let ApiError::ValidationError(errors) = &error else {
            panic!("expected a validation error, got {error:?}");
        };
        let fields: Vec<_> =
            errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "type", "message"]);
        assert_eq!(
            error.into_response().status(),
            StatusCode::BAD_REQUEST
        );

        let stored = repo.contact.find_all().await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn retried_submissions_create_duplicates() {
        // Arrange
        let repo = init_repository();
        let body = serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com",
            "type": "general",
            "message": "Sent twice by a flaky connection."
        });

        // Act
        let first = post_contact(State(repo.clone()), Json(body.clone()))
            .await
            .unwrap();
        let second =
            post_contact(State(repo.clone()), Json(body)).await.unwrap();

        // Assert
        assert_ne!(first.1 .0.id, second.1 .0.id);
        assert_eq!(repo.contact.find_all().await.unwrap().len(), 2);
    }
}
