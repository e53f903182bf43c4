use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SubmitContactResponse {
    pub message: String,
    pub id: String,
}
