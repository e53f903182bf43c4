use axum::{
    extract::{Path, State},
    Json,
};
use repository::Repository;

pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};

use self::response::SponsorResponse;

/// List every sponsor
#[utoipa::path(
    get,
    path = "/api/sponsors",
    responses(
        (status = 200, description = "List all sponsors successfully", body = [SponsorResponse])
    )
)]
pub async fn get_sponsors(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<SponsorResponse>>> {
    let sponsors = repo.sponsor.find_all().await.into_response("500-003")?;

    let response =
        Json(sponsors.into_iter().map(SponsorResponse::from).collect());

    Ok(response)
}

/// List the sponsors in one tier
#[utoipa::path(
    get,
    path = "/api/sponsors/tier/:tier",
    responses(
        (status = 200, description = "List sponsors in the tier successfully", body = [SponsorResponse])
    ),
    params(
        ("tier", description = "sponsor tier, matched exactly"),
    )
)]
pub async fn get_sponsors_by_tier(
    State(repo): State<Repository>,
    Path(tier): Path<String>,
) -> ApiResponse<Json<Vec<SponsorResponse>>> {
    let sponsors = repo
        .sponsor
        .find_by_tier(&tier)
        .await
        .into_response("500-004")?;

    let response =
        Json(sponsors.into_iter().map(SponsorResponse::from).collect());

    Ok(response)
}

#[cfg(test)]
mod test {
    use repository::init_repository;

    use super::*;

    #[tokio::test]
    async fn get_sponsors_returns_the_whole_roster() {
        // Arrange
        let repo = init_repository();

        // Act
        let result = get_sponsors(State(repo.clone())).await;

        // Assert
        let Json(sponsors) = result.unwrap();
        let seeded = repo.sponsor.find_all().await.unwrap();
        assert_eq!(sponsors.len(), seeded.len());
        assert_eq!(sponsors[0].name, seeded[0].name);
    }

    #[tokio::test]
    async fn get_sponsors_by_tier_keeps_only_that_tier() {
        // Arrange
        let repo = init_repository();

        // Act
        let result =
            get_sponsors_by_tier(State(repo), Path("gold".to_string()))
                .await;

        // Assert
        let Json(sponsors) = result.unwrap();
        assert!(!sponsors.is_empty());
        assert!(sponsors.iter().all(|s| s.tier == "gold"));
    }

    #[tokio::test]
    async fn an_unknown_tier_is_an_empty_list_not_an_error() {
        // Arrange
        let repo = init_repository();

        // Act
        let result =
            get_sponsors_by_tier(State(repo), Path("cardboard".to_string()))
                .await;

        // Assert
        let Json(sponsors) = result.unwrap();
        assert!(sponsors.is_empty());
    }
}
