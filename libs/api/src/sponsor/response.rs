use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SponsorResponse {
    pub id: String,
    pub name: String,
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<SponsorEntity> for SponsorResponse {
    fn from(sponsor: SponsorEntity) -> Self {
        Self {
            id: sponsor.id,
            name: sponsor.name,
            tier: sponsor.tier,
            logo: sponsor.logo,
            website: sponsor.website,
            description: sponsor.description,
        }
    }
}
