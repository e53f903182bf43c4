use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub team_size: String,
    pub difficulty: String,
    pub location: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
}

impl From<EventEntity> for EventResponse {
    fn from(event: EventEntity) -> Self {
        Self {
            id: event.id,
            slug: event.slug,
            title: event.title,
            category: event.category,
            date: event.date,
            team_size: event.team_size,
            difficulty: event.difficulty,
            location: event.location,
            summary: event.summary,
            description: event.description,
            prize_pool: event.prize_pool,
            max_teams: event.max_teams,
            duration: event.duration,
            assets: event.assets,
            registration_link: event.registration_link,
        }
    }
}
