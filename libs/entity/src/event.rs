/// A festival event as listed on the site. Date, team size, difficulty and
/// prize pool are display strings rendered verbatim by the frontend; `slug`
/// is the stable identifier used in URLs in place of the opaque id.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub team_size: String,
    pub difficulty: String,
    pub location: String,
    pub summary: String,
    pub description: Option<String>,
    pub prize_pool: Option<String>,
    pub max_teams: Option<u32>,
    pub duration: Option<String>,
    pub assets: Option<Vec<String>>,
    pub registration_link: Option<String>,
}
