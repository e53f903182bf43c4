/// A festival sponsor. `tier` stays an open string at this layer; it only
/// drives display grouping, and the seed data is the sole source of values.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub tier: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}
