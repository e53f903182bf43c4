use std::sync::Arc;

use tokio::sync::RwLock;

use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct SponsorRepository {
    sponsors: Arc<RwLock<Vec<SponsorEntity>>>,
}

impl SponsorRepository {
    pub fn new(sponsors: Vec<SponsorEntity>) -> Self {
        Self {
            sponsors: Arc::new(RwLock::new(sponsors)),
        }
    }
}

impl SponsorRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<SponsorEntity>> {
        let sponsors = self.sponsors.read().await;

        Ok(sponsors.clone())
    }

    /// Sponsors whose tier equals `tier` exactly, case-sensitive. Unknown
    /// tiers are not an error, they just match nothing.
    pub async fn find_by_tier(
        &self,
        tier: &str,
    ) -> anyhow::Result<Vec<SponsorEntity>> {
        let sponsors = self.sponsors.read().await;

        Ok(sponsors
            .iter()
            .filter(|sponsor| sponsor.tier == tier)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sponsor(name: &str, tier: &str) -> SponsorEntity {
        SponsorEntity {
            id: name.to_string(),
            name: name.to_string(),
            tier: tier.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> SponsorRepository {
        SponsorRepository::new(vec![
            sponsor("Helios Cloud", "platinum"),
            sponsor("ForgeWorks Robotics", "gold"),
            sponsor("ByteBrew Coffee", "silver"),
            sponsor("Nimbus Analytics", "gold"),
        ])
    }

    #[tokio::test]
    async fn find_by_tier_filters_exactly() {
        let repository = sample();

        let gold = repository.find_by_tier("gold").await.unwrap();

        let names: Vec<_> = gold.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ForgeWorks Robotics", "Nimbus Analytics"]);
    }

    #[tokio::test]
    async fn find_by_tier_is_case_sensitive() {
        let repository = sample();

        let gold = repository.find_by_tier("Gold").await.unwrap();

        assert!(gold.is_empty());
    }

    #[tokio::test]
    async fn find_by_tier_matches_nothing_for_unknown_tiers() {
        let repository = sample();

        let bronze = repository.find_by_tier("bronze").await.unwrap();

        assert!(bronze.is_empty());
    }

    #[tokio::test]
    async fn every_sponsor_shows_up_under_its_own_tier() {
        let repository = sample();

        for sponsor in repository.find_all().await.unwrap() {
            let tier_mates =
                repository.find_by_tier(&sponsor.tier).await.unwrap();

            assert!(tier_mates.iter().any(|s| s.id == sponsor.id));
        }
    }
}
