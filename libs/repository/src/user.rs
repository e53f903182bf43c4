use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use entity::prelude::*;

// Same create/read pattern as contacts. No route is bound to it yet; the
// account area of the site is still unshipped.
#[derive(Clone, Debug, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<UserEntity>>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository {
    pub async fn create(
        &self,
        new_user: NewUser,
    ) -> anyhow::Result<UserEntity> {
        let user = UserEntity {
            id: Uuid::new_v4().to_string(),
            username: new_user.username,
            password: new_user.password,
        };

        let mut users = self.users.write().await;
        users.push(user.clone());

        Ok(user)
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<UserEntity>> {
        let users = self.users.read().await;

        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<UserEntity>> {
        let users = self.users.read().await;

        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn create_then_find_by_username() {
        let repository = UserRepository::new();

        let stored = repository
            .create(NewUser {
                username: "ada".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        let found = repository.find_by_username("ada").await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn find_by_id_misses_for_unknown_ids() {
        let repository = UserRepository::new();

        let found = repository.find_by_id("nope").await.unwrap();

        assert_eq!(found, None);
    }
}
