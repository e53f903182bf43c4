use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use entity::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ContactRepository {
    contacts: Arc<RwLock<Vec<ContactEntity>>>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository {
    /// Assigns the id and creation timestamp, appends, and hands back the
    /// stored record. Inputs are validated at the route layer; nothing here
    /// can reject them.
    pub async fn create(
        &self,
        new_contact: NewContact,
    ) -> anyhow::Result<ContactEntity> {
        let contact = ContactEntity {
            id: Uuid::new_v4().to_string(),
            name: new_contact.name,
            email: new_contact.email,
            phone: new_contact.phone,
            contact_type: new_contact.contact_type,
            message: new_contact.message,
            created_at: Utc::now(),
        };

        let mut contacts = self.contacts.write().await;
        contacts.push(contact.clone());

        Ok(contact)
    }

    pub async fn find_all(&self) -> anyhow::Result<Vec<ContactEntity>> {
        let contacts = self.contacts.read().await;

        Ok(contacts.clone())
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<ContactEntity>> {
        let contacts = self.contacts.read().await;

        Ok(contacts.iter().find(|contact| contact.id == id).cloned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            contact_type: ContactType::General,
            message: "Looking forward to the festival".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let repository = ContactRepository::new();
        let before = Utc::now();

        let stored = repository.create(new_contact("Ada")).await.unwrap();

        assert!(!stored.id.is_empty());
        assert!(stored.created_at >= before);
        assert!(stored.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn created_contacts_are_findable_by_id() {
        let repository = ContactRepository::new();

        let stored = repository.create(new_contact("Grace")).await.unwrap();
        let found = repository.find_by_id(&stored.id).await.unwrap();

        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repository = ContactRepository::new();

        let first = repository.create(new_contact("Ada")).await.unwrap();
        let second = repository.create(new_contact("Ada")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repository.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_all_keeps_submission_order() {
        let repository = ContactRepository::new();

        repository.create(new_contact("Ada")).await.unwrap();
        repository.create(new_contact("Grace")).await.unwrap();

        let contacts = repository.find_all().await.unwrap();
        let names: Vec<_> =
            contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }
}
