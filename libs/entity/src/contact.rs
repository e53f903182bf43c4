use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A stored contact-form submission. Newsletter signups land here too, as
/// records with [`ContactType::Newsletter`].
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub contact_type: ContactType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied part of a contact; the store assigns `id` and
/// `created_at` at insertion.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub contact_type: ContactType,
    pub message: String,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactType {
    #[default]
    General,
    Volunteer,
    Press,
    Partnership,
    Newsletter,
}

impl ContactType {
    /// Accepted wire values, in declaration order.
    pub fn accepted() -> Vec<String> {
        Self::iter().map(|t| t.to_string()).collect()
    }
}
