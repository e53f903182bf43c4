//! In-memory storage for the festival site. Every collection lives in
//! process memory behind an `RwLock`; state is seeded at startup and gone on
//! restart, which is all the contact inbox and content lists need.

use contact::ContactRepository;
use event::EventRepository;
use sponsor::SponsorRepository;
use user::UserRepository;

pub mod contact;
pub mod event;
pub mod seed;
pub mod sponsor;
pub mod user;

#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
    pub sponsor: SponsorRepository,
    pub contact: ContactRepository,
    pub user: UserRepository,
}

/// Builds the store handlers receive through axum state: events and sponsors
/// come pre-filled from the seed lists, contacts and users start empty and
/// only ever grow.
pub fn init_repository() -> Repository {
    Repository {
        event: EventRepository::new(seed::events()),
        sponsor: SponsorRepository::new(seed::sponsors()),
        contact: ContactRepository::new(),
        user: UserRepository::new(),
    }
}
