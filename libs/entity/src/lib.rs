pub mod contact;
pub mod event;
pub mod sponsor;
pub mod user;

pub mod prelude {
    pub use crate::contact::{
        Contact as ContactEntity, ContactType, NewContact,
    };
    pub use crate::event::Event as EventEntity;
    pub use crate::sponsor::Sponsor as SponsorEntity;
    pub use crate::user::{NewUser, User as UserEntity};
}
