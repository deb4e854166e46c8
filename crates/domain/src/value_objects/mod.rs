pub mod bio;
pub mod email;
pub mod name;
pub mod password;
pub mod publication;
pub mod tag_name;
pub mod user_uuid;

pub use bio::Bio;
pub use email::Email;
pub use name::Name;
pub use password::Password;
pub use publication::PublicationRef;
pub use tag_name::TagName;
pub use user_uuid::UserUuid;
