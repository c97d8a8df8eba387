mod contact;
mod personal_info;
mod preferences;

pub use contact::{Contact, ContactLinks, LinkKind};
pub use personal_info::{PersonalInfo, DEFAULT_NAME, DEFAULT_PHONE};
pub use preferences::Preferences;
