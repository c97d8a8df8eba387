use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Your name";
pub const DEFAULT_PHONE: &str = "Your phone number";

/// The owner's own card, stored under `personalInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            phone: default_phone(),
            email: None,
            avatar: None,
        }
    }
}

impl PersonalInfo {
    /// Blank strings become placeholders or absent fields.
    pub fn normalized(mut self) -> Self {
        if self.name.trim().is_empty() {
            self.name = default_name();
        }
        if self.phone.trim().is_empty() {
            self.phone = default_phone();
        }
        self.email = self.email.filter(|s| !s.trim().is_empty());
        self.avatar = self.avatar.filter(|s| !s.trim().is_empty());
        self
    }
}
