use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};

/// A single address-book entry, stored as one element of the `contacts` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Image location kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Contact {
    /// New contact with a fresh time-ordered id.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            notes: None,
            avatar: None,
        }
    }

    /// Check the required fields. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation("Contact id is required.".into()));
        }
        if self.name.trim().is_empty() || self.phone.trim().is_empty() {
            return Err(Error::Validation("Name and phone are required.".into()));
        }
        Ok(())
    }

    /// Plain-text card handed to the share sheet.
    pub fn share_text(&self) -> String {
        let mut text = format!("Name: {}\nPhone: {}", self.name, self.phone);
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            text.push_str("\nEmail: ");
            text.push_str(email);
        }
        text
    }

    /// `tel:`, `sms:` and `mailto:` links for this contact.
    pub fn links(&self) -> ContactLinks {
        let phone: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        ContactLinks {
            call: Url::parse(&format!("tel:{}", phone)).ok(),
            message: Url::parse(&format!("sms:{}", phone)).ok(),
            email: self
                .email
                .as_deref()
                .filter(|e| !e.is_empty())
                .and_then(|e| Url::parse(&format!("mailto:{}", e)).ok()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub call: Option<Url>,
    pub message: Option<Url>,
    pub email: Option<Url>,
}

/// Which link `open` hands to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Call,
    Message,
    Email,
}

impl LinkKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "call" | "tel" | "phone" => Some(Self::Call),
            "sms" | "message" | "text" => Some(Self::Message),
            "email" | "mail" | "mailto" => Some(Self::Email),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Message => "sms",
            Self::Email => "email",
        }
    }
}

impl ContactLinks {
    pub fn get(&self, kind: LinkKind) -> Option<&Url> {
        match kind {
            LinkKind::Call => self.call.as_ref(),
            LinkKind::Message => self.message.as_ref(),
            LinkKind::Email => self.email.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Contact::new("An", "0901");
        let b = Contact::new("An", "0901");
        assert_ne!(a.id, b.id);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_name_and_phone() {
        assert!(Contact::new("", "0900").validate().is_err());
        assert!(Contact::new("An", "   ").validate().is_err());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let mut c = Contact::new("An", "0901");
        c.id = "2".into();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"id":"2","name":"An","phone":"0901"}"#);
    }

    #[test]
    fn test_parse_stored_shape() {
        let c: Contact = serde_json::from_str(
            r#"{"id":"1","name":"Bình","phone":"0900","email":"b@x.vn","avatar":null}"#,
        )
        .unwrap();
        assert_eq!(c.email.as_deref(), Some("b@x.vn"));
        assert_eq!(c.avatar, None);
        assert_eq!(c.notes, None);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let parsed: std::result::Result<Contact, _> =
            serde_json::from_str(r#"{"id":"1","name":"Bình"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_share_text() {
        let mut c = Contact::new("Bình", "0900");
        assert_eq!(c.share_text(), "Name: Bình\nPhone: 0900");

        c.email = Some("b@x.vn".into());
        assert_eq!(c.share_text(), "Name: Bình\nPhone: 0900\nEmail: b@x.vn");
    }

    #[test]
    fn test_links() {
        let mut c = Contact::new("Bình", "+84 90-000");
        let links = c.links();
        assert_eq!(links.call.unwrap().as_str(), "tel:+8490000");
        assert_eq!(links.message.unwrap().as_str(), "sms:+8490000");
        assert!(links.email.is_none());

        c.email = Some("b@x.vn".into());
        assert_eq!(c.links().get(LinkKind::Email).unwrap().as_str(), "mailto:b@x.vn");
    }

    #[test]
    fn test_link_kind_parse() {
        assert_eq!(LinkKind::parse("CALL"), Some(LinkKind::Call));
        assert_eq!(LinkKind::parse("sms"), Some(LinkKind::Message));
        assert_eq!(LinkKind::parse("mail"), Some(LinkKind::Email));
        assert_eq!(LinkKind::parse("fax"), None);
    }
}
