use tracing::info;

use super::store::{Store, KEY_PERSONAL_INFO};
use crate::error::{Error, Result};
use crate::models::PersonalInfo;

/// The singleton personal-info record.
pub struct ProfileRepository<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> ProfileRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Stored card, or the placeholder card if none was saved yet.
    pub fn load(&self) -> Result<PersonalInfo> {
        match self.store.get(KEY_PERSONAL_INFO)? {
            Some(raw) => serde_json::from_str::<PersonalInfo>(&raw)
                .map(PersonalInfo::normalized)
                .map_err(|e| Error::parse(KEY_PERSONAL_INFO, e)),
            None => Ok(PersonalInfo::default()),
        }
    }

    pub fn save(&self, info: &PersonalInfo) -> Result<PersonalInfo> {
        let info = info.clone().normalized();
        let encoded =
            serde_json::to_string(&info).map_err(|e| Error::parse(KEY_PERSONAL_INFO, e))?;
        self.store.set(KEY_PERSONAL_INFO, &encoded)?;
        info!("saved personal info");
        Ok(info)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(KEY_PERSONAL_INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::DEFAULT_NAME;

    #[test]
    fn test_load_defaults() {
        let db = Database::open_memory().unwrap();
        let info = db.profile().load().unwrap();
        assert_eq!(info.name, DEFAULT_NAME);
        assert_eq!(info.avatar, None);
    }

    #[test]
    fn test_save_and_load() {
        let db = Database::open_memory().unwrap();
        let info = PersonalInfo {
            name: "Nguyễn Trung Trực".into(),
            phone: "0912345678".into(),
            email: Some("truc@example.com".into()),
            avatar: Some("/home/me/me.png".into()),
        };
        db.profile().save(&info).unwrap();
        assert_eq!(db.profile().load().unwrap(), info);
    }

    #[test]
    fn test_save_drops_blank_email() {
        let db = Database::open_memory().unwrap();
        let mut info = PersonalInfo::default();
        info.email = Some(String::new());
        let saved = db.profile().save(&info).unwrap();
        assert_eq!(saved.email, None);
        assert_eq!(
            db.get(KEY_PERSONAL_INFO).unwrap().as_deref(),
            Some(r#"{"name":"Your name","phone":"Your phone number"}"#)
        );
    }

    #[test]
    fn test_malformed_is_parse_error() {
        let db = Database::open_memory().unwrap();
        db.set(KEY_PERSONAL_INFO, "[]").unwrap();
        assert!(matches!(db.profile().load(), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_clear() {
        let db = Database::open_memory().unwrap();
        db.profile().save(&PersonalInfo::default()).unwrap();
        db.profile().clear().unwrap();
        assert_eq!(db.get(KEY_PERSONAL_INFO).unwrap(), None);
    }
}
