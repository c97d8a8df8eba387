use tracing::info;

use super::store::{Store, KEY_SETTINGS};
use crate::error::{Error, Result};
use crate::models::Preferences;

pub struct PreferencesRepository<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> PreferencesRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Preferences> {
        match self.store.get(KEY_SETTINGS)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| Error::parse(KEY_SETTINGS, e)),
            None => Ok(Preferences::default()),
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let encoded = serde_json::to_string(prefs).map_err(|e| Error::parse(KEY_SETTINGS, e))?;
        self.store.set(KEY_SETTINGS, &encoded)?;
        info!(dark_mode = prefs.dark_mode, "saved preferences");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(KEY_SETTINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_defaults_to_light() {
        let db = Database::open_memory().unwrap();
        assert!(!db.preferences().load().unwrap().dark_mode);
    }

    #[test]
    fn test_dark_mode_persists() {
        let db = Database::open_memory().unwrap();
        db.preferences().save(&Preferences { dark_mode: true }).unwrap();
        assert!(db.preferences().load().unwrap().dark_mode);

        db.preferences().clear().unwrap();
        assert!(!db.preferences().load().unwrap().dark_mode);
    }
}
