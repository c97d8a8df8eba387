use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::store::{Store, KEY_CONTACTS};
use crate::error::{Error, Result};
use crate::models::Contact;
use crate::sections::{collation_key, matches};

/// Attempts at a read-modify-write before giving up on a busy key.
const MAX_ATTEMPTS: usize = 3;

/// The contact collection as a unit of business operations.
///
/// Every mutation reads the whole array, changes it and writes it back with
/// a compare-and-set, so a concurrent writer causes a retry on fresh data
/// instead of a silently lost update.
pub struct ContactRepository<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> ContactRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All contacts in stored (insertion) order. Missing key means no contacts.
    pub fn load_all(&self) -> Result<Vec<Contact>> {
        decode(self.store.get(KEY_CONTACTS)?.as_deref())
    }

    pub fn get(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self.load_all()?.into_iter().find(|c| c.id == id))
    }

    /// Contacts matching `query` by name or phone, in name order.
    pub fn find(&self, query: &str) -> Result<Vec<Contact>> {
        let mut found: Vec<Contact> = self
            .load_all()?
            .into_iter()
            .filter(|c| matches(c, query))
            .collect();
        found.sort_by_cached_key(|c| collation_key(&c.name));
        Ok(found)
    }

    /// Append a new contact. Its id must not be in the collection yet.
    pub fn add(&self, contact: &Contact) -> Result<()> {
        contact.validate()?;

        self.mutate(|contacts| {
            if contacts.iter().any(|c| c.id == contact.id) {
                return Err(Error::Validation(format!(
                    "A contact with id {} already exists.",
                    contact.id
                )));
            }
            contacts.push(contact.clone());
            Ok(())
        })?;

        info!(id = %contact.id, "added contact");
        Ok(())
    }

    /// Replace the contact with the same id, leaving every other entry as is.
    pub fn update(&self, contact: &Contact) -> Result<()> {
        contact.validate()?;

        self.mutate(|contacts| {
            let slot = contacts
                .iter_mut()
                .find(|c| c.id == contact.id)
                .ok_or_else(|| Error::NotFound(contact.id.clone()))?;
            *slot = contact.clone();
            Ok(())
        })?;

        info!(id = %contact.id, "updated contact");
        Ok(())
    }

    /// Remove the contact with `id`. Returns false, without writing, if it
    /// wasn't there.
    pub fn remove(&self, id: &str) -> Result<bool> {
        if !self.load_all()?.iter().any(|c| c.id == id) {
            debug!(id, "remove: no such contact");
            return Ok(false);
        }

        let removed = self.mutate(|contacts| {
            let before = contacts.len();
            contacts.retain(|c| c.id != id);
            Ok(contacts.len() != before)
        })?;

        info!(id, removed, "removed contact");
        Ok(removed)
    }

    /// Drop the whole collection.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(KEY_CONTACTS)?;
        info!("cleared all contacts");
        Ok(())
    }

    fn mutate<T>(&self, mut apply: impl FnMut(&mut Vec<Contact>) -> Result<T>) -> Result<T> {
        for attempt in 1..=MAX_ATTEMPTS {
            let snapshot = self.store.get_versioned(KEY_CONTACTS)?;
            let mut contacts = decode(snapshot.value.as_deref())?;

            let outcome = apply(&mut contacts)?;

            let encoded = serde_json::to_string(&contacts).map_err(|e| Error::parse(KEY_CONTACTS, e))?;
            if self
                .store
                .compare_and_set(KEY_CONTACTS, snapshot.revision, &encoded)?
            {
                return Ok(outcome);
            }
            warn!(attempt, "contacts changed during save, retrying");
        }

        Err(Error::Conflict(KEY_CONTACTS.to_string()))
    }
}

/// Parse the stored array and check collection invariants.
fn decode(raw: Option<&str>) -> Result<Vec<Contact>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let contacts: Vec<Contact> =
        serde_json::from_str(raw).map_err(|e| Error::parse(KEY_CONTACTS, e))?;

    let mut seen = HashSet::with_capacity(contacts.len());
    for contact in &contacts {
        if contact.id.trim().is_empty() {
            return Err(Error::parse(KEY_CONTACTS, "contact without id"));
        }
        if !seen.insert(contact.id.as_str()) {
            return Err(Error::parse(KEY_CONTACTS, format!("duplicate id {}", contact.id)));
        }
    }

    Ok(contacts)
}
