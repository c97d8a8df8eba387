//! Turns the contact collection into the sectioned list shown on the home
//! screen: filter by query, sort by name, bucket by first letter.

mod collate;

pub use collate::{collation_key, compare, CollationKey};

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::Contact;

/// Section title for contacts whose name is empty.
pub const UNNAMED_SECTION: &str = "#";

/// Display direction of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A titled group of contacts sharing a leading character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: String,
    pub items: Vec<&'a Contact>,
}

/// Name contains `query` ignoring case, or phone contains it verbatim.
/// An empty query matches everything.
pub fn matches(contact: &Contact, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    contact.name.to_lowercase().contains(&query.to_lowercase()) || contact.phone.contains(query)
}

/// Stable sort by name. Equal names keep their relative order in both
/// directions.
pub fn sort_by_name(contacts: &mut [&Contact], order: SortOrder) {
    match order {
        SortOrder::Asc => contacts.sort_by_cached_key(|c| collation_key(&c.name)),
        SortOrder::Desc => contacts.sort_by_cached_key(|c| Reverse(collation_key(&c.name))),
    }
}

/// Uppercased first character of the name, or [`UNNAMED_SECTION`].
pub fn section_title(name: &str) -> String {
    match name.chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => UNNAMED_SECTION.to_string(),
    }
}

/// Filter, sort and group `contacts` for display.
///
/// Items inside a section follow `order`. Sections themselves are always
/// in ascending collation order, with the unnamed section last.
pub fn compute_sections<'a>(contacts: &'a [Contact], query: &str, order: SortOrder) -> Vec<Section<'a>> {
    let mut filtered: Vec<&Contact> = contacts.iter().filter(|c| matches(c, query)).collect();
    sort_by_name(&mut filtered, order);

    let mut groups: HashMap<String, Vec<&Contact>> = HashMap::new();
    for contact in filtered {
        groups.entry(section_title(&contact.name)).or_default().push(contact);
    }

    let mut sections: Vec<Section<'a>> = groups
        .into_iter()
        .map(|(title, items)| Section { title, items })
        .collect();
    sections.sort_by_cached_key(|s| (s.title == UNNAMED_SECTION, collation_key(&s.title)));
    sections
}
