use std::fmt::Write;

use crate::cli::ui::{pad, truncate};
use crate::cli::Theme;
use crate::models::{Contact, PersonalInfo};
use crate::sections::Section;

const MAX_NAME_WIDTH: usize = 30;

/// Owner card shown above the list.
pub fn render_personal_card(theme: &Theme, info: &PersonalInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", theme.accent(&info.name));
    let _ = writeln!(out, "  {}", theme.muted(&info.phone));
    if let Some(ref email) = info.email {
        let _ = writeln!(out, "  {}", theme.muted(email));
    }
    if let Some(ref avatar) = info.avatar {
        let _ = writeln!(out, "  {}", theme.muted(avatar));
    }
    out
}

/// Section headers followed by aligned "name  phone" rows.
pub fn render_sections(theme: &Theme, sections: &[Section]) -> String {
    let width = sections
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "{}", theme.accent(&section.title));
        for contact in &section.items {
            let name = pad(&truncate(&contact.name, MAX_NAME_WIDTH), width);
            let _ = writeln!(out, "  {}  {}", name, theme.muted(&contact.phone));
        }
    }
    out
}

/// Full contact detail, only non-empty fields
pub fn render_contact(theme: &Theme, contact: &Contact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", theme.accent(&contact.name));
    let _ = writeln!(out, "  {}", contact.phone);

    let optional = [
        contact.email.as_deref(),
        contact.notes.as_deref(),
        contact.avatar.as_deref(),
    ];
    for value in optional.into_iter().flatten().filter(|v| !v.is_empty()) {
        let _ = writeln!(out, "  {}", value);
    }

    let links = contact.links();
    let urls: Vec<String> = [links.call, links.message, links.email]
        .into_iter()
        .flatten()
        .map(|u| u.to_string())
        .collect();
    if !urls.is_empty() {
        let _ = writeln!(out, "\n  {}", theme.muted(&urls.join("  ")));
    }
    let _ = writeln!(out, "  {}", theme.muted(&format!("id {}", contact.id)));
    out
}

pub fn print_personal_card(theme: &Theme, info: &PersonalInfo) {
    print!("{}", render_personal_card(theme, info));
}

pub fn print_sections(theme: &Theme, sections: &[Section]) {
    print!("{}", render_sections(theme, sections));
}

pub fn print_full_contact(theme: &Theme, contact: &Contact) {
    print!("{}", render_contact(theme, contact));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{compute_sections, SortOrder};

    fn contact(id: &str, name: &str, phone: &str) -> Contact {
        Contact {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            notes: None,
            avatar: None,
        }
    }

    #[test]
    fn test_render_sections_plain() {
        let theme = Theme::new(false, false);
        let contacts = vec![contact("1", "Bình", "0900"), contact("2", "An", "0901")];
        let sections = compute_sections(&contacts, "", SortOrder::Asc);

        assert_eq!(
            render_sections(&theme, &sections),
            "A\n  An    0901\nB\n  Bình  0900\n"
        );
    }

    #[test]
    fn test_render_sections_empty() {
        let theme = Theme::new(false, false);
        assert_eq!(render_sections(&theme, &[]), "");
    }

    #[test]
    fn test_render_personal_card_defaults() {
        let theme = Theme::new(true, false);
        assert_eq!(
            render_personal_card(&theme, &PersonalInfo::default()),
            "Your name\n  Your phone number\n"
        );
    }

    #[test]
    fn test_render_contact_skips_missing_fields() {
        let theme = Theme::new(false, false);
        let mut c = contact("1", "Bình", "0900");
        c.notes = Some("neighbour".into());

        let out = render_contact(&theme, &c);
        assert!(out.starts_with("Bình\n\n  0900\n  neighbour\n"));
        assert!(out.contains("tel:0900"));
        assert!(!out.contains("mailto:"));
        assert!(out.ends_with("  id 1\n"));
    }
}
