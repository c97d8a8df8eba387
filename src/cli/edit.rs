use anyhow::{anyhow, Result};

use crate::cli::avatar::resolve_avatar;
use crate::cli::ui::{find_contact_by_identifier, is_valid_email, non_empty, prompt_field, user_error, FormResult};
use crate::cli::{ContactFields, Context};
use crate::models::Contact;

/// Execute the edit command
///
/// Given fields replace the stored ones; an empty string clears an optional
/// field. With no fields, every field is prompted for.
pub fn run_edit(ctx: &Context, identifier: &str, fields: ContactFields) -> Result<Option<Contact>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let Some(contact) = find_contact_by_identifier(ctx, identifier)? else {
        println!("No contact found matching \"{}\".", identifier);
        return Ok(None);
    };

    let fields = if fields.is_empty() {
        match edit_form(ctx, &contact)? {
            Some(f) => f,
            None => {
                println!("Cancelled.");
                return Ok(None);
            }
        }
    } else {
        fields
    };

    let (updated, changes) = apply_fields(&contact, fields)?;
    if changes.is_empty() {
        println!("No changes.");
        return Ok(Some(contact));
    }

    ctx.contacts()
        .update(&updated)
        .map_err(|e| user_error(e, "Could not update contact."))?;

    println!("Updated: {}", updated.name);
    for change in changes {
        println!("  - {}", change);
    }
    Ok(Some(updated))
}

/// Merge `fields` into a copy of `contact`, listing what changed.
fn apply_fields(contact: &Contact, fields: ContactFields) -> Result<(Contact, Vec<String>)> {
    let mut updated = contact.clone();
    let mut changes = Vec::new();

    if let Some(name) = fields.name {
        let name = non_empty(name).ok_or_else(|| anyhow!("Name cannot be empty."))?;
        if name != contact.name {
            changes.push(format!("name -> {}", name));
            updated.name = name;
        }
    }
    if let Some(phone) = fields.phone {
        let phone = non_empty(phone).ok_or_else(|| anyhow!("Phone cannot be empty."))?;
        if phone != contact.phone {
            changes.push(format!("phone -> {}", phone));
            updated.phone = phone;
        }
    }
    if let Some(email) = fields.email {
        let email = non_empty(email);
        if let Some(ref e) = email {
            if !is_valid_email(e) {
                return Err(anyhow!("Invalid email format: {}", e));
            }
        }
        if email != contact.email {
            changes.push(format!("email -> {}", email.as_deref().unwrap_or("(none)")));
            updated.email = email;
        }
    }
    if let Some(notes) = fields.notes {
        let notes = non_empty(notes);
        if notes != contact.notes {
            changes.push("notes updated".to_string());
            updated.notes = notes;
        }
    }
    if let Some(avatar) = fields.avatar {
        let avatar = non_empty(avatar).map(|a| resolve_avatar(&a));
        if avatar != contact.avatar {
            changes.push("picture updated".to_string());
            updated.avatar = avatar;
        }
    }

    Ok((updated, changes))
}

fn edit_form(ctx: &Context, contact: &Contact) -> Result<Option<ContactFields>> {
    let current = [
        ("name", Some(contact.name.as_str())),
        ("phone", Some(contact.phone.as_str())),
        ("email", contact.email.as_deref()),
        ("notes", contact.notes.as_deref()),
        ("avatar", contact.avatar.as_deref()),
    ];

    let mut values = Vec::with_capacity(current.len());
    for (field, value) in current {
        match prompt_field(ctx, field, value)? {
            FormResult::Value(v) => values.push(Some(v)),
            FormResult::Cancelled => return Ok(None),
        }
    }

    let mut values = values.into_iter();
    Ok(Some(ContactFields {
        name: values.next().flatten(),
        phone: values.next().flatten(),
        email: values.next().flatten(),
        notes: values.next().flatten(),
        avatar: values.next().flatten(),
    }))
}
