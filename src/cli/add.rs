use anyhow::{anyhow, Result};

use crate::cli::avatar::resolve_avatar;
use crate::cli::ui::{confirm, is_valid_email, non_empty, prompt_field_optional, user_error, FormResult};
use crate::cli::{ContactFields, Context};
use crate::models::Contact;

/// Execute the add command. Returns the saved contact, or None if cancelled.
pub fn run_add(ctx: &Context, fields: ContactFields) -> Result<Option<Contact>> {
    // If no options provided, run interactive mode
    let fields = if fields.is_empty() {
        match interactive_mode(ctx)? {
            Some(fields) => fields,
            None => {
                println!("Cancelled.");
                return Ok(None);
            }
        }
    } else {
        fields
    };

    let name = fields.name.and_then(non_empty);
    let phone = fields.phone.and_then(non_empty);
    let (Some(name), Some(phone)) = (name, phone) else {
        return Err(anyhow!("Name and phone are required."));
    };

    let email = fields.email.and_then(non_empty);
    if let Some(ref e) = email {
        if !is_valid_email(e) {
            return Err(anyhow!("Invalid email format: {}", e));
        }
    }

    if let Some(duplicate) = check_duplicate(ctx, &name, &phone)? {
        println!("Warning: Similar contact exists:");
        println!("  {} ({})", duplicate.name, duplicate.phone);
        println!();

        if !confirm(ctx, "Continue anyway?").unwrap_or(false) {
            println!("Cancelled.");
            return Ok(None);
        }
    }

    let mut contact = Contact::new(name, phone);
    contact.email = email;
    contact.notes = fields.notes.and_then(non_empty);
    contact.avatar = fields.avatar.and_then(non_empty).map(|p| resolve_avatar(&p));

    ctx.contacts()
        .add(&contact)
        .map_err(|e| user_error(e, "Could not save contact."))?;

    println!("\nCreated: {}", contact.name);
    Ok(Some(contact))
}

fn interactive_mode(ctx: &Context) -> Result<Option<ContactFields>> {
    let mut values = Vec::with_capacity(5);
    for field in ["name", "phone", "email", "notes", "avatar"] {
        match prompt_field_optional(ctx, field)? {
            FormResult::Value(v) => values.push(non_empty(v)),
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

/// Existing contact with the same name (ignoring case) or the same phone.
fn check_duplicate(ctx: &Context, name: &str, phone: &str) -> Result<Option<Contact>> {
    let contacts = ctx
        .contacts()
        .load_all()
        .map_err(|e| user_error(e, "Could not load contacts."))?;
    let name = name.to_lowercase();

    Ok(contacts
        .into_iter()
        .find(|c| c.name.to_lowercase() == name || c.phone == phone))
}
