use anyhow::{anyhow, Result};

use crate::cli::ui::{confirm, find_contact_by_identifier, user_error};
use crate::cli::Context;
use crate::models::Contact;

/// Execute the delete command. Returns whether a contact was deleted.
pub fn run_delete(ctx: &Context, identifier: &str, force: bool) -> Result<bool> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    match find_contact_by_identifier(ctx, identifier)? {
        Some(contact) => delete_with_confirm(ctx, &contact, force),
        None => {
            println!("No matches.");
            Ok(false)
        }
    }
}

/// Ask before deleting unless `force`. Shared with the menu.
pub fn delete_with_confirm(ctx: &Context, contact: &Contact, force: bool) -> Result<bool> {
    let theme = ctx.theme();
    println!("{}", theme.danger(&contact.name));
    println!("  {}", contact.phone);
    if let Some(ref email) = contact.email {
        println!("  {}", email);
    }
    println!();

    if !force && !confirm(ctx, &format!("Delete {}?", contact.name))? {
        return Ok(false);
    }

    let removed = ctx
        .contacts()
        .remove(&contact.id)
        .map_err(|e| user_error(e, "Could not delete contact."))?;

    if removed {
        println!("Deleted.");
    } else {
        // Someone else got there first
        println!("Already deleted.");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn setup_ctx() -> Context {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let mut a = Contact::new("Bình", "0900");
        a.id = "1".into();
        let mut b = Contact::new("An", "0901");
        b.id = "2".into();
        ctx.contacts().add(&a).unwrap();
        ctx.contacts().add(&b).unwrap();
        ctx
    }

    #[test]
    fn test_delete_by_id_force() {
        let ctx = setup_ctx();
        assert!(run_delete(&ctx, "1", true).unwrap());

        let remaining = ctx.contacts().load_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
    }

    #[test]
    fn test_delete_by_name_force() {
        let ctx = setup_ctx();
        assert!(run_delete(&ctx, "an", true).unwrap());
        assert!(ctx.contacts().get("2").unwrap().is_none());
    }

    #[test]
    fn test_delete_twice() {
        let ctx = setup_ctx();
        let contact = ctx.contacts().get("1").unwrap().unwrap();
        assert!(delete_with_confirm(&ctx, &contact, true).unwrap());
        assert!(!delete_with_confirm(&ctx, &contact, true).unwrap());
        assert_eq!(ctx.contacts().load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_identifier_error() {
        let ctx = setup_ctx();
        assert!(run_delete(&ctx, "   ", false).is_err());
    }

    #[test]
    fn test_delete_nonexistent() {
        let ctx = setup_ctx();
        assert!(!run_delete(&ctx, "nobody", true).unwrap());
        assert_eq!(ctx.contacts().load_all().unwrap().len(), 2);
    }
}
