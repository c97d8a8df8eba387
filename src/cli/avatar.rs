use anyhow::{anyhow, Result};
use std::path::Path;

use crate::cli::ui::{find_contact_by_identifier, user_error};
use crate::cli::Context;

/// Absolute path for an existing file; anything else (URIs, paths on other
/// devices) is kept as given.
pub fn resolve_avatar(location: &str) -> String {
    let path = Path::new(location);
    if path.is_file() {
        if let Ok(abs) = path.canonicalize() {
            return abs.to_string_lossy().into_owned();
        }
    }
    location.to_string()
}

/// Execute the avatar command - set, show or clear a contact's picture
pub fn run_avatar(ctx: &Context, identifier: &str, location: Option<&str>, clear: bool) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Contact identifier cannot be empty."));
    }

    let Some(mut contact) = find_contact_by_identifier(ctx, identifier)? else {
        println!("No contact found.");
        return Ok(());
    };

    if clear {
        contact.avatar = None;
        ctx.contacts()
            .update(&contact)
            .map_err(|e| user_error(e, "Could not save contact."))?;
        println!("Picture cleared for {}.", contact.name);
        return Ok(());
    }

    let Some(location) = location.map(str::trim).filter(|l| !l.is_empty()) else {
        match contact.avatar {
            Some(ref avatar) => println!("{}: {}", contact.name, avatar),
            None => println!("{}: no picture", contact.name),
        }
        return Ok(());
    };

    contact.avatar = Some(resolve_avatar(location));
    ctx.contacts()
        .update(&contact)
        .map_err(|e| user_error(e, "Could not save contact."))?;

    println!("Picture set for {}.", contact.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::Contact;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_ctx() -> Context {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let mut c = Contact::new("Jane", "0900");
        c.id = "1".into();
        ctx.contacts().add(&c).unwrap();
        ctx
    }

    #[test]
    fn test_resolve_existing_file() {
        let mut temp = NamedTempFile::with_suffix(".jpg").unwrap();
        writeln!(temp, "not really a jpeg").unwrap();

        let resolved = resolve_avatar(temp.path().to_str().unwrap());
        assert!(Path::new(&resolved).is_absolute());
        assert!(Path::new(&resolved).exists());
    }

    #[test]
    fn test_resolve_keeps_uri() {
        assert_eq!(resolve_avatar("file:///sdcard/a.png"), "file:///sdcard/a.png");
    }

    #[test]
    fn test_set_and_clear() {
        let ctx = setup_ctx();
        run_avatar(&ctx, "1", Some("content://photos/7"), false).unwrap();
        assert_eq!(
            ctx.contacts().get("1").unwrap().unwrap().avatar.as_deref(),
            Some("content://photos/7")
        );

        run_avatar(&ctx, "jane", None, true).unwrap();
        assert_eq!(ctx.contacts().get("1").unwrap().unwrap().avatar, None);
    }

    #[test]
    fn test_empty_identifier_error() {
        let ctx = setup_ctx();
        assert!(run_avatar(&ctx, "   ", None, false).is_err());
    }

    #[test]
    fn test_unknown_contact_is_not_an_error() {
        let ctx = setup_ctx();
        run_avatar(&ctx, "nobody", Some("/x.png"), false).unwrap();
    }
}
