use anyhow::{anyhow, Result};
use tracing::info;

use crate::cli::display::print_full_contact;
use crate::cli::ui::find_contact_by_identifier;
use crate::cli::Context;
use crate::models::{Contact, LinkKind};

/// Execute the show command. Returns the contact shown, if any.
pub fn run_show(ctx: &Context, identifier: &str) -> Result<Option<Contact>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    match find_contact_by_identifier(ctx, identifier)? {
        Some(contact) => {
            print_full_contact(&ctx.theme(), &contact);
            Ok(Some(contact))
        }
        None => {
            println!("No matches.");
            Ok(None)
        }
    }
}

/// Print the share card for a contact
pub fn run_share(ctx: &Context, identifier: &str) -> Result<()> {
    match find_contact_by_identifier(ctx, identifier)? {
        Some(contact) => println!("{}", contact.share_text()),
        None => println!("No matches."),
    }
    Ok(())
}

/// Hand a `tel:`, `sms:` or `mailto:` link to the system
pub fn run_open(ctx: &Context, identifier: &str, action: &str) -> Result<()> {
    let kind = LinkKind::parse(action)
        .ok_or_else(|| anyhow!("Unknown action: {}. Available: call, sms, email", action))?;

    let Some(contact) = find_contact_by_identifier(ctx, identifier)? else {
        println!("No matches.");
        return Ok(());
    };

    let url = link_for(&contact, kind)?;
    info!(action = kind.as_str(), "opening link");
    webbrowser::open(&url).map_err(|e| anyhow!("Could not open {}: {}", url, e))?;
    Ok(())
}

fn link_for(contact: &Contact, kind: LinkKind) -> Result<String> {
    contact
        .links()
        .get(kind)
        .map(|u| u.to_string())
        .ok_or_else(|| match kind {
            LinkKind::Email => anyhow!("{} has no email address.", contact.name),
            _ => anyhow!("{} has no usable phone number.", contact.name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn setup_ctx() -> Context {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let mut c = Contact::new("Bình", "0900 123");
        c.id = "1".into();
        ctx.contacts().add(&c).unwrap();
        ctx
    }

    #[test]
    fn test_show_finds_contact() {
        let ctx = setup_ctx();
        assert_eq!(run_show(&ctx, "1").unwrap().unwrap().name, "Bình");
        assert!(run_show(&ctx, "zzz").unwrap().is_none());
        assert!(run_show(&ctx, " ").is_err());
    }

    #[test]
    fn test_share_runs() {
        let ctx = setup_ctx();
        run_share(&ctx, "bình").unwrap();
        run_share(&ctx, "nobody").unwrap();
    }

    #[test]
    fn test_link_for() {
        let ctx = setup_ctx();
        let c = ctx.contacts().get("1").unwrap().unwrap();
        assert_eq!(link_for(&c, LinkKind::Call).unwrap(), "tel:0900123");
        assert_eq!(link_for(&c, LinkKind::Message).unwrap(), "sms:0900123");
        assert!(link_for(&c, LinkKind::Email).is_err());
    }

    #[test]
    fn test_open_rejects_unknown_action() {
        let ctx = setup_ctx();
        assert!(run_open(&ctx, "1", "fax").is_err());
    }
}
