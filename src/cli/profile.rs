use anyhow::{anyhow, Result};

use crate::cli::avatar::resolve_avatar;
use crate::cli::display::print_personal_card;
use crate::cli::ui::{is_valid_email, prompt_field, user_error, FormResult};
use crate::cli::{Context, ProfileArgs};
use crate::models::{PersonalInfo, DEFAULT_NAME, DEFAULT_PHONE};

/// Execute the profile command: show the owner card, or edit it when any
/// field is given
pub fn run_profile(ctx: &Context, args: ProfileArgs) -> Result<PersonalInfo> {
    let current = ctx
        .profile()
        .load()
        .map_err(|e| user_error(e, "Could not load personal info."))?;

    let has_fields =
        args.name.is_some() || args.phone.is_some() || args.email.is_some() || args.avatar.is_some();

    let updated = if args.interactive {
        match edit_form(ctx, &current)? {
            Some(info) => info,
            None => {
                println!("Cancelled.");
                return Ok(current);
            }
        }
    } else if has_fields {
        PersonalInfo {
            name: args.name.unwrap_or_else(|| current.name.clone()),
            phone: args.phone.unwrap_or_else(|| current.phone.clone()),
            email: args.email.or_else(|| current.email.clone()),
            avatar: args
                .avatar
                .map(|a| resolve_avatar(a.trim()))
                .or_else(|| current.avatar.clone()),
        }
    } else {
        print_personal_card(&ctx.theme(), &current);
        return Ok(current);
    };

    if let Some(ref e) = updated.email {
        if !e.trim().is_empty() && !is_valid_email(e.trim()) {
            return Err(anyhow!("Invalid email format: {}", e));
        }
    }

    let saved = ctx
        .profile()
        .save(&updated)
        .map_err(|e| user_error(e, "Could not save personal info."))?;
    println!("Saved.");
    Ok(saved)
}

fn edit_form(ctx: &Context, current: &PersonalInfo) -> Result<Option<PersonalInfo>> {
    // Placeholders aren't worth offering as a current value
    let name = Some(current.name.as_str()).filter(|n| *n != DEFAULT_NAME);
    let phone = Some(current.phone.as_str()).filter(|p| *p != DEFAULT_PHONE);

    let fields = [
        ("name", name),
        ("phone", phone),
        ("email", current.email.as_deref()),
        ("avatar", current.avatar.as_deref()),
    ];

    let mut values = Vec::with_capacity(fields.len());
    for (field, value) in fields {
        match prompt_field(ctx, field, value)? {
            FormResult::Value(v) => values.push(v),
            FormResult::Cancelled => return Ok(None),
        }
    }

    let mut values = values.into_iter();
    Ok(Some(PersonalInfo {
        name: values.next().unwrap_or_default(),
        phone: values.next().unwrap_or_default(),
        email: values.next(),
        avatar: values.next().map(|a| resolve_avatar(a.trim())),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn args() -> ProfileArgs {
        ProfileArgs {
            name: None,
            phone: None,
            email: None,
            avatar: None,
            interactive: false,
        }
    }

    #[test]
    fn test_show_defaults() {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let info = run_profile(&ctx, args()).unwrap();
        assert_eq!(info, PersonalInfo::default());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let ctx = Context::plain(Database::open_memory().unwrap());
        run_profile(
            &ctx,
            ProfileArgs {
                name: Some("Trực".into()),
                phone: Some("0912".into()),
                ..args()
            },
        )
        .unwrap();

        let saved = run_profile(
            &ctx,
            ProfileArgs {
                email: Some("truc@example.com".into()),
                ..args()
            },
        )
        .unwrap();

        assert_eq!(saved.name, "Trực");
        assert_eq!(saved.phone, "0912");
        assert_eq!(saved.email.as_deref(), Some("truc@example.com"));
        assert_eq!(ctx.profile().load().unwrap(), saved);
    }

    #[test]
    fn test_blank_name_restores_placeholder() {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let saved = run_profile(
            &ctx,
            ProfileArgs {
                name: Some(String::new()),
                ..args()
            },
        )
        .unwrap();
        assert_eq!(saved.name, DEFAULT_NAME);
    }

    #[test]
    fn test_invalid_email() {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let result = run_profile(
            &ctx,
            ProfileArgs {
                email: Some("nope".into()),
                ..args()
            },
        );
        assert!(result.is_err());
    }
}
