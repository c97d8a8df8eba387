use anyhow::{anyhow, Result};

use crate::cli::ui::{confirm, user_error};
use crate::cli::{Context, SettingsAction};

/// Execute the settings command
pub fn run_settings(ctx: &Context, action: Option<SettingsAction>) -> Result<()> {
    match action {
        None => {
            print_settings(ctx);
            Ok(())
        }
        Some(SettingsAction::DarkMode { state }) => {
            let on = match state.as_deref() {
                None => !ctx.preferences().dark_mode,
                Some(s) => parse_switch(s)?,
            };
            set_dark_mode(ctx, on)
        }
        Some(SettingsAction::Reset { force, profile }) => {
            reset(ctx, force, profile).map(|_| ())
        }
    }
}

fn print_settings(ctx: &Context) {
    let theme = ctx.theme();
    let mode = if ctx.preferences().dark_mode { "on" } else { "off" };
    println!("{}  {}", theme.accent("dark mode"), mode);
    println!("{}  {}", theme.muted("version"), env!("CARGO_PKG_VERSION"));
    println!("{}  {}", theme.muted("database"), ctx.db().path_display());
}

pub fn set_dark_mode(ctx: &Context, on: bool) -> Result<()> {
    ctx.set_dark_mode(on)
        .map_err(|e| user_error(e, "Could not save settings."))?;
    println!("Dark mode {}.", if on { "on" } else { "off" });
    Ok(())
}

/// Delete every contact (and the owner card when `profile`), after
/// confirmation unless `force`. Returns whether anything was reset.
pub fn reset(ctx: &Context, force: bool, profile: bool) -> Result<bool> {
    let prompt = if profile {
        "Delete all contacts and your personal info?"
    } else {
        "Delete all contacts?"
    };
    if !force {
        println!("{}", ctx.theme().danger("This cannot be undone."));
    }
    if !force && !confirm(ctx, prompt)? {
        return Ok(false);
    }

    ctx.contacts()
        .clear()
        .map_err(|e| user_error(e, "Could not delete contacts."))?;
    if profile {
        ctx.profile()
            .clear()
            .map_err(|e| user_error(e, "Could not delete personal info."))?;
    }

    println!("All contacts deleted.");
    Ok(true)
}

fn parse_switch(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(anyhow!("Expected on or off, got: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::{Contact, PersonalInfo};

    fn setup_ctx() -> Context {
        let ctx = Context::plain(Database::open_memory().unwrap());
        ctx.contacts().add(&Contact::new("An", "0901")).unwrap();
        ctx.profile()
            .save(&PersonalInfo {
                name: "Trực".into(),
                ..Default::default()
            })
            .unwrap();
        ctx
    }

    #[test]
    fn test_dark_mode_on_off_toggle() {
        let ctx = setup_ctx();
        run_settings(&ctx, Some(SettingsAction::DarkMode { state: Some("on".into()) })).unwrap();
        assert!(ctx.preferences().dark_mode);

        run_settings(&ctx, Some(SettingsAction::DarkMode { state: None })).unwrap();
        assert!(!ctx.preferences().dark_mode);
        assert!(!ctx.db().preferences().load().unwrap().dark_mode);

        assert!(run_settings(&ctx, Some(SettingsAction::DarkMode { state: Some("dim".into()) })).is_err());
    }

    #[test]
    fn test_reset_contacts_only() {
        let ctx = setup_ctx();
        assert!(reset(&ctx, true, false).unwrap());
        assert!(ctx.contacts().load_all().unwrap().is_empty());
        assert_eq!(ctx.profile().load().unwrap().name, "Trực");
    }

    #[test]
    fn test_reset_with_profile() {
        let ctx = setup_ctx();
        run_settings(&ctx, Some(SettingsAction::Reset { force: true, profile: true })).unwrap();
        assert!(ctx.contacts().load_all().unwrap().is_empty());
        assert_eq!(ctx.profile().load().unwrap(), PersonalInfo::default());
    }

    #[test]
    fn test_show_settings() {
        let ctx = setup_ctx();
        run_settings(&ctx, None).unwrap();
    }

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch("ON").unwrap());
        assert!(!parse_switch("off").unwrap());
        assert!(parse_switch("maybe").is_err());
    }
}
