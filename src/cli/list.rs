use anyhow::Result;
use tracing::warn;

use crate::cli::display::{print_personal_card, print_sections};
use crate::cli::ui::user_error;
use crate::cli::Context;
use crate::models::PersonalInfo;
use crate::sections::{compute_sections, SortOrder};

/// Execute the list command: owner card, then contacts grouped by letter
pub fn run_list(ctx: &Context, query: &str, order: SortOrder) -> Result<()> {
    let theme = ctx.theme();
    // A broken owner card shouldn't hide the contacts
    let info = ctx.profile().load().unwrap_or_else(|e| {
        warn!(error = %e, "showing placeholder personal info");
        PersonalInfo::default()
    });
    let contacts = ctx
        .contacts()
        .load_all()
        .map_err(|e| user_error(e, "Could not load contacts."))?;

    print_personal_card(&theme, &info);
    println!();

    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    let sections = compute_sections(&contacts, query, order);
    if sections.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    print_sections(&theme, &sections);
    Ok(())
}

/// Execute the search command: the list without the owner card
pub fn run_search(ctx: &Context, query: &str, order: SortOrder) -> Result<usize> {
    let contacts = ctx
        .contacts()
        .load_all()
        .map_err(|e| user_error(e, "Could not load contacts."))?;

    let sections = compute_sections(&contacts, query, order);
    let found: usize = sections.iter().map(|s| s.items.len()).sum();

    if found == 0 {
        println!("No matches.");
    } else {
        print_sections(&ctx.theme(), &sections);
    }
    Ok(found)
}
