//! Shared UI primitives for contactbook
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `name: `
//! - Feedback: single word when possible: `Saved.`
//! - Failures the user can't fix are shown generically; details go to the log

use anyhow::{anyhow, Result};
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{Confirm, InquireError, Select, Text};
use std::io::{self, Write};
use tracing::error;

use crate::cli::Context;
use crate::models::Contact;

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get terminal dimensions, defaulting to 80x24 if unavailable
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Lines available to a selection list, leaving room for the prompt.
pub fn visible_lines() -> usize {
    let (_, height) = term_size();
    height.saturating_sub(4).max(5)
}

/// Truncate a string to max_chars, adding ellipsis if needed.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", kept)
}

/// Pad with spaces to `width` characters.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// Convert a library failure into the message shown to the user.
///
/// Storage and parse failures become `fallback` (e.g. "Could not save
/// contact.") with the cause logged; anything else is shown as is.
pub fn user_error(err: crate::Error, fallback: &str) -> anyhow::Error {
    if err.is_internal() {
        error!(error = %err, "{}", fallback);
        anyhow!("{}", fallback)
    } else {
        err.into()
    }
}

/// Prompt for yes/no confirmation (default: no). Cancel counts as no.
pub fn confirm(ctx: &Context, prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(ctx.theme().render_config())
        .with_default(false)
        .prompt();

    match result {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Prompt for text input, returning empty string on cancel
pub fn prompt_for_input(ctx: &Context, label: &str) -> Result<String> {
    let result = Text::new(label)
        .with_render_config(ctx.theme().render_config())
        .prompt_skippable()?;
    Ok(result.unwrap_or_default())
}

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Prompt for a field with optional current value
/// Format: `field [current]: ` or `field: ` if no current value
/// Empty input keeps the current value; `-` clears it
pub fn prompt_field(ctx: &Context, field: &str, current: Option<&str>) -> Result<FormResult<String>> {
    let has_value = current.is_some_and(|v| !v.is_empty());
    let prompt = match current {
        Some(val) if !val.is_empty() => format!("{} [{}] (- clears): ", field, truncate(val, 30)),
        _ => format!("{}: ", field),
    };

    let result = Text::new(&prompt)
        .with_render_config(ctx.theme().render_config())
        .prompt();

    match result {
        Ok(input) => {
            let input = input.trim();
            if input == "-" && has_value {
                Ok(FormResult::Value(String::new()))
            } else if input.is_empty() {
                Ok(FormResult::Value(current.unwrap_or("").to_string()))
            } else {
                Ok(FormResult::Value(input.to_string()))
            }
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt for a field with no current value (returns empty string if skipped)
pub fn prompt_field_optional(ctx: &Context, field: &str) -> Result<FormResult<String>> {
    prompt_field(ctx, field, None)
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

/// `None` for blank input.
pub fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Format a contact for selection display: "Name (phone)"
fn format_contact_for_select(contact: &Contact) -> String {
    format!("{} ({})", contact.name, contact.phone)
}

/// Display a contact selection menu
/// Returns the selected contact or None if cancelled
pub fn select_contact(ctx: &Context, contacts: &[Contact]) -> Result<Option<Contact>> {
    if contacts.is_empty() {
        return Ok(None);
    }

    // Single match goes directly through (no selection needed)
    if contacts.len() == 1 {
        return Ok(Some(contacts[0].clone()));
    }

    let options: Vec<String> = contacts.iter().map(format_contact_for_select).collect();

    let result = Select::new("Select:", options.clone())
        .with_render_config(ctx.theme().render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .raw_prompt_skippable()?;

    Ok(result.map(|choice| contacts[choice.index].clone()))
}

/// Find a contact by id, or by name/phone search.
/// - An exact id match wins
/// - Otherwise the search query is applied and several matches prompt a selection
/// Returns None if not found or selection cancelled.
pub fn find_contact_by_identifier(ctx: &Context, identifier: &str) -> Result<Option<Contact>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(None);
    }

    let repo = ctx.contacts();
    if let Some(contact) = repo.get(identifier).map_err(|e| user_error(e, "Could not load contacts."))? {
        return Ok(Some(contact));
    }

    let results = repo
        .find(identifier)
        .map_err(|e| user_error(e, "Could not load contacts."))?;
    select_contact(ctx, &results)
}
