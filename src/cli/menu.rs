//! Main menu for contactbook
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::Select;
use std::io::{self, IsTerminal};

use crate::cli::delete::delete_with_confirm;
use crate::cli::settings::{reset, set_dark_mode};
use crate::cli::ui::{clear_screen, find_contact_by_identifier, prompt_for_input};
use crate::cli::{run_add, run_edit, run_list, run_profile, run_search, run_show, ContactFields, Context, ProfileArgs};
use crate::sections::SortOrder;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    List,
    Search,
    ToggleSort,
    Show,
    Add,
    Edit,
    Delete,
    Profile,
    DarkMode,
    Reset,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::List,
        MenuOption::Search,
        MenuOption::ToggleSort,
        MenuOption::Show,
        MenuOption::Add,
        MenuOption::Edit,
        MenuOption::Delete,
        MenuOption::Profile,
        MenuOption::DarkMode,
        MenuOption::Reset,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::List => "List",
            MenuOption::Search => "Search",
            MenuOption::ToggleSort => "Toggle Sort",
            MenuOption::Show => "Show",
            MenuOption::Add => "Add",
            MenuOption::Edit => "Edit",
            MenuOption::Delete => "Delete",
            MenuOption::Profile => "Personal Info",
            MenuOption::DarkMode => "Dark Mode",
            MenuOption::Reset => "Delete All Contacts",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(ctx: &Context) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            contactbook list\n  \
            contactbook search <query>\n  \
            contactbook show <name>\n  \
            Run 'contactbook --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();
    let mut order = SortOrder::Asc;

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        let title = format!("contactbook ({})", order.as_str());
        let selection = Select::new(&title, menu_labels.clone())
            .with_render_config(ctx.theme().render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        // Errors are shown and the loop continues; the user retries
        if let Err(e) = execute_command(ctx, choice, &mut order) {
            eprintln!("\nError: {}", e);
        }
        wait_for_continue(ctx);
    }
}

fn execute_command(ctx: &Context, choice: MenuOption, order: &mut SortOrder) -> Result<()> {
    match choice {
        MenuOption::List => run_list(ctx, "", *order),
        MenuOption::Search => {
            let query = prompt_for_input(ctx, "search: ")?;
            run_search(ctx, &query, *order).map(|_| ())
        }
        MenuOption::ToggleSort => {
            *order = order.toggled();
            run_list(ctx, "", *order)
        }
        MenuOption::Show => {
            let name = prompt_for_input(ctx, "name: ")?;
            if name.is_empty() {
                return Ok(());
            }
            run_show(ctx, &name).map(|_| ())
        }
        MenuOption::Add => run_add(ctx, ContactFields::default()).map(|_| ()),
        MenuOption::Edit => {
            let name = prompt_for_input(ctx, "name: ")?;
            if name.is_empty() {
                return Ok(());
            }
            run_edit(ctx, &name, ContactFields::default()).map(|_| ())
        }
        MenuOption::Delete => {
            let name = prompt_for_input(ctx, "name: ")?;
            match find_contact_by_identifier(ctx, &name)? {
                Some(contact) => delete_with_confirm(ctx, &contact, false).map(|_| ()),
                None => {
                    println!("No matches.");
                    Ok(())
                }
            }
        }
        MenuOption::Profile => run_profile(
            ctx,
            ProfileArgs {
                name: None,
                phone: None,
                email: None,
                avatar: None,
                interactive: true,
            },
        )
        .map(|_| ()),
        MenuOption::DarkMode => set_dark_mode(ctx, !ctx.preferences().dark_mode),
        MenuOption::Reset => reset(ctx, false, false).map(|_| ()),
        MenuOption::Quit => Ok(()),
    }
}

/// Wait for user to press enter to continue
fn wait_for_continue(ctx: &Context) {
    println!();
    let _ = inquire::Text::new("[enter]")
        .with_render_config(ctx.theme().render_config())
        .prompt_skippable();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::Contact;

    #[test]
    fn test_menu_option_roundtrip() {
        for opt in MenuOption::ALL {
            let label = opt.label();
            let recovered = MenuOption::from_label(label);
            assert_eq!(recovered, Some(*opt), "Failed roundtrip for {:?}", opt);
        }
    }

    #[test]
    fn test_menu_option_from_invalid_label() {
        assert_eq!(MenuOption::from_label("Invalid"), None);
        assert_eq!(MenuOption::from_label(""), None);
    }

    #[test]
    fn test_toggle_sort_flips_order() {
        let ctx = Context::plain(Database::open_memory().unwrap());
        ctx.contacts().add(&Contact::new("An", "0901")).unwrap();

        let mut order = SortOrder::Asc;
        execute_command(&ctx, MenuOption::ToggleSort, &mut order).unwrap();
        assert_eq!(order, SortOrder::Desc);
        execute_command(&ctx, MenuOption::ToggleSort, &mut order).unwrap();
        assert_eq!(order, SortOrder::Asc);
    }

    #[test]
    fn test_dark_mode_option_toggles() {
        let ctx = Context::plain(Database::open_memory().unwrap());
        let mut order = SortOrder::Asc;
        execute_command(&ctx, MenuOption::DarkMode, &mut order).unwrap();
        assert!(ctx.preferences().dark_mode);
    }
}
