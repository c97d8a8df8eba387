use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod avatar;
pub mod context;
pub mod delete;
pub mod display;
pub mod edit;
pub mod list;
pub mod menu;
pub mod profile;
pub mod settings;
pub mod show;
pub mod ui;

pub use add::run_add;
pub use avatar::run_avatar;
pub use context::{Context, Theme};
pub use delete::run_delete;
pub use edit::run_edit;
pub use list::{run_list, run_search};
pub use menu::run_menu;
pub use profile::run_profile;
pub use settings::run_settings;
pub use show::{run_open, run_share, run_show};

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Address book for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file (default: config dir, or $CONTACTBOOK_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List contacts grouped by first letter
    List(ListArgs),
    /// Search contacts by name or phone
    Search(SearchArgs),
    /// Show full details for a contact
    Show(TargetArgs),
    /// Add a new contact
    Add(ContactFields),
    /// Edit an existing contact
    Edit(EditArgs),
    /// Delete a contact
    Delete(DeleteArgs),
    /// Set or clear a contact's picture
    Avatar(AvatarArgs),
    /// Print a contact card for sharing
    Share(TargetArgs),
    /// Call, text or email a contact with the system handler
    Open(OpenArgs),
    /// Show or edit your own card
    Profile(ProfileArgs),
    /// Dark mode and data reset
    Settings(SettingsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only contacts whose name or phone contains this
    #[arg(short, long, default_value = "")]
    pub query: String,
    /// Sort names Z to A inside each section
    #[arg(short, long)]
    pub desc: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query (name or phone)
    #[arg(default_value = "")]
    pub query: String,
    #[arg(short, long)]
    pub desc: bool,
}

#[derive(Args)]
pub struct TargetArgs {
    /// Contact id, name or phone
    pub identifier: String,
}

#[derive(Args, Default)]
pub struct ContactFields {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Path to a picture
    #[arg(short, long)]
    pub avatar: Option<String>,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.notes.is_none()
            && self.avatar.is_none()
    }
}

#[derive(Args)]
pub struct EditArgs {
    /// Contact id, name or phone
    pub identifier: String,
    #[command(flatten)]
    pub fields: ContactFields,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Contact id, name or phone
    pub identifier: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AvatarArgs {
    /// Contact id, name or phone
    pub identifier: String,
    /// Path to a picture (omit to show the current one)
    pub path: Option<String>,
    /// Remove the picture
    #[arg(short, long)]
    pub clear: bool,
}

#[derive(Args)]
pub struct OpenArgs {
    /// Contact id, name or phone
    pub identifier: String,
    /// call, sms or email
    #[arg(default_value = "call")]
    pub action: String,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    /// Path to a picture
    #[arg(short, long)]
    pub avatar: Option<String>,
    /// Edit interactively
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: Option<SettingsAction>,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Turn dark mode on or off
    DarkMode {
        /// on or off (omit to toggle)
        state: Option<String>,
    },
    /// Delete all contacts
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
        /// Also clear your own card
        #[arg(long)]
        profile: bool,
    },
}
