//! Shared state handed to every command: the database and the user's
//! preferences, loaded once at start.

use crossterm::style::{Color, Stylize};
use inquire::ui::{RenderConfig, Styled};
use std::cell::Cell;
use std::io::{self, IsTerminal};
use tracing::warn;

use crate::db::{ContactRepository, Database, ProfileRepository};
use crate::error::Result;
use crate::models::Preferences;

pub struct Context {
    db: Database,
    prefs: Cell<Preferences>,
    colored: bool,
}

impl Context {
    /// Wrap `db`, reading preferences from it. Unreadable preferences fall
    /// back to the defaults rather than blocking the app.
    pub fn new(db: Database) -> Self {
        let prefs = db.preferences().load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable preferences");
            Preferences::default()
        });

        Self {
            db,
            prefs: Cell::new(prefs),
            colored: io::stdout().is_terminal(),
        }
    }

    /// Context without terminal colors, for tests and pipes.
    pub fn plain(db: Database) -> Self {
        let mut ctx = Self::new(db);
        ctx.colored = false;
        ctx
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn contacts(&self) -> ContactRepository<'_, Database> {
        self.db.contacts()
    }

    pub fn profile(&self) -> ProfileRepository<'_, Database> {
        self.db.profile()
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs.get()
    }

    /// Persist the flag, then switch the running theme.
    pub fn set_dark_mode(&self, on: bool) -> Result<()> {
        let prefs = Preferences { dark_mode: on };
        self.db.preferences().save(&prefs)?;
        self.prefs.set(prefs);
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::new(self.prefs.get().dark_mode, self.colored)
    }
}

/// Terminal colors for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    colored: bool,
    accent: (u8, u8, u8),
    muted: (u8, u8, u8),
}

const DANGER: (u8, u8, u8) = (0xFF, 0x52, 0x52);

impl Theme {
    pub fn new(dark: bool, colored: bool) -> Self {
        if dark {
            Self {
                dark,
                colored,
                accent: (0x4a, 0x90, 0xe2),
                muted: (0xaa, 0xaa, 0xaa),
            }
        } else {
            Self {
                dark,
                colored,
                accent: (0x21, 0x96, 0xF3),
                muted: (0x66, 0x66, 0x66),
            }
        }
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.accent, true)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.muted, false)
    }

    pub fn danger(&self, text: &str) -> String {
        self.paint(text, DANGER, false)
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.colored {
            return text.to_string();
        }
        let styled = text.with(Color::Rgb { r, g, b });
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    /// Prompt styling for inquire, without the default `?` prefix.
    pub fn render_config(&self) -> RenderConfig<'static> {
        let (r, g, b) = self.accent;
        let base = if self.colored {
            RenderConfig::default_colored()
        } else {
            RenderConfig::empty()
        };
        let config = base
            .with_prompt_prefix(Styled::new(""))
            .with_answered_prompt_prefix(Styled::new(""));

        if self.colored {
            config.with_highlighted_option_prefix(
                Styled::new(">").with_fg(inquire::ui::Color::Rgb { r, g, b }),
            )
        } else {
            config
        }
    }
}
