//! # Settings Handlers
//!
//! User preferences, plus the process-wide theme.
//!
//! The theme is tracked independently of any user: an anonymous visitor's
//! dark-mode choice persists under its own key, and a signed-in user's
//! choice is additionally stored inside their settings.

use tracing::{debug, info};

use boladas_core::{auth, Role, Theme, UserSettings};

use crate::engine::Engine;
use crate::error::EngineResult;

impl Engine {
    /// The current process-wide theme.
    pub fn theme(&self) -> Theme {
        self.theme.snapshot()
    }

    /// The effective settings view: the signed-in user's settings, or the
    /// anonymous defaults carrying the current theme.
    pub fn settings(&self) -> UserSettings {
        self.session.with(|s| {
            s.user.as_ref().map(|u| u.settings).unwrap_or(UserSettings {
                theme: self.theme.snapshot(),
                ..UserSettings::default()
            })
        })
    }

    /// Replaces the preference set.
    ///
    /// ## Behavior
    /// - The theme choice always mirrors into the process-wide theme
    ///   slice, signed in or not.
    /// - With a session user: their settings sub-object is replaced, the
    ///   refreshed user is merged into the registered set and the session.
    pub async fn update_settings(&self, settings: UserSettings) -> EngineResult<()> {
        debug!(theme = ?settings.theme, language = ?settings.language, "update_settings intent");

        self.theme.with_mut(|t| *t = settings.theme);
        self.persist_theme().await?;

        let refreshed = self.session.with_mut(|s| {
            s.user.as_mut().map(|user| {
                user.settings = settings;
                user.clone()
            })
        });

        if let Some(user) = refreshed {
            if user.role == Role::Customer {
                self.users.with_mut(|u| auth::merge_user(u, &user));
                self.persist_users().await?;
            }
            self.persist_session().await?;
            info!(user_id = %user.id, "Settings updated");
        }

        Ok(())
    }
}
