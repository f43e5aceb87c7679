//! # Auth Handlers
//!
//! Login, registration and logout, orchestrating the pure rules of
//! `boladas_core::auth` against the registered-user slice.
//!
//! Every successful customer authentication passes through the same merge:
//! the freshest copy of the user is upserted into the registered set
//! (idempotently), and the session is replaced. The synthetic admin is
//! never merged.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use boladas_core::{auth, Role, User};

use crate::engine::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Authenticates a login attempt.
    ///
    /// The privileged path (the configured admin identifier) yields the
    /// synthetic admin; a wrong admin secret is terminal for the attempt.
    /// The customer path matches email OR phone plus password, and fails
    /// with one generic message.
    pub async fn login(&self, identifier: &str, password: &str) -> EngineResult<User> {
        debug!(identifier = %identifier, "login intent");

        let registered = self.users.snapshot();
        let user = auth::login(
            &registered,
            &self.config.admin_credentials(),
            identifier,
            password,
            Utc::now(),
        )?;

        self.complete_auth(user).await
    }

    /// Registers a new customer account and signs it in.
    pub async fn register(
        &self,
        full_name: &str,
        identifier: &str,
        password: &str,
    ) -> EngineResult<User> {
        debug!(identifier = %identifier, "register intent");

        let registered = self.users.snapshot();
        let user = auth::register(
            &registered,
            full_name,
            identifier,
            password,
            Uuid::new_v4().to_string(),
            Utc::now(),
        )?;

        self.complete_auth(user).await
    }

    /// Clears the session and the admin flag. Registered users, cart
    /// contents and the theme are untouched; the current-user key is
    /// removed (absence means logged out).
    pub async fn logout(&self) -> EngineResult<()> {
        info!("logout intent");

        self.session.with_mut(|s| s.clear());
        self.persist_session().await?;
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    /// Whether the session carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.session.with(|s| s.is_admin)
    }

    /// The shared tail of every successful authentication: merge customers
    /// into the registered set, replace the session, persist both slices.
    pub(crate) async fn complete_auth(&self, user: User) -> EngineResult<User> {
        if user.role == Role::Customer {
            self.users.with_mut(|u| auth::merge_user(u, &user));
            self.persist_users().await?;
        }

        self.session.with_mut(|s| s.set(user.clone()));
        self.persist_session().await?;

        info!(user_id = %user.id, role = ?user.role, "Authenticated");
        Ok(user)
    }
}
