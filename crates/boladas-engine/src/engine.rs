//! # The Engine
//!
//! The storefront's state container: six slices, loaded once at startup
//! and re-persisted whole on every change.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Engine::open                                      │
//! │                                                                         │
//! │  1. Load the six slices independently ───────────────────────────────► │
//! │     • each missing key leaves the in-memory default untouched          │
//! │     • malformed payloads load as absent (store layer)                  │
//! │                                                                         │
//! │  2. Restore the session ─────────────────────────────────────────────► │
//! │     • current-user present → session + admin flag + the user's theme   │
//! │     • current-user ABSENT  → logged out, standalone theme key applies  │
//! │                                                                         │
//! │  3. Handlers mutate a slice, then persist it whole ──────────────────► │
//! │     • no deltas, no debouncing: every change rewrites the slice        │
//! │     • an anonymous session REMOVES the current-user key                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use boladas_core::{defaults, Cart, Catalog, LayoutSettings, Theme, User};
use boladas_store::{Slice, Store};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::recommend::RecommendationClient;
use crate::state::{Session, SliceState};

/// The application state container.
///
/// One instance owns all storefront state; a UI shell keeps it behind an
/// `Arc` and calls the intent handlers defined in [`crate::handlers`].
#[derive(Debug)]
pub struct Engine {
    pub(crate) store: Store,
    pub(crate) config: EngineConfig,
    pub(crate) recommend: RecommendationClient,

    pub(crate) catalog: SliceState<Catalog>,
    pub(crate) cart: SliceState<Cart>,
    pub(crate) layout: SliceState<LayoutSettings>,
    pub(crate) users: SliceState<Vec<User>>,
    pub(crate) session: SliceState<Session>,
    pub(crate) theme: SliceState<Theme>,
}

impl Engine {
    /// Opens the engine over a slice store.
    ///
    /// Loads the six persisted slices; every key is independently optional
    /// and falls back to its default. Absence of the current-user key means
    /// logged out; a restored user also restores their theme preference,
    /// otherwise the standalone theme key applies.
    pub async fn open(store: Store, config: EngineConfig) -> EngineResult<Self> {
        let kv = store.kv();

        let cart = kv.read_slice::<Cart>(Slice::Cart).await?.unwrap_or_default();
        let catalog = kv
            .read_slice::<Catalog>(Slice::Catalog)
            .await?
            .unwrap_or_else(defaults::default_catalog);
        let layout = kv
            .read_slice::<LayoutSettings>(Slice::Layout)
            .await?
            .unwrap_or_default();
        let users = kv
            .read_slice::<Vec<User>>(Slice::Users)
            .await?
            .unwrap_or_default();
        let current_user = kv.read_slice::<User>(Slice::CurrentUser).await?;
        let saved_theme = kv.read_slice::<Theme>(Slice::Theme).await?;

        let (session, theme) = match current_user {
            Some(user) => {
                let theme = user.settings.theme;
                (Session::authenticated(user), theme)
            }
            None => (Session::default(), saved_theme.unwrap_or_default()),
        };

        info!(
            products = catalog.len(),
            registered_users = users.len(),
            authenticated = session.is_authenticated(),
            "Engine state loaded"
        );

        let recommend = RecommendationClient::new(config.gemini_api_key.clone());

        Ok(Engine {
            store,
            config,
            recommend,
            catalog: SliceState::new(catalog),
            cart: SliceState::new(cart),
            layout: SliceState::new(layout),
            users: SliceState::new(users),
            session: SliceState::new(session),
            theme: SliceState::new(theme),
        })
    }

    /// The configuration the engine was opened with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // Admin Gate
    // =========================================================================

    /// The trust boundary for admin-only intents. Enforced here, not in
    /// the UI: a shell hiding the admin panel is cosmetics, this is the
    /// check.
    pub(crate) fn require_admin(&self) -> EngineResult<()> {
        if self.session.with(|s| s.is_admin) {
            Ok(())
        } else {
            debug!("Admin gate rejected a non-admin intent");
            Err(EngineError::forbidden())
        }
    }

    // =========================================================================
    // Persistence Sync
    // =========================================================================
    //
    // Each helper snapshots its slice (cloning under the lock) and rewrites
    // the whole record. Locks are never held across the await.

    pub(crate) async fn persist_cart(&self) -> EngineResult<()> {
        let snapshot = self.cart.snapshot();
        self.store.kv().write_slice(Slice::Cart, &snapshot).await?;
        Ok(())
    }

    pub(crate) async fn persist_catalog(&self) -> EngineResult<()> {
        let snapshot = self.catalog.snapshot();
        self.store.kv().write_slice(Slice::Catalog, &snapshot).await?;
        Ok(())
    }

    pub(crate) async fn persist_layout(&self) -> EngineResult<()> {
        let snapshot = self.layout.snapshot();
        self.store.kv().write_slice(Slice::Layout, &snapshot).await?;
        Ok(())
    }

    pub(crate) async fn persist_users(&self) -> EngineResult<()> {
        let snapshot = self.users.snapshot();
        self.store.kv().write_slice(Slice::Users, &snapshot).await?;
        Ok(())
    }

    /// The one asymmetric rule: a signed-in user is written to the
    /// current-user key; an anonymous session removes the key. Absence
    /// means "logged out", never null.
    pub(crate) async fn persist_session(&self) -> EngineResult<()> {
        let snapshot = self.session.with(|s| s.user.clone());
        match snapshot {
            Some(user) => self.store.kv().write_slice(Slice::CurrentUser, &user).await?,
            None => self.store.kv().remove_slice(Slice::CurrentUser).await?,
        }
        Ok(())
    }

    pub(crate) async fn persist_theme(&self) -> EngineResult<()> {
        let snapshot = self.theme.snapshot();
        self.store.kv().write_slice(Slice::Theme, &snapshot).await?;
        Ok(())
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use boladas_store::StoreConfig;

    /// An engine over a fresh in-memory store.
    pub(crate) async fn test_engine() -> Engine {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        Engine::open(store, EngineConfig::default()).await.unwrap()
    }

    /// Reopens an engine over the same store, as a process restart would.
    pub(crate) async fn reopen(engine: &Engine) -> Engine {
        Engine::open(engine.store.clone(), engine.config.clone())
            .await
            .unwrap()
    }

    /// Signs the fixed demo admin in.
    pub(crate) async fn login_as_admin(engine: &Engine) {
        engine
            .login("soboladas52@gmail.com", "CDE2007#")
            .await
            .unwrap();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use boladas_core::Theme;

    #[tokio::test]
    async fn test_fresh_engine_uses_defaults() {
        let engine = test_engine().await;

        assert_eq!(engine.catalog.with(|c| c.len()), 2);
        assert!(engine.cart.with(|c| c.is_empty()));
        assert!(engine.users.with(|u| u.is_empty()));
        assert!(!engine.session.with(|s| s.is_authenticated()));
        assert_eq!(engine.theme.snapshot(), Theme::Light);
        assert_eq!(engine.layout.with(|l| l.brand_name.clone()), "SÓ BOLADAS");
    }

    #[tokio::test]
    async fn test_reopen_restores_persisted_slices() {
        let engine = test_engine().await;

        engine.register("Beatriz", "buyer@example.com", "segredo").await.unwrap();
        engine.add_to_cart("1").await.unwrap();

        let reopened = reopen(&engine).await;

        assert_eq!(reopened.users.with(|u| u.len()), 1);
        assert_eq!(reopened.cart.with(|c| c.total_quantity()), 1);
        // Session restored from the current-user key.
        assert!(reopened.session.with(|s| s.is_authenticated()));
    }

    #[tokio::test]
    async fn test_reopen_after_logout_is_anonymous() {
        let engine = test_engine().await;

        engine.register("Beatriz", "buyer@example.com", "segredo").await.unwrap();
        engine.logout().await.unwrap();

        let reopened = reopen(&engine).await;
        assert!(!reopened.session.with(|s| s.is_authenticated()));
        // Registered users survive the logout.
        assert_eq!(reopened.users.with(|u| u.len()), 1);
    }
}
