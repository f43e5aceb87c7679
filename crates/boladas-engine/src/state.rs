//! # State Slices
//!
//! The engine's in-memory state cells.
//!
//! ## Thread Safety
//! Each slice is wrapped in `Arc<Mutex<T>>` because:
//! 1. Handlers may run from concurrent tasks in a multi-threaded shell
//! 2. Only one handler should modify a slice at a time
//! 3. Locks are released before any `.await`: handlers snapshot the slice
//!    under the lock and persist the snapshot afterwards
//!
//! This is the single-writer discipline the original single-threaded app
//! got for free from its event loop.

use std::sync::{Arc, Mutex};

use boladas_core::{Role, User};

/// One owned state slice.
///
/// ## Usage
/// ```rust,ignore
/// let subtotal = engine.cart.with(|cart| cart.subtotal());
/// engine.cart.with_mut(|cart| cart.add(&product));
/// ```
///
/// ## Why Not RwLock?
/// Slice operations are quick and most of them write. An RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SliceState<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> SliceState<T> {
    /// Wraps an initial value.
    pub fn new(value: T) -> Self {
        SliceState {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Executes a function with read access to the slice.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.lock().expect("state mutex poisoned");
        f(&guard)
    }

    /// Executes a function with write access to the slice.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.lock().expect("state mutex poisoned");
        f(&mut guard)
    }
}

impl<T: Clone> SliceState<T> {
    /// Clones the current value out of the lock, for persistence.
    pub fn snapshot(&self) -> T {
        self.with(|value| value.clone())
    }
}

impl<T: Default> Default for SliceState<T> {
    fn default() -> Self {
        SliceState::new(T::default())
    }
}

// =============================================================================
// Session
// =============================================================================

/// The current session: at most one user, plus the derived admin flag.
///
/// Owned exclusively by the engine; never duplicated into other slices.
/// Persistence is asymmetric by design: a session user is written to the
/// current-user key, while an anonymous session REMOVES the key (absence
/// means "logged out", never null).
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub is_admin: bool,
}

impl Session {
    /// A session restored or created for the given user.
    pub fn authenticated(user: User) -> Self {
        let is_admin = user.role == Role::Admin;
        Session {
            user: Some(user),
            is_admin,
        }
    }

    /// Replaces the session user, re-deriving the admin flag.
    pub fn set(&mut self, user: User) {
        self.is_admin = user.role == Role::Admin;
        self.user = Some(user);
    }

    /// Clears the session and the admin flag.
    pub fn clear(&mut self) {
        self.user = None;
        self.is_admin = false;
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
