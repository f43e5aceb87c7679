//! # Authentication Rules
//!
//! Pure rules for the session/auth gate: the privileged admin path,
//! customer credential lookup, registration, and the post-auth merge.
//!
//! ## Gate Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session/Auth Gate                                   │
//! │                                                                         │
//! │  submit(identifier, password)                                           │
//! │       │                                                                 │
//! │       ├── identifier == admin e-mail (case-insensitive)?                │
//! │       │        ├── secret matches → synthetic admin (never merged)     │
//! │       │        └── secret wrong   → AdminPasswordIncorrect (terminal)  │
//! │       │                                                                 │
//! │       ├── login: registered user with email/phone == identifier AND    │
//! │       │          matching password → user                              │
//! │       │          otherwise        → CredentialsNotFound (generic)      │
//! │       │                                                                 │
//! │       └── register: all fields non-empty, identifier unused →          │
//! │                     new customer user                                  │
//! │                                                                         │
//! │  every customer success ──► merge_user (idempotent upsert)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These functions are pure over the registered-user slice: id and
//! timestamp are passed in by the caller, and persistence is the engine's
//! concern.

use chrono::{DateTime, Utc};

use crate::error::{AuthError, AuthResult};
use crate::types::{Role, User, UserSettings};

/// Fixed id of the synthetic admin identity. Never present in the
/// registered-user slice.
pub const SYNTHETIC_ADMIN_ID: &str = "ADMIN";

/// The configured administrator credential pair.
///
/// A fixed client-visible credential pair is a demo safety toggle, not a
/// security system; it is unsuitable for any deployment where the client
/// is untrusted. See DESIGN.md.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Password Boundary
// =============================================================================

/// The single password-comparison boundary.
///
/// Plaintext equality, preserving the reference lookup semantics. A future
/// hashing scheme replaces this body without touching the gate's control
/// flow.
pub fn password_matches(stored: Option<&str>, submitted: &str) -> bool {
    stored.is_some_and(|p| p == submitted)
}

// =============================================================================
// Login
// =============================================================================

/// Whether the submitted identifier addresses the privileged admin path.
pub fn is_admin_identifier(credentials: &AdminCredentials, identifier: &str) -> bool {
    identifier.trim().to_lowercase() == credentials.email.to_lowercase()
}

/// Builds the synthetic admin user minted by a privileged login.
pub fn synthetic_admin(credentials: &AdminCredentials, now: DateTime<Utc>) -> User {
    User {
        id: SYNTHETIC_ADMIN_ID.to_string(),
        full_name: "Administrador Só Boladas".to_string(),
        email: credentials.email.clone(),
        phone: String::new(),
        password: None,
        role: Role::Admin,
        created_at: now,
        orders: Vec::new(),
        settings: UserSettings::default(),
    }
}

/// Authenticates a login attempt against the registered-user slice.
///
/// ## Behavior
/// - Admin identifier + correct secret: the synthetic admin.
/// - Admin identifier + wrong secret: terminal failure, no customer
///   fallback.
/// - Otherwise a registered user whose email OR phone equals the
///   identifier and whose stored password matches; any miss collapses
///   into one generic error.
pub fn login(
    users: &[User],
    credentials: &AdminCredentials,
    identifier: &str,
    password: &str,
    now: DateTime<Utc>,
) -> AuthResult<User> {
    let identifier = identifier.trim();

    if is_admin_identifier(credentials, identifier) {
        if password == credentials.password {
            return Ok(synthetic_admin(credentials, now));
        }
        return Err(AuthError::AdminPasswordIncorrect);
    }

    users
        .iter()
        .find(|u| {
            (u.email == identifier || u.phone == identifier)
                && password_matches(u.password.as_deref(), password)
        })
        .cloned()
        .ok_or(AuthError::CredentialsNotFound)
}

// =============================================================================
// Registration
// =============================================================================

/// Builds a new customer account.
///
/// The identifier becomes the e-mail when it contains an `@`, the phone
/// otherwise; the unused channel stays empty. Role is always customer,
/// orders start empty, settings take their defaults.
///
/// ## Errors
/// - Any empty field (after trimming name/identifier)
/// - An identifier already registered as another user's email or phone
pub fn register(
    users: &[User],
    full_name: &str,
    identifier: &str,
    password: &str,
    id: String,
    now: DateTime<Utc>,
) -> AuthResult<User> {
    let full_name = full_name.trim();
    let identifier = identifier.trim();

    if full_name.is_empty() || identifier.is_empty() || password.is_empty() {
        return Err(AuthError::MissingRegistrationFields);
    }

    if users
        .iter()
        .any(|u| u.email == identifier || u.phone == identifier)
    {
        return Err(AuthError::IdentifierTaken);
    }

    let (email, phone) = if identifier.contains('@') {
        (identifier.to_string(), String::new())
    } else {
        (String::new(), identifier.to_string())
    };

    Ok(User {
        id,
        full_name: full_name.to_string(),
        email,
        phone,
        password: Some(password.to_string()),
        role: Role::Customer,
        created_at: now,
        orders: Vec::new(),
        settings: UserSettings::default(),
    })
}

// =============================================================================
// Post-Auth Merge
// =============================================================================

/// The single identity predicate: same id, or equal non-empty e-mails, or
/// equal non-empty phones.
///
/// The non-empty guards keep two phone-registered users (both with empty
/// e-mail) from colliding. This one rule replaces the reference's pair of
/// slightly different predicates; see DESIGN.md.
pub fn same_identity(a: &User, b: &User) -> bool {
    a.id == b.id
        || (!a.email.is_empty() && a.email == b.email)
        || (!a.phone.is_empty() && a.phone == b.phone)
}

/// Reconciles an authenticated customer into the registered-user slice:
/// replaces the matching entry with the freshest copy, or appends when no
/// entry matches. Idempotent: authenticating the same user twice never
/// creates two entries.
///
/// The synthetic admin is never merged.
pub fn merge_user(users: &mut Vec<User>, user: &User) {
    if user.role == Role::Admin {
        return;
    }

    if let Some(existing) = users.iter_mut().find(|u| same_identity(u, user)) {
        *existing = user.clone();
    } else {
        users.push(user.clone());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
