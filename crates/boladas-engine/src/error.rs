//! # Engine Error Type
//!
//! Unified error type for the intent handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Só Boladas                             │
//! │                                                                         │
//! │  Shell                        Engine                                    │
//! │  ─────                        ──────                                    │
//! │                                                                         │
//! │  engine.login(...)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Intent handler: Result<T, EngineError>                          │  │
//! │  │                                                                  │  │
//! │  │  AuthError        ──► code AUTH_ERROR,    message verbatim       │  │
//! │  │  ValidationError  ──► code VALIDATION_ERROR                      │  │
//! │  │  StoreError       ──► code STORAGE_ERROR, details logged only    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  { "code": "AUTH_REQUIRED", "message": "Autenticação necessária" }     │
//! │                                                                         │
//! │  Every failure is reported BEFORE slice state mutates; nothing here    │
//! │  is fatal and nothing aborts the process.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use boladas_core::{AuthError, ValidationError};
use boladas_store::StoreError;

/// Error returned from intent handlers.
///
/// Serializes as what the shell displays:
/// ```json
/// { "code": "VALIDATION_ERROR", "message": "name is required" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for handler failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Login/registration failed
    AuthError,

    /// The intent needs a signed-in user (e.g. checkout)
    AuthRequired,

    /// The intent needs the admin role
    Forbidden,

    /// Persistence failed
    StorageError,

    /// Internal error
    Internal,
}

impl EngineError {
    /// Creates a new engine error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        EngineError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        EngineError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::new(ErrorCode::ValidationError, message)
    }

    /// The checkout-without-a-session signal.
    pub fn auth_required() -> Self {
        EngineError::new(ErrorCode::AuthRequired, "Autenticação necessária")
    }

    /// The admin-gate rejection.
    pub fn forbidden() -> Self {
        EngineError::new(
            ErrorCode::Forbidden,
            "Apenas o administrador pode executar esta ação",
        )
    }
}

/// Auth failures keep their user-facing message verbatim.
impl From<AuthError> for EngineError {
    fn from(err: AuthError) -> Self {
        EngineError::new(ErrorCode::AuthError, err.to_string())
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Store failures are logged with detail and surfaced generically.
impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store operation failed: {}", err);
        EngineError::new(ErrorCode::StorageError, "Storage operation failed")
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for EngineError {}

/// Result type for intent handlers.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_keeps_user_facing_message() {
        let err: EngineError = AuthError::CredentialsNotFound.into();
        assert_eq!(err.code, ErrorCode::AuthError);
        assert_eq!(
            err.message,
            "Dados de acesso não encontrados. Verifique ou registe-se."
        );
    }

    #[test]
    fn test_codes_serialize_screaming_snake() {
        let err = EngineError::auth_required();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "AUTH_REQUIRED");
    }
}
