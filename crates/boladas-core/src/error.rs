//! # Error Types
//!
//! Domain-specific error types for boladas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boladas-core errors (this file)                                       │
//! │  ├── ValidationError  - Admin/product input boundary failures          │
//! │  └── AuthError        - Login / registration failures                  │
//! │                                                                         │
//! │  boladas-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  boladas-engine errors (application crate)                             │
//! │  └── EngineError      - What the UI shell sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError / AuthError → EngineError → Shell               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The auth messages are the exact user-facing strings of the storefront
//! (Portuguese). Every failure here is reported before any state mutation;
//! nothing in this taxonomy is fatal.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors at the admin and registration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A product needs at least one image before it can be listed.
    #[error("at least one image is required")]
    MissingImages,

    /// Duplicate value (e.g. duplicate product id in the catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Auth Error
// =============================================================================

/// Session/auth gate failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identifier matched the administrator but the secret did not.
    /// Terminal for the attempt: there is no fallback to customer lookup.
    #[error("Palavra-passe de administrador incorreta.")]
    AdminPasswordIncorrect,

    /// Generic customer login failure. Deliberately does not distinguish
    /// "wrong password" from "no such user".
    #[error("Dados de acesso não encontrados. Verifique ou registe-se.")]
    CredentialsNotFound,

    /// Registration submitted with an empty name, identifier or password.
    #[error("Todos os campos são obrigatórios para registo.")]
    MissingRegistrationFields,

    /// Another registered user already owns this e-mail or phone number.
    #[error("Este e-mail/telefone já está registado.")]
    IdentifierTaken,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience alias for auth results.
pub type AuthResult<T> = Result<T, AuthError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "p-1".to_string(),
        };
        assert_eq!(err.to_string(), "id 'p-1' already exists");
    }

    #[test]
    fn test_customer_login_failure_is_generic() {
        // The same message regardless of whether the user exists.
        let err = AuthError::CredentialsNotFound;
        assert_eq!(
            err.to_string(),
            "Dados de acesso não encontrados. Verifique ou registe-se."
        );
    }
}
