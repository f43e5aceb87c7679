//! # Engine Configuration
//!
//! Configuration loaded once at engine startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SB_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex is needed.

use boladas_core::auth::AdminCredentials;

/// Engine configuration.
///
/// The administrator credential pair is the reference's fixed demo pair,
/// isolated here so a deployment can override it without code changes.
/// A client-visible credential is a demo safety toggle, not a security
/// system; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Administrator login identifier (matched case-insensitively).
    pub admin_email: String,

    /// Administrator secret.
    pub admin_password: String,

    /// API key for the best-effort AI shopping tips. `None` disables the
    /// feature entirely.
    pub gemini_api_key: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            admin_email: "soboladas52@gmail.com".to_string(),
            admin_password: "CDE2007#".to_string(),
            gemini_api_key: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SB_ADMIN_EMAIL`: override the admin identifier
    /// - `SB_ADMIN_PASSWORD`: override the admin secret
    /// - `SB_GEMINI_API_KEY`: enable AI shopping tips
    pub fn from_env() -> Self {
        let mut config = EngineConfig::default();

        if let Ok(email) = std::env::var("SB_ADMIN_EMAIL") {
            config.admin_email = email;
        }

        if let Ok(password) = std::env::var("SB_ADMIN_PASSWORD") {
            config.admin_password = password;
        }

        if let Ok(key) = std::env::var("SB_GEMINI_API_KEY") {
            if !key.is_empty() {
                config.gemini_api_key = Some(key);
            }
        }

        config
    }

    /// The admin credential pair in the form the auth rules consume.
    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials {
            email: self.admin_email.clone(),
            password: self.admin_password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_the_reference_pair() {
        let config = EngineConfig::default();
        assert_eq!(config.admin_email, "soboladas52@gmail.com");
        assert!(config.gemini_api_key.is_none());
    }
}
