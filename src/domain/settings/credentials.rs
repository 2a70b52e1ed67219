//! Project credentials and the configuration validator.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::domain::signing::Signer;

use super::settings::PaymentSettings;

/// Which project pair of the credential context is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode {
    Test,
    Production,
}

impl CredentialMode {
    fn label(&self) -> &'static str {
        match self {
            CredentialMode::Test => "test",
            CredentialMode::Production => "production",
        }
    }
}

/// The selected (project id, secret key) pair, as configured.
#[derive(Debug, Clone, Copy)]
pub struct CredentialPair<'a> {
    pub mode: CredentialMode,
    pub project_id: Option<&'a str>,
    pub secret_key: Option<&'a SecretString>,
}

/// A validated project credential.
#[derive(Clone)]
pub struct ProjectCredential {
    pub project_id: i64,
    pub secret_key: SecretString,
}

impl ProjectCredential {
    /// Signer keyed by this project's secret.
    pub fn signer(&self) -> Signer {
        Signer::new(self.secret_key.clone())
    }
}

impl std::fmt::Debug for ProjectCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectCredential")
            .field("project_id", &self.project_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Configuration problems, all of them, in evaluation order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid payment settings: {}", .0.join(" "))]
pub struct SettingsError(pub Vec<String>);

impl SettingsError {
    pub fn messages(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl PaymentSettings {
    /// Selects the active pair according to `test_mode`.
    pub fn active_credential(&self) -> CredentialPair<'_> {
        if self.test_mode {
            CredentialPair {
                mode: CredentialMode::Test,
                project_id: self.test_project_id.as_deref(),
                secret_key: self.test_secret_key.as_ref(),
            }
        } else {
            CredentialPair {
                mode: CredentialMode::Production,
                project_id: self.production_project_id.as_deref(),
                secret_key: self.production_secret_key.as_ref(),
            }
        }
    }

    /// Validates the active pair, accumulating every failed rule.
    pub fn validate(&self) -> Result<ProjectCredential, SettingsError> {
        let pair = self.active_credential();
        let label = pair.mode.label();
        let mut errors = Vec::new();

        let project_id = match pair.project_id.map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                errors.push(format!("The {} project ID is required.", label));
                None
            }
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(format!("The {} project ID must be numeric.", label));
                    None
                }
            },
        };

        let secret_key = pair
            .secret_key
            .filter(|s| !s.expose_secret().trim().is_empty());
        if secret_key.is_none() {
            errors.push(format!("The {} secret key is required.", label));
        }

        match (project_id, secret_key) {
            (Some(project_id), Some(secret_key)) if errors.is_empty() => Ok(ProjectCredential {
                project_id,
                secret_key: secret_key.clone(),
            }),
            _ => Err(SettingsError(errors)),
        }
    }

    /// True when the active pair passes validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
