//! Payment method settings source.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::settings::PaymentSettings;

/// Supplies the current settings.
///
/// Each operation reads one snapshot at its start, so a concurrent settings
/// change is seen entirely or not at all.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn payment_settings(&self) -> Result<PaymentSettings, DomainError>;
}
