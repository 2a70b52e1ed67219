//! Settings held in memory and replaced out of band.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::settings::PaymentSettings;
use crate::ports::SettingsProvider;

pub struct InMemorySettingsProvider {
    settings: RwLock<PaymentSettings>,
}

impl InMemorySettingsProvider {
    pub fn new(settings: PaymentSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Applies `change` atomically; readers see the old or the new value.
    pub fn update(&self, change: impl FnOnce(&mut PaymentSettings)) {
        let mut settings = self
            .settings
            .write()
            .expect("InMemorySettingsProvider: settings lock poisoned");
        change(&mut settings);
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettingsProvider {
    async fn payment_settings(&self) -> Result<PaymentSettings, DomainError> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| DomainError::database("settings lock poisoned"))
    }
}
