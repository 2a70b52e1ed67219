//! Store reference data: currencies, countries, regions, form settings.

use async_trait::async_trait;

use crate::domain::foundation::{CountryId, CurrencyId, DomainError, StateProvinceId};
use crate::domain::store::{Country, Currency, CustomerFieldSettings, StateProvince};

#[async_trait]
pub trait StoreDirectory: Send + Sync {
    /// Configured primary store currency id.
    fn primary_currency_id(&self) -> CurrencyId;

    async fn currency_by_id(&self, id: &CurrencyId) -> Result<Option<Currency>, DomainError>;

    async fn country_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError>;

    async fn state_province_by_id(
        &self,
        id: &StateProvinceId,
    ) -> Result<Option<StateProvince>, DomainError>;

    /// Which customer profile fields the store collects.
    fn customer_field_settings(&self) -> CustomerFieldSettings;
}
