//! In-memory store reference data.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{CountryId, CurrencyId, DomainError, StateProvinceId};
use crate::domain::store::{Country, Currency, CustomerFieldSettings, StateProvince};
use crate::ports::StoreDirectory;

pub struct InMemoryStoreDirectory {
    primary_currency_id: CurrencyId,
    currencies: RwLock<HashMap<CurrencyId, Currency>>,
    countries: RwLock<HashMap<CountryId, Country>>,
    states: RwLock<HashMap<StateProvinceId, StateProvince>>,
    field_settings: RwLock<CustomerFieldSettings>,
}

impl InMemoryStoreDirectory {
    /// Directory whose primary currency is `primary`.
    pub fn new(primary: Currency) -> Self {
        let directory = Self {
            primary_currency_id: primary.id,
            currencies: RwLock::new(HashMap::new()),
            countries: RwLock::new(HashMap::new()),
            states: RwLock::new(HashMap::new()),
            field_settings: RwLock::new(CustomerFieldSettings::all_enabled()),
        };
        directory.add_currency(primary);
        directory
    }

    pub fn add_currency(&self, currency: Currency) {
        self.currencies
            .write()
            .expect("InMemoryStoreDirectory: currencies lock poisoned")
            .insert(currency.id, currency);
    }

    pub fn remove_currencies(&self) {
        self.currencies
            .write()
            .expect("InMemoryStoreDirectory: currencies lock poisoned")
            .clear();
    }

    pub fn add_country(&self, country: Country) {
        self.countries
            .write()
            .expect("InMemoryStoreDirectory: countries lock poisoned")
            .insert(country.id, country);
    }

    pub fn add_state_province(&self, state: StateProvince) {
        self.states
            .write()
            .expect("InMemoryStoreDirectory: states lock poisoned")
            .insert(state.id, state);
    }

    pub fn set_field_settings(&self, settings: CustomerFieldSettings) {
        *self
            .field_settings
            .write()
            .expect("InMemoryStoreDirectory: field settings lock poisoned") = settings;
    }
}

#[async_trait]
impl StoreDirectory for InMemoryStoreDirectory {
    fn primary_currency_id(&self) -> CurrencyId {
        self.primary_currency_id
    }

    async fn currency_by_id(&self, id: &CurrencyId) -> Result<Option<Currency>, DomainError> {
        let currencies = self
            .currencies
            .read()
            .map_err(|_| DomainError::database("currencies lock poisoned"))?;
        Ok(currencies.get(id).cloned())
    }

    async fn country_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        let countries = self
            .countries
            .read()
            .map_err(|_| DomainError::database("countries lock poisoned"))?;
        Ok(countries.get(id).cloned())
    }

    async fn state_province_by_id(
        &self,
        id: &StateProvinceId,
    ) -> Result<Option<StateProvince>, DomainError> {
        let states = self
            .states
            .read()
            .map_err(|_| DomainError::database("states lock poisoned"))?;
        Ok(states.get(id).cloned())
    }

    fn customer_field_settings(&self) -> CustomerFieldSettings {
        self.field_settings
            .read()
            .map(|s| *s)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}
