//! Customer and address records used to enrich payment requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AddressId, CountryId, CustomerId, StateProvinceId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub country_id: Option<CountryId>,
    pub state_province_id: Option<StateProvinceId>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub zip_postal_code: Option<String>,
    pub billing_address_id: Option<AddressId>,
}

impl Customer {
    pub fn new(id: CustomerId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Email or an empty string.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub country_id: Option<CountryId>,
    pub state_province_id: Option<StateProvinceId>,
    pub city: Option<String>,
    pub address1: Option<String>,
    pub zip_postal_code: Option<String>,
}

/// Which optional customer profile fields the store collects.
///
/// A disabled field is never sent, even when a value is on file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFieldSettings {
    pub first_name_enabled: bool,
    pub last_name_enabled: bool,
    pub phone_enabled: bool,
    pub date_of_birth_enabled: bool,
    pub country_enabled: bool,
    pub state_province_enabled: bool,
    pub city_enabled: bool,
    pub street_address_enabled: bool,
    pub zip_postal_code_enabled: bool,
}

impl CustomerFieldSettings {
    pub fn all_enabled() -> Self {
        Self {
            first_name_enabled: true,
            last_name_enabled: true,
            phone_enabled: true,
            date_of_birth_enabled: true,
            country_enabled: true,
            state_province_enabled: true,
            city_enabled: true,
            street_address_enabled: true,
            zip_postal_code_enabled: true,
        }
    }
}

impl Default for CustomerFieldSettings {
    fn default() -> Self {
        Self::all_enabled()
    }
}
