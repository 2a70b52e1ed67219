//! Reference data owned by the store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CountryId, CurrencyId, StateProvinceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub two_letter_iso_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProvince {
    pub id: StateProvinceId,
    pub name: String,
    pub abbreviation: String,
}
