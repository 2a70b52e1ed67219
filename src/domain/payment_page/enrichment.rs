//! Optional customer data appended to a payment page request.
//!
//! Values arrive already resolved from the store; here they are only
//! filtered by field visibility and presence.

use chrono::NaiveDate;

use crate::domain::store::CustomerFieldSettings;

use super::params;
use super::query::PaymentPageQuery;

/// Customer profile values for the personal data group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalDetails {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub country_code: Option<String>,
    pub state_name: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub zip_postal_code: Option<String>,
}

impl PersonalDetails {
    pub fn append_to(&self, query: &mut PaymentPageQuery, fields: &CustomerFieldSettings) {
        query.push_non_empty(params::CUSTOMER_EMAIL, self.email.as_deref());

        let gated = [
            (fields.first_name_enabled, params::CUSTOMER_FIRST_NAME, &self.first_name),
            (fields.last_name_enabled, params::CUSTOMER_LAST_NAME, &self.last_name),
            (fields.phone_enabled, params::CUSTOMER_PHONE, &self.phone),
        ];
        for (enabled, name, value) in gated {
            if enabled {
                query.push_non_empty(name, value.as_deref());
            }
        }

        if fields.date_of_birth_enabled {
            if let Some(dob) = self.date_of_birth {
                query.push(params::CUSTOMER_DAY_OF_BIRTH, dob.format("%d-%m-%Y").to_string());
            }
        }

        let gated = [
            (fields.country_enabled, params::CUSTOMER_COUNTRY, &self.country_code),
            (fields.state_province_enabled, params::CUSTOMER_STATE, &self.state_name),
            (fields.city_enabled, params::CUSTOMER_CITY, &self.city),
            (fields.street_address_enabled, params::CUSTOMER_ADDRESS, &self.street_address),
            (fields.zip_postal_code_enabled, params::CUSTOMER_ZIP, &self.zip_postal_code),
        ];
        for (enabled, name, value) in gated {
            if enabled {
                query.push_non_empty(name, value.as_deref());
            }
        }
    }
}

/// Billing address values for the billing group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingDetails {
    pub country_code: Option<String>,
    pub region_code: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

impl BillingDetails {
    pub fn append_to(&self, query: &mut PaymentPageQuery) {
        query.push_non_empty(params::BILLING_COUNTRY, self.country_code.as_deref());
        query.push_non_empty(params::BILLING_REGION_CODE, self.region_code.as_deref());
        query.push_non_empty(params::BILLING_CITY, self.city.as_deref());
        query.push_non_empty(params::BILLING_ADDRESS, self.address.as_deref());
        query.push_non_empty(params::BILLING_POSTAL, self.postal_code.as_deref());
    }
}
