//! Steps shared by the embedded and redirect payment page flows.

use std::sync::Arc;

use crate::domain::foundation::to_minor_units;
use crate::domain::payment_page::{
    params, BillingDetails, PaymentPageEndpoints, PaymentPageQuery, PersonalDetails,
};
use crate::domain::settings::{AdditionalParameter, PaymentSettings, ProjectCredential};
use crate::domain::store::{Address, Currency, Customer};
use crate::ports::{CustomerDirectory, SettingsProvider, StoreDirectory};

use super::errors::PaymentPageError;

/// Dependencies of both payment page flows.
#[derive(Clone)]
pub struct PaymentPageBuilder {
    pub(super) settings: Arc<dyn SettingsProvider>,
    pub(super) customers: Arc<dyn CustomerDirectory>,
    pub(super) directory: Arc<dyn StoreDirectory>,
    pub(super) endpoints: PaymentPageEndpoints,
}

/// Validated inputs every payment page starts from.
pub(super) struct PageContext {
    pub settings: PaymentSettings,
    pub credential: ProjectCredential,
    pub query: PaymentPageQuery,
}

impl PaymentPageBuilder {
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        customers: Arc<dyn CustomerDirectory>,
        directory: Arc<dyn StoreDirectory>,
        endpoints: PaymentPageEndpoints,
    ) -> Self {
        Self {
            settings,
            customers,
            directory,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &PaymentPageEndpoints {
        &self.endpoints
    }

    /// Validates settings and currency, then starts the query with
    /// `payment_currency`, `project_id` and `card_operation_type`.
    ///
    /// Both checks always run so their errors are reported together.
    pub(super) async fn start(&self) -> Result<PageContext, PaymentPageError> {
        let settings = self.settings.payment_settings().await?;
        let mut errors = Vec::new();

        let credential = match settings.validate() {
            Ok(credential) => Some(credential),
            Err(e) => {
                errors.extend(e.messages());
                None
            }
        };

        let currency = self.primary_currency().await?;
        if currency.is_none() {
            errors.push(format!(
                "The primary store currency with ID: '{}' not found.",
                self.directory.primary_currency_id()
            ));
        }

        let (Some(credential), Some(currency)) = (credential, currency) else {
            return Err(PaymentPageError::Precondition(errors));
        };

        let mut query = PaymentPageQuery::new();
        query.push(params::PAYMENT_CURRENCY, currency.currency_code);
        query.push(params::PROJECT_ID, credential.project_id.to_string());
        query.push(params::CARD_OPERATION_TYPE, params::SALE_OPERATION);

        Ok(PageContext {
            settings,
            credential,
            query,
        })
    }

    async fn primary_currency(&self) -> Result<Option<Currency>, PaymentPageError> {
        let id = self.directory.primary_currency_id();
        Ok(self.directory.currency_by_id(&id).await?)
    }

    /// Appends `customer_id` and `customer_account_number`.
    pub(super) fn push_customer(query: &mut PaymentPageQuery, customer: &Customer) {
        query.push(params::CUSTOMER_ID, customer.id.to_string());
        query.push(params::CUSTOMER_ACCOUNT_NUMBER, customer.email_or_empty());
    }

    pub(super) fn push_amount(
        query: &mut PaymentPageQuery,
        amount: rust_decimal::Decimal,
    ) -> Result<(), PaymentPageError> {
        let minor = to_minor_units(amount).map_err(|e| PaymentPageError::precondition(e.to_string()))?;
        query.push(params::PAYMENT_AMOUNT, minor.to_string());
        Ok(())
    }

    /// Appends the optional groups enabled in settings, in settings order.
    pub(super) async fn append_additional_parameters(
        &self,
        query: &mut PaymentPageQuery,
        settings: &PaymentSettings,
        customer: &Customer,
        billing_address: Option<&Address>,
    ) -> Result<(), PaymentPageError> {
        for parameter in settings.additional_parameter_toggles() {
            match parameter {
                AdditionalParameter::PersonalData => {
                    let fields = self.directory.customer_field_settings();
                    self.personal_details(customer)
                        .await?
                        .append_to(query, &fields);
                }
                AdditionalParameter::BillingAddress => {
                    if let Some(address) = billing_address {
                        self.billing_details(address).await?.append_to(query);
                    }
                }
            }
        }
        Ok(())
    }

    async fn personal_details(&self, customer: &Customer) -> Result<PersonalDetails, PaymentPageError> {
        let fields = self.directory.customer_field_settings();

        let country_code = match customer.country_id.filter(|_| fields.country_enabled) {
            Some(id) => self
                .directory
                .country_by_id(&id)
                .await?
                .map(|c| c.two_letter_iso_code),
            None => None,
        };
        let state_name = match customer.state_province_id.filter(|_| fields.state_province_enabled) {
            Some(id) => self
                .directory
                .state_province_by_id(&id)
                .await?
                .map(|s| s.name),
            None => None,
        };

        Ok(PersonalDetails {
            email: customer.email.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone: customer.phone.clone(),
            date_of_birth: customer.date_of_birth,
            country_code,
            state_name,
            city: customer.city.clone(),
            street_address: customer.street_address.clone(),
            zip_postal_code: customer.zip_postal_code.clone(),
        })
    }

    async fn billing_details(&self, address: &Address) -> Result<BillingDetails, PaymentPageError> {
        let country_code = match address.country_id {
            Some(id) => self
                .directory
                .country_by_id(&id)
                .await?
                .map(|c| c.two_letter_iso_code),
            None => None,
        };
        let region_code = match address.state_province_id {
            Some(id) => self
                .directory
                .state_province_by_id(&id)
                .await?
                .map(|s| s.abbreviation),
            None => None,
        };

        Ok(BillingDetails {
            country_code,
            region_code,
            city: address.city.clone(),
            address: address.address1.clone(),
            postal_code: address.zip_postal_code.clone(),
        })
    }
}
