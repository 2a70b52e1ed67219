//! Payment method settings supplied by the store.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use secrecy::SecretString;
use serde::Deserialize;

/// How the customer reaches the payment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFlowType {
    /// Customer is redirected to the hosted page after placing the order.
    #[default]
    NewBrowserTab,
    /// Payment page is embedded into checkout before the order is placed.
    Iframe,
}

/// How the store treats the payment method during checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodType {
    /// Order is placed first, then the customer is redirected.
    Redirection,
    /// Payment happens in checkout, before the order exists.
    Standard,
}

impl PaymentFlowType {
    pub fn payment_method_type(&self) -> PaymentMethodType {
        match self {
            PaymentFlowType::NewBrowserTab => PaymentMethodType::Redirection,
            PaymentFlowType::Iframe => PaymentMethodType::Standard,
        }
    }
}

/// Optional customer data groups sent with a payment page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionalParameter {
    PersonalData,
    BillingAddress,
}

impl AdditionalParameter {
    pub const ALL: [AdditionalParameter; 2] = [
        AdditionalParameter::PersonalData,
        AdditionalParameter::BillingAddress,
    ];

    pub fn system_name(&self) -> &'static str {
        match self {
            AdditionalParameter::PersonalData => "customer.personaldata",
            AdditionalParameter::BillingAddress => "customer.billingaddress",
        }
    }
}

impl fmt::Display for AdditionalParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.system_name())
    }
}

impl FromStr for AdditionalParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.system_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Unknown additional parameter '{}'", name))
    }
}

/// Settings snapshot, read once per operation.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSettings {
    /// Payment method available to customers
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Use the test project pair instead of the production one
    #[serde(default = "default_true")]
    pub test_mode: bool,

    pub test_project_id: Option<String>,
    pub test_secret_key: Option<SecretString>,
    pub production_project_id: Option<String>,
    pub production_secret_key: Option<SecretString>,

    #[serde(default)]
    pub flow_type: PaymentFlowType,

    /// Comma-separated additional parameter system names
    pub additional_parameters: Option<String>,

    /// Handling fee added to the order total
    #[serde(default)]
    pub additional_fee: Decimal,

    /// Treat `additional_fee` as a percentage of the cart subtotal
    #[serde(default)]
    pub additional_fee_percentage: bool,
}

impl PaymentSettings {
    /// Enabled additional parameter groups; unknown names are skipped.
    pub fn additional_parameter_toggles(&self) -> Vec<AdditionalParameter> {
        let mut toggles = Vec::new();
        for name in self
            .additional_parameters
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|s| !s.trim().is_empty())
        {
            match name.parse::<AdditionalParameter>() {
                Ok(p) if !toggles.contains(&p) => toggles.push(p),
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, "Skipping additional parameter"),
            }
        }
        toggles
    }

    pub fn is_enabled(&self, parameter: AdditionalParameter) -> bool {
        self.additional_parameter_toggles().contains(&parameter)
    }

    /// Handling fee charged for paying with this method.
    ///
    /// A percentage fee applies to the cart subtotal and is rounded to cents.
    pub fn additional_fee_for(&self, cart_subtotal: Decimal) -> Decimal {
        if self.additional_fee <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        if !self.additional_fee_percentage {
            return self.additional_fee;
        }
        (cart_subtotal * self.additional_fee / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            test_mode: true,
            test_project_id: None,
            test_secret_key: None,
            production_project_id: None,
            production_secret_key: None,
            flow_type: PaymentFlowType::default(),
            additional_parameters: None,
            additional_fee: Decimal::ZERO,
            additional_fee_percentage: false,
        }
    }
}

fn default_true() -> bool {
    true
}
