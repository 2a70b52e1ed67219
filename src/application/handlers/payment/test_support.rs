//! Shared fixture for payment handler tests.

use std::sync::Arc;

use rust_decimal::Decimal;
use secrecy::SecretString;
use url::Url;

use crate::adapters::memory::{
    BaseUrlStoreRoutes, InMemoryCustomerDirectory, InMemoryOrderStore, InMemorySettingsProvider,
    InMemoryShoppingCart, InMemoryStoreDirectory,
};
use crate::domain::foundation::{
    AddressId, CountryId, CurrencyId, CustomerId, OrderId, StateProvinceId,
};
use crate::domain::payment_page::{PaymentPage, PaymentPageEndpoints};
use crate::domain::settings::PaymentSettings;
use crate::domain::signing::{FlatParams, Signer, SIGNATURE_KEY};
use crate::domain::store::{Address, Country, Currency, Customer, Order, StateProvince};
use crate::ports::CartItem;

use super::page_builder::PaymentPageBuilder;

pub const TEST_SECRET: &str = "test-secret";
pub const STORE_URL: &str = "https://shop.example.com/";

pub fn test_settings() -> PaymentSettings {
    PaymentSettings {
        test_project_id: Some("112".into()),
        test_secret_key: Some(SecretString::new(TEST_SECRET.into())),
        ..Default::default()
    }
}

/// Store with one USD currency, one New York customer and an empty cart.
pub struct Fixture {
    pub settings: Arc<InMemorySettingsProvider>,
    pub customers: Arc<InMemoryCustomerDirectory>,
    pub directory: Arc<InMemoryStoreDirectory>,
    pub cart: Arc<InMemoryShoppingCart>,
    pub orders: Arc<InMemoryOrderStore>,
    pub routes: Arc<BaseUrlStoreRoutes>,
    pub customer_id: CustomerId,
}

impl Fixture {
    pub fn new() -> Self {
        let directory = InMemoryStoreDirectory::new(Currency {
            id: CurrencyId::new(1),
            currency_code: "USD".into(),
        });
        directory.add_country(Country {
            id: CountryId::new(1),
            name: "United States".into(),
            two_letter_iso_code: "US".into(),
        });
        directory.add_state_province(StateProvince {
            id: StateProvinceId::new(1),
            name: "New York".into(),
            abbreviation: "NY".into(),
        });

        let customer_id = CustomerId::new(7);
        let customers = InMemoryCustomerDirectory::new();
        customers.add_address(Address {
            id: AddressId::new(3),
            country_id: Some(CountryId::new(1)),
            state_province_id: Some(StateProvinceId::new(1)),
            city: Some("Albany".into()),
            address1: Some("1 State St".into()),
            zip_postal_code: Some("12207".into()),
        });
        customers.add_customer(Customer {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            country_id: Some(CountryId::new(1)),
            state_province_id: Some(StateProvinceId::new(1)),
            city: Some("Albany".into()),
            billing_address_id: Some(AddressId::new(3)),
            ..Customer::new(customer_id, "ada@example.com")
        });
        customers.set_current(customer_id);

        Self {
            settings: Arc::new(InMemorySettingsProvider::new(test_settings())),
            customers: Arc::new(customers),
            directory: Arc::new(directory),
            cart: Arc::new(InMemoryShoppingCart::new()),
            orders: Arc::new(InMemoryOrderStore::new()),
            routes: Arc::new(BaseUrlStoreRoutes::new(
                Url::parse(STORE_URL).expect("valid store url"),
            )),
            customer_id,
        }
    }

    /// Fixture whose cart holds a single line worth `total`.
    pub fn with_cart_total(total: Decimal) -> Self {
        let fixture = Self::new();
        fixture.cart.set_items(
            fixture.customer_id,
            vec![CartItem {
                sku: "SKU-1".into(),
                quantity: 1,
                unit_price: total,
            }],
        );
        fixture
    }

    pub fn builder(&self) -> PaymentPageBuilder {
        PaymentPageBuilder::new(
            self.settings.clone(),
            self.customers.clone(),
            self.directory.clone(),
            PaymentPageEndpoints::new("https://paymentpage.ecommpay.com").expect("valid host"),
        )
    }

    pub fn enable_parameters(&self, names: &str) {
        let names = names.to_string();
        self.settings
            .update(move |s| s.additional_parameters = Some(names));
    }

    /// Pending order of the fixture customer billed to the fixture address.
    pub fn order(&self, total: Decimal) -> Order {
        let mut order = Order::new(OrderId::new(42), self.customer_id, total);
        order.billing_address_id = Some(AddressId::new(3));
        self.orders.insert(order.clone());
        order
    }
}

/// Recomputes the signature over every other parameter.
pub fn verify_page(page: &PaymentPage, secret: &str) -> bool {
    let params: FlatParams = page
        .parameters()
        .iter()
        .filter(|(name, _)| name != SIGNATURE_KEY)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    let signer = Signer::new(SecretString::new(secret.into()));
    signer.sign(&params) == page.signature()
}
