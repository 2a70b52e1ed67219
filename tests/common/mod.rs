//! Shared wiring for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::{json, Value};
use url::Url;

use ecommpay_gateway::adapters::ecommpay::MockPaymentGateway;
use ecommpay_gateway::adapters::http::PaymentAppState;
use ecommpay_gateway::adapters::memory::{
    BaseUrlStoreRoutes, InMemoryCustomerDirectory, InMemoryOrderStore, InMemorySettingsProvider,
    InMemoryShoppingCart, InMemoryStoreDirectory,
};
use ecommpay_gateway::application::handlers::payment::PaymentPageBuilder;
use ecommpay_gateway::application::handlers::refund::RefundOrderHandler;
use ecommpay_gateway::application::handlers::webhook::{
    ProcessWebhookCommand, ProcessWebhookHandler, ProcessWebhookResult, WebhookError,
};
use ecommpay_gateway::domain::foundation::{
    AddressId, CountryId, CurrencyId, CustomerId, OrderId, StateProvinceId,
};
use ecommpay_gateway::domain::payment_page::PaymentPageEndpoints;
use ecommpay_gateway::domain::settings::PaymentSettings;
use ecommpay_gateway::domain::signing::Signer;
use ecommpay_gateway::domain::store::{
    Address, Country, Currency, Customer, Order, PaymentStatus, StateProvince,
};

pub const SECRET: &str = "integration-secret";
pub const PROJECT_ID: &str = "112";

pub fn signer(secret: &str) -> Signer {
    Signer::new(SecretString::new(secret.to_string()))
}

/// Serializes `body` with a `signature` computed under `secret`.
pub fn sign_body(mut body: Value, secret: &str) -> Vec<u8> {
    let signature = signer(secret).sign_object(&body).unwrap();
    body["signature"] = json!(signature);
    body.to_string().into_bytes()
}

/// A store with one USD currency, one customer in New York and no orders.
pub struct TestStore {
    pub settings: Arc<InMemorySettingsProvider>,
    pub orders: Arc<InMemoryOrderStore>,
    pub customers: Arc<InMemoryCustomerDirectory>,
    pub directory: Arc<InMemoryStoreDirectory>,
    pub cart: Arc<InMemoryShoppingCart>,
    pub routes: Arc<BaseUrlStoreRoutes>,
    pub gateway: MockPaymentGateway,
    pub customer_id: CustomerId,
}

impl TestStore {
    pub fn new() -> Self {
        let settings = PaymentSettings {
            test_project_id: Some(PROJECT_ID.to_string()),
            test_secret_key: Some(SecretString::new(SECRET.to_string())),
            ..Default::default()
        };

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
            id: StateProvinceId::new(5),
            name: "New York".into(),
            abbreviation: "NY".into(),
        });

        let customer_id = CustomerId::new(7);
        let customers = InMemoryCustomerDirectory::new();
        customers.add_address(Address {
            id: AddressId::new(3),
            country_id: Some(CountryId::new(1)),
            state_province_id: Some(StateProvinceId::new(5)),
            city: Some("New York".into()),
            address1: Some("350 Fifth Avenue".into()),
            zip_postal_code: Some("10118".into()),
        });
        customers.add_customer(Customer {
            first_name: Some("Grace".into()),
            last_name: Some("Hopper".into()),
            phone: Some("+12125550100".into()),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1906, 12, 9),
            country_id: Some(CountryId::new(1)),
            state_province_id: Some(StateProvinceId::new(5)),
            city: Some("New York".into()),
            billing_address_id: Some(AddressId::new(3)),
            ..Customer::new(customer_id, "grace@example.com")
        });
        customers.set_current(customer_id);

        Self {
            settings: Arc::new(InMemorySettingsProvider::new(settings)),
            orders: Arc::new(InMemoryOrderStore::new()),
            customers: Arc::new(customers),
            directory: Arc::new(directory),
            cart: Arc::new(InMemoryShoppingCart::new()),
            routes: Arc::new(BaseUrlStoreRoutes::new(
                Url::parse("https://shop.example.com").unwrap(),
            )),
            gateway: MockPaymentGateway::new(),
            customer_id,
        }
    }

    pub fn endpoints() -> PaymentPageEndpoints {
        PaymentPageEndpoints::new("https://paymentpage.ecommpay.com").unwrap()
    }

    pub fn page_builder(&self) -> PaymentPageBuilder {
        PaymentPageBuilder::new(
            self.settings.clone(),
            self.customers.clone(),
            self.directory.clone(),
            Self::endpoints(),
        )
    }

    pub fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(
            self.settings.clone(),
            self.orders.clone(),
            self.orders.clone(),
        )
    }

    pub fn refund_handler(&self) -> RefundOrderHandler {
        RefundOrderHandler::new(
            self.settings.clone(),
            self.directory.clone(),
            Arc::new(self.gateway.clone()),
        )
    }

    pub fn app_state(&self) -> PaymentAppState {
        PaymentAppState {
            settings: self.settings.clone(),
            orders: self.orders.clone(),
            processing: self.orders.clone(),
            customers: self.customers.clone(),
            directory: self.directory.clone(),
            routes: self.routes.clone(),
            gateway: Arc::new(self.gateway.clone()),
            endpoints: Self::endpoints(),
        }
    }

    /// Places an order of the test customer with the given status.
    pub fn place_order(&self, id: i64, total: Decimal, status: PaymentStatus) -> Order {
        let mut order = Order::new(OrderId::new(id), self.customer_id, total);
        order.billing_address_id = Some(AddressId::new(3));
        order.payment_status = status;
        self.orders.insert(order.clone());
        order
    }

    pub async fn deliver(
        &self,
        body: Value,
        secret: &str,
    ) -> Result<ProcessWebhookResult, WebhookError> {
        self.webhook_handler()
            .handle(ProcessWebhookCommand {
                payload: sign_body(body, secret),
            })
            .await
    }
}
