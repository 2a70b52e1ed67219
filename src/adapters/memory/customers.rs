//! In-memory customer directory with a single storefront session.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{AddressId, CustomerId, DomainError};
use crate::domain::store::{Address, Customer};
use crate::ports::CustomerDirectory;

#[derive(Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<CustomerId, Customer>>,
    addresses: RwLock<HashMap<AddressId, Address>>,
    current: RwLock<Option<CustomerId>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&self, customer: Customer) {
        self.customers
            .write()
            .expect("InMemoryCustomerDirectory: customers lock poisoned")
            .insert(customer.id, customer);
    }

    pub fn add_address(&self, address: Address) {
        self.addresses
            .write()
            .expect("InMemoryCustomerDirectory: addresses lock poisoned")
            .insert(address.id, address);
    }

    /// Makes `id` the customer of the storefront session.
    pub fn set_current(&self, id: CustomerId) {
        *self
            .current
            .write()
            .expect("InMemoryCustomerDirectory: current lock poisoned") = Some(id);
    }

    pub fn clear_current(&self) {
        *self
            .current
            .write()
            .expect("InMemoryCustomerDirectory: current lock poisoned") = None;
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerDirectory {
    async fn current_customer(&self) -> Result<Option<Customer>, DomainError> {
        let current = *self
            .current
            .read()
            .map_err(|_| DomainError::database("current customer lock poisoned"))?;
        match current {
            Some(id) => self.customer_by_id(&id).await,
            None => Ok(None),
        }
    }

    async fn customer_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self
            .customers
            .read()
            .map_err(|_| DomainError::database("customers lock poisoned"))?;
        Ok(customers.get(id).cloned())
    }

    async fn address_by_id(&self, id: &AddressId) -> Result<Option<Address>, DomainError> {
        let addresses = self
            .addresses
            .read()
            .map_err(|_| DomainError::database("addresses lock poisoned"))?;
        Ok(addresses.get(id).cloned())
    }
}
