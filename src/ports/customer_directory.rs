//! Customer lookups.

use async_trait::async_trait;

use crate::domain::foundation::{AddressId, CustomerId, DomainError};
use crate::domain::store::{Address, Customer};

#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Customer of the current storefront session, if any.
    async fn current_customer(&self) -> Result<Option<Customer>, DomainError>;

    async fn customer_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    async fn address_by_id(&self, id: &AddressId) -> Result<Option<Address>, DomainError>;

    /// The customer's default billing address.
    async fn billing_address(&self, customer: &Customer) -> Result<Option<Address>, DomainError> {
        match customer.billing_address_id {
            Some(id) => self.address_by_id(&id).await,
            None => Ok(None),
        }
    }
}
