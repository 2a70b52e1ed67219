//! Payment method settings and the rules that make them usable.

mod credentials;
mod settings;

pub use credentials::{
    CredentialMode, CredentialPair, ProjectCredential, SettingsError,
};
pub use settings::{AdditionalParameter, PaymentFlowType, PaymentMethodType, PaymentSettings};
