//! Request signing protocol.
//!
//! Documents are modelled as [`SignValue`] trees, flattened into
//! [`FlatParams`] and signed with HMAC-SHA512 by a [`Signer`].

mod errors;
mod flatten;
mod signer;
mod value;

pub use errors::SigningError;
pub use flatten::{flatten, format_date_time, FlatParams};
pub use signer::{canonical_string, Signer, SIGNATURE_KEY};
pub use value::SignValue;
