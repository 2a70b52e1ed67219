//! Ordered payment page query and its signed form.

use url::Url;

use crate::domain::signing::{FlatParams, Signer, SIGNATURE_KEY};

/// Append-only list of payment page parameters.
///
/// Order is kept for the URL only; the signature is computed over the
/// canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentPageQuery {
    params: Vec<(String, String)>,
}

impl PaymentPageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        self.params.push((name.to_string(), value.into()));
    }

    /// Appends `value` unless it is absent or blank.
    pub fn push_non_empty(&mut self, name: &str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.push(name, v);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn to_flat_params(&self) -> FlatParams {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect()
    }

    /// Appends the trailing signature and freezes the query.
    pub fn sign(mut self, signer: &Signer, base_url: Url) -> PaymentPage {
        let signature = signer.sign(&self.to_flat_params());
        self.push(SIGNATURE_KEY, signature);
        PaymentPage {
            base_url,
            parameters: self.params,
        }
    }
}

/// A signed payment page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPage {
    base_url: Url,
    parameters: Vec<(String, String)>,
}

impl PaymentPage {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Parameters in request order, signature last.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn signature(&self) -> &str {
        self.get(SIGNATURE_KEY).unwrap_or_default()
    }

    /// Full navigation URL with the form-encoded query.
    pub fn url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.parameters.iter().map(|(n, v)| (n.as_str(), v.as_str())));
        url
    }
}
