//! Payment page locations derived from the configured host.

use url::Url;

/// Hosted payment page URLs, resolved once from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPageEndpoints {
    host: Url,
    redirect: Url,
    script: Url,
    styles: Url,
}

impl PaymentPageEndpoints {
    pub fn new(host: &str) -> Result<Self, url::ParseError> {
        let host = Url::parse(host)?;
        Ok(Self {
            redirect: host.join("/payment")?,
            script: host.join("/shared/merchant.js")?,
            styles: host.join("/shared/merchant.css")?,
            host,
        })
    }

    /// Base for the embedded widget.
    pub fn embedded(&self) -> &Url {
        &self.host
    }

    /// Base for the new browser tab flow.
    pub fn redirect(&self) -> &Url {
        &self.redirect
    }

    /// Widget script included by checkout pages.
    pub fn script(&self) -> &Url {
        &self.script
    }

    /// Widget stylesheet included by checkout pages.
    pub fn styles(&self) -> &Url {
        &self.styles
    }
}
