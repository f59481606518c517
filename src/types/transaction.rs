//! Per-call transaction inputs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Values pre-filled into the hosted checkout form
///
/// Every field is optional. `merchant_key`, `redirect_url` and `transaction_reference`
/// fall back to the active secret, the active callback URL and a freshly generated
/// reference; the rest render empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Saved card tokens, each rendered as a `tokens[]` field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<String>,
}

impl CheckoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merchant_key(mut self, key: impl Into<String>) -> Self {
        self.merchant_key = Some(key.into());
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_transaction_reference(mut self, reference: impl Into<String>) -> Self {
        self.transaction_reference = Some(reference.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }
}

/// Rendering settings for the checkout form element itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    /// `id` attribute of the form element
    pub id: String,
    /// Whether a "Pay" submit button is appended
    pub submit_button: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            id: "paymentForm".to_string(),
            submit_button: true,
        }
    }
}

impl FormSettings {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_submit_button(mut self, submit_button: bool) -> Self {
        self.submit_button = submit_button;
        self
    }
}

/// Direct debit against a consumer with a standing order on the merchant's site
///
/// Fields are optional so that validation can report every missing one at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectDebitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Standing-order signature issued to the consumer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl DirectDebitRequest {
    /// Create a fully populated request
    pub fn new(
        transaction_reference: impl Into<String>,
        amount: Decimal,
        narration: impl Into<String>,
        currency_code: impl Into<String>,
        email: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            transaction_reference: Some(transaction_reference.into()),
            amount: Some(amount),
            narration: Some(narration.into()),
            currency_code: Some(currency_code.into()),
            email: Some(email.into()),
            signature: Some(signature.into()),
        }
    }
}

/// Body of a settlement confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementQuery {
    pub transaction_references: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_direct_debit_serializes_gateway_field_names() {
        let request = DirectDebitRequest::new(
            "REF-1",
            Decimal::from_str("2500.00").unwrap(),
            "Monthly plan",
            "NGN",
            "ada@example.com",
            "sig-1",
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["transaction_reference"], json!("REF-1"));
        assert_eq!(value["amount"], json!("2500.00"));
        assert_eq!(value["currency_code"], json!("NGN"));
        assert_eq!(value["signature"], json!("sig-1"));
    }

    #[test]
    fn test_form_settings_default() {
        let settings = FormSettings::default();
        assert_eq!(settings.id, "paymentForm");
        assert!(settings.submit_button);

        let settings = settings.with_id("checkout").with_submit_button(false);
        assert_eq!(settings.id, "checkout");
        assert!(!settings.submit_button);
    }

    #[test]
    fn test_checkout_options_builder() {
        let options = CheckoutOptions::new()
            .with_amount(Decimal::from(1000))
            .with_email("ada@example.com")
            .with_token("tok_1")
            .with_token("tok_2");

        assert_eq!(options.amount, Some(Decimal::from(1000)));
        assert_eq!(options.tokens, vec!["tok_1", "tok_2"]);
        assert!(options.transaction_reference.is_none());
    }
}
