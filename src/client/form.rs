//! Hosted checkout form rendering

use super::FirstChekoutClient;
use crate::crypto::generate_reference;
use crate::types::{CheckoutOptions, FormSettings};

impl FirstChekoutClient {
    /// Resolve checkout options into the ordered list of form fields
    ///
    /// Missing `merchant_key`, `redirect_url` and `transaction_reference` take the active
    /// secret, the active callback URL and a fresh 11-character reference. Missing
    /// `amount`, `description` and `email` are left empty.
    pub fn raw(&self, options: &CheckoutOptions) -> Vec<(String, String)> {
        let or_empty = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut fields = vec![
            (
                "merchant_key".to_string(),
                options
                    .merchant_key
                    .clone()
                    .unwrap_or_else(|| self.config.active_secret.clone()),
            ),
            (
                "redirect_url".to_string(),
                options
                    .redirect_url
                    .clone()
                    .unwrap_or_else(|| self.config.active_callback_url.clone()),
            ),
            (
                "amount".to_string(),
                options
                    .amount
                    .map(|amount| amount.to_string())
                    .unwrap_or_default(),
            ),
            ("description".to_string(), or_empty(&options.description)),
            (
                "transaction_reference".to_string(),
                options
                    .transaction_reference
                    .clone()
                    .unwrap_or_else(generate_reference),
            ),
            ("email".to_string(), or_empty(&options.email)),
        ];

        if options.tokens.is_empty() {
            fields.push(("tokens[]".to_string(), String::new()));
        } else {
            fields.extend(
                options
                    .tokens
                    .iter()
                    .map(|token| ("tokens[]".to_string(), token.clone())),
            );
        }

        fields
    }

    /// Render the checkout form with the default id and a submit button
    pub fn form(&self, options: &CheckoutOptions) -> String {
        self.form_with(options, &FormSettings::default())
    }

    /// Render the checkout form posting to the active payment URL
    ///
    /// Values are written as given; callers must not pass untrusted markup.
    pub fn form_with(&self, options: &CheckoutOptions, settings: &FormSettings) -> String {
        let mut form = format!(
            "<form action =\"{}\" method=\"post\" id=\"{}\">\n",
            self.config.active_payment_url, settings.id
        );

        for (key, value) in self.raw(options) {
            form.push_str(&format!(
                "<input type=\"hidden\" name=\"{}\" value=\"{}\" />\n",
                key, value
            ));
        }

        if settings.submit_button {
            form.push_str(
                "<input type=\"submit\" class=\"btn btn-primary\"  name=\"submit\" value=\"Pay\" />\n",
            );
        }
        form.push_str("</form>\n");

        form
    }
}
