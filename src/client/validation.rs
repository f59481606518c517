//! Input validation for bespoke operations

use crate::types::{currencies, DirectDebitRequest};
use crate::{FirstChekoutError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// The WHATWG `input[type=email]` grammar, with at least one dot in the domain
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

/// Check an address against the email grammar
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required(field: &str) -> String {
    format!("The {} field is required.", field)
}

/// Validate a direct debit request, returning the reference and amount to sign
///
/// Every failing rule is collected before returning.
pub fn validate_direct_debit(request: &DirectDebitRequest) -> Result<(&str, &Decimal)> {
    let mut messages = Vec::new();

    let reference = present(&request.transaction_reference);
    if reference.is_none() {
        messages.push(required("transaction reference"));
    }

    if request.amount.is_none() {
        messages.push(required("amount"));
    }

    if present(&request.narration).is_none() {
        messages.push(required("narration"));
    }

    // blank counts as missing; the value itself is checked untrimmed
    match (present(&request.currency_code), request.currency_code.as_deref()) {
        (None, _) => messages.push(required("currency code")),
        (Some(_), Some(code)) if !currencies::is_supported(code) => {
            messages.push("The selected currency code is invalid.".to_string())
        }
        _ => {}
    }

    match (present(&request.email), request.email.as_deref()) {
        (None, _) => messages.push(required("email")),
        (Some(_), Some(email)) if !is_valid_email(email) => {
            messages.push("The email must be a valid email address.".to_string())
        }
        _ => {}
    }

    if present(&request.signature).is_none() {
        messages.push(required("signature"));
    }

    match (reference, request.amount.as_ref()) {
        (Some(_), Some(amount)) if messages.is_empty() => {
            // sign with the reference exactly as supplied, not trimmed
            let reference = request.transaction_reference.as_deref().unwrap_or_default();
            Ok((reference, amount))
        }
        _ => Err(FirstChekoutError::validation(messages)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> DirectDebitRequest {
        DirectDebitRequest::new(
            "REF-1",
            Decimal::from(2500),
            "Monthly plan",
            "NGN",
            "ada@example.com",
            "sig-1",
        )
    }

    #[test]
    fn test_valid_request_passes() {
        let request = valid_request();
        let (reference, amount) = validate_direct_debit(&request).unwrap();
        assert_eq!(reference, "REF-1");
        assert_eq!(*amount, Decimal::from(2500));
    }

    #[test]
    fn test_missing_amount_is_reported() {
        let mut request = valid_request();
        request.amount = None;

        let err = validate_direct_debit(&request).unwrap_err();
        assert_eq!(err.validation_messages(), ["The amount field is required."]);
    }

    #[test]
    fn test_every_failure_is_collected() {
        let err = validate_direct_debit(&DirectDebitRequest::default()).unwrap_err();
        assert_eq!(
            err.validation_messages(),
            [
                "The transaction reference field is required.",
                "The amount field is required.",
                "The narration field is required.",
                "The currency code field is required.",
                "The email field is required.",
                "The signature field is required.",
            ]
        );
    }

    #[test]
    fn test_currency_must_be_naira() {
        let mut request = valid_request();
        request.currency_code = Some("USD".to_string());

        let err = validate_direct_debit(&request).unwrap_err();
        assert_eq!(
            err.validation_messages(),
            ["The selected currency code is invalid."]
        );
    }

    #[test]
    fn test_padded_currency_is_invalid() {
        let mut request = valid_request();
        request.currency_code = Some(" NGN ".to_string());

        let err = validate_direct_debit(&request).unwrap_err();
        assert_eq!(
            err.validation_messages(),
            ["The selected currency code is invalid."]
        );

        request.currency_code = Some("  ".to_string());
        let err = validate_direct_debit(&request).unwrap_err();
        assert_eq!(
            err.validation_messages(),
            ["The currency code field is required."]
        );
    }

    #[test]
    fn test_email_must_be_well_formed() {
        let mut request = valid_request();
        request.email = Some("not-an-email".to_string());
        request.narration = Some("   ".to_string());

        let err = validate_direct_debit(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed because: The narration field is required.; The email must be a valid email address."
        );
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.ng"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada example@example.com"));
        assert!(!is_valid_email("ada@-example.com"));
        assert!(!is_valid_email(" ada@example.com"));
    }
}
