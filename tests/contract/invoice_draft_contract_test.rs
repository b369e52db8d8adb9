// Contract tests for the JSON shapes exchanged with the portal screens

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use serde_json::json;
use telebill::{BillingError, InvoiceComposer, InvoiceDraft, PaymentStatus};

#[test]
fn test_form_style_draft_composes() {
    let payload = json!({
        "lineItems": [
            {"quantity": "2", "unitPrice": "$10.00", "description": "Consult"},
            {"quantity": 1, "unitPrice": 5},
            {"quantity": "abc", "unitPrice": "", "description": "Not priced yet"}
        ],
        "discount": {"kind": "percentage", "value": 10, "status": "Active"},
        "taxRatePercent": 8.5,
        "amountPaid": "10"
    });

    let draft: InvoiceDraft = serde_json::from_value(payload).unwrap();
    assert_eq!(draft.line_items[2].quantity, 1);

    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let totals = InvoiceComposer::new().compose(&draft, now).unwrap();

    assert_eq!(totals.subtotal, dec!(25.00));
    assert_eq!(totals.total, dec!(24.41));
    assert_eq!(totals.balance_due, dec!(14.41));
    assert_eq!(totals.payment_status(), PaymentStatus::PartiallyPaid);
}

#[test]
fn test_expired_discount_in_payload_is_ignored() {
    let payload = json!({
        "lineItems": [{"quantity": 1, "unitPrice": "40"}],
        "discount": {
            "kind": "fixedAmount",
            "value": "15",
            "status": "Active",
            "validFrom": "2025-01-01T00:00:00Z",
            "validUntil": "2025-03-31T23:59:59Z"
        }
    });

    let draft: InvoiceDraft = serde_json::from_value(payload).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let totals = InvoiceComposer::new().compose(&draft, now).unwrap();

    assert_eq!(totals.discount_amount, dec!(0));
    assert_eq!(totals.total, dec!(40.00));
}

#[test]
fn test_totals_serialize_camel_case() {
    let draft = InvoiceDraft::default();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let totals = InvoiceComposer::new().compose(&draft, now).unwrap();

    let value = serde_json::to_value(&totals).unwrap();
    for field in [
        "subtotal",
        "discountAmount",
        "afterDiscount",
        "taxAmount",
        "total",
        "amountPaid",
        "balanceDue",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
}

#[test]
fn test_invalid_discount_in_payload_is_reported() {
    let payload = json!({
        "lineItems": [{"quantity": 1, "unitPrice": 40}],
        "discount": {"kind": "percentage", "value": 140}
    });

    let draft: InvoiceDraft = serde_json::from_value(payload).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let result = InvoiceComposer::new().compose(&draft, now);

    assert!(matches!(result, Err(BillingError::InvalidDiscountValue(_))));
}

#[test]
fn test_oversized_price_reported_not_panicking() {
    let payload = json!({
        "lineItems": [{"quantity": 2, "unitPrice": "79228162514264337593543950335"}]
    });

    let draft: InvoiceDraft = serde_json::from_value(payload).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let result = InvoiceComposer::new().compose(&draft, now);

    assert!(matches!(result, Err(BillingError::InvalidAmount(_))));
}

#[test]
fn test_unrepresentable_numeric_price_rejected() {
    let payload = json!({
        "lineItems": [{"quantity": 1, "unitPrice": 1e300}]
    });

    let err = serde_json::from_value::<InvoiceDraft>(payload).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{}", err);
}
