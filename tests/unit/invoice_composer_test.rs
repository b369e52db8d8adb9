// Property-based tests for invoice composition
//
// Properties tested:
// 1. every composed figure is non-negative for valid input
// 2. after_discount = max(0, subtotal - discount)
// 3. zero tax rate leaves total equal to after_discount
// 4. line item order does not affect the subtotal
// 5. a pre-resolved discount amount and the discount it came from compose identically
// 6. balance_due is exactly total - amount_paid on the returned figures

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use telebill::core::round_currency;
use telebill::{
    BillingError, Discount, DiscountApplier, DiscountInput, InvoiceComposer, InvoiceDraft,
    LineItem, LineItemTotaler, PaymentStatus,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Line item priced in cents, including unpriced rows
fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (1u32..20u32, 0i64..100_000i64)
        .prop_map(|(quantity, cents)| LineItem::new(quantity, Decimal::new(cents, 2)).unwrap())
}

fn line_items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(line_item_strategy(), 0..12)
}

/// Tax rate between 0.00% and 25.00%
fn tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=2_500i64).prop_map(|basis| Decimal::new(basis, 2))
}

proptest! {
    #[test]
    fn test_composed_figures_non_negative(
        items in line_items_strategy(),
        discount_cents in 0i64..2_000_000i64,
        tax_rate in tax_rate_strategy(),
    ) {
        let composer = InvoiceComposer::new();
        let totals = composer
            .compose_invoice(
                &items,
                &DiscountInput::Resolved(Decimal::new(discount_cents, 2)),
                tax_rate,
                Decimal::ZERO,
                now(),
            )
            .unwrap();

        prop_assert!(totals.subtotal >= Decimal::ZERO);
        prop_assert!(totals.discount_amount >= Decimal::ZERO);
        prop_assert!(totals.after_discount >= Decimal::ZERO);
        prop_assert!(totals.tax_amount >= Decimal::ZERO);
        prop_assert!(totals.total >= Decimal::ZERO);
    }

    #[test]
    fn test_discount_never_drives_invoice_negative(
        items in line_items_strategy(),
        discount_cents in 0i64..2_000_000i64,
    ) {
        let composer = InvoiceComposer::new();
        let discount = Decimal::new(discount_cents, 2);
        let subtotal = LineItemTotaler::new().compute_subtotal(&items).unwrap().amount();

        let totals = composer
            .compose_invoice(&items, &DiscountInput::Resolved(discount), Decimal::ZERO, Decimal::ZERO, now())
            .unwrap();

        let expected = round_currency((subtotal - discount).max(Decimal::ZERO));
        prop_assert_eq!(totals.after_discount, expected);
        prop_assert!(totals.discount_amount <= totals.subtotal);
    }

    #[test]
    fn test_zero_tax_rate_total_equals_after_discount(
        items in line_items_strategy(),
        discount_cents in 0i64..500_000i64,
    ) {
        let composer = InvoiceComposer::new();
        let totals = composer
            .compose_invoice(
                &items,
                &DiscountInput::Resolved(Decimal::new(discount_cents, 2)),
                Decimal::ZERO,
                Decimal::ZERO,
                now(),
            )
            .unwrap();

        prop_assert_eq!(totals.tax_amount, Decimal::ZERO);
        prop_assert_eq!(totals.total, totals.after_discount);
    }

    #[test]
    fn test_line_item_order_does_not_change_subtotal(
        (items, shuffled) in line_items_strategy()
            .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
    ) {
        let totaler = LineItemTotaler::new();

        prop_assert_eq!(
            totaler.compute_subtotal(&items).unwrap(),
            totaler.compute_subtotal(&shuffled).unwrap()
        );
    }

    #[test]
    fn test_resolved_and_fresh_discount_compose_identically(
        items in line_items_strategy(),
        percent in 0u32..=100u32,
        tax_rate in tax_rate_strategy(),
        paid_cents in 0i64..100_000i64,
    ) {
        let composer = InvoiceComposer::new();
        let discount = Discount::percentage(Decimal::from(percent)).unwrap();
        let subtotal = LineItemTotaler::new().compute_subtotal(&items).unwrap();

        let resolved = DiscountApplier::new()
            .resolve_discount_amount(Some(&discount), subtotal, now())
            .unwrap();

        let paid = Decimal::new(paid_cents, 2);
        let fresh_totals = composer
            .compose_invoice(&items, &DiscountInput::Fresh(discount), tax_rate, paid, now())
            .unwrap();
        let resolved_totals = composer
            .compose_invoice(&items, &DiscountInput::Resolved(resolved.amount()), tax_rate, paid, now())
            .unwrap();

        prop_assert_eq!(fresh_totals, resolved_totals);
    }

    #[test]
    fn test_balance_due_is_total_minus_paid(
        items in line_items_strategy(),
        tax_rate in tax_rate_strategy(),
        paid_cents in 0i64..10_000_000i64,
    ) {
        let composer = InvoiceComposer::new();
        let paid = Decimal::new(paid_cents, 2);

        let unpaid = composer
            .compose_invoice(&items, &DiscountInput::None, tax_rate, Decimal::ZERO, now())
            .unwrap();
        let totals = composer
            .compose_invoice(&items, &DiscountInput::None, tax_rate, paid, now())
            .unwrap();

        prop_assert_eq!(totals.balance_due, totals.total - totals.amount_paid);
        prop_assert_eq!(totals.balance_due, unpaid.balance_due - paid);
    }

    #[test]
    fn test_paying_displayed_total_settles_invoice(
        items in line_items_strategy(),
        percent in 0u32..=100u32,
        tax_rate in tax_rate_strategy(),
    ) {
        let composer = InvoiceComposer::new();
        let discount = DiscountInput::Fresh(Discount::percentage(Decimal::from(percent)).unwrap());

        let shown = composer
            .compose_invoice(&items, &discount, tax_rate, Decimal::ZERO, now())
            .unwrap();
        let settled = composer
            .compose_invoice(&items, &discount, tax_rate, shown.total, now())
            .unwrap();

        prop_assert_eq!(settled.balance_due, Decimal::ZERO);
        prop_assert_eq!(settled.payment_status(), PaymentStatus::Paid);
    }
}

#[test]
fn test_invalid_tax_rate_propagates() {
    let composer = InvoiceComposer::new();
    let items = vec![LineItem::new(1, Decimal::from(10)).unwrap()];

    let result = composer.compose_invoice(
        &items,
        &DiscountInput::None,
        Decimal::from(-5),
        Decimal::ZERO,
        now(),
    );

    assert!(matches!(result, Err(BillingError::InvalidTaxRate(_))));
}

#[test]
fn test_half_cent_total_paid_in_full() {
    let composer = InvoiceComposer::new();
    let draft = InvoiceDraft::new(vec![LineItem::new(3, Decimal::new(100, 2)).unwrap()])
        .with_tax_rate(Decimal::new(85, 1));

    let shown = composer.compose(&draft, now()).unwrap();
    assert_eq!(shown.tax_amount, Decimal::new(26, 2));
    assert_eq!(shown.total, Decimal::new(326, 2));

    let paid = composer
        .compose(&draft.with_amount_paid(shown.total), now())
        .unwrap();
    assert_eq!(paid.balance_due, Decimal::ZERO);
    assert_eq!(paid.payment_status(), PaymentStatus::Paid);
}

#[test]
fn test_decimal_max_price_fails_instead_of_panicking() {
    let composer = InvoiceComposer::new();
    let items = vec![LineItem::new(2, Decimal::MAX).unwrap()];

    let result = composer.compose_invoice(
        &items,
        &DiscountInput::None,
        Decimal::ZERO,
        Decimal::ZERO,
        now(),
    );

    assert!(matches!(result, Err(BillingError::InvalidAmount(_))));
}
