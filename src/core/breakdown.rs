use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Financial breakdown of an invoiced amount.
///
/// The invoiced amount is tax-inclusive: tax is backed out of it and the
/// subtotal is the pre-tax figure, so the grand total always equals the
/// amount itself. The discount is carried for display and does not enter
/// the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceBreakdown {
    /// Invoiced amount (tax-inclusive).
    pub amount: Decimal,
    /// Discount shown on the document.
    pub discount: Decimal,
    /// Tax percentage backed out of the amount.
    pub tax_rate: Decimal,
    /// `amount * tax_rate / 100`.
    pub tax_amount: Decimal,
    /// `amount - tax_amount`.
    pub subtotal: Decimal,
    /// Amount due — equals `amount`.
    pub grand_total: Decimal,
}

impl InvoiceBreakdown {
    /// Derive the breakdown from an amount, discount, and tax percentage.
    pub fn compute(amount: Decimal, discount: Decimal, tax_rate: Decimal) -> Self {
        let tax_amount = amount * tax_rate / dec!(100);
        let subtotal = amount - tax_amount;

        Self {
            amount,
            discount,
            tax_rate,
            tax_amount,
            subtotal,
            grand_total: amount,
        }
    }
}
