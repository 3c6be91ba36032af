//! Tax-inclusive pricing math.
//!
//! Negotiated prices already include CGST, SGST and cess, so the taxable
//! amount printed on invoices is back-calculated from the line total rather
//! than the other way round.

use thiserror::Error;

/// Errors produced by the pricing functions. Negative quantities are also
/// rejected upstream during order validation; the check here keeps the
/// function total for direct callers.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("negotiated price cannot be negative: {0}")]
    NegativePrice(f64),
    #[error("quantity cannot be negative: {0}")]
    NegativeQuantity(i32),
    #[error("tax rate cannot be negative: {0}")]
    NegativeRate(f64),
}

/// Amounts derived for a single invoice line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTotals {
    /// Pre-tax base, `final_price / (1 + rate_sum / 100)`.
    pub taxable_amount: f64,
    /// Tax-inclusive line total, `negotiated_price * quantity`.
    pub final_price: f64,
}

/// Compute the totals for one line from its tax-inclusive unit price.
///
/// With all three rates at zero the taxable amount equals the final price.
pub fn line_totals(
    negotiated_price: f64,
    quantity: i32,
    cgst: f64,
    sgst: f64,
    cess: f64,
) -> Result<LineTotals, PricingError> {
    if negotiated_price < 0.0 {
        return Err(PricingError::NegativePrice(negotiated_price));
    }
    if quantity < 0 {
        return Err(PricingError::NegativeQuantity(quantity));
    }
    for rate in [cgst, sgst, cess] {
        if rate < 0.0 {
            return Err(PricingError::NegativeRate(rate));
        }
    }

    let final_price = negotiated_price * quantity as f64;
    let taxable_amount = final_price / (1.0 + (cgst + sgst + cess) / 100.0);

    Ok(LineTotals {
        taxable_amount,
        final_price,
    })
}
