//! Currency formatting for report cells

use crate::models::Money;

/// Label used on the synthetic total cells
pub const TOTAL_LABEL: &str = "Total";

/// Format an amount with the currency symbol prefixed, e.g. `£9.00`
///
/// Always shows two decimals and no thousands separators.
pub fn format_currency(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Prefix an already formatted total cell with its label, e.g. `Total: £9.00`
pub fn format_total_label(value: &str, label: &str) -> String {
    format!("{}: {}", label, value)
}
