//! Currency symbol
//!
//! Reports are rendered with a single configured symbol prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExpenseError;

/// Symbols accepted by `set-currency` and the currency prompt
pub const SUPPORTED_SYMBOLS: &[&str] = &[
    "د.ج", "P", "£", "ج.م", "Br", "₵", "KSh", "د.م.", "₦", "R", "د.ت", "֏", "৳", "Nu.", "¥",
    "元", "HK$", "₹", "Rp", "₪", "₸", "د.ك", "RM", "ر.ع.", "₱", "ر.ق", "ر.س", "S$", "₩", "₫",
    "฿", "₭", "៛", "€", "$", "C$", "A$", "NZ$", "CHF", "руб", "₴", "₼", "₺", "₾", "L", "₣",
];

/// A validated currency symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencySymbol(String);

impl CurrencySymbol {
    /// Validate a symbol against the supported list
    pub fn parse(symbol: &str) -> Result<Self, ExpenseError> {
        let symbol = symbol.trim();
        if SUPPORTED_SYMBOLS.contains(&symbol) {
            Ok(Self(symbol.to_string()))
        } else {
            Err(ExpenseError::Validation(format!(
                "'{}' is not a valid currency symbol",
                symbol
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencySymbol {
    type Error = ExpenseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencySymbol> for String {
    fn from(symbol: CurrencySymbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
