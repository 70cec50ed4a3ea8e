//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent an expense
//! report: entries, money amounts, the claimable cap and currency symbol.

pub mod cap;
pub mod currency;
pub mod entry;
pub mod money;

pub use cap::ClaimableCap;
pub use currency::CurrencySymbol;
pub use entry::{parse_date, Entry, DATE_FORMAT};
pub use money::{Money, MoneyParseError, MAX_CENTS};
