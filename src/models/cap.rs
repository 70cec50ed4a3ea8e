//! Daily claimable cap
//!
//! The most that can be claimed back for a single day's expenses, or
//! unlimited.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

const UNLIMITED: &str = "unlimited";

/// Ceiling applied to each date's total in the summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimableCap {
    /// Everything is claimable
    Unlimited,
    /// At most this much per date
    Limited(Money),
}

impl ClaimableCap {
    /// Parse `"unlimited"` or a monetary value such as `"50"` or `"50.01"`
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let s = s.trim();
        if s == UNLIMITED {
            return Ok(Self::Unlimited);
        }

        Money::parse(s).map(Self::Limited).map_err(|_| {
            ExpenseError::Validation(format!(
                "{} is invalid. Enter valid value i.e. '10' or '10.01' or unlimited",
                s
            ))
        })
    }

    /// The claimable part of a day's total
    pub fn apply(&self, total: Money) -> Money {
        match self {
            Self::Unlimited => total,
            Self::Limited(max) => total.min(*max),
        }
    }
}

impl fmt::Display for ClaimableCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str(UNLIMITED),
            Self::Limited(max) => write!(f, "{}", max),
        }
    }
}

impl Serialize for ClaimableCap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClaimableCap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older config files hold the cap as a plain JSON number.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCap {
            Text(String),
            Number(f64),
        }

        match RawCap::deserialize(deserializer)? {
            RawCap::Text(s) => ClaimableCap::parse(&s).map_err(serde::de::Error::custom),
            RawCap::Number(n) => Money::from_decimal_f64(n)
                .map(ClaimableCap::Limited)
                .map_err(serde::de::Error::custom),
        }
    }
}
