//! Fixed exchange-rate table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::code::Currency;

/// Immutable mapping from currency code to reference-currency multiplier.
///
/// The table is passed into the normalizer explicitly so rates can be
/// swapped without touching the conversion logic. Rates are snapshots with
/// no timestamp: amounts are converted once at entry time and historical
/// records are never retroactively adjusted.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table from explicit (code, multiplier) pairs.
    #[must_use]
    pub fn new(rates: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// Returns the multiplier for `code`.
    ///
    /// Unknown codes fall back to 1.0 - the amount is treated as already
    /// being in the reference currency. This is a deliberate permissive
    /// default, not an error; it silently mis-converts unrecognized codes.
    #[must_use]
    pub fn rate(&self, code: &str) -> Decimal {
        self.rates.get(code).copied().unwrap_or(Decimal::ONE)
    }
}

impl Default for RateTable {
    /// The snapshot the system shipped with.
    fn default() -> Self {
        Self::new(
            Currency::ALL
                .into_iter()
                .map(|c| (c.code().to_string(), c.reference_rate())),
        )
    }
}
