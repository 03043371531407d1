//! Known currency codes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency codes with a fixed reference rate.
///
/// The engine itself accepts arbitrary code strings; this enum covers the
/// codes the entry form offers and the snapshot rate table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro (the reference currency)
    Eur,
    /// Czech Koruna
    Czk,
    /// Polish Zloty
    Pln,
    /// Pound Sterling
    Gbp,
    /// US Dollar
    Usd,
    /// Hungarian Forint
    Huf,
    /// Mexican Peso
    Mxn,
}

impl Currency {
    /// Every known currency, in display order.
    pub const ALL: [Self; 7] = [
        Self::Eur,
        Self::Czk,
        Self::Pln,
        Self::Gbp,
        Self::Usd,
        Self::Huf,
        Self::Mxn,
    ];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Czk => "CZK",
            Self::Pln => "PLN",
            Self::Gbp => "GBP",
            Self::Usd => "USD",
            Self::Huf => "HUF",
            Self::Mxn => "MXN",
        }
    }

    /// Snapshot rate against the reference currency (1 unit = rate EUR).
    #[must_use]
    pub fn reference_rate(self) -> Decimal {
        match self {
            Self::Eur => Decimal::ONE,
            Self::Czk => Decimal::new(40, 3),   // 0.040
            Self::Pln => Decimal::new(23, 2),   // 0.23
            Self::Gbp => Decimal::new(117, 2),  // 1.17
            Self::Usd => Decimal::new(92, 2),   // 0.92
            Self::Huf => Decimal::new(26, 4),   // 0.0026
            Self::Mxn => Decimal::new(54, 3),   // 0.054
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "CZK" => Ok(Self::Czk),
            "PLN" => Ok(Self::Pln),
            "GBP" => Ok(Self::Gbp),
            "USD" => Ok(Self::Usd),
            "HUF" => Ok(Self::Huf),
            "MXN" => Ok(Self::Mxn),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
