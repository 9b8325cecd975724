//! Conversion rate table for USD / EUR / UAH

use crate::constants::*;
use crate::currency::Currency;
use crate::types::SellRates;

/// Multipliers for every ordered currency pair.
///
/// Only the `*->UAH` and the two cross entries are stored; the `UAH->*`
/// entries are their reciprocals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    usd_uah: f64,
    eur_uah: f64,
    usd_eur: f64,
    eur_usd: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::fallback()
    }
}

impl RateTable {
    pub fn fallback() -> Self {
        Self {
            usd_uah: FALLBACK_USD_UAH,
            eur_uah: FALLBACK_EUR_UAH,
            usd_eur: FALLBACK_USD_EUR,
            eur_usd: FALLBACK_EUR_USD,
        }
    }

    /// Build from fetched sell rates. Any entry that does not come out as a
    /// usable multiplier keeps its fallback value.
    pub fn from_sell_rates(rates: &SellRates) -> Self {
        Self {
            usd_uah: usable_or(rates.usd, FALLBACK_USD_UAH),
            eur_uah: usable_or(rates.eur, FALLBACK_EUR_UAH),
            usd_eur: usable_or(rates.usd / rates.eur, FALLBACK_USD_EUR),
            eur_usd: usable_or(rates.eur / rates.usd, FALLBACK_EUR_USD),
        }
    }

    pub fn rate(&self, from: Currency, to: Currency) -> f64 {
        use Currency::*;
        match (from, to) {
            (Usd, Usd) | (Eur, Eur) | (Uah, Uah) => 1.0,
            (Usd, Uah) => self.usd_uah,
            (Usd, Eur) => self.usd_eur,
            (Eur, Uah) => self.eur_uah,
            (Eur, Usd) => self.eur_usd,
            (Uah, Usd) => 1.0 / self.usd_uah,
            (Uah, Eur) => 1.0 / self.eur_uah,
        }
    }
}

fn usable_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        fallback
    }
}
