//! Application constants and configuration

pub const APP_NAME: &str = "Hryvnia Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const RATES_URL: &str = "https://api.monobank.ua/bank/currency";

/// Array positions of the USD/UAH and EUR/UAH records in the rates payload
pub const USD_RECORD_INDEX: usize = 0;
pub const EUR_RECORD_INDEX: usize = 1;

/// Rates used until (or instead of) a successful fetch
pub const FALLBACK_USD_UAH: f64 = 37.44;
pub const FALLBACK_EUR_UAH: f64 = 39.95;
pub const FALLBACK_USD_EUR: f64 = 0.937;
pub const FALLBACK_EUR_USD: f64 = 1.067;

/// Largest amount accepted in either field
pub const MAX_AMOUNT: f64 = 10_000_000.0;
pub const MAX_FRACTION_DIGITS: usize = 2;

pub const RATES_UNAVAILABLE_MESSAGE: &str = "Could not reach server to get up-to-date currency rates.\n\
Most likely you have exceeded Monobank API limit (1 request in 5 minutes).\n\
Last update: 05/01/23";
