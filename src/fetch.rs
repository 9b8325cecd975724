//! Rate fetching from the Monobank public currency endpoint

use crate::constants::{EUR_RECORD_INDEX, USD_RECORD_INDEX};
use crate::currency::Currency;
use crate::types::{CurrencyRecord, SellRates};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no record at index {0}")]
    MissingRecord(usize),

    #[error("record at index {0} has no sell rate")]
    MissingSellRate(usize),

    #[error(
        "record at index {index} is {}/{}, expected {expected}/UAH",
        code_label(.found_a),
        code_label(.found_b)
    )]
    UnexpectedPair {
        index: usize,
        expected: Currency,
        found_a: u16,
        found_b: u16,
    },
}

/// Currency label for a known ISO numeric code, the bare number otherwise
fn code_label(code: &u16) -> String {
    Currency::from_iso_numeric(*code)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// GET the currency list and extract the USD and EUR sell rates.
pub async fn fetch_sell_rates(client: &reqwest::Client, url: &str) -> Result<SellRates, RateError> {
    debug!(url = url, "Fetching currency rates");
    let response = client.get(url).send().await?;
    let status = response.status();
    debug!(status = %status, "Rates response received");
    if !status.is_success() {
        return Err(RateError::Status(status));
    }
    let body = response.text().await?;
    let records: Vec<CurrencyRecord> = serde_json::from_str(&body)?;
    parse_sell_rates(&records)
}

/// The first record is USD/UAH and the second EUR/UAH.
pub fn parse_sell_rates(records: &[CurrencyRecord]) -> Result<SellRates, RateError> {
    let usd = sell_rate_at(records, USD_RECORD_INDEX, Currency::Usd)?;
    let eur = sell_rate_at(records, EUR_RECORD_INDEX, Currency::Eur)?;
    let updated_at = records[USD_RECORD_INDEX]
        .date
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
    Ok(SellRates { usd, eur, updated_at })
}

fn sell_rate_at(records: &[CurrencyRecord], index: usize, expected: Currency) -> Result<f64, RateError> {
    let record = records.get(index).ok_or(RateError::MissingRecord(index))?;
    if record.currency_code_a != expected.iso_numeric()
        || record.currency_code_b != Currency::Uah.iso_numeric()
    {
        return Err(RateError::UnexpectedPair {
            index,
            expected,
            found_a: record.currency_code_a,
            found_b: record.currency_code_b,
        });
    }
    record.rate_sell.ok_or(RateError::MissingSellRate(index))
}
