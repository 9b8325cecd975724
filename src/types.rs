//! Common types and data structures

use chrono::{DateTime, Utc};

/// Sell rates for the two base pairs, both quoted in UAH
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellRates {
    pub usd: f64,
    pub eur: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Where the rates currently in use came from
#[derive(Debug, Clone, PartialEq)]
pub enum RateStatus {
    Loading,
    Live(Option<DateTime<Utc>>),
    Fallback(String),
}

impl RateStatus {
    /// Text shown under the form, if any
    pub fn message(&self) -> Option<String> {
        match self {
            RateStatus::Loading => Some("Fetching current rates...".to_string()),
            RateStatus::Live(Some(at)) => {
                Some(format!("Rates updated {}", at.format("%d/%m/%y %H:%M UTC")))
            }
            RateStatus::Live(None) => None,
            RateStatus::Fallback(msg) => Some(msg.clone()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RateStatus::Fallback(_))
    }
}

/// Individual record in the bank's currency list
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    pub currency_code_a: u16,
    pub currency_code_b: u16,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub rate_sell: Option<f64>,
    #[serde(default)]
    pub rate_buy: Option<f64>,
    #[serde(default)]
    pub rate_cross: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_deserializes_camel_case() {
        let json = r#"{"currencyCodeA":840,"currencyCodeB":980,"date":1672531200,"rateBuy":36.65,"rateSell":37.4406}"#;
        let record: CurrencyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.currency_code_a, 840);
        assert_eq!(record.currency_code_b, 980);
        assert_eq!(record.rate_sell, Some(37.4406));
        assert_eq!(record.rate_cross, None);
    }

    #[test]
    fn test_status_messages() {
        assert!(RateStatus::Live(None).message().is_none());
        let at = Utc.with_ymd_and_hms(2023, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(
            RateStatus::Live(Some(at)).message().as_deref(),
            Some("Rates updated 05/01/23 09:30 UTC")
        );
        let fallback = RateStatus::Fallback("offline".into());
        assert!(fallback.is_error());
        assert_eq!(fallback.message().as_deref(), Some("offline"));
    }
}
