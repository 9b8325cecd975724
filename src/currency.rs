//! Supported currencies

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Uah,
}

impl Currency {
    /// Selector order
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Uah];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Uah => "uah",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Uah => "UAH",
        }
    }

    /// ISO 4217 numeric code, as used by the Monobank API
    pub fn iso_numeric(self) -> u16 {
        match self {
            Currency::Usd => 840,
            Currency::Eur => 978,
            Currency::Uah => 980,
        }
    }

    pub fn from_iso_numeric(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.iso_numeric() == code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_codes_round_trip() {
        for c in Currency::ALL {
            assert_eq!(Currency::from_iso_numeric(c.iso_numeric()), Some(c));
        }
        assert_eq!(Currency::from_iso_numeric(826), None);
    }

    #[test]
    fn test_serialized_as_lowercase_code() {
        let json = serde_json::to_string(&Currency::Eur).unwrap();
        assert_eq!(json, "\"eur\"");
        let parsed: Currency = serde_json::from_str("\"uah\"").unwrap();
        assert_eq!(parsed, Currency::Uah);
    }
}
