//! Amount conversion form state
//!
//! Holds the two amount fields and currency selections and keeps the
//! dependent field in sync with every edit. Rendering lives in `app::view`;
//! nothing here touches egui so the behaviour can be tested directly.

use crate::constants::{MAX_AMOUNT, MAX_FRACTION_DIGITS};
use crate::currency::Currency;
use crate::rates::RateTable;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterForm {
    pub amount_from: String,
    pub amount_to: String,
    pub convert_from: Currency,
    pub convert_to: Currency,
    /// Set when the most recent input into an amount field was a paste
    pub pasted: bool,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self {
            amount_from: String::new(),
            amount_to: String::new(),
            convert_from: Currency::Usd,
            convert_to: Currency::Uah,
            pasted: false,
        }
    }
}

impl ConverterForm {
    pub fn mark_pasted(&mut self) {
        debug!("Paste into amount field, next edit will be discarded");
        self.pasted = true;
    }

    /// User edited the "from" field; `raw` is the field text after the edit.
    /// Returns false when the edit was rejected or discarded as a paste.
    pub fn input_amount_from(&mut self, raw: &str, rates: &RateTable) -> bool {
        let value = self.take_edit(&self.amount_from.clone(), raw);
        let accepted = value == raw;
        let result = parse_amount(&value) * rates.rate(self.convert_from, self.convert_to);
        self.amount_from = normalize_leading_point(value);
        self.amount_to = format_amount(result);
        trace!(from = %self.amount_from, to = %self.amount_to, accepted, "Amount from edited");
        accepted
    }

    /// User edited the "to" field; converts back through the same pair.
    pub fn input_amount_to(&mut self, raw: &str, rates: &RateTable) -> bool {
        let value = self.take_edit(&self.amount_to.clone(), raw);
        let accepted = value == raw;
        let result = parse_amount(&value) / rates.rate(self.convert_from, self.convert_to);
        self.amount_to = normalize_leading_point(value);
        self.amount_from = format_amount(result);
        trace!(from = %self.amount_from, to = %self.amount_to, accepted, "Amount to edited");
        accepted
    }

    pub fn select_convert_from(&mut self, currency: Currency, rates: &RateTable) {
        self.convert_from = currency;
        self.recompute_amount_to(rates);
    }

    pub fn select_convert_to(&mut self, currency: Currency, rates: &RateTable) {
        self.convert_to = currency;
        self.recompute_amount_to(rates);
    }

    /// Exchange both amounts and both currencies.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.amount_from, &mut self.amount_to);
        std::mem::swap(&mut self.convert_from, &mut self.convert_to);
        debug!(from = self.convert_from.code(), to = self.convert_to.code(), "Swapped direction");
    }

    fn recompute_amount_to(&mut self, rates: &RateTable) {
        let result =
            parse_amount(&self.amount_from) * rates.rate(self.convert_from, self.convert_to);
        self.amount_to = format_amount(result);
    }

    /// Consumes the paste flag. A pasted value is dropped outright.
    fn take_edit(&mut self, previous: &str, raw: &str) -> String {
        if std::mem::take(&mut self.pasted) {
            String::new()
        } else {
            accept_input(previous, raw)
        }
    }
}

/// Returns `candidate` if it is an acceptable amount, otherwise `previous`.
pub fn accept_input(previous: &str, candidate: &str) -> String {
    if is_valid_amount(candidate) {
        candidate.to_string()
    } else {
        previous.to_string()
    }
}

pub fn is_valid_amount(input: &str) -> bool {
    if input.is_empty() {
        return true;
    }
    if !input.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    if input.matches('.').count() > 1 || input.starts_with("00") {
        return false;
    }
    if let Some((_, fraction)) = input.split_once('.') {
        if fraction.len() > MAX_FRACTION_DIGITS {
            return false;
        }
    }
    // A lone "." has no value yet and is allowed through
    !matches!(input.parse::<f64>(), Ok(v) if v > MAX_AMOUNT)
}

/// Integer text when exact, two decimals otherwise, empty for zero or NaN.
/// Half-cent ties round up, so 20.625 shows as 20.63.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let rounded = (value * 100.0).round() / 100.0;
        format!("{:.2}", rounded)
    }
}

/// Empty text counts as zero; anything unparsable is NaN.
fn parse_amount(text: &str) -> f64 {
    if text.is_empty() {
        0.0
    } else {
        text.parse().unwrap_or(f64::NAN)
    }
}

fn normalize_leading_point(value: String) -> String {
    if value.starts_with('.') {
        format!("0{}", value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SellRates;

    fn fallback() -> RateTable {
        RateTable::fallback()
    }

    /// Type `text` one character at a time into the "from" field.
    fn type_from(form: &mut ConverterForm, text: &str, rates: &RateTable) {
        for c in text.chars() {
            let candidate = format!("{}{}", form.amount_from, c);
            form.input_amount_from(&candidate, rates);
        }
    }

    #[test]
    fn test_defaults() {
        let form = ConverterForm::default();
        assert_eq!(form.convert_from, Currency::Usd);
        assert_eq!(form.convert_to, Currency::Uah);
        assert!(form.amount_from.is_empty());
        assert!(form.amount_to.is_empty());
        assert!(!form.pasted);
    }

    #[test]
    fn test_rejects_non_numeric_characters() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        type_from(&mut form, "12", &rates);
        form.input_amount_from("12a", &rates);
        assert_eq!(form.amount_from, "12");
        form.input_amount_from("12-", &rates);
        assert_eq!(form.amount_from, "12");
        form.input_amount_from("1 2", &rates);
        assert_eq!(form.amount_from, "12");
    }

    #[test]
    fn test_rejects_second_decimal_point() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        type_from(&mut form, "1.5", &rates);
        form.input_amount_from("1.5.", &rates);
        assert_eq!(form.amount_from, "1.5");
    }

    #[test]
    fn test_rejects_leading_double_zero() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        type_from(&mut form, "0", &rates);
        form.input_amount_from("00", &rates);
        assert_eq!(form.amount_from, "0");
        assert!(!is_valid_amount("001"));
        assert!(is_valid_amount("0.01"));
    }

    #[test]
    fn test_rejects_third_fraction_digit() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        type_from(&mut form, "3.14", &rates);
        form.input_amount_from("3.141", &rates);
        assert_eq!(form.amount_from, "3.14");
    }

    #[test]
    fn test_rejects_amounts_over_ten_million() {
        assert!(is_valid_amount("10000000"));
        assert!(!is_valid_amount("10000001"));
        assert!(!is_valid_amount("99999999"));
        assert!(is_valid_amount("9999999.99"));
    }

    #[test]
    fn test_paste_clears_from_field() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        type_from(&mut form, "5", &rates);
        form.mark_pasted();
        form.input_amount_from("5123", &rates);
        assert_eq!(form.amount_from, "");
        assert_eq!(form.amount_to, "");
        assert!(!form.pasted);

        // Typing works again afterwards
        form.input_amount_from("7", &rates);
        assert_eq!(form.amount_from, "7");
    }

    #[test]
    fn test_paste_clears_to_field() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        form.input_amount_to("100", &rates);
        form.mark_pasted();
        form.input_amount_to("100250", &rates);
        assert_eq!(form.amount_to, "");
        assert_eq!(form.amount_from, "");
    }

    #[test]
    fn test_hundred_usd_to_uah_with_fallback_rates() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        form.input_amount_from("100", &rates);
        assert_eq!(form.amount_to, format_amount(100.0 * 37.44));
        let converted: f64 = form.amount_to.parse().unwrap();
        assert!((converted - 3744.0).abs() < 0.005);
    }

    #[test]
    fn test_edit_to_divides_by_rate() {
        let rates = RateTable::from_sell_rates(&SellRates { usd: 40.0, eur: 50.0, updated_at: None });
        let mut form = ConverterForm::default();
        form.input_amount_to("1000", &rates);
        assert_eq!(form.amount_to, "1000");
        assert_eq!(form.amount_from, "25");

        form.input_amount_to("10", &rates);
        assert_eq!(form.amount_from, "0.25");
    }

    #[test]
    fn test_leading_point_is_prefixed_with_zero() {
        let rates = RateTable::from_sell_rates(&SellRates { usd: 40.0, eur: 50.0, updated_at: None });
        let mut form = ConverterForm::default();
        form.input_amount_from(".", &rates);
        assert_eq!(form.amount_from, "0.");
        assert_eq!(form.amount_to, "");
        form.input_amount_from("0.5", &rates);
        assert_eq!(form.amount_to, "20");
    }

    #[test]
    fn test_clearing_field_clears_other() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        form.input_amount_from("12", &rates);
        assert!(!form.amount_to.is_empty());
        form.input_amount_from("", &rates);
        assert_eq!(form.amount_to, "");
    }

    #[test]
    fn test_swap_exchanges_amounts_and_currencies() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        form.input_amount_from("100", &rates);
        let before = form.clone();
        form.swap();
        assert_eq!(form.amount_from, before.amount_to);
        assert_eq!(form.amount_to, before.amount_from);
        assert_eq!(form.convert_from, Currency::Uah);
        assert_eq!(form.convert_to, Currency::Usd);
        form.swap();
        assert_eq!(form, before);
    }

    #[test]
    fn test_selector_change_recomputes_only_dependent_field() {
        let rates = RateTable::from_sell_rates(&SellRates { usd: 40.0, eur: 50.0, updated_at: None });
        let mut form = ConverterForm::default();
        form.input_amount_from("10", &rates);
        assert_eq!(form.amount_to, "400");

        form.select_convert_from(Currency::Eur, &rates);
        assert_eq!(form.amount_from, "10");
        assert_eq!(form.amount_to, "500");

        form.select_convert_to(Currency::Usd, &rates);
        assert_eq!(form.amount_from, "10");
        assert_eq!(form.amount_to, "12.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "");
        assert_eq!(format_amount(f64::NAN), "");
        assert_eq!(format_amount(f64::INFINITY), "");
        assert_eq!(format_amount(4.0), "4");
        assert_eq!(format_amount(2.5), "2.50");
        assert_eq!(format_amount(1.0 / 3.0), "0.33");
        assert_eq!(format_amount(2.999), "3.00");
    }

    #[test]
    fn test_input_reports_rejected_edits() {
        let rates = fallback();
        let mut form = ConverterForm::default();
        assert!(form.input_amount_from("12", &rates));
        assert!(!form.input_amount_from("12x", &rates));
        assert!(form.input_amount_to(".", &rates));
        assert_eq!(form.amount_to, "0.");
        form.mark_pasted();
        // The edit that follows a paste is discarded
        assert!(!form.input_amount_to("0.75", &rates));
    }

    #[test]
    fn test_half_cent_rounds_up() {
        assert_eq!(format_amount(20.625), "20.63");
        assert_eq!(format_amount(0.125), "0.13");

        // Quarter-hryvnia sell rate, half a dollar
        let rates = RateTable::from_sell_rates(&SellRates { usd: 41.25, eur: 44.0, updated_at: None });
        let mut form = ConverterForm::default();
        form.input_amount_from("0.5", &rates);
        assert_eq!(form.amount_to, "20.63");
    }
}
