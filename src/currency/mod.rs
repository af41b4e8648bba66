use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// How the integer part of a number is split into digit groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupingStyle {
    /// `1,234,567`
    Thousands,
    /// `12,34,567`: the last three digits, then pairs.
    Indian,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: GroupingStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("en-IN")
    }
}

impl LocaleConfig {
    /// Formatting rules for a BCP 47 tag. Unknown tags get `en-US` rules.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator, grouping) = match tag {
            "en-IN" | "hi-IN" => ('.', ',', GroupingStyle::Indian),
            "de-DE" | "es-ES" | "it-IT" => (',', '.', GroupingStyle::Thousands),
            "fr-FR" => (',', ' ', GroupingStyle::Thousands),
            _ => ('.', ',', GroupingStyle::Thousands),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            grouping,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, locale.grouping_separator, locale.grouping);
    if let Some(fraction) = fraction {
        rendered.push(locale.decimal_separator);
        rendered.push_str(fraction);
    }
    if value < 0.0 && rendered.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        rendered.insert(0, '-');
    }
    rendered
}

fn group_digits(digits: &str, separator: char, style: GroupingStyle) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 2);
    for (index, ch) in chars.iter().enumerate() {
        let remaining = chars.len() - index;
        if index > 0 && is_group_boundary(remaining, style) {
            grouped.push(separator);
        }
        grouped.push(*ch);
    }
    grouped
}

fn is_group_boundary(remaining: usize, style: GroupingStyle) -> bool {
    match style {
        GroupingStyle::Thousands => remaining % 3 == 0,
        GroupingStyle::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

/// Renders `amount` as a currency string, e.g. `₹1,23,456.78` or `-$5.00`.
pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let precision = minor_units_for(code.as_str());
    let unsigned = format_number(locale, amount.abs(), precision);
    let negative = format_number(locale, amount, precision).starts_with('-');

    let prefixed = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), unsigned),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), unsigned),
    };
    if !negative {
        return prefixed;
    }
    match options.negative_style {
        NegativeStyle::Sign => format!("-{}", prefixed),
        NegativeStyle::Parentheses => format!("({})", prefixed),
    }
}

/// Timestamp label used in listings, e.g. `01 Mar 2024 14:30`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    format!(
        "{:02} {} {} {}",
        timestamp.day(),
        month_label(timestamp.month()),
        timestamp.year(),
        timestamp.format("%H:%M")
    )
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn inr(amount: f64) -> String {
        format_currency_value(
            amount,
            &CurrencyCode::default(),
            &LocaleConfig::default(),
            &FormatOptions::default(),
        )
    }

    #[test]
    fn indian_grouping_pairs_after_thousands() {
        assert_eq!(inr(0.0), "₹0.00");
        assert_eq!(inr(999.5), "₹999.50");
        assert_eq!(inr(1000.0), "₹1,000.00");
        assert_eq!(inr(123456.78), "₹1,23,456.78");
        assert_eq!(inr(12345678.0), "₹1,23,45,678.00");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        assert_eq!(inr(-500.0), "-₹500.00");
        assert_eq!(inr(-0.001), "₹0.00");
    }

    #[test]
    fn western_locales_group_by_thousands() {
        let usd = CurrencyCode::new("usd");
        let locale = LocaleConfig::for_tag("en-US");
        let options = FormatOptions::default();
        assert_eq!(
            format_currency_value(1234567.891, &usd, &locale, &options),
            "$1,234,567.89"
        );

        let eur = CurrencyCode::new("EUR");
        let german = LocaleConfig::for_tag("de-DE");
        let parens = FormatOptions {
            currency_display: CurrencyDisplay::Code,
            negative_style: NegativeStyle::Parentheses,
        };
        assert_eq!(
            format_currency_value(-9876.5, &eur, &german, &parens),
            "(EUR 9.876,50)"
        );
    }

    #[test]
    fn yen_has_no_minor_units() {
        let jpy = CurrencyCode::new("JPY");
        let locale = LocaleConfig::for_tag("en-US");
        assert_eq!(
            format_currency_value(1500.0, &jpy, &locale, &FormatOptions::default()),
            "¥1,500"
        );
    }

    #[test]
    fn timestamp_label_is_day_month_year_time() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 30, 59)
            .unwrap();
        assert_eq!(format_timestamp(at), "01 Mar 2024 14:30");
    }
}
