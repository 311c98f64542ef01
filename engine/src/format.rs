//! FILENAME: engine/src/format.rs
//! PURPOSE: Value formatting utilities for displaying metric values.
//! CONTEXT: This module converts a raw metric value plus its semantic class
//! into a display string. It is the single source of truth for on-screen
//! rendering, CSV export, and spreadsheet export — the three must never
//! diverge.

use crate::record::MetricValue;
use serde::{Deserialize, Serialize};

/// The semantic category governing how a raw field renders.
///
/// Resolved once per column at registry construction, not re-matched per
/// render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatClass {
    /// Ratio rendered as a percentage: `0.1534` → `"15.34%"`.
    Percent,
    /// Integer USD with thousands grouping: `1234567` → `"$1,234,567"`.
    Currency,
    /// Dollar prefix on the shortest numeric string: `2.5` → `"$2.5"`.
    PerShare,
    /// Two decimals with an `x` suffix: `3.456` → `"3.46x"`.
    Multiple,
    /// Raw string emitted verbatim (IR website URL), never reformatted.
    Link,
    /// Two decimals, no affix.
    Plain,
}

/// Classifies a metric key into its format class.
///
/// Check order matters: the percentage patterns win over the currency keys
/// (`revenue_growth`, `ebitda_margin`), currency wins over EPS, EPS over
/// price-to multiples.
pub fn classify_field_key(key: &str) -> FormatClass {
    if key.contains("margin") || key.contains("growth") || key == "forward_dividend_yield" {
        return FormatClass::Percent;
    }

    if key.contains("revenue")
        || key.contains("market_cap")
        || key.contains("enterprise_value")
        || key.contains("ebitda")
        || key.contains("total_debt")
        || key.contains("free_cash_flow")
        || key.contains("operating_cashflow")
    {
        return FormatClass::Currency;
    }

    if key.contains("eps") {
        return FormatClass::PerShare;
    }

    if key.contains("price_to") {
        return FormatClass::Multiple;
    }

    if key == "ir_website_link" {
        return FormatClass::Link;
    }

    FormatClass::Plain
}

/// Formats a raw metric value according to its class.
///
/// Missing or unparseable values render as `"N/A"`; formatting never fails.
pub fn format_metric(class: FormatClass, value: &MetricValue) -> String {
    if class == FormatClass::Link {
        return match value {
            MetricValue::Text(s) if !s.is_empty() => s.clone(),
            MetricValue::Number(n) => format!("{}", n),
            _ => "N/A".to_string(),
        };
    }

    let number = match value.as_f64() {
        Some(n) => n,
        None => return "N/A".to_string(),
    };

    match class {
        FormatClass::Percent => format!("{:.2}%", number * 100.0),
        FormatClass::Currency => format_currency(number),
        FormatClass::PerShare => format!("${}", number),
        FormatClass::Multiple => format!("{:.2}x", number),
        FormatClass::Plain => format!("{:.2}", number),
        FormatClass::Link => unreachable!("handled above"),
    }
}

/// Formats a number as integer USD: rounded to whole dollars,
/// thousands-grouped, `$` prefix, leading `-` for negatives.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = add_thousands_separator(&digits);

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Adds thousands separators to a string of ASCII digits.
fn add_thousands_separator(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_percent_wins_over_currency() {
        assert_eq!(classify_field_key("revenue_growth"), FormatClass::Percent);
        assert_eq!(classify_field_key("ebitda_margin"), FormatClass::Percent);
        assert_eq!(classify_field_key("gross_margin"), FormatClass::Percent);
        assert_eq!(
            classify_field_key("forward_dividend_yield"),
            FormatClass::Percent
        );
    }

    #[test]
    fn test_classify_remaining_categories() {
        assert_eq!(classify_field_key("market_cap"), FormatClass::Currency);
        assert_eq!(classify_field_key("operating_cashflow"), FormatClass::Currency);
        assert_eq!(classify_field_key("trailing_eps"), FormatClass::PerShare);
        assert_eq!(
            classify_field_key("price_to_sales_trailing12mo"),
            FormatClass::Multiple
        );
        assert_eq!(classify_field_key("ir_website_link"), FormatClass::Link);
        assert_eq!(classify_field_key("trailing_pe"), FormatClass::Plain);
        assert_eq!(classify_field_key("forward_dividend"), FormatClass::Plain);
        assert_eq!(classify_field_key("full_time_employees"), FormatClass::Plain);
    }

    #[test]
    fn test_format_percent() {
        let v = MetricValue::Number(0.1534);
        assert_eq!(format_metric(FormatClass::Percent, &v), "15.34%");
        assert_eq!(
            format_metric(FormatClass::Percent, &MetricValue::Number(-0.05)),
            "-5.00%"
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(1_500_000_000.0), "$1,500,000,000");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1234567.8), "$1,234,568");
        assert_eq!(format_currency(-2_500_000.0), "-$2,500,000");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_per_share() {
        assert_eq!(
            format_metric(FormatClass::PerShare, &MetricValue::Number(2.5)),
            "$2.5"
        );
        assert_eq!(
            format_metric(FormatClass::PerShare, &MetricValue::Number(2.0)),
            "$2"
        );
        assert_eq!(
            format_metric(FormatClass::PerShare, &MetricValue::Number(-1.23)),
            "$-1.23"
        );
    }

    #[test]
    fn test_format_multiple_and_plain() {
        assert_eq!(
            format_metric(FormatClass::Multiple, &MetricValue::Number(3.456)),
            "3.46x"
        );
        assert_eq!(
            format_metric(FormatClass::Plain, &MetricValue::Number(1.2)),
            "1.20"
        );
    }

    #[test]
    fn test_format_link_verbatim() {
        let url = MetricValue::from("https://ir.example.com/home?x=1");
        assert_eq!(
            format_metric(FormatClass::Link, &url),
            "https://ir.example.com/home?x=1"
        );
        assert_eq!(format_metric(FormatClass::Link, &MetricValue::Missing), "N/A");
        assert_eq!(format_metric(FormatClass::Link, &MetricValue::from("")), "N/A");
    }

    #[test]
    fn test_format_missing_and_unparseable() {
        for class in [
            FormatClass::Percent,
            FormatClass::Currency,
            FormatClass::PerShare,
            FormatClass::Multiple,
            FormatClass::Plain,
        ] {
            assert_eq!(format_metric(class, &MetricValue::Missing), "N/A");
            assert_eq!(format_metric(class, &MetricValue::from("N/A")), "N/A");
        }
    }

    #[test]
    fn test_parseable_text_formats_like_numbers() {
        assert_eq!(
            format_metric(FormatClass::Currency, &MetricValue::from("1234567")),
            "$1,234,567"
        );
        assert_eq!(
            format_metric(FormatClass::Percent, &MetricValue::from("0.1")),
            "10.00%"
        );
    }
}
