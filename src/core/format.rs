//! Pure formatting helpers shared by the page renderers and the CLI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const MISSING_DATE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";
pub const NOT_DISCLOSED: &str = "Not Disclosed";
pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;
pub const ELLIPSIS: &str = "...";

const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// 解析後端常見的日期格式。帶時區的時間保留原本的當地時刻，不做轉換。
fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// 例：`2024-01-05` → `5 Jan 2024`
pub fn format_date(input: Option<&str>) -> String {
    match input.filter(|s| !s.is_empty()) {
        None => MISSING_DATE.to_string(),
        Some(raw) => parse_date_time(raw)
            .map(|dt| dt.format("%-d %b %Y").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
    }
}

/// 例：`2024-01-05T14:30:00` → `5 Jan 2024, 02:30 pm`
pub fn format_date_time(input: Option<&str>) -> String {
    match input.filter(|s| !s.is_empty()) {
        None => MISSING_DATE.to_string(),
        Some(raw) => parse_date_time(raw)
            .map(|dt| dt.format("%-d %b %Y, %I:%M %P").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
    }
}

/// 0、NaN、無限大與缺值同樣視為未提供
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

fn format_amount(value: f64) -> String {
    if value >= LAKH {
        // 四捨五入到小數一位
        let lakhs = (value / LAKH * 10.0).round() / 10.0;
        format!("{:.1} LPA", lakhs)
    } else if value >= THOUSAND {
        format!("{:.0}K", (value / THOUSAND).round())
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let rounded = format!("{:.3}", value);
        rounded.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn format_salary(min: Option<f64>, max: Option<f64>, currency: Option<&str>) -> String {
    let currency = currency
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);

    match (present(min), present(max)) {
        (None, None) => NOT_DISCLOSED.to_string(),
        (Some(min), Some(max)) => format!(
            "{} {} - {}",
            currency,
            format_amount(min),
            format_amount(max)
        ),
        (Some(value), None) | (None, Some(value)) => {
            format!("{} {}", currency, format_amount(value))
        }
    }
}

/// 以字元（非位元組）計算長度
pub fn truncate(text: Option<&str>, length: usize) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    if text.chars().count() > length {
        let mut truncated: String = text.chars().take(length).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("2024-01-05")), "5 Jan 2024");
        assert_eq!(format_date(Some("2024-11-23T09:15:00")), "23 Nov 2024");
        assert_eq!(format_date(Some("2024-11-23T09:15:00.123456")), "23 Nov 2024");
        assert_eq!(format_date(Some("2024-03-10T18:00:00+05:30")), "10 Mar 2024");
        assert_eq!(format_date(Some("yesterday")), "Invalid Date");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(None), "N/A");
        assert_eq!(
            format_date_time(Some("2024-01-05T14:30:00")),
            "5 Jan 2024, 02:30 pm"
        );
        assert_eq!(
            format_date_time(Some("2024-01-05T09:05:00Z")),
            "5 Jan 2024, 09:05 am"
        );
    }

    #[test]
    fn test_format_salary_not_disclosed() {
        assert_eq!(format_salary(Some(0.0), Some(0.0), None), "Not Disclosed");
        assert_eq!(format_salary(None, None, Some("USD")), "Not Disclosed");
    }

    #[test]
    fn test_format_salary_scales() {
        assert_eq!(format_salary(Some(150_000.0), None, None), "INR 1.5 LPA");
        assert_eq!(format_salary(Some(5_000.0), None, None), "INR 5K");
        assert_eq!(format_salary(None, Some(750.0), None), "INR 750");
        assert_eq!(
            format_salary(Some(600_000.0), Some(1_200_000.0), None),
            "INR 6.0 LPA - 12.0 LPA"
        );
        assert_eq!(
            format_salary(Some(40_000.0), Some(65_500.0), Some("USD")),
            "USD 40K - 66K"
        );
    }

    #[test]
    fn test_format_salary_extreme_values() {
        assert_eq!(
            format_salary(Some(-1e20), None, None),
            "INR -100000000000000000000"
        );
        assert_eq!(format_salary(Some(2e19), None, None), "INR 200000000000000.0 LPA");
        assert_eq!(format_salary(Some(f64::INFINITY), None, None), "Not Disclosed");
        assert_eq!(
            format_salary(Some(f64::NEG_INFINITY), Some(5_000.0), None),
            "INR 5K"
        );
    }

    #[test]
    fn test_format_salary_zero_min_uses_max() {
        assert_eq!(format_salary(Some(0.0), Some(250_000.0), None), "INR 2.5 LPA");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(Some("abc"), 5), "abc");
        assert_eq!(truncate(Some("abcde"), 5), "abcde");
        assert_eq!(truncate(None, 5), "");

        let truncated = truncate(Some("Senior Rust Engineer"), 6);
        assert_eq!(truncated, "Senior...");
        assert_eq!(truncated.chars().count(), 6 + ELLIPSIS.len());
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate(Some("नमस्ते दुनिया"), 3), "नमस...");
    }
}
