use chrono::{DateTime, Local, NaiveDateTime};

/// `$1234.50`
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Render an API timestamp as local `YYYY-MM-DD HH:MM`.
///
/// RFC 3339 stamps are converted to local time; naive stamps are shown as
/// given. Anything else is passed through untouched.
pub fn format_date(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S") {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    timestamp.to_string()
}
