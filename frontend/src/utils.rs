pub fn format_iso8601_datetime(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Bar width in percent of the widest bar.
pub fn bar_percent(value: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        value * 100 / max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers_and_dates() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(12), "12");
        assert_eq!(
            format_iso8601_datetime("2026-10-16T09:30:00+00:00"),
            "2026-10-16 09:30 UTC"
        );
        assert_eq!(format_iso8601_datetime("soon"), "soon");
    }

    #[test]
    fn scales_bars_to_the_largest_topic() {
        assert_eq!(bar_percent(5, 10), 50);
        assert_eq!(bar_percent(10, 10), 100);
        assert_eq!(bar_percent(0, 0), 0);
    }
}
