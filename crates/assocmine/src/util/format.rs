use chrono::{DateTime, Local, Utc};

/// Renders a fraction as a percentage with a fixed number of decimals.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = DateTime::from(*dt);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parses a fraction such as `0.25` or a percentage such as `25%`.
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let (num_str, scale) = match s.strip_suffix('%') {
        Some(stripped) => (stripped.trim(), 100.0),
        None => (s, 1.0),
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid fraction: {}", s))?;
    if !num.is_finite() {
        return Err(format!("Invalid fraction: {}", s));
    }

    Ok(num / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5, 4), "50.0000%");
        assert_eq!(format_percent(2.0 / 3.0, 1), "66.7%");
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(1.0, 0), "100%");
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("0.25").unwrap(), 0.25);
        assert_eq!(parse_fraction("25%").unwrap(), 0.25);
        assert_eq!(parse_fraction(" 1.1 ").unwrap(), 1.1);
        assert!(parse_fraction("abc").is_err());
        assert!(parse_fraction("inf").is_err());
    }
}
