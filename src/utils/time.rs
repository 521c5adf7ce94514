use chrono::NaiveDate;

/// Short axis label for a month, e.g. `Jan 23`. Falls back to the raw
/// string when it is not a `YYYY-MM` month.
pub fn month_label(raw: &str, month: Option<NaiveDate>) -> String {
    match month {
        Some(date) => date.format("%b %y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 1);
        assert_eq!(month_label("2023-04", date), "Apr 23");
        assert_eq!(month_label("Q2", None), "Q2");
    }
}
