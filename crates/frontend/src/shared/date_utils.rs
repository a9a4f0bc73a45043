/// Format an ISO date (`2025-11-03` or a full timestamp) as `03.11.2025`
/// for list display. Anything unparsable is shown as-is.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if !month.is_empty() && !day.is_empty() {
                return format!("{}.{}.{}", day, month, year);
            }
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date() {
        assert_eq!(format_date("2025-11-03"), "03.11.2025");
    }

    #[test]
    fn timestamp_keeps_only_the_date() {
        assert_eq!(format_date("2025-11-03T14:02:26Z"), "03.11.2025");
    }

    #[test]
    fn unparsable_input_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
