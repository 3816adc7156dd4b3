use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn text_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

/// Percentage with exactly one decimal, matching the agent dashboard's
/// display contract ("75.0%").
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn fit_text(value: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_width(value) <= max_len {
        return value.to_string();
    }
    if max_len <= 3 {
        return take_width(value, max_len);
    }
    let mut trimmed = take_width(value, max_len - 3);
    trimmed.push_str("...");
    trimmed
}

pub fn take_width(value: &str, max_len: usize) -> String {
    let mut output = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_len {
            break;
        }
        output.push(ch);
        width += ch_width;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_percent_keeps_one_decimal() {
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(40.0), "40.0%");
        assert_eq!(format_percent(99.95), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn text_width_counts_display_cells() {
        assert_eq!(text_width("sentop"), 6);
        assert_eq!(text_width("表"), 2);
    }

    #[test]
    fn fit_text_trims_by_display_width() {
        assert_eq!(fit_text("表表表", 5), "表...");
        assert_eq!(fit_text("short", 10), "short");
    }
}
