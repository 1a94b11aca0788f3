pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Truncate then left-align to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(cut.chars().count());
    format!("{}{}", cut, " ".repeat(pad))
}

pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Columns available for text output, clamped to a readable range.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(100)
        .clamp(60, 160)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Wild Animus", 20), "Wild Animus");
        assert_eq!(truncate("The Lovely Bones: A Novel", 10), "The Lov...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(fit("usa", 6), "usa   ");
        assert_eq!(fit("united kingdom", 8), "unite...");
    }
}
