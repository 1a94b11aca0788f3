/// Group digits in threes: `271379` → `271,379`.
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_stars(count: usize) -> String {
    "⭐".repeat(count)
}

/// One decimal, or `N/A` when nothing was rated.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{:.1}", avg),
        None => "N/A".to_string(),
    }
}

pub fn format_optional_number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
