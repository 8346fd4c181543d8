/// Renders a store's revenue with thousands separators and the Bitcoin
/// suffix, e.g. `Some(12345.5)` -> `"12,345.5 ₿"`. Missing revenue renders
/// as zero.
pub fn format_revenue(total: Option<f64>) -> String {
    let value = total.unwrap_or(0.0);
    format!("{} ₿", group_thousands(&value.to_string()))
}

fn group_thousands(raw: &str) -> String {
    let (number, fraction) = match raw.split_once('.') {
        Some((n, f)) => (n, Some(f)),
        None => (raw, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
