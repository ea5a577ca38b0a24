/// Groups the digits of an integer with commas, e.g. `1000000` -> `1,000,000`.
pub fn format_thousands(value: u128) -> String {
    group_digits(&value.to_string())
}

/// Rounds to a whole number and groups the digits, keeping the sign.
pub fn format_thousands_f64(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    match rounded.strip_prefix('-') {
        Some(digits) if digits.chars().any(|c| c != '0') => format!("-{}", group_digits(digits)),
        Some(digits) => group_digits(digits),
        None => group_digits(&rounded),
    }
}

/// Echoes a percentage as it was entered: `50.0` when typed as a decimal, `50` for built-in values.
pub fn format_percent(value: f64, from_float: bool) -> String {
    if from_float {
        format!("{:?}", value)
    } else {
        format!("{}", value)
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
