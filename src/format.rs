//! Price formatting in the Indian numbering system

/// One lakh (10^5)
const LAKH: f64 = 100_000.0;

/// One crore (10^7)
const CRORE: f64 = 10_000_000.0;

/// Fraction digits shown for lakh and crore amounts
const ABBREVIATED_FRACTION_DIGITS: usize = 2;

/// Maximum fraction digits shown for plain amounts (en-IN locale default)
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a price for display using crore/lakh abbreviations.
///
/// Amounts of at least one crore are shown as `₹ 1.23 Cr`, amounts of at
/// least one lakh as `₹ 2.50 L`. Anything smaller is shown in full with
/// en-IN digit grouping, e.g. `₹ 5,000` or `₹ 12,345.5`.
pub fn format_to_indian_system(num: f64) -> String {
    if num >= CRORE {
        format!("₹ {} Cr", to_fixed(num / CRORE, ABBREVIATED_FRACTION_DIGITS))
    } else if num >= LAKH {
        format!("₹ {} L", to_fixed(num / LAKH, ABBREVIATED_FRACTION_DIGITS))
    } else {
        format!("₹ {}", to_en_in_locale(num))
    }
}

/// Render a number the way `en-IN` locale formatting does
fn to_en_in_locale(num: f64) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        return if num.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    let fixed = to_fixed(num.abs(), MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if num.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Fixed-point text with exact halves rounded away from zero.
///
/// `format!` rounds a value lying exactly halfway to the even digit, which
/// would show 1.125 as `1.12`.
fn to_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, round_ties_away(value, digits))
}

/// Move an exact tie at `digits` fraction digits one step away from zero.
///
/// Values that are not exact ties are returned unchanged; their nearest
/// rounding is already unambiguous.
fn round_ties_away(value: f64, digits: usize) -> f64 {
    let Ok(exp) = i32::try_from(digits) else {
        return value;
    };
    let scale = 10f64.powi(exp);
    let five_pow = 5f64.powi(exp);

    // A tie is value = m / (2 * 10^digits) with m odd, exactly. The
    // multiplication may round, so check that m reproduces value.
    let doubled = value * scale * 2.0;
    let is_tie = doubled.is_finite()
        && doubled.fract() == 0.0
        && doubled % 2.0 != 0.0
        && doubled % five_pow == 0.0
        && (doubled / five_pow) / 2f64.powi(exp + 1) == value;
    if !is_tie {
        return value;
    }

    let away = (doubled + doubled.signum()) / 2.0;
    away / scale
}

/// Insert separators: the last three digits form one group, the rest pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
