//! Numeric payload formatting.

use mp_results::{NumberResult, Significand};

/// Fractional digits kept when formatting a raw significand.
const FRACTION_DIGITS: usize = 5;

/// Render a number with its unit suffix.
///
/// Engine-formatted text (`fmtd`) is used verbatim. Otherwise the raw
/// `sig`/`exp` pair is formatted with [`format_significand`]. A number
/// with neither renders as just its unit.
///
/// # Example
///
/// ```
/// use mp_fmt::format_number;
/// use mp_results::NumberResult;
///
/// assert_eq!(format_number(&NumberResult::formatted("3.14000", "m")), "3.14000m");
/// ```
pub fn format_number(number: &NumberResult) -> String {
    let mut text = match (&number.fmtd, &number.sig) {
        (Some(fmtd), _) => fmtd.clone(),
        (None, Some(sig)) => format_significand(sig, number.exp),
        (None, None) => String::new(),
    };
    text.push_str(&number.u);
    text
}

/// Render a significand rounded to five decimals, with `E<exp>` appended
/// when the exponent is not zero.
///
/// Trailing zero decimals are dropped, and so is the decimal point when
/// nothing is left after it. Large magnitudes keep positional notation
/// (`1e21` prints all 22 digits). A significand that is not a finite decimal
/// number (including `inf` and `NaN`) is returned unchanged.
///
/// # Example
///
/// ```
/// use mp_fmt::format_significand;
/// use mp_results::Significand;
///
/// assert_eq!(format_significand(&Significand::Text("3.140000".into()), 0), "3.14");
/// assert_eq!(format_significand(&Significand::Number(2.0), 6), "2E6");
/// ```
pub fn format_significand(sig: &Significand, exponent: i32) -> String {
    let value = match sig {
        Significand::Number(value) if value.is_finite() => *value,
        Significand::Number(value) => return value.to_string(),
        Significand::Text(text) => match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return text.clone(),
        },
    };
    // -0.0 prints as "-0.00000"
    let value = if value == 0.0 { 0.0 } else { value };

    let mut text = format!("{value:.FRACTION_DIGITS$}");
    trim_fraction(&mut text);
    if exponent != 0 {
        text.push('E');
        text.push_str(&exponent.to_string());
    }
    text
}

/// Strip trailing zeros after the decimal point, then a dangling point.
fn trim_fraction(text: &mut String) {
    if !text.contains('.') {
        return;
    }
    let kept = text.trim_end_matches('0').len();
    text.truncate(kept);
    if text.ends_with('.') {
        text.pop();
    }
}
