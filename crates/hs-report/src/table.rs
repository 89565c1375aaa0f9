//! Fixed-width cell layout and significant-digit number formatting.

use std::io::Write;

use crate::ReportResult;

/// Width of every output column, in characters.
pub const COLUMN_WIDTH: usize = 13;

/// Significant digits carried by [`format_sig`].
const SIG_DIGITS: usize = 6;

/// Format a value to six significant digits, choosing fixed or
/// scientific notation by magnitude.
///
/// Fixed notation covers decimal exponents -4 through 5; anything
/// outside renders as `1.5e+07` style scientific with a signed,
/// zero-padded exponent. Trailing fractional zeros are trimmed in both
/// notations, so whole numbers print without a decimal point.
pub fn format_sig(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let mut exp = value.abs().log10().floor() as i32;
    // Rounding to the digit budget can carry into the next decade
    let scale = 10f64.powi(SIG_DIGITS as i32 - 1 - exp);
    if (value.abs() * scale).round() >= 10f64.powi(SIG_DIGITS as i32) {
        exp += 1;
    }
    if exp < -4 || exp >= SIG_DIGITS as i32 {
        scientific(value)
    } else {
        fixed(value, (SIG_DIGITS as i32 - 1 - exp).max(0) as usize)
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn scientific(value: f64) -> String {
    let prec = SIG_DIGITS - 1;
    let formatted = format!("{value:.prec$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("+", exponent),
    };
    if digits.len() < 2 {
        format!("{mantissa}e{sign}0{digits}")
    } else {
        format!("{mantissa}e{sign}{digits}")
    }
}

/// Write one table row: every cell left-justified and padded to
/// [`COLUMN_WIDTH`], the last included.
pub fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S]) -> ReportResult<()> {
    for cell in cells {
        write!(out, "{:<width$}", cell.as_ref(), width = COLUMN_WIDTH)?;
    }
    writeln!(out)?;
    Ok(())
}
