//! Presentation helpers
//!
//! Amounts travel as decimal strings end-to-end; formatting happens only at
//! render time and only through string manipulation, never via binary
//! floating point.

/// Format a decimal-string amount with exactly six fractional digits.
///
/// Returns the input unchanged when it is not a plain decimal number.
pub fn format_display_amount(amount: &str) -> String {
	let (sign, unsigned) = match amount.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", amount),
	};

	let (int_part, frac_part) = match unsigned.split_once('.') {
		Some((i, f)) => (i, f),
		None => (unsigned, ""),
	};

	if int_part.is_empty() && frac_part.is_empty() {
		return amount.to_string();
	}
	if !int_part.chars().all(|c| c.is_ascii_digit())
		|| !frac_part.chars().all(|c| c.is_ascii_digit())
	{
		return amount.to_string();
	}

	let int_part = if int_part.is_empty() { "0" } else { int_part };
	let mut frac = frac_part.to_string();
	frac.truncate(6);
	while frac.len() < 6 {
		frac.push('0');
	}

	format!("{}{}.{}", sign, int_part, frac)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pads_short_fractions() {
		assert_eq!(format_display_amount("100"), "100.000000");
		assert_eq!(format_display_amount("0.5"), "0.500000");
		assert_eq!(format_display_amount(".5"), "0.500000");
	}

	#[test]
	fn test_truncates_long_fractions() {
		assert_eq!(format_display_amount("1.123456789"), "1.123456");
	}

	#[test]
	fn test_preserves_sign() {
		assert_eq!(format_display_amount("-2.5"), "-2.500000");
	}

	#[test]
	fn test_non_numeric_passthrough() {
		assert_eq!(format_display_amount("n/a"), "n/a");
		assert_eq!(format_display_amount(""), "");
		assert_eq!(format_display_amount("1.2.3"), "1.2.3");
	}
}
