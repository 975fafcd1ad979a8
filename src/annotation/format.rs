/// Converts an annotated value into its label text.
///
/// The renderer calls this exactly once per annotation whose label is not
/// hidden.
pub trait ValueFormatter {
    fn format(&self, value: f64) -> String;
}

/// Thousands-grouped fixed-precision formatter.
///
/// Rounds to at most `digits` fractional digits, trims trailing zeros, and
/// groups the integer part with commas: `1234567.891` -> `"1,234,567.89"`,
/// `1048.0` -> `"1,048"`.
#[derive(Debug, Clone, Copy)]
pub struct GroupedFormatter {
    digits: usize,
}

impl GroupedFormatter {
    #[must_use]
    pub fn new(digits: usize) -> Self {
        Self { digits }
    }
}

impl Default for GroupedFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ValueFormatter for GroupedFormatter {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let mut fixed = format!("{value:.precision$}", precision = self.digits);
        if self.digits > 0 {
            while fixed.ends_with('0') {
                fixed.pop();
            }
            if fixed.ends_with('.') {
                fixed.pop();
            }
        }

        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        out.push_str(sign);
        for (position, digit) in int_part.chars().enumerate() {
            if position > 0 && (int_part.len() - position) % 3 == 0 {
                out.push(',');
            }
            out.push(digit);
        }
        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}
