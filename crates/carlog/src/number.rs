//! Mileage number format.

/// Decimal convention used for mileage values, both when parsing the input
/// file and when writing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    /// A format using `separator` between integer and fractional digits.
    pub fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Parse a finite mileage value.
    ///
    /// Surrounding whitespace is ignored. With a separator other than `.`,
    /// a literal `.` is rejected instead of being read as a decimal point.
    pub fn parse(&self, text: &str) -> Result<f64, String> {
        let text = text.trim();
        let normalized = if self.decimal_separator == '.' {
            text.to_string()
        } else if text.contains('.') {
            return Err(format!(
                "'{}' uses '.' but the decimal separator is '{}'",
                text, self.decimal_separator
            ));
        } else {
            text.replace(self.decimal_separator, ".")
        };

        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("'{}' is not a finite number", text)),
            Err(_) => Err(format!("'{}' is not a number", text)),
        }
    }

    /// Format a value with the configured separator.
    ///
    /// Whole numbers are written without a fractional part.
    pub fn format(&self, value: f64) -> String {
        let plain = value.to_string();
        if self.decimal_separator == '.' {
            plain
        } else {
            plain.replace('.', self.decimal_separator.encode_utf8(&mut [0; 4]))
        }
    }
}
