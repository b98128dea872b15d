//! Signed durations with Go-style textual form.
//!
//! The exec-time endpoint takes its delay as a path segment such as `5s`,
//! `200ms` or `1m30.5s` and echoes it back in canonical form. Parsing and
//! rendering follow the `<decimal><unit>` grammar used by HTTP tooling in
//! the Go ecosystem, so clients scripted against that tooling keep working.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Fraction digits beyond this are ignored; they cannot affect nanoseconds.
const MAX_FRACTION_DIGITS: u32 = 18;

/// Errors produced while parsing an [`ExecDuration`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// Input was empty or only a sign.
    #[error("empty duration")]
    Empty,

    /// A group did not start with a number.
    #[error("invalid duration {0:?}")]
    Malformed(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// The unit is not one of `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// Offending unit text.
        unit: String,
        /// Full input.
        input: String,
    },

    /// The value does not fit in a signed 64-bit nanosecond count.
    #[error("duration {0:?} out of range")]
    Overflow(String),
}

/// A signed span of time in nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecDuration {
    nanos: i64,
}

impl ExecDuration {
    /// Zero-length duration.
    pub const ZERO: Self = Self { nanos: 0 };

    /// Creates a duration from a nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            nanos: secs.saturating_mul(NANOS_PER_SEC as i64),
        }
    }

    /// Returns the nanosecond count.
    #[must_use]
    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    /// Returns `true` for durations below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.nanos < 0
    }

    /// Converts to a [`std::time::Duration`]; negative values become zero.
    #[must_use]
    pub fn as_std(&self) -> Duration {
        u64::try_from(self.nanos)
            .map(Duration::from_nanos)
            .unwrap_or(Duration::ZERO)
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        // micro sign (U+00B5) and greek small letter mu (U+03BC)
        "us" | "\u{b5}s" | "\u{3bc}s" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(u128::from(nanos))
}

/// Splits `s` at the end of its leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

impl FromStr for ExecDuration {
    type Err = DurationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (negative, mut rest) = match input.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        if rest == "0" {
            return Ok(Self::ZERO);
        }
        if rest.is_empty() {
            return Err(DurationError::Empty);
        }

        // Negative durations may reach one nanosecond further than positive ones.
        let limit = if negative {
            u128::from(i64::MIN.unsigned_abs())
        } else {
            u128::from(i64::MAX.unsigned_abs())
        };
        let overflow = || DurationError::Overflow(input.to_string());

        let mut total: u128 = 0;
        while !rest.is_empty() {
            let (int_digits, after_int) = split_digits(rest);
            let int_part: u128 = if int_digits.is_empty() {
                0
            } else {
                int_digits.parse().map_err(|_| overflow())?
            };

            let (frac_digits, after_frac) = match after_int.strip_prefix('.') {
                Some(r) => split_digits(r),
                None => ("", after_int),
            };
            if int_digits.is_empty() && frac_digits.is_empty() {
                return Err(DurationError::Malformed(input.to_string()));
            }

            let unit_end = after_frac
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .unwrap_or(after_frac.len());
            let (unit, remainder) = after_frac.split_at(unit_end);
            if unit.is_empty() {
                return Err(DurationError::MissingUnit(input.to_string()));
            }
            let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            })?;

            let mut value = int_part.checked_mul(scale).ok_or_else(overflow)?;
            let mut frac_value: u128 = 0;
            let mut frac_scale: u128 = 1;
            for digit in frac_digits.chars().take(MAX_FRACTION_DIGITS as usize) {
                frac_value = frac_value * 10 + u128::from(digit.to_digit(10).unwrap_or(0));
                frac_scale *= 10;
            }
            value = value
                .checked_add(frac_value * scale / frac_scale)
                .ok_or_else(overflow)?;

            total = total.checked_add(value).ok_or_else(overflow)?;
            if total > limit {
                return Err(overflow());
            }
            rest = remainder;
        }

        let magnitude = i128::try_from(total).map_err(|_| overflow())?;
        let signed = if negative { -magnitude } else { magnitude };
        let nanos = i64::try_from(signed).map_err(|_| overflow())?;
        Ok(Self { nanos })
    }
}

/// Renders `value / 10^precision` with trailing fraction zeros trimmed.
fn decimal(value: u64, precision: u32) -> String {
    let scale = 10u64.pow(precision);
    let int = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return int.to_string();
    }
    let digits = format!("{frac:0width$}", width = precision as usize);
    format!("{int}.{}", digits.trim_end_matches('0'))
}

impl fmt::Display for ExecDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            return f.write_str("0s");
        }
        if self.nanos < 0 {
            f.write_str("-")?;
        }

        let magnitude = self.nanos.unsigned_abs();
        if magnitude < NANOS_PER_SEC {
            let (precision, unit) = if magnitude < NANOS_PER_MICRO {
                (0, "ns")
            } else if magnitude < NANOS_PER_MILLI {
                (3, "\u{b5}s")
            } else {
                (6, "ms")
            };
            return write!(f, "{}{unit}", decimal(magnitude, precision));
        }

        let secs = magnitude / NANOS_PER_SEC;
        let seconds = decimal((secs % 60) * NANOS_PER_SEC + magnitude % NANOS_PER_SEC, 9);
        let minutes = (secs / 60) % 60;
        let hours = secs / 3_600;
        if hours > 0 {
            write!(f, "{hours}h{minutes}m{seconds}s")
        } else if minutes > 0 {
            write!(f, "{minutes}m{seconds}s")
        } else {
            write!(f, "{seconds}s")
        }
    }
}
