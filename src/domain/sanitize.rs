//! Free-text numeric input sanitizers.
//!
//! These run on every keystroke of an amount or price field, before any
//! arithmetic. They are total: whatever comes in, a string made only of
//! ASCII digits and at most one `.` comes out.

/// Default fractional digits for amounts and limit prices.
pub const DEFAULT_MAX_DECIMALS: usize = 2;

/// On-chain decimals of a standard ERC-20 token.
pub const DEFAULT_TOKEN_DECIMALS: usize = 18;

/// Bounds applied to cross-chain swap amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAmountLimits {
    /// Maximum digits before the decimal point.
    pub max_integer_digits: usize,
    /// Cap on fractional digits shown, whatever the token supports.
    pub max_decimals: usize,
}

impl Default for SwapAmountLimits {
    fn default() -> Self {
        Self {
            max_integer_digits: 12,
            max_decimals: 6,
        }
    }
}

/// Split into the integer part and, when a `.` is present, the fractional
/// part. Text after a second `.` is discarded.
fn split_numeric(raw: &str) -> (String, Option<String>) {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut segments = cleaned.split('.');
    let integer = segments.next().unwrap_or_default().to_string();
    let fraction = segments.next().map(str::to_string);
    (integer, fraction)
}

fn join(integer: &str, fraction: Option<&str>) -> String {
    match fraction {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer.to_string(),
    }
}

/// Constrain a raw amount or price string to at most `max_decimals`
/// fractional digits.
///
/// Non-numeric characters are stripped, anything from a second `.` onward
/// is dropped and an over-long fraction is truncated, never rounded.
///
/// ```
/// use orderdesk::domain::sanitize::limit_decimal_places;
///
/// assert_eq!(limit_decimal_places("$1,234.567", 2), "1234.56");
/// assert_eq!(limit_decimal_places("1.2.3", 2), "1.2");
/// ```
#[must_use]
pub fn limit_decimal_places(raw: &str, max_decimals: usize) -> String {
    let (integer, fraction) = split_numeric(raw);
    let fraction = fraction.map(|f| f.chars().take(max_decimals).collect::<String>());
    join(&integer, fraction.as_deref())
}

/// Sanitize a cross-chain swap amount.
///
/// On top of the [`limit_decimal_places`] rules, the integer part is capped
/// to `limits.max_integer_digits` and the fraction to the smaller of the
/// token's decimals and `limits.max_decimals`.
#[must_use]
pub fn sanitize_swap_amount(raw: &str, limits: SwapAmountLimits, token_decimals: usize) -> String {
    let (integer, fraction) = split_numeric(raw);
    let integer: String = integer.chars().take(limits.max_integer_digits).collect();
    let decimals = token_decimals.min(limits.max_decimals);
    let fraction = fraction.map(|f| f.chars().take(decimals).collect::<String>());
    join(&integer, fraction.as_deref())
}
