//! Form input state.

use crate::error::ValidationError;
use crate::export::Separator;
use crate::wallet::GenerationRequest;

/// Wallet count the form starts with.
pub const DEFAULT_COUNT: i64 = 10;
/// Highest count the count input offers.
pub const MAX_COUNT: i64 = 1000;

/// The two user-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    count: i64,
    separator: Separator,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            separator: Separator::default(),
        }
    }
}

impl FormState {
    pub fn new(count: i64, separator: Separator) -> Self {
        Self { count, separator }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    /// Sets the count from raw input text.
    ///
    /// The leading integer is used and the rest ignored (`"12abc"` is 12,
    /// `"3.5"` is 3). Input without a leading integer becomes 0, which
    /// validation later rejects.
    pub fn set_count_input(&mut self, input: &str) {
        self.count = parse_leading_int(input);
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Builds the request for the current field values.
    pub fn to_request(&self) -> Result<GenerationRequest, ValidationError> {
        GenerationRequest::new(self.count, self.separator)
    }
}

/// Reads an optional sign and the digits after it, skipping leading
/// whitespace. Saturates instead of overflowing.
fn parse_leading_int(input: &str) -> i64 {
    let input = input.trim_start();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
