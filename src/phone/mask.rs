//! Canonical `+7 (XXX) XXX-XX-XX` phone formatting.
//!
//! Everything here is pure so the input handlers can re-derive the display
//! value from whatever the field currently holds.

const COUNTRY_CODE: char = '7';
const DOMESTIC_PREFIX: char = '8';
const MAX_DIGITS: usize = 11;

/// Reduces arbitrary text to at most 11 digits starting with the country code.
/// Text without digits normalizes to an empty string so the field can be cleared.
pub fn normalize(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    if digits.starts_with(DOMESTIC_PREFIX) {
        digits.replace_range(..1, "7");
    }
    if !digits.starts_with(COUNTRY_CODE) {
        digits.insert(0, COUNTRY_CODE);
    }
    digits.truncate(MAX_DIGITS);
    digits
}

/// Builds the display string from normalized digits, appending each segment
/// only once it holds at least one digit.
pub fn format(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let segment = |from: usize, to: usize| &digits[from.min(digits.len())..to.min(digits.len())];
    let len = digits.len();

    let mut display = String::from("+7");
    if len > 1 {
        display.push_str(" (");
        display.push_str(segment(1, 4));
    }
    if len > 4 {
        display.push_str(") ");
        display.push_str(segment(4, 7));
    }
    if len > 7 {
        display.push('-');
        display.push_str(segment(7, 9));
    }
    if len > 9 {
        display.push('-');
        display.push_str(segment(9, 11));
    }
    display
}

pub fn mask(raw: &str) -> String {
    format(&normalize(raw))
}

/// Field value and caret after an input event was reformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedEdit {
    pub value: String,
    pub cursor: u32,
}

/// Reformats `value` and shifts the caret by the change in length, so typing
/// in the middle of the number keeps the caret next to the edited digit.
/// Offsets are UTF-16 code units, which is what the selection API reports.
pub fn reformat(value: &str, cursor: u32) -> MaskedEdit {
    let masked = mask(value);
    let old_len = utf16_len(value);
    let new_len = utf16_len(&masked);
    let shifted = (i64::from(cursor) + new_len - old_len).clamp(0, new_len);
    MaskedEdit {
        value: masked,
        cursor: shifted as u32,
    }
}

/// Replacement value for pasted text. A paste always replaces the whole
/// field and always carries the country code, even without any digits.
pub fn pasted(text: &str) -> String {
    let mut digits = normalize(text);
    if digits.is_empty() {
        digits.push(COUNTRY_CODE);
    }
    format(&digits)
}

fn utf16_len(s: &str) -> i64 {
    s.encode_utf16().count() as i64
}
