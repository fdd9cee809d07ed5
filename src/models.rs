//! Frontend Models
//!
//! Cart line items and the quantity value sent to the backend.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Smallest quantity the cart accepts
pub const MIN_QUANTITY: i64 = 1;
/// Largest quantity the cart accepts
pub const MAX_QUANTITY: i64 = 99;

/// Line item identifier as rendered by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawItemId", into = "String")]
pub struct ItemId(String);

/// The server emits numeric ids; hand-written pages may use strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Number(i64),
    Text(String),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Number(n) => ItemId(n.to_string()),
            RawItemId::Text(s) => ItemId(s),
        }
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the row container: `items.{id}`
    pub fn row_element_id(&self) -> String {
        format!("items.{}", self.0)
    }

    /// Element id of the quantity input: `items.{id}.quantity`
    pub fn quantity_element_id(&self) -> String {
        format!("items.{}.quantity", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quantity within [MIN_QUANTITY, MAX_QUANTITY]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantity(u8);

impl Quantity {
    /// Parse user input the way a browser `parseInt(text, 10)` reads it:
    /// leading whitespace, an optional sign, then the longest digit run.
    /// Anything after the digits is ignored.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim_start_matches(is_js_whitespace);
        let (negative, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(ValidationError::NotANumber);
        }

        // Overflowing digit runs are far outside the range either way
        let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
        let value = if negative { -magnitude } else { magnitude };
        Self::try_from(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// JavaScript WhiteSpace and LineTerminator code points, which is what
/// `parseInt` skips. Differs from `char::is_whitespace` on U+FEFF and U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}' | '\u{00A0}'
            | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{2028}' | '\u{2029}' | '\u{202F}'
            | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_QUANTITY..=MAX_QUANTITY).contains(&value) {
            Ok(Quantity(value as u8))
        } else {
            Err(ValidationError::OutOfRange(value))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the cart page (matches the server's cart item detail)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ItemId,
    pub tour_code: String,
    pub tour_time: DateTime<FixedOffset>,
    pub tour_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn display_time(&self) -> String {
        self.tour_time.format("%a %-d %b %Y, %H:%M").to_string()
    }

    pub fn display_price(&self) -> String {
        format!("${:.2}", self.tour_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Quantity::parse("3").map(Quantity::get), Ok(3));
        assert_eq!(Quantity::parse("99").map(Quantity::get), Ok(99));
        assert_eq!(Quantity::parse("1").map(Quantity::get), Ok(1));
        assert_eq!(Quantity::parse("+7").map(Quantity::get), Ok(7));
    }

    #[test]
    fn test_parse_follows_parse_int_prefix_rules() {
        assert_eq!(Quantity::parse("  12").map(Quantity::get), Ok(12));
        assert_eq!(Quantity::parse("5.7").map(Quantity::get), Ok(5));
        assert_eq!(Quantity::parse("4 tickets").map(Quantity::get), Ok(4));
        assert_eq!(Quantity::parse("007").map(Quantity::get), Ok(7));
    }

    #[test]
    fn test_parse_skips_javascript_whitespace_only() {
        assert_eq!(Quantity::parse("\u{FEFF}5").map(Quantity::get), Ok(5));
        assert_eq!(Quantity::parse("\u{00A0}\u{3000}\t\n8").map(Quantity::get), Ok(8));
        assert_eq!(Quantity::parse("\u{2028}2").map(Quantity::get), Ok(2));
        assert_eq!(Quantity::parse("\u{0085}5"), Err(ValidationError::NotANumber));
        assert_eq!(Quantity::parse("\u{200B}5"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_parse_not_a_number() {
        for text in ["", "abc", "   ", "-", "+", "x5", ".5", "- 5"] {
            assert_eq!(Quantity::parse(text), Err(ValidationError::NotANumber), "input {:?}", text);
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(Quantity::parse("0"), Err(ValidationError::OutOfRange(0)));
        assert_eq!(Quantity::parse("-0"), Err(ValidationError::OutOfRange(0)));
        assert_eq!(Quantity::parse("100"), Err(ValidationError::OutOfRange(100)));
        assert_eq!(Quantity::parse("150"), Err(ValidationError::OutOfRange(150)));
        assert_eq!(Quantity::parse("-3"), Err(ValidationError::OutOfRange(-3)));
        assert!(matches!(
            Quantity::parse("99999999999999999999999"),
            Err(ValidationError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_quantity_serializes_as_bare_integer() {
        let q = Quantity::parse("5").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "5");
    }

    #[test]
    fn test_item_element_ids() {
        let id = ItemId::new("42");
        assert_eq!(id.row_element_id(), "items.42");
        assert_eq!(id.quantity_element_id(), "items.42.quantity");
    }

    #[test]
    fn test_item_id_from_number_or_string() {
        let from_number: ItemId = serde_json::from_str("42").unwrap();
        let from_text: ItemId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"42\"");
    }

    #[test]
    fn test_cart_line_display() {
        let line: CartLine = serde_json::from_str(
            r#"{"id":7,"tour_code":"HARBOUR","tour_time":"2026-10-17T09:30:00+10:00","tour_price":45.5,"quantity":2}"#,
        )
        .unwrap();
        assert_eq!(line.id, ItemId::new("7"));
        assert_eq!(line.display_time(), "Sat 17 Oct 2026, 09:30");
        assert_eq!(line.display_price(), "$45.50");
    }
}
