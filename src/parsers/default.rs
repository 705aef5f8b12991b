//! Generic tag parser reading the first `key:"value"` pair.
//!
//! The key is never inspected, so this parser suits structs that carry a
//! single tag key per field (`json`, `db`, `sql`, ...). Nested content of the
//! value is returned as-is: `gorm:"column:id"` yields `column:id`.

use std::sync::LazyLock;

use regex::Regex;

use super::TagParser;
use super::utils::strip_delimiters;

/// Everything up to the first colon, one opening-quote character, then the
/// value up to the next double quote.
static FIRST_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)\A[^:]*:.([^"]*)""#).unwrap());

pub struct DefaultTagParser;

impl TagParser for DefaultTagParser {
    fn parse<'a>(&self, tag: &'a str) -> Option<&'a str> {
        let tag = strip_delimiters(tag);
        FIRST_PAIR
            .captures(tag)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }
}
