//! Parser for gorm-style struct tags.
//!
//! Reads the `column` attribute of the `gorm:"..."` segment, e.g.
//! `` `json:"id" gorm:"primaryKey;column:user_id"` `` yields `user_id`.
//!
//! # Implementation Notes
//! - Label spelling is strict: `gorm` and `column` must appear literally,
//!   followed directly by their `:` separators
//! - Whitespace may precede an attribute, as in `primaryKey; column:id`
//! - The attribute list is not parsed structurally; `;` simply ends the value
//! - A segment missing its closing quote is treated as absent

use std::sync::LazyLock;

use regex::Regex;

use super::TagParser;
use super::utils::strip_delimiters;

static GORM_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:\A|\s)gorm:"([^"]*)""#).unwrap());

static COLUMN_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\A|;)\s*column:([^;]*)").unwrap());

pub struct GormTagParser;

impl TagParser for GormTagParser {
    fn parse<'a>(&self, tag: &'a str) -> Option<&'a str> {
        let tag = strip_delimiters(tag);
        let segment = GORM_SEGMENT.captures(tag)?.get(1)?.as_str();
        let column = COLUMN_ATTRIBUTE.captures(segment)?.get(1)?.as_str();
        if column.is_empty() { None } else { Some(column) }
    }
}
