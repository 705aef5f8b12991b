mod default;
#[cfg(test)]
mod default_test;
pub mod go_source;
mod gorm;
pub mod utils;

use std::fmt;
use std::str::FromStr;

use strum::{AsRefStr, EnumIter};

/// Tag parser trait for pulling a column name out of a raw struct tag.
///
/// Each implementation understands one tag convention. Parsers receive the
/// tag literal as written in source, usually still wrapped in backticks, and
/// return the extracted name borrowed from it.
///
/// # Error Handling
///
/// Parsers never fail. A tag that does not follow the expected convention,
/// is truncated, or carries an empty value yields `None`, and the extractor
/// simply skips that field.
///
/// # Example
///
/// ```ignore
/// use fielder::parsers::{GormTagParser, TagParser};
///
/// let column = GormTagParser.parse(r#"`gorm:"primaryKey;column:user_id"`"#);
/// assert_eq!(column, Some("user_id"));
/// ```
pub trait TagParser {
    /// Extracts the column name from `tag`, or `None` when the tag has none.
    fn parse<'a>(&self, tag: &'a str) -> Option<&'a str>;
}

pub use self::default::DefaultTagParser;
pub use self::gorm::GormTagParser;

/// Closed set of tag conventions the generator understands.
///
/// Resolved once per run from the `--tag` selector. Parsing a selector never
/// fails: anything other than a known convention name falls back to
/// [`TagStyle::Default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TagStyle {
    /// First `key:"value"` pair of the tag, whatever the key.
    #[default]
    Default,
    /// `column` attribute of the `gorm:"..."` segment.
    Gorm,
}

impl TagStyle {
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "gorm" => TagStyle::Gorm,
            _ => TagStyle::Default,
        }
    }
}

impl FromStr for TagStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl fmt::Display for TagStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl TagParser for TagStyle {
    fn parse<'a>(&self, tag: &'a str) -> Option<&'a str> {
        match self {
            TagStyle::Default => DefaultTagParser.parse(tag),
            TagStyle::Gorm => GormTagParser.parse(tag),
        }
    }
}
