#[cfg(test)]
mod tests {
    use crate::parsers::{DefaultTagParser, TagParser};

    #[test]
    fn test_reads_value_regardless_of_key() {
        for key in ["json", "db", "sql", "x", "gorm"] {
            let tag = format!("`{}:\"value\"`", key);
            assert_eq!(DefaultTagParser.parse(&tag), Some("value"), "key {}", key);
        }
    }

    #[test]
    fn test_accepts_undelimited_tags() {
        assert_eq!(DefaultTagParser.parse(r#"json:"name""#), Some("name"));
    }

    #[test]
    fn test_no_colon_is_not_found() {
        assert_eq!(DefaultTagParser.parse("`json`"), None);
        assert_eq!(DefaultTagParser.parse("``"), None);
        assert_eq!(DefaultTagParser.parse(""), None);
        assert_eq!(DefaultTagParser.parse("`plain text without pairs`"), None);
    }

    #[test]
    fn test_truncated_value_is_not_found() {
        assert_eq!(DefaultTagParser.parse(r#"`json:"`"#), None);
        assert_eq!(DefaultTagParser.parse(r#"`json:"abc`"#), None);
        assert_eq!(DefaultTagParser.parse("`json:`"), None);
    }

    #[test]
    fn test_empty_value_is_not_found() {
        assert_eq!(DefaultTagParser.parse(r#"`json:""`"#), None);
    }

    #[test]
    fn test_only_first_pair_is_read() {
        let tag = r#"`json:"first" db:"second"`"#;
        assert_eq!(DefaultTagParser.parse(tag), Some("first"));
    }

    #[test]
    fn test_value_is_not_parsed_further() {
        let tag = r#"`gorm:"column:a_col"`"#;
        assert_eq!(DefaultTagParser.parse(tag), Some("column:a_col"));

        let tag = r#"`json:"name,omitempty"`"#;
        assert_eq!(DefaultTagParser.parse(tag), Some("name,omitempty"));
    }

    #[test]
    fn test_skips_exactly_one_character_after_colon() {
        // Whatever follows the colon is taken as the opening quote.
        assert_eq!(DefaultTagParser.parse(r#"`json:xabc"`"#), Some("abc"));
    }
}
