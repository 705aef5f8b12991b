/// Column names may only contain letters, decimal digits and underscores.
pub fn is_valid_column_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_column_names() {
        for name in ["id", "user_id", "_hidden", "Col2", "naïve", "列"] {
            assert!(is_valid_column_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_numeric_symbols_are_not_digits() {
        for name in ["col²", "half½", "x¾"] {
            assert!(!is_valid_column_name(name), "{} should be invalid", name);
        }
        assert!(is_valid_column_name("col2"));
    }

    #[test]
    fn test_invalid_column_names() {
        for name in ["bad name!", "a-b", "column:a_col", "x.y", "a\"b", " id"] {
            assert!(!is_valid_column_name(name), "{} should be invalid", name);
        }
    }
}
