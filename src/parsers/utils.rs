use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a file to a String, attaching the path to any I/O error.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content)
}

/// Removes one backtick from each end of a tag literal, if present.
///
/// Tags without delimiters are returned unchanged.
pub fn strip_delimiters(tag: &str) -> &str {
    let tag = tag.strip_prefix('`').unwrap_or(tag);
    tag.strip_suffix('`').unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("`json:\"a\"`"), "json:\"a\"");
        assert_eq!(strip_delimiters("json:\"a\""), "json:\"a\"");
        assert_eq!(strip_delimiters("``x``"), "`x`");
        assert_eq!(strip_delimiters("`"), "");
        assert_eq!(strip_delimiters(""), "");
    }
}
