//! Go source rendering for extracted fields.
//!
//! The output is laid out the way gofmt would print it, so the generated
//! file needs no further formatting.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tera::Tera;

use crate::models::Field;

const TEMPLATE_NAME: &str = "fields.go";
const TEMPLATE: &str = include_str!("templates/fields.go.tera");

/// Suffix appended to the source file stem to name the generated file.
pub const OUTPUT_SUFFIX: &str = "_fields.go";

/// Everything the template needs to render one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub package: String,
    pub type_name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Serialize)]
struct FieldView {
    const_name: String,
    padding: String,
    literal: String,
}

#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    package: &'a str,
    type_name: &'a str,
    fields: Vec<FieldView>,
}

impl GeneratedFile {
    fn context(&self) -> TemplateContext<'_> {
        let const_names: Vec<String> = self
            .fields
            .iter()
            .map(|field| format!("{}_{}", self.type_name, field.name))
            .collect();
        let width = const_names
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);

        let fields = const_names
            .into_iter()
            .zip(&self.fields)
            .map(|(const_name, field)| FieldView {
                padding: " ".repeat(width - const_name.chars().count()),
                const_name,
                literal: go_string_literal(&field.sql_field_name),
            })
            .collect();

        TemplateContext {
            package: &self.package,
            type_name: &self.type_name,
            fields,
        }
    }
}

pub fn render(generated: &GeneratedFile) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .context("Failed to load output template")?;
    let context = tera::Context::from_serialize(generated.context())
        .context("Failed to build template context")?;
    let code = tera
        .render(TEMPLATE_NAME, &context)
        .with_context(|| format!("Failed to render fields of {}", generated.type_name))?;
    Ok(code)
}

/// Path of the generated file for `src`: `dir/user.model.go` becomes
/// `dir/user_fields.go`.
pub fn target_path(src: &Path) -> PathBuf {
    let file_name = src
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let dir = src.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Writes generated code next to `src`, or to stdout when `dry_run` is set.
///
/// Returns the path written, `None` for a dry run.
pub fn write_output(code: &str, src: &Path, dry_run: bool) -> Result<Option<PathBuf>> {
    if dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(code.as_bytes())
            .context("Failed to write generated code to stdout")?;
        stdout.flush()?;
        return Ok(None);
    }

    let target = target_path(src);
    fs::write(&target, code).with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(Some(target))
}

fn go_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_file() -> GeneratedFile {
        GeneratedFile {
            package: "model".to_string(),
            type_name: "User".to_string(),
            fields: vec![Field::new("ID", "id"), Field::new("CreatedAt", "created_at")],
        }
    }

    #[test]
    fn test_render_constants_and_column_list() {
        let code = render(&user_file()).unwrap();
        let expected = "\
// Code generated by fielder. DO NOT EDIT.

package model

const (
\tUser_ID        = \"id\"
\tUser_CreatedAt = \"created_at\"
)

// UserColumns lists the column names of User in declaration order.
var UserColumns = []string{
\tUser_ID,
\tUser_CreatedAt,
}";
        assert_eq!(code.trim_end(), expected);
    }

    #[test]
    fn test_render_escapes_column_literals() {
        let file = GeneratedFile {
            package: "p".to_string(),
            type_name: "T".to_string(),
            fields: vec![Field::new("A", "a\"b\\c")],
        };
        let code = render(&file).unwrap();
        assert!(code.contains("\tT_A = \"a\\\"b\\\\c\"\n"), "{}", code);
    }

    #[test]
    fn test_target_path() {
        assert_eq!(
            target_path(Path::new("/src/model/user.go")),
            PathBuf::from("/src/model/user_fields.go")
        );
        assert_eq!(
            target_path(Path::new("/src/model/user.model.go")),
            PathBuf::from("/src/model/user_fields.go")
        );
        assert_eq!(target_path(Path::new("user.go")), PathBuf::from("user_fields.go"));
    }

    #[test]
    fn test_write_output_next_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("order.go");

        let written = write_output("package p\n", &src, false).unwrap();
        let target = dir.path().join("order_fields.go");
        assert_eq!(written, Some(target.clone()));
        assert_eq!(fs::read_to_string(target).unwrap(), "package p\n");
    }

    #[test]
    fn test_write_output_dry_run_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("order.go");

        assert_eq!(write_output("", &src, true).unwrap(), None);
        assert!(!dir.path().join("order_fields.go").exists());
    }
}
