//! Field extraction from struct declarations.
//!
//! Walks the fields of a struct in declaration order, runs the selected tag
//! parser on each tag and keeps the fields that yield a column name. Any
//! failure aborts the whole run; there is no partial result.

mod validate;

use std::fmt;

use log::{debug, info};

use crate::models::{Field, FieldDecl, GoFile, TypeKind};
use crate::parsers::{TagParser, TagStyle};

pub use self::validate::is_valid_column_name;

/// How extracted column names are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject names with characters other than letters, digits and `_`.
    #[default]
    Strict,
    /// Accept any non-empty name.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// An extracted column name failed validation.
    InvalidColumn { field: String, value: String },

    /// The requested type exists but is not a struct.
    NotAStruct { type_name: String },

    /// No field of the requested type produced a column name.
    NoFields { type_name: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumn { field, value } => {
                write!(f, "field '{}' tag value '{}' is invalid", field, value)
            }
            Self::NotAStruct { type_name } => {
                write!(f, "type {} is not a struct type", type_name)
            }
            Self::NoFields { type_name } => {
                write!(f, "no fields to generate for type {}", type_name)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extracts `(field name, column name)` pairs from struct field declarations.
///
/// Embedded and untagged fields are skipped, as are fields whose tag yields
/// no column. Only the first name of a multi-name declaration is used. The
/// result may be empty; [`extract_struct`] turns that into an error.
pub fn extract_fields(
    fields: &[FieldDecl],
    style: TagStyle,
    validation: Validation,
) -> Result<Vec<Field>, ExtractError> {
    let mut extracted = Vec::new();

    for decl in fields {
        let Some(name) = decl.first_name() else {
            debug!("Skipping embedded field with tag {:?}", decl.tag);
            continue;
        };
        let Some(tag) = decl.tag.as_deref() else {
            debug!("Skipping untagged field {}", name);
            continue;
        };
        let Some(column) = style.parse(tag) else {
            debug!("No {} column in tag of field {}: {}", style, name, tag);
            continue;
        };

        if validation == Validation::Strict && !is_valid_column_name(column) {
            return Err(ExtractError::InvalidColumn {
                field: name.to_string(),
                value: column.to_string(),
            });
        }
        extracted.push(Field::new(name, column));
    }

    Ok(extracted)
}

/// Extracts the fields of every struct declaration named `type_name`.
///
/// Declarations are visited in source order and their fields concatenated,
/// so a name declared in several function scopes contributes all of them.
pub fn extract_struct(
    file: &GoFile,
    type_name: &str,
    style: TagStyle,
    validation: Validation,
) -> Result<Vec<Field>, ExtractError> {
    let mut fields = Vec::new();

    for decl in file.types_named(type_name) {
        match &decl.kind {
            TypeKind::Struct(decls) => fields.extend(extract_fields(decls, style, validation)?),
            TypeKind::Other => {
                return Err(ExtractError::NotAStruct {
                    type_name: type_name.to_string(),
                });
            }
        }
    }

    if fields.is_empty() {
        return Err(ExtractError::NoFields {
            type_name: type_name.to_string(),
        });
    }

    info!(
        "Extracted {} fields from {}.{} using {} tags",
        fields.len(),
        file.package,
        type_name,
        style
    );
    Ok(fields)
}
