use serde::Serialize;

/// A struct field paired with the column name extracted from its tag.
///
/// Both names are non-empty once a `Field` leaves the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Go identifier of the struct field.
    pub name: String,
    /// Column name taken from the field's tag.
    pub sql_field_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, sql_field_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_field_name: sql_field_name.into(),
        }
    }
}
