//! Declarations recovered from a Go source file.
//!
//! Only what the generator needs is kept: the package name, the name of each
//! type declaration and, for struct types, the field names and raw tags.

/// One field declaration line inside a struct type.
///
/// `names` is empty for embedded fields. A declaration such as `A, B int`
/// carries both names in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDecl {
    pub names: Vec<String>,
    /// Tag literal, always delimited by backticks.
    pub tag: Option<String>,
}

impl FieldDecl {
    pub fn new(names: &[&str], tag: Option<&str>) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            tag: tag.map(str::to_string),
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Struct(Vec<FieldDecl>),
    /// Any non-struct type: aliases, named basic types, interfaces, funcs.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
}

/// Package name plus every type declaration of a file, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoFile {
    pub package: String,
    pub types: Vec<TypeDecl>,
}

impl GoFile {
    /// All declarations named `name`, including function-local ones.
    pub fn types_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TypeDecl> + 'a {
        self.types.iter().filter(move |decl| decl.name == name)
    }
}
