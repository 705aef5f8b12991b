mod declaration;
mod field;

pub use declaration::{FieldDecl, GoFile, TypeDecl, TypeKind};
pub use field::Field;
