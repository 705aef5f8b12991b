pub mod cli;
pub mod extractor;
pub mod generate;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

pub use extractor::{ExtractError, Validation, extract_fields, extract_struct};
pub use generate::{GenerateOptions, generate, generate_file};
pub use models::{Field, FieldDecl, GoFile, TypeDecl, TypeKind};
pub use parsers::{DefaultTagParser, GormTagParser, TagParser, TagStyle};
