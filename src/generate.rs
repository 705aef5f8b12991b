//! One generation run: scan a Go file, extract a struct's columns, render
//! and write the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::extractor::{Validation, extract_struct};
use crate::parsers::TagStyle;
use crate::parsers::go_source::parse_go_source;
use crate::parsers::utils::read_file_to_string;
use crate::render::{GeneratedFile, render, write_output};
use crate::utils::file::absolute_path;

/// Settings of a single run, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub src: PathBuf,
    pub type_name: String,
    pub style: TagStyle,
    pub validation: Validation,
    pub dry_run: bool,
}

/// Builds the generated file for `type_name` from Go source text.
pub fn generate_file(
    source: &str,
    type_name: &str,
    style: TagStyle,
    validation: Validation,
) -> Result<GeneratedFile> {
    let file = parse_go_source(source)?;
    let fields = extract_struct(&file, type_name, style, validation)?;
    Ok(GeneratedFile {
        package: file.package,
        type_name: type_name.to_string(),
        fields,
    })
}

/// Runs the whole pipeline. Returns the path of the written file, or `None`
/// when the code went to stdout.
pub fn generate(options: &GenerateOptions) -> Result<Option<PathBuf>> {
    let src = absolute_path(&options.src)?;
    let source = read_file_to_string(&src)?;

    let generated = generate_file(&source, &options.type_name, options.style, options.validation)
        .with_context(|| format!("Failed to generate fields from {}", src.display()))?;
    let code = render(&generated)?;

    let written = write_output(&code, &src, options.dry_run)?;
    if let Some(target) = &written {
        info!(
            "Wrote {} columns of {} to {}",
            generated.fields.len(),
            generated.type_name,
            target.display()
        );
    }
    Ok(written)
}
