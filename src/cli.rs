use std::path::PathBuf;

use clap::Parser;

use crate::extractor::Validation;
use crate::generate::GenerateOptions;
use crate::parsers::TagStyle;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Struct type to generate column constants for
    #[arg(long = "type", value_name = "NAME")]
    pub type_name: String,

    /// Tag convention ("gorm"); anything else reads the first tag pair
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Go source file declaring the type
    #[arg(long, value_name = "FILE")]
    pub src: PathBuf,

    /// Print the generated code to stdout instead of writing a file
    #[arg(long)]
    pub dryrun: bool,

    /// Accept column names containing characters other than letters, digits and '_'
    #[arg(long)]
    pub lenient: bool,
}

impl Cli {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            src: self.src.clone(),
            type_name: self.type_name.clone(),
            style: TagStyle::from_selector(&self.tag),
            validation: if self.lenient {
                Validation::Lenient
            } else {
                Validation::Strict
            },
            dry_run: self.dryrun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fielder", "--type", "User", "--src", "user.go"]);
        let options = cli.options();
        assert_eq!(options.type_name, "User");
        assert_eq!(options.src, PathBuf::from("user.go"));
        assert_eq!(options.style, TagStyle::Default);
        assert_eq!(options.validation, Validation::Strict);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "fielder", "--type", "User", "--src", "user.go", "--tag", "gorm", "--dryrun",
            "--lenient",
        ]);
        let options = cli.options();
        assert_eq!(options.style, TagStyle::Gorm);
        assert_eq!(options.validation, Validation::Lenient);
        assert!(options.dry_run);
    }

    #[test]
    fn test_type_and_src_are_required() {
        assert!(Cli::try_parse_from(["fielder", "--src", "user.go"]).is_err());
        assert!(Cli::try_parse_from(["fielder", "--type", "User"]).is_err());
    }
}
