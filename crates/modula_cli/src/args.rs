//! the args for running modula

use clap::ValueEnum;
use clap_complete::Shell;
use modula_cli_common::LoggingArgs;
use modula_tokens::reserved::ReservedWordSet;
use std::path::{Path, PathBuf};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(
    author,
    version,
    about = "Builds the symbol table, token list and syntax tree of a Modula-2 source file"
)]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The source file to analyze. Reads standard input when omitted or `-`
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,
    /// Which reserved word set to classify with
    #[clap(long, value_enum, default_value_t = ReservedWords::Full, env = "MODULA_RESERVED_WORDS")]
    pub reserved_words: ReservedWords,
    /// Only print the given sections. Can be given multiple times
    #[clap(long = "only", value_enum)]
    only: Vec<Section>,
    /// Never color output
    #[clap(long)]
    pub no_color: bool,
    /// Print a completion script for the given shell and exit
    #[clap(long, value_name = "shell")]
    pub completions: Option<Shell>,
}

/// The reserved word sets selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReservedWords {
    Full,
    Reduced,
}

impl From<ReservedWords> for ReservedWordSet {
    fn from(value: ReservedWords) -> Self {
        match value {
            ReservedWords::Full => ReservedWordSet::Full,
            ReservedWords::Reduced => ReservedWordSet::Reduced,
        }
    }
}

/// A printable part of the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Symbols,
    Tokens,
    Status,
    Tree,
}

impl Args {
    /// The file to read, `None` meaning standard input
    pub fn source_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Whether a section should be printed. All sections are printed unless `--only` was used
    pub fn shows(&self, section: Section) -> bool {
        self.only.is_empty() || self.only.contains(&section)
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
