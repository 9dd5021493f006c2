#![doc = include_str!("../README.md")]

mod analyzer;
pub mod context;
pub mod error;
pub mod lexer;
mod patterns;
pub mod report;
pub mod symbols;
pub mod syntax;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use report::AnalysisReport;

/// Analyzes source text with the default reserved word set
pub fn analyze(source: &str) -> AnalysisReport {
    Analyzer::default().run(source).clone()
}
