use crate::args::{Args, Section};
use crate::render::Style;
use clap::{CommandFactory, Parser};
use eyre::WrapErr;
use modula_analysis::Analyzer;
use std::io;
use std::io::{stderr, stdout, Read, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

mod args;
mod render;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "modula", &mut stdout());
        return Ok(ExitCode::SUCCESS);
    }
    init_logging(args.logging().log_level_filter())?;
    trace!("starting modula with args: {args:?}");
    debug!("modula version: {}", env!("CARGO_PKG_VERSION"));

    let source = load_source(args.source_path())?;
    let mut analyzer = Analyzer::builder()
        .reserved_words(args.reserved_words.into())
        .build()?;
    let report = analyzer.run(&source);

    let style = Style {
        color: !args.no_color,
    };
    let mut out = stdout().lock();
    if args.shows(Section::Symbols) {
        render::symbols(&mut out, report, style)?;
    }
    if args.shows(Section::Tokens) {
        render::tokens(&mut out, report, style)?;
    }
    if args.shows(Section::Status) {
        render::status(&mut out, report, style)?;
    }
    if args.shows(Section::Tree) {
        render::tree(&mut out, report, style)?;
    }
    out.flush()?;

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Reads the whole source, from a file or from standard input
fn load_source(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {path:?}")),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("could not read standard input")?;
            Ok(buffer)
        }
    }
}

/// Logs to stderr only, stdout carries nothing but the report
fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
