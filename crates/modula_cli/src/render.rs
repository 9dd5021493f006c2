//! Writes an analysis report as text

use modula_analysis::symbols::SymbolRow;
use modula_analysis::AnalysisReport;
use modula_ast::render::Rendered;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io;
use std::io::Write;

const HEADERS: [&str; 6] = ["Token", "Name", "Type", "Value", "Declared", "References"];

/// Controls whether output may be colored. Color is still only used when stdout supports it
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn heading(&self, text: &str) -> String {
        if self.color {
            text.if_supports_color(Stdout, |text| text.bold().underline().to_string()).to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            text.if_supports_color(Stdout, |text| text.red().to_string()).to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            text.if_supports_color(Stdout, |text| text.green().to_string()).to_string()
        } else {
            text.to_string()
        }
    }

    fn dimmed(&self, text: &str) -> String {
        if self.color {
            text.if_supports_color(Stdout, |text| text.dimmed().to_string()).to_string()
        } else {
            text.to_string()
        }
    }
}

fn columns(row: &SymbolRow) -> [&str; 6] {
    [
        &row.token,
        &row.name,
        &row.ty,
        &row.value,
        &row.declaration_line,
        &row.references,
    ]
}

/// Writes the symbol rows as an aligned table
pub fn symbols<W: Write>(out: &mut W, report: &AnalysisReport, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.heading("Symbol table"))?;
    let mut widths = HEADERS.map(str::len);
    for row in report.symbols() {
        for (width, column) in widths.iter_mut().zip(columns(row)) {
            *width = (*width).max(column.chars().count());
        }
    }
    let line = |cells: [&str; 6]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    writeln!(out, "{}", style.dimmed(&line(HEADERS)))?;
    for row in report.symbols() {
        writeln!(out, "{}", line(columns(row)))?;
    }
    writeln!(out)
}

/// Writes one `"<code> <lexeme>"` line per emitted token
pub fn tokens<W: Write>(out: &mut W, report: &AnalysisReport, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.heading("Tokens"))?;
    for line in report.token_lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Writes the status lines, errors highlighted
pub fn status<W: Write>(out: &mut W, report: &AnalysisReport, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.heading("Status"))?;
    for line in report.status_lines() {
        if report.is_clean() {
            writeln!(out, "{}", style.success(&line))?;
        } else {
            writeln!(out, "{}", style.error(&line))?;
        }
    }
    writeln!(out)
}

/// Writes the syntax tree, if one was built
pub fn tree<W: Write>(out: &mut W, report: &AnalysisReport, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.heading("Syntax tree"))?;
    match report.tree() {
        Some(tree) => write!(out, "{}", Rendered(tree))?,
        None => writeln!(out, "{}", style.dimmed("(not built)"))?,
    }
    writeln!(out)
}
