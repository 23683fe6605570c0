// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report assembly module

pub mod formatter;
pub mod generator;
pub mod template;

use crate::dialect::Dialect;
use crate::types::*;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use generator::ReportGenerator;

/// Group parsed sections by category
pub fn assemble(sections: Vec<Section>) -> CategorizedReport {
    CategorizedReport::from_sections(sections)
}

/// Render a report to a complete HTML document
pub fn render_document(
    report: &CategorizedReport,
    dialect: &dyn Dialect,
    generated_at: &str,
) -> String {
    ReportGenerator::new(dialect).render(report, generated_at)
}

/// Assemble, render and write the report in one go
pub fn write_report<P: AsRef<Path>>(
    sections: Vec<Section>,
    dialect: &dyn Dialect,
    path: P,
    generated_at: &str,
) -> Result<CategorizedReport> {
    let report = assemble(sections);
    let html = render_document(&report, dialect, generated_at);
    ReportFormatter::new().save(&html, path)?;
    Ok(report)
}

/// Print a category summary to the console
pub fn print_report(report: &CategorizedReport) {
    ReportFormatter::new().print(report);
}

/// Parse `input` with the LinPEAS dialect and write the HTML to `output`.
///
/// Touches nothing but the two paths; the working directory is left alone.
pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    generated_at: &str,
) -> Result<CategorizedReport> {
    let dialect = crate::dialect::Linpeas;
    let sections = crate::parse::read_report(input.as_ref(), &dialect)?;
    write_report(sections, &dialect, output, generated_at)
}
