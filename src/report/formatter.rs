// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report output: writing the document and the console summary

use crate::types::CategorizedReport;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &CategorizedReport) {
        println!("\n{}", "=== LINPEAS WEB REPORT ===".bold().cyan());

        if report.is_empty() {
            println!("  {}", "No sections found".yellow());
            return;
        }

        println!("  Sections: {}", report.section_count());
        for (category, sections) in report.groups() {
            println!(
                "    {:22} {}",
                category.label().bold(),
                sections.len().to_string().green()
            );
        }
    }

    /// Write the rendered document, creating parent directories and
    /// replacing whatever is already at `path`.
    pub fn save<P: AsRef<Path>>(&self, html: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = html.len(), "report written");
        println!("Report saved to: {}", path.display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
