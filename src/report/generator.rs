// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML document assembly

use super::template::*;
use crate::dialect::Dialect;
use crate::markup::{ansi_to_html, escape_html};
use crate::types::{CategorizedReport, Category, Section};

pub struct ReportGenerator<'d> {
    dialect: &'d dyn Dialect,
}

/// Output of the single pass over the report.
///
/// `next_index` is the anchor counter: it advances once per rendered
/// section, and the TOC and accordion read it from the same place.
#[derive(Default)]
struct Rendered {
    toc: String,
    accordion: String,
    next_index: usize,
}

impl<'d> ReportGenerator<'d> {
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Render the complete document. Same report and timestamp, same bytes.
    pub fn render(&self, report: &CategorizedReport, generated_at: &str) -> String {
        let rendered = report
            .groups()
            .iter()
            .fold(Rendered::default(), |acc, (category, sections)| {
                self.render_group(acc, *category, sections)
            });

        let mut html = String::with_capacity(
            STYLE.len() + SCRIPT.len() + rendered.toc.len() + rendered.accordion.len() + 2048,
        );
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\" data-bs-theme=\"light\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str("    <title>LinPEAS Web Report</title>\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "    <link href=\"{}\" rel=\"stylesheet\">\n",
            BOOTSTRAP_CSS
        ));
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n    <div class=\"container\">\n");
        html.push_str("        <h1 class=\"mb-4\">LinPEAS Report</h1>\n");
        html.push_str(&format!(
            "        <p class=\"text-muted\">Generated on: {}</p>\n",
            escape_html(generated_at)
        ));
        html.push_str(CONTROLS);

        html.push_str(TOC_OPEN);
        html.push_str(&rendered.toc);
        html.push_str(TOC_CLOSE);

        html.push_str(&format!(
            "        <div class=\"accordion\" id=\"{}\">\n",
            ACCORDION_ID
        ));
        html.push_str(&rendered.accordion);
        html.push_str("        </div>\n    </div>\n");

        html.push_str(&format!("<script src=\"{}\"></script>\n", BOOTSTRAP_JS));
        html.push_str(SCRIPT);
        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_group(&self, mut acc: Rendered, category: Category, sections: &[Section]) -> Rendered {
        let visible: Vec<&Section> = sections.iter().filter(|s| s.has_content()).collect();
        if visible.is_empty() {
            return acc;
        }

        let label = escape_html(category.label());
        acc.toc.push_str(&format!("<li><strong>{}</strong><ul>\n", label));
        acc.accordion.push_str(&format!(
            "<div class=\"category-group\" data-category=\"{}\">\n<div class=\"category-title\">{}</div>\n",
            label, label
        ));

        let mut acc = visible
            .into_iter()
            .fold(acc, |acc, section| self.render_section(acc, section));

        acc.toc.push_str("</ul></li>\n");
        acc.accordion.push_str("</div>\n");
        acc
    }

    fn render_section(&self, mut acc: Rendered, section: &Section) -> Rendered {
        let idx = acc.next_index;
        let title = escape_html(&section.title);

        acc.toc.push_str(&format!(
            "<li><a href=\"#section-{}\">{}</a></li>\n",
            idx, title
        ));
        acc.accordion.push_str(&format!(
            r##"<div class="accordion-item" id="section-{idx}">
    <h2 class="accordion-header" id="heading-{idx}">
        <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#collapse-{idx}" aria-expanded="false" aria-controls="collapse-{idx}">
            {title}
        </button>
    </h2>
    <div id="collapse-{idx}" class="accordion-collapse collapse" aria-labelledby="heading-{idx}">
        <div class="accordion-body">
            <pre>{body}</pre>
        </div>
    </div>
</div>
"##,
            idx = idx,
            title = title,
            body = ansi_to_html(&section.body, self.dialect),
        ));

        acc.next_index = idx + 1;
        acc
    }
}
