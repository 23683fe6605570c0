// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static fragments of the HTML report

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// `id` of the accordion container. Items carry no `data-bs-parent`, so
/// several of them can be open at once.
pub const ACCORDION_ID: &str = "linpeasAccordion";

pub const STYLE: &str = r#"    <style>
        body { padding: 2rem; }
        .accordion-button:not(.collapsed) { background-color: #e9f2ff; }
        pre { white-space: pre-wrap; word-wrap: break-word; background-color: #f8f9fa; padding: 1rem; }
        [data-bs-theme="dark"] pre { background-color: #212529; color: #dee2e6; }
        [data-bs-theme="dark"] .accordion-button:not(.collapsed) { background-color: #1c2b3f; }
        .color-red { color: #dc3545; font-weight: bold; }
        .color-green { color: #28a745; font-weight: bold; }
        .color-blue { color: #007bff; font-weight: bold; }
        .color-cyan { color: #17a2b8; font-weight: bold; }
        .color-magenta { color: #e83e8c; font-weight: bold; }
        .italic { font-style: italic; }
        .color-gray { color: #6c757d; }
        .color-red-bg-yellow {
            color: #dc3545;
            background-color: #fff3cd;
            font-weight: bold;
            padding: 0 2px;
            border-radius: 3px;
        }
        .category-title { margin-top: 2rem; font-size: 1.5rem; border-bottom: 2px solid #ccc; padding-bottom: .5rem; }
        @media print {
            .no-print { display: none; }
            .accordion-collapse { display: block !important; }
        }
    </style>
"#;

pub const CONTROLS: &str = r#"        <div class="mb-4 no-print">
            <button class="btn btn-sm btn-dark me-2" onclick="toggleTheme()">Toggle Dark Mode</button>
            <button class="btn btn-sm btn-primary me-2" onclick="expandAll()">Expand All</button>
            <button class="btn btn-sm btn-secondary me-2" onclick="collapseAll()">Collapse All</button>
            <button class="btn btn-sm btn-outline-info" onclick="window.print()">Print/PDF</button>
            <input type="text" class="form-control mt-3" placeholder="Filter sections..." oninput="filterSections(this.value)">
        </div>
"#;

pub const TOC_OPEN: &str = r#"        <div id="toc" class="mb-4 no-print">
            <div class="d-flex justify-content-between align-items-center">
                <h4 class="mb-0">Table of Contents</h4>
                <button class="btn btn-sm btn-outline-secondary" onclick="toggleTOC(this)">Hide TOC</button>
            </div>
            <div id="toc-body">
                <ul>
"#;

pub const TOC_CLOSE: &str = "                </ul>\n            </div>\n        </div>\n";

pub const SCRIPT: &str = r#"<script>
function expandAll() {
    document.querySelectorAll('.accordion-collapse').forEach(c =>
        bootstrap.Collapse.getOrCreateInstance(c, { toggle: false }).show());
}
function collapseAll() {
    document.querySelectorAll('.accordion-collapse').forEach(c =>
        bootstrap.Collapse.getOrCreateInstance(c, { toggle: false }).hide());
}
function toggleTheme() {
    const html = document.documentElement;
    html.setAttribute('data-bs-theme', html.getAttribute('data-bs-theme') === 'dark' ? 'light' : 'dark');
}
function filterSections(query) {
    query = query.toLowerCase();
    document.querySelectorAll('.accordion-item').forEach(section => {
        const header = section.querySelector('.accordion-button').textContent.toLowerCase();
        section.style.display = header.includes(query) ? '' : 'none';
    });
    document.querySelectorAll('.category-group').forEach(group => {
        const visible = Array.from(group.querySelectorAll('.accordion-item'))
            .some(item => item.style.display !== 'none');
        group.style.display = visible ? '' : 'none';
    });
}
function toggleTOC(btn) {
    const toc = document.getElementById('toc-body');
    if (toc.style.display === 'none') {
        toc.style.display = 'block';
        btn.textContent = 'Hide TOC';
    } else {
        toc.style.display = 'none';
        btn.textContent = 'Show TOC';
    }
}
</script>
"#;
