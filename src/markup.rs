// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal escape → HTML markup translation

use crate::dialect::{escape_sequences, Dialect};
use std::borrow::Cow;

/// Escape text for use in HTML content or quoted attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Render a section body as HTML.
///
/// Escaping runs first: it leaves `ESC`, `[`, `;` and digits alone, so the
/// escape sequences are still intact when they get swapped for spans.
/// Unknown sequences stay as text and unbalanced styles are not repaired.
pub fn ansi_to_html(body: &str, dialect: &dyn Dialect) -> String {
    let escaped = escape_html(body);
    escape_sequences()
        .replace_all(&escaped, |caps: &regex::Captures<'_>| {
            let sequence = &caps[0];
            dialect
                .translate_escape(sequence)
                .unwrap_or(sequence)
                .to_string()
        })
        .into_owned()
}
