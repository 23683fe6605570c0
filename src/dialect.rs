// SPDX-License-Identifier: PMPL-1.0-or-later

//! Input dialects
//!
//! A dialect knows the two format-specific things about a scanner's output:
//! what a section header looks like and which terminal escapes map to which
//! markup. The splitter and translator only talk to this trait.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// SGR escape sequences (`ESC [ params m`)
static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("escape pattern compiles"));

static LINPEAS_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^╔═+╣ (.+)").expect("header pattern compiles"));

/// Matches every SGR escape sequence, recognized or not.
pub fn escape_sequences() -> &'static Regex {
    &ESCAPE_RE
}

pub trait Dialect {
    /// Title carried by `clean_line` if it is a section header.
    /// The line has already been stripped of escapes and outer whitespace.
    fn header_title(&self, clean_line: &str) -> Option<String>;

    /// Markup for a complete escape sequence, or `None` to leave it as text.
    fn translate_escape(&self, sequence: &str) -> Option<&'static str>;

    fn strip_escapes<'a>(&self, line: &'a str) -> Cow<'a, str> {
        escape_sequences().replace_all(line, "")
    }
}

/// LinPEAS: `╔══════════╣ Title` headers and its fixed colour palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linpeas;

const LINPEAS_ESCAPES: &[(&str, &str)] = &[
    ("\x1b[1;31;103m", r#"<span class="color-red-bg-yellow">"#),
    ("\x1b[1;31m", r#"<span class="color-red">"#),
    ("\x1b[1;32m", r#"<span class="color-green">"#),
    ("\x1b[1;34m", r#"<span class="color-blue">"#),
    ("\x1b[1;96m", r#"<span class="color-cyan">"#),
    ("\x1b[1;95m", r#"<span class="color-magenta">"#),
    ("\x1b[0m", "</span>"),
    ("\x1b[3m", r#"<span class="italic">"#),
    ("\x1b[1;90m", r#"<span class="color-gray">"#),
];

impl Dialect for Linpeas {
    fn header_title(&self, clean_line: &str) -> Option<String> {
        LINPEAS_HEADER_RE
            .captures(clean_line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    fn translate_escape(&self, sequence: &str) -> Option<&'static str> {
        LINPEAS_ESCAPES
            .iter()
            .find(|(code, _)| *code == sequence)
            .map(|(_, markup)| *markup)
    }
}
