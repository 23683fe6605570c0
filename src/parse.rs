// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report ingestion: best-effort decoding and section splitting

use crate::dialect::Dialect;
use crate::types::Section;
use anyhow::{Context, Result};
use colored::*;
use encoding_rs::{DecoderResult, Encoding, UTF_8};
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Read and split a report file.
///
/// A missing file is not an error: the report is simply empty.
pub fn read_report(path: &Path, dialect: &dyn Dialect) -> Result<Vec<Section>> {
    let raw_bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "input report not found");
            println!(
                "{} {} not found, generating an empty report",
                "warning:".yellow().bold(),
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };

    let text = decode_lossy(&raw_bytes);
    let sections = split_sections(&text, dialect);
    debug!(
        path = %path.display(),
        bytes = raw_bytes.len(),
        sections = sections.len(),
        "parsed report"
    );
    Ok(sections)
}

/// Decode bytes, silently dropping malformed sequences.
///
/// A byte-order mark picks UTF-16LE/BE or UTF-8 and is removed; anything
/// else is treated as UTF-8.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let mut input = &bytes[bom_len..];
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut out = String::new();

    loop {
        let needed = decoder
            .max_utf8_buffer_length_without_replacement(input.len())
            .unwrap_or(input.len().saturating_mul(3));
        out.reserve(needed);

        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut out, true);
        input = &input[read..];
        match result {
            DecoderResult::InputEmpty => break,
            // the offending bytes are already consumed; keep going
            DecoderResult::Malformed(_, _) | DecoderResult::OutputFull => continue,
        }
    }

    out
}

/// Split report text into titled sections.
///
/// Header lines are compared with escapes and outer whitespace removed, but
/// body lines are kept exactly as they appear (newline included). A title
/// whose body is blank yields no section.
pub fn split_sections(text: &str, dialect: &dyn Dialect) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, String)> = None;

    let text = normalize_newlines(text);
    for line in text.split_inclusive('\n') {
        let stripped = dialect.strip_escapes(line);
        let clean = stripped.trim();

        if let Some(title) = dialect.header_title(clean) {
            if let Some((done_title, body)) = current.take() {
                push_if_content(&mut sections, done_title, body);
            }
            current = Some((title, String::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
        }
    }

    if let Some((title, body)) = current {
        push_if_content(&mut sections, title, body);
    }

    sections
}

fn push_if_content(sections: &mut Vec<Section>, title: String, body: String) {
    let section = Section::new(title, body);
    if section.has_content() {
        sections.push(section);
    }
}

/// `\r\n` and lone `\r` become `\n`, so every line ends the same way.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Linpeas;

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_two_sections() {
        let text = "╔══╣ Users\nalice\nbob\n╔══╣ Net\n1.2.3.4\n";
        let sections = split_sections(text, &Linpeas);
        assert_eq!(
            sections,
            vec![
                Section::new("Users", "alice\nbob\n"),
                Section::new("Net", "1.2.3.4\n"),
            ]
        );
    }

    #[test]
    fn test_no_headers_yields_nothing() {
        let text = "banner\nsome output\n\nmore\n";
        assert!(split_sections(text, &Linpeas).is_empty());
        assert!(split_sections("", &Linpeas).is_empty());
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(split_sections("╔══════════╣ Lonely\n", &Linpeas).is_empty());
    }

    #[test]
    fn test_blank_body_skipped() {
        let text = "╔══╣ Empty\n   \n\t\n╔══╣ Full\nx\n╔══╣ Trailing\n\n";
        let sections = split_sections(text, &Linpeas);
        assert_eq!(titles(&sections), vec!["Full"]);
    }

    #[test]
    fn test_preamble_discarded() {
        let text = "LinPEAS banner\nnoise\n╔══╣ First\nbody\n";
        let sections = split_sections(text, &Linpeas);
        assert_eq!(sections, vec![Section::new("First", "body\n")]);
    }

    #[test]
    fn test_body_keeps_escapes_and_header_ignores_them() {
        let text = "\x1b[1;34m╔══════════╣ \x1b[1;32mSUID files\x1b[0m\n\x1b[1;31m/usr/bin/passwd\x1b[0m\n";
        let sections = split_sections(text, &Linpeas);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "SUID files");
        assert_eq!(sections[0].body, "\x1b[1;31m/usr/bin/passwd\x1b[0m\n");
    }

    #[test]
    fn test_indented_header_still_matches() {
        let text = "   ╔══╣ Indented   \nline\n";
        let sections = split_sections(text, &Linpeas);
        assert_eq!(titles(&sections), vec!["Indented"]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let text = "╔══╣ Ports\r\ntcp 22\r\ntcp 80";
        let sections = split_sections(text, &Linpeas);
        assert_eq!(sections, vec![Section::new("Ports", "tcp 22\ntcp 80")]);
    }

    #[test]
    fn test_decode_drops_malformed_bytes() {
        let bytes = b"ab\xffc\xc3\x28d\xe2\x95\x94";
        assert_eq!(decode_lossy(bytes), "abc(d╔");
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "╔═╣ Hi\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_lossy(&bytes), "╔═╣ Hi\n");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        assert_eq!(decode_lossy(b"\xef\xbb\xbfhello"), "hello");
    }
}
