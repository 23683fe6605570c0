// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests: report file in, HTML file out

use linpeas_web::dialect::Linpeas;
use linpeas_web::parse;
use linpeas_web::report;
use linpeas_web::types::*;
use std::fs;
use tempfile::TempDir;

const STAMP: &str = "2026-10-16 12:00:00";

const SAMPLE: &str = "\
\x1b[1;34m                               ▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄\x1b[0m
    LinPEAS banner noise
\x1b[1;34m╔══════════╣ \x1b[1;32mUsers with console\x1b[0m
\x1b[1;31mroot\x1b[0m:x:0:0:root:/root:/bin/bash
alice:x:1000:1000::/home/alice:/bin/bash
╔══════════╣ Active Ports
tcp   LISTEN 0 128 0.0.0.0:22 <sshd>
╔══════════╣ Nothing here

╔══════════╣ SUID - Check easy privesc
-rwsr-xr-x 1 root root 63K /usr/bin/passwd & friends
╔══════════╣ Searching passwords in config PHP files
";

fn write_input(dir: &TempDir, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join("linpeas.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_sample_report_sections() {
    let sections = parse::split_sections(SAMPLE, &Linpeas);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();

    // "Nothing here" and the trailing header have blank bodies
    assert_eq!(
        titles,
        vec!["Users with console", "Active Ports", "SUID - Check easy privesc"]
    );
    assert!(sections[0].body.starts_with("\x1b[1;31mroot\x1b[0m:x:0:0"));

    let categories: Vec<Category> = sections.iter().map(Section::category).collect();
    assert_eq!(
        categories,
        vec![
            Category::UsersAndGroups,
            Category::Networking,
            Category::Permissions
        ]
    );
}

#[test]
fn test_build_writes_document() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE.as_bytes());
    let output = dir.path().join("out/nested/index.html");

    let built = report::build(&input, &output, STAMP).expect("build should succeed");
    assert_eq!(built.section_count(), 3);

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Generated on: 2026-10-16 12:00:00"));
    assert!(html.contains(r#"<span class="color-red">root</span>:x:0:0"#));
    assert!(html.contains("0.0.0.0:22 &lt;sshd&gt;"));
    assert!(html.contains("/usr/bin/passwd &amp; friends"));
    for idx in 0..3 {
        assert!(html.contains(&format!(r##"href="#section-{}""##, idx)));
        assert!(html.contains(&format!(r#"id="section-{}""#, idx)));
    }
    assert!(!html.contains("section-3"));
}

#[test]
fn test_missing_input_renders_empty_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("site/index.html");

    let built = report::build(dir.path().join("absent.txt"), &output, STAMP)
        .expect("missing input is not an error");
    assert!(built.is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("accordion-item\""));
    assert!(!html.contains("category-group\""));
    assert!(html.contains("Table of Contents"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE.as_bytes());
    let output = dir.path().join("site/index.html");

    report::build(&input, &output, STAMP).unwrap();
    let first = fs::read(&output).unwrap();
    report::build(&input, &output, STAMP).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("index.html");
    fs::write(&output, "stale").unwrap();

    report::build(dir.path().join("absent.txt"), &output, STAMP).unwrap();
    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("stale"));
}

#[test]
fn test_invalid_bytes_are_dropped() {
    let dir = TempDir::new().unwrap();
    let mut content = "╔══╣ Users\nal".as_bytes().to_vec();
    content.extend_from_slice(&[0xff, 0xfe, 0x80]);
    content.extend_from_slice(b"ice\n");
    let input = write_input(&dir, &content);

    let sections = parse::read_report(&input, &Linpeas).unwrap();
    assert_eq!(sections, vec![Section::new("Users", "alice\n")]);
}

#[test]
fn test_header_only_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "╔══════════╣ Only a header\n".as_bytes());
    assert!(parse::read_report(&input, &Linpeas).unwrap().is_empty());
}
