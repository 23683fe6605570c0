// SPDX-License-Identifier: PMPL-1.0-or-later

//! linpeas-web: LinPEAS output as a browsable HTML report.
//!
//! The raw report is split into titled sections, each section is filed
//! under one of eight categories, terminal colours are turned into styled
//! spans, and the lot is written as a single Bootstrap page. The binary then
//! serves that page's directory over HTTP.
//!
//! PIPELINE:
//! 1. **parse**: decode bytes, split on `╔══╣ Title` headers.
//! 2. **classify**: keyword match on the title.
//! 3. **markup**: HTML-escape, then swap escapes for spans.
//! 4. **report**: group, render, write.
//! 5. **serve**: static files until Ctrl+C.

pub mod classify;
pub mod config;
pub mod dialect;
pub mod logging;
pub mod markup;
pub mod parse;
pub mod report;
pub mod serve;
pub mod types;
