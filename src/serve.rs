// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static file server for the generated report
//!
//! Just enough HTTP to browse a directory: GET/HEAD, index files, a plain
//! directory listing, no writes.

use crate::markup::escape_html;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::{Cursor, Read};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, error, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const INDEX_FILE: &str = "index.html";

/// Where a request path lands under the served root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    File(PathBuf),
    Listing(PathBuf),
    /// Directory requested without a trailing slash
    Redirect(String),
    Forbidden,
    NotFound,
}

pub struct StaticServer {
    server: Server,
    root: PathBuf,
}

impl StaticServer {
    pub fn bind<P: Into<PathBuf>>(root: P, addr: &str) -> Result<Self> {
        let server =
            Server::http(addr).map_err(|e| anyhow!("failed to start server on {}: {}", addr, e))?;
        let root = root.into();
        info!(addr = %addr, root = %root.display(), "static server started");
        Ok(Self { server, root })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve until `shutdown` is set.
    pub fn run(&self, shutdown: &AtomicBool) -> Result<()> {
        while !shutdown.load(Ordering::SeqCst) {
            let request = match self.server.recv_timeout(POLL_INTERVAL) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(e) => {
                    if shutdown.load(Ordering::SeqCst) {
                        break;
                    }
                    error!(error = %e, "accept error");
                    return Err(e).context("receiving request");
                }
            };
            self.handle(request);
        }
        info!("static server stopped");
        Ok(())
    }

    fn handle(&self, request: Request) {
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = if !matches!(method, Method::Get | Method::Head) {
            text_response(405, "method not allowed")
        } else {
            match resolve(&self.root, &url) {
                Resolved::File(path) => match fs::read(&path) {
                    Ok(data) => with_header(
                        Response::from_data(data),
                        "Content-Type",
                        content_type_for(&path),
                    ),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to read file");
                        text_response(500, "error reading file")
                    }
                },
                Resolved::Listing(dir) => match render_listing(&dir, &url) {
                    Ok(page) => with_header(
                        Response::from_data(page.into_bytes()),
                        "Content-Type",
                        "text/html; charset=utf-8",
                    ),
                    Err(e) => {
                        warn!(path = %dir.display(), error = %e, "failed to list directory");
                        text_response(500, "error listing directory")
                    }
                },
                Resolved::Redirect(location) => {
                    with_header(text_response(301, "moved permanently"), "Location", &location)
                }
                Resolved::Forbidden => text_response(403, "forbidden"),
                Resolved::NotFound => text_response(404, "not found"),
            }
        };

        debug!(method = %method, url = %url, status = response.status_code().0, "request");
        if let Err(e) = request.respond(response) {
            warn!(error = %e, "failed to send response");
        }
    }
}

/// Map a request URL onto the filesystem below `root`.
pub fn resolve(root: &Path, url: &str) -> Resolved {
    let raw_path = url.split(['?', '#']).next().unwrap_or("");
    let Some(decoded) = percent_decode(raw_path) else {
        return Resolved::NotFound;
    };

    let mut path = root.to_path_buf();
    let mut parts = Vec::new();
    for part in decoded.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." || part.contains('\\') || !is_normal_component(part) {
            return Resolved::Forbidden;
        }
        path.push(part);
        parts.push(part);
    }

    if path.is_dir() {
        if !raw_path.ends_with('/') {
            // rebuilt from clean segments so `//host` cannot leave the site
            let segments: Vec<String> = parts.iter().map(|p| percent_encode(p)).collect();
            let location = if segments.is_empty() {
                "/".to_string()
            } else {
                format!("/{}/", segments.join("/"))
            };
            return Resolved::Redirect(location);
        }
        let index = path.join(INDEX_FILE);
        if index.is_file() {
            Resolved::File(index)
        } else {
            Resolved::Listing(path)
        }
    } else if path.is_file() {
        Resolved::File(path)
    } else {
        Resolved::NotFound
    }
}

fn is_normal_component(part: &str) -> bool {
    let mut components = Path::new(part).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn percent_encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "txt" | "log" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "ico" => "image/x-icon",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

pub fn render_listing(dir: &Path, url_path: &str) -> Result<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let mut name = entry.file_name().to_string_lossy().into_owned();
            if entry.path().is_dir() {
                name.push('/');
            }
            name
        })
        .collect();
    names.sort();

    let title = escape_html(url_path);
    let mut page = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Directory listing for {0}</title></head>\n<body>\n<h1>Directory listing for {0}</h1>\n<hr>\n<ul>\n",
        title
    );
    for name in &names {
        let escaped = escape_html(name);
        page.push_str(&format!("<li><a href=\"{0}\">{0}</a></li>\n", escaped));
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(page)
}

fn with_header<R: Read>(response: Response<R>, name: &str, value: &str) -> Response<R> {
    match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
        Ok(h) => response.with_header(h),
        Err(()) => {
            warn!(name, value, "dropping invalid header");
            response
        }
    }
}

fn text_response(status: u16, body: &str) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(body.as_bytes().to_vec()).with_status_code(status);
    with_header(response, "Content-Type", "text/plain; charset=utf-8")
}
