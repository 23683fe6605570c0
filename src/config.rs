// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Everything has a default, so the tool runs with no config at all. A
//! `linpeas-web.yaml` (or `.yml` / `.json`) in the working directory can
//! override any field.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_CANDIDATES: &[&str] = &["linpeas-web.yaml", "linpeas-web.yml", "linpeas-web.json"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report to read when no path is given on the command line
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub bind: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("linpeas.txt"),
            output_dir: PathBuf::from("linepeas-web"),
            output_file: "index.html".to_string(),
            bind: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the first config file found in the working directory, or the
    /// defaults if there is none.
    pub fn load_default() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        match CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
        {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
            }
            _ => serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display())),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// URL printed for the user; wildcard binds are shown as localhost
    pub fn display_url(&self) -> String {
        let host = match self.bind.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}
