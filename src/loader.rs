// src/loader.rs
//
// Fetches one year's offerings file and parses it into a `Dataset`.
// A source is either an http(s) base URL or a local directory; both resolve
// `<base>/<year>/offerings.json`.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::{
    config::consts::DATASET_FILE,
    core::net,
    model::Dataset,
    progress::Progress,
};

/// Why the initial load failed. Always fatal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {code} ({url})")]
    Status { code: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed offerings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Http(String),
    Dir(PathBuf),
}

impl DataSource {
    pub fn parse(base: &str) -> Self {
        let b = base.trim();
        if b.starts_with("http://") || b.starts_with("https://") {
            DataSource::Http(s!(b))
        } else {
            DataSource::Dir(PathBuf::from(b))
        }
    }

    fn relative(year: u16) -> String {
        format!("{year}/{DATASET_FILE}")
    }

    /// Human-readable location of the year's file.
    pub fn resource(&self, year: u16) -> String {
        match self {
            DataSource::Http(base) => net::join_url(base, &Self::relative(year)),
            DataSource::Dir(dir) => dir.join(year.to_string()).join(DATASET_FILE)
                .display().to_string(),
        }
    }

    fn fetch_text(&self, year: u16) -> Result<String, LoadError> {
        match self {
            DataSource::Http(base) => {
                let url = net::join_url(base, &Self::relative(year));
                net::http_get(&url).map_err(|e| match e {
                    ureq::Error::StatusCode(code) => LoadError::Status { code, url },
                    other => LoadError::Transport { url, source: other },
                })
            }
            DataSource::Dir(dir) => {
                let path = dir.join(year.to_string()).join(DATASET_FILE);
                fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(base) => f.write_str(base),
            DataSource::Dir(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Load the full ordered dataset for `year`. One fetch, no retry.
pub fn load(
    source: &DataSource,
    year: u16,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset, LoadError> {
    let resource = source.resource(year);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&resource);
    }
    logf!("Load: Begin {}", resource);

    let res = source
        .fetch_text(year)
        .and_then(|text| Ok(Dataset::from_json(&text)?));

    match &res {
        Ok(ds) => {
            logf!("Loaded {} offerings for {}", ds.len(), year);
            if let Some(p) = progress.as_deref_mut() {
                p.loaded(ds.len());
            }
        }
        Err(e) => {
            loge!("Error loading offerings: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error: {e}"));
            }
        }
    }

    if let Some(p) = progress {
        p.finish();
    }
    res
}
