//! Loading knowledge-point indexes and question lists.
//!
//! Data is laid out by convention: `<level>/index.json` lists the knowledge
//! points of a level, `<level>/<knowledge point>.json` holds its questions.
//! The root is either a local directory or an HTTP base URL.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

use crate::models::Questions;

const INDEX_FILE: &str = "index.json";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid path segment {0:?}")]
    InvalidSegment(String),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone)]
enum Backend {
    Dir(Arc<PathBuf>),
    Http {
        client: reqwest::Client,
        base_url: Arc<str>,
    },
}

/// Where question data comes from. Cheap to clone.
#[derive(Clone)]
pub struct DataSource {
    backend: Backend,
}

impl DataSource {
    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!("serving question data from {}", path.display());
        Self {
            backend: Backend::Dir(Arc::new(path)),
        }
    }

    pub fn from_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        tracing::info!("serving question data from {base_url}");
        Self {
            backend: Backend::Http {
                client: reqwest::Client::new(),
                base_url: Arc::from(base_url),
            },
        }
    }

    /// Knowledge points of a level. A missing or unreadable index, or one
    /// that is not a JSON array of strings, yields an empty list.
    pub async fn knowledge_points(&self, level: &str) -> Vec<String> {
        let value = match self.fetch(level, INDEX_FILE).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("could not load knowledge points of {level}: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_value::<Vec<String>>(value) {
            Ok(points) => points,
            Err(e) => {
                tracing::warn!("index of {level} is not a list of names: {e}");
                Vec::new()
            }
        }
    }

    /// Questions of one knowledge point. JSON that is not an array counts as
    /// an empty list; anything that cannot be fetched or decoded is an error.
    pub async fn questions(&self, level: &str, knowledge: &str) -> Result<Questions, SourceError> {
        let file = format!("{knowledge}.json");
        let value = self.fetch(level, &file).await?;
        if !value.is_array() {
            tracing::warn!("{level}/{file} does not hold a list of questions");
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|source| SourceError::Decode {
            location: format!("{level}/{file}"),
            source,
        })
    }

    async fn fetch(&self, level: &str, file: &str) -> Result<serde_json::Value, SourceError> {
        check_segment(level)?;
        check_segment(file)?;

        match &self.backend {
            Backend::Dir(root) => {
                check_no_separator(level)?;
                check_no_separator(file)?;
                let path = root.join(level).join(file);
                read_file(&path).await
            }
            Backend::Http { client, base_url } => {
                let url = format!(
                    "{base_url}/{}/{}",
                    urlencoding::encode(level),
                    urlencoding::encode(file)
                );
                get_json(client, url).await
            }
        }
    }
}

async fn read_file(path: &Path) -> Result<serde_json::Value, SourceError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| SourceError::Decode {
        location: path.display().to_string(),
        source,
    })
}

async fn get_json(client: &reqwest::Client, url: String) -> Result<serde_json::Value, SourceError> {
    let resp = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(source) => return Err(SourceError::Http { url, source }),
    };

    let status = resp.status();
    if !status.is_success() {
        return Err(SourceError::Status { url, status });
    }

    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(source) => return Err(SourceError::Http { url, source }),
    };

    serde_json::from_slice(&bytes).map_err(|source| SourceError::Decode {
        location: url,
        source,
    })
}

/// Levels and knowledge points come from requests; keep them from naming
/// the data root or its parent.
fn check_segment(segment: &str) -> Result<(), SourceError> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(SourceError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

/// A directory path must not be split by the segment itself. HTTP segments
/// are percent-encoded instead, so `/` is allowed there.
fn check_no_separator(segment: &str) -> Result<(), SourceError> {
    if segment.contains(['/', '\\', '\0']) {
        return Err(SourceError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}
