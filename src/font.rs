//! Sources for the caption font binary.
//!
//! [`build_stylesheet`](crate::build_stylesheet) is agnostic about where the
//! font lives. Pick a [`FontSource`]: bytes already in memory, a file on disk,
//! or (with the `http` feature) a URL.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{IconError, Result};

/// A fetched font binary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontAsset {
    pub bytes: Vec<u8>,
    /// Mime type reported by the source; empty in the data URI when unknown.
    pub mime: Option<String>,
}

impl FontAsset {
    pub fn new(bytes: impl Into<Vec<u8>>, mime: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime,
        }
    }
}

/// Somewhere the caption font can be fetched from.
///
/// Each call to [`fetch`](Self::fetch) is a single attempt. Implementations
/// do not retry or cache.
#[async_trait]
pub trait FontSource: Send + Sync {
    async fn fetch(&self) -> Result<FontAsset>;
}

// ============================================================================
// StaticFontSource
// ============================================================================

/// A font already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticFontSource {
    asset: FontAsset,
}

impl StaticFontSource {
    pub fn new(asset: FontAsset) -> Self {
        Self { asset }
    }
}

#[async_trait]
impl FontSource for StaticFontSource {
    async fn fetch(&self) -> Result<FontAsset> {
        Ok(self.asset.clone())
    }
}

// ============================================================================
// FileFontSource
// ============================================================================

/// A font read from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileFontSource {
    path: PathBuf,
    mime: Option<String>,
}

impl FileFontSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mime: None,
        }
    }

    /// Sets the mime type to report, e.g. `font/woff2`.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FontSource for FileFontSource {
    async fn fetch(&self) -> Result<FontAsset> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| IconError::FontFetch {
                location: self.path.display().to_string(),
                source: Box::new(source),
            })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "read font file");
        Ok(FontAsset::new(bytes, self.mime.clone()))
    }
}

// ============================================================================
// HttpFontSource
// ============================================================================

/// A font fetched with a single HTTP GET.
///
/// Only available with the `http` feature. Timeouts are whatever the supplied
/// client is configured with.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpFontSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpFontSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_error(&self, source: reqwest::Error) -> IconError {
        IconError::FontFetch {
            location: self.url.clone(),
            source: Box::new(source),
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl FontSource for HttpFontSource {
    async fn fetch(&self) -> Result<FontAsset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconError::FontStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(|e| self.fetch_error(e))?;

        tracing::debug!(url = %self.url, bytes = bytes.len(), "fetched font");
        Ok(FontAsset::new(bytes.to_vec(), mime))
    }
}
