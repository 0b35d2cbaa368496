//! Export client for Docpull
//!
//! One request primitive serves both the text fetch and the file savers in
//! [`save`](crate::save): build the export URL, send a GET with the
//! format's Accept header, check the status, read the body.

use crate::error::Error;
use crate::types::ExportFormat;
use crate::{DEFAULT_EXPORT_BASE, DEFAULT_USER_AGENT};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

/// Builder for configuring a [`Downloader`]
#[derive(Debug, Clone, Default)]
pub struct DownloaderBuilder {
    export_base: Option<String>,
    user_agent: Option<String>,
}

impl DownloaderBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL of the document service
    ///
    /// Defaults to [`DEFAULT_EXPORT_BASE`]. Mainly useful for tests and
    /// self-hosted service instances.
    pub fn export_base(mut self, base: impl Into<String>) -> Self {
        self.export_base = Some(base.into());
        self
    }

    /// Set a custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the downloader
    pub fn build(self) -> Downloader {
        Downloader {
            export_base: self
                .export_base
                .unwrap_or_else(|| DEFAULT_EXPORT_BASE.to_string()),
            user_agent: self.user_agent,
        }
    }
}

/// Client for the document service export endpoint
///
/// Each call is a single unauthenticated GET with no retries and no
/// explicit timeout; a hung request is bounded only by the transport's own
/// defaults. Cloning is cheap and concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct Downloader {
    export_base: String,
    user_agent: Option<String>,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Downloader {
    /// Create a new downloader builder
    pub fn builder() -> DownloaderBuilder {
        DownloaderBuilder::new()
    }

    /// Build the export URL for a document id and format
    ///
    /// `{base}/document/d/{id}/export?format={fmt}`, with the id
    /// percent-encoded as a path segment.
    fn export_url(&self, document_id: &str, format: ExportFormat) -> Result<Url, Error> {
        let mut url = Url::parse(&self.export_base)
            .map_err(|_| Error::InvalidExportBase(self.export_base.clone()))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidExportBase(self.export_base.clone()))?
            .pop_if_empty()
            .extend(["document", "d", document_id, "export"]);
        url.query_pairs_mut().append_pair("format", format.as_str());
        Ok(url)
    }

    /// Issue the export request and return the raw response body
    ///
    /// The endpoint selects the output from the `format` query parameter;
    /// the Accept header mirrors the format's MIME type but is advisory.
    pub(crate) async fn export(
        &self,
        document_id: &str,
        format: ExportFormat,
    ) -> Result<Bytes, Error> {
        if document_id.is_empty() {
            return Err(Error::InvalidInput {
                field: "document id",
            });
        }

        let url = self.export_url(document_id, format)?;

        let mut headers = HeaderMap::new();
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(format.mime_type()));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::ClientBuild)?;

        tracing::debug!(%url, format = format.as_str(), "Requesting document export");

        let response = client.get(url).send().await.map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                document_id,
                "Export request rejected"
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(Error::Network)
    }

    /// Fetch the plain-text export of a document
    ///
    /// Invalid UTF-8 in the response body is replaced rather than rejected.
    pub async fn fetch_text(&self, document_id: &str) -> Result<String, Error> {
        let body = self.export(document_id, ExportFormat::Txt).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Fetch the plain-text export of a document using a default [`Downloader`]
pub async fn fetch_text(document_id: &str) -> Result<String, Error> {
    Downloader::default().fetch_text(document_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url_shape() {
        let downloader = Downloader::default();
        let url = downloader
            .export_url("abc123", ExportFormat::Pdf)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.google.com/document/d/abc123/export?format=pdf"
        );
    }

    #[test]
    fn test_export_url_percent_encodes_id() {
        let downloader = Downloader::default();
        let url = downloader
            .export_url("a b/c", ExportFormat::Txt)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.google.com/document/d/a%20b%2Fc/export?format=txt"
        );
    }

    #[test]
    fn test_export_url_custom_base() {
        let downloader = Downloader::builder()
            .export_base("http://127.0.0.1:9000")
            .build();
        let url = downloader
            .export_url("abc", ExportFormat::Html)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9000/document/d/abc/export?format=html"
        );
    }

    #[test]
    fn test_invalid_export_base() {
        let downloader = Downloader::builder().export_base("not a url").build();
        let err = downloader
            .export_url("abc", ExportFormat::Txt)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidExportBase(_)));
    }

    #[tokio::test]
    async fn test_fetch_text_empty_id() {
        let err = Downloader::default().fetch_text("").await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput {
                field: "document id"
            }
        ));
    }
}
