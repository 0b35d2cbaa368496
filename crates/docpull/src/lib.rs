//! Docpull - Google Docs export download library
//!
//! This crate downloads Google Docs documents through the public export
//! endpoint and optionally persists them to the local filesystem. Only
//! documents whose sharing settings permit anonymous export can be
//! downloaded; no authentication is performed.
//!
//! ## Operations
//!
//! - [`extract_document_id`] - pull the document id out of a sharable URL
//! - [`Downloader::fetch_text`] - fetch the plain-text export of a document
//! - [`Downloader::save_document`] - download in any [`ExportFormat`] and
//!   write the file under a target directory
//! - [`Downloader::save_text`] - save the plain-text export with a chosen
//!   [`TextEncoding`]
//!
//! Free-function counterparts ([`fetch_text`], [`save_document`],
//! [`save_text`]) run against a default-configured [`Downloader`]. Use
//! [`Downloader::builder`] to point at a different service base or to set a
//! custom User-Agent.
//!
//! ```no_run
//! use docpull::{extract_document_id, Downloader, ExportFormat};
//!
//! # async fn run() -> Result<(), docpull::Error> {
//! let id = extract_document_id("https://docs.google.com/document/d/abc123/edit")?;
//! let downloader = Downloader::default();
//! let path = downloader
//!     .save_document(&id, "./out", "report", ExportFormat::Pdf)
//!     .await?;
//! println!("saved {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod client;
mod error;
mod extract;
mod save;
mod types;

pub use client::{fetch_text, Downloader, DownloaderBuilder};
pub use error::Error;
pub use extract::extract_document_id;
pub use save::{save_document, save_text};
pub use types::{ExportFormat, TextEncoding};

/// Base URL of the document service export endpoint
pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com";

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Docpull/0.1";
