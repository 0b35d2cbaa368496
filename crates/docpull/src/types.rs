//! Core types for Docpull

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Export format for a document download
///
/// Each format maps 1:1 to the `format` query parameter of the export
/// endpoint, to the MIME type sent in the Accept header, and to the file
/// extension used when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML document
    Docx,
    /// OpenDocument text
    Odt,
    /// Rich Text Format
    Rtf,
    /// Plain text
    Txt,
    /// HTML
    Html,
}

impl ExportFormat {
    /// All supported export formats
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Pdf,
        ExportFormat::Docx,
        ExportFormat::Odt,
        ExportFormat::Rtf,
        ExportFormat::Txt,
        ExportFormat::Html,
    ];

    /// The `format` query-parameter token
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Odt => "odt",
            ExportFormat::Rtf => "rtf",
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
        }
    }

    /// File extension for saved documents (same token as [`as_str`](Self::as_str))
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// MIME type sent in the Accept header for this format
    ///
    /// The export endpoint keys off the `format` query parameter; the
    /// Accept header mirrors it but is advisory only.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Odt => "application/vnd.oasis.opendocument.text",
            ExportFormat::Rtf => "application/rtf",
            ExportFormat::Txt => "text/plain",
            ExportFormat::Html => "text/html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "odt" => Ok(ExportFormat::Odt),
            "rtf" => Ok(ExportFormat::Rtf),
            "txt" => Ok(ExportFormat::Txt),
            "html" => Ok(ExportFormat::Html),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character encoding for text saves
///
/// UTF-8 is the default. Latin1 encodes through windows-1252; characters
/// outside the encoding become numeric character references per the
/// Encoding Standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// UTF-8 (default)
    #[default]
    Utf8,
    /// UTF-16 little-endian
    Utf16Le,
    /// Latin1 / windows-1252
    Latin1,
}

impl TextEncoding {
    /// Canonical label for this encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Utf16Le => "utf16le",
            TextEncoding::Latin1 => "latin1",
        }
    }

    /// Encode `text` into the byte representation written to disk
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        match self {
            TextEncoding::Utf8 => Cow::Borrowed(text.as_bytes()),
            TextEncoding::Utf16Le => {
                let mut out = Vec::with_capacity(text.len() * 2);
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
                Cow::Owned(out)
            }
            TextEncoding::Latin1 => {
                let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
                Cow::Owned(bytes.into_owned())
            }
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "utf16le" | "utf-16le" => Ok(TextEncoding::Utf16Le),
            "latin1" | "iso-8859-1" | "windows-1252" => Ok(TextEncoding::Latin1),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
