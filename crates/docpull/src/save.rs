//! Filesystem savers for document exports
//!
//! Both savers validate their inputs, create missing output directories,
//! and write the whole body in one go. There is no temp-file rename, so
//! two concurrent saves to the same path race and the last writer wins.

use crate::client::Downloader;
use crate::error::Error;
use crate::types::{ExportFormat, TextEncoding};
use std::path::{Path, PathBuf};

impl Downloader {
    /// Download a document in `format` and write it under `dir`
    ///
    /// `filename` is the bare name; the format's extension is appended.
    /// Missing directories are created recursively. Returns the path of
    /// the written file.
    pub async fn save_document(
        &self,
        document_id: &str,
        dir: impl AsRef<Path>,
        filename: &str,
        format: ExportFormat,
    ) -> Result<PathBuf, Error> {
        let dir = dir.as_ref();
        validate_save_inputs(document_id, dir, filename)?;

        ensure_dir(dir).await?;

        let body = self.export(document_id, format).await?;
        let path = output_path(dir, filename, format.extension());
        write_all(&path, &body).await?;

        tracing::info!(path = %path.display(), size = body.len(), "Document saved");
        Ok(path)
    }

    /// Save the plain-text export of a document as UTF-8
    ///
    /// Content retrieval goes through [`fetch_text`](Self::fetch_text);
    /// nothing is written when the fetch fails.
    pub async fn save_text(
        &self,
        document_id: &str,
        dir: impl AsRef<Path>,
        filename: &str,
    ) -> Result<PathBuf, Error> {
        self.save_text_with_encoding(document_id, dir, filename, TextEncoding::default())
            .await
    }

    /// Save the plain-text export of a document with a chosen encoding
    pub async fn save_text_with_encoding(
        &self,
        document_id: &str,
        dir: impl AsRef<Path>,
        filename: &str,
        encoding: TextEncoding,
    ) -> Result<PathBuf, Error> {
        let dir = dir.as_ref();
        validate_save_inputs(document_id, dir, filename)?;

        let text = self.fetch_text(document_id).await?;

        ensure_dir(dir).await?;
        let path = output_path(dir, filename, ExportFormat::Txt.extension());
        write_all(&path, &encoding.encode(&text)).await?;

        tracing::info!(
            path = %path.display(),
            encoding = encoding.as_str(),
            "Document saved"
        );
        Ok(path)
    }
}

/// Download a document using a default [`Downloader`]
pub async fn save_document(
    document_id: &str,
    dir: impl AsRef<Path>,
    filename: &str,
    format: ExportFormat,
) -> Result<PathBuf, Error> {
    Downloader::default()
        .save_document(document_id, dir, filename, format)
        .await
}

/// Save a plain-text export as UTF-8 using a default [`Downloader`]
pub async fn save_text(
    document_id: &str,
    dir: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf, Error> {
    Downloader::default()
        .save_text(document_id, dir, filename)
        .await
}

fn validate_save_inputs(document_id: &str, dir: &Path, filename: &str) -> Result<(), Error> {
    if document_id.is_empty() {
        return Err(Error::InvalidInput {
            field: "document id",
        });
    }
    if dir.as_os_str().is_empty() {
        return Err(Error::InvalidInput {
            field: "directory path",
        });
    }
    if filename.is_empty() {
        return Err(Error::InvalidInput { field: "filename" });
    }
    Ok(())
}

fn output_path(dir: &Path, filename: &str, extension: &str) -> PathBuf {
    dir.join(format!("{filename}.{extension}"))
}

async fn ensure_dir(dir: &Path) -> Result<(), Error> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })
}

async fn write_all(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("./out"), "report", "pdf"),
            PathBuf::from("./out/report.pdf")
        );
        assert_eq!(
            output_path(Path::new("/tmp/docs"), "notes", "txt"),
            PathBuf::from("/tmp/docs/notes.txt")
        );
    }

    #[test]
    fn test_validate_save_inputs_order() {
        // Each missing input is reported by name, first violation wins.
        let err = validate_save_inputs("", Path::new(""), "").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput {
                field: "document id"
            }
        ));

        let err = validate_save_inputs("abc", Path::new(""), "").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput {
                field: "directory path"
            }
        ));

        let err = validate_save_inputs("abc", Path::new("./out"), "").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "filename" }));

        assert!(validate_save_inputs("abc", Path::new("./out"), "report").is_ok());
    }
}
