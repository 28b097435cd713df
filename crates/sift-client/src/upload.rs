//! Files prepared for `/api/upload`.

use std::io;
use std::path::Path;

use reqwest::multipart::Part;

use crate::error::ApiError;

/// Extensions the backend knows how to split.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["csv", "xlsx", "xls", "txt", "md", "json"];

/// An in-memory file ready to be sent as the multipart `file` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    bytes: Vec<u8>,
    mime: Option<String>,
}

impl UploadFile {
    #[must_use]
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    /// Override the content type guessed from the extension.
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk. The upload keeps the file's base name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the path has no file name or cannot be read.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(file_name, bytes))
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lower-cased extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Whether the backend splits files of this type. Others are rejected
    /// server side with a 400.
    #[must_use]
    pub fn is_supported_type(&self) -> bool {
        self.extension()
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        if let Some(mime) = &self.mime {
            return mime;
        }
        match self.extension().as_deref() {
            Some("csv") => "text/csv",
            Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Some("xls") => "application/vnd.ms-excel",
            Some("txt") => "text/plain",
            Some("md") => "text/markdown",
            Some("json") => "application/json",
            _ => "application/octet-stream",
        }
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        let mime = self.mime().to_string();
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&mime)?)
    }
}
