use crate::editing::{Buffer, Document};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Load a document from a file
pub fn read_document<B: Buffer>(path: &Path) -> Result<Document<B>, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let doc = Document::from_reader(file)?;
    log::debug!("read document from {}", path.display());
    Ok(doc)
}

/// Replace a document's content with a file's
pub fn reload_document<B: Buffer>(doc: &mut Document<B>, path: &Path) -> Result<(), DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    doc.load(File::open(path)?)
}
