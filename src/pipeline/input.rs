//! Input validation: make sure a user-supplied path is a readable PDF.
//!
//! We check the PDF magic bytes (`%PDF`) before handing the file to pdfium
//! so callers get a meaningful error rather than a generic load failure.

use crate::error::Pdf2TableError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Validate a local file path, returning it unchanged on success.
pub fn resolve_local(path: impl AsRef<Path>) -> Result<PathBuf, Pdf2TableError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(Pdf2TableError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != PDF_MAGIC {
                return Err(Pdf2TableError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2TableError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2TableError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

/// Check in-memory bytes for the PDF magic header.
pub fn check_pdf_bytes(bytes: &[u8]) -> Result<(), Pdf2TableError> {
    if bytes.len() >= 4 && &bytes[..4] != PDF_MAGIC {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[..4]);
        return Err(Pdf2TableError::NotAPdf {
            path: PathBuf::from("<memory>"),
            magic,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported() {
        let err = resolve_local("/definitely/not/a/real/file.pdf").unwrap_err();
        assert!(matches!(err, Pdf2TableError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_file_is_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"PK\x03\x04 zip archive").unwrap();
        match resolve_local(tmp.path()).unwrap_err() {
            Pdf2TableError::NotAPdf { magic, .. } => assert_eq!(&magic, b"PK\x03\x04"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"%PDF-1.7\n").unwrap();
        assert_eq!(resolve_local(tmp.path()).unwrap(), tmp.path());
    }

    #[test]
    fn byte_check() {
        assert!(check_pdf_bytes(b"%PDF-1.4 ...").is_ok());
        assert!(matches!(
            check_pdf_bytes(b"<html>"),
            Err(Pdf2TableError::NotAPdf { .. })
        ));
    }
}
