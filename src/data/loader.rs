use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use thiserror::Error;

use super::model::RawTable;
use super::parser;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not valid UTF-8 text")]
    NotUtf8(PathBuf),
    #[error("no header line found in {0}")]
    NoHeader(PathBuf),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a text file and parse it into a [`RawTable`].
///
/// Any extension is accepted; the content decides the layout.
pub fn load_file(path: &Path) -> Result<RawTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8(path.to_path_buf()))?;
    parser::parse(&text).ok_or_else(|| LoadError::NoHeader(path.to_path_buf()))
}

/// Load `path` on a worker thread; the result arrives on the returned channel.
pub fn spawn_load(path: PathBuf) -> Receiver<(PathBuf, Result<RawTable, LoadError>)> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = load_file(&path);
        // The receiver is gone when a newer load replaced this one.
        let _ = tx.send((path, result));
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# preamble\nx,y\n1,2\n3,4").unwrap();
        let table = load_file(file.path()).unwrap();
        assert_eq!(table.header, vec!["x", "y"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.metadata, vec!["# preamble"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_not_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x78, 0x2c, 0x79, 0x0a, 0xff, 0xfe]).unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotUtf8(_)));
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoHeader(_)));
        assert!(err.to_string().starts_with("no header line found"));
    }

    #[test]
    fn test_spawn_load_delivers_result() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a b\n1 2").unwrap();
        let rx = spawn_load(file.path().to_path_buf());
        let (path, result) = rx.recv().unwrap();
        assert_eq!(path, file.path());
        assert_eq!(result.unwrap().len(), 1);
    }
}
