//! Record loader over the on-disk corpus layout.
//!
//! ```text
//! <root>/bills/<state>/<session>/<chamber>/<bill file>
//! <root>/legislators/<leg_id>
//! ```
//!
//! Every read is async (`tokio::fs`). Loading a whole session fans out one
//! read per bill and joins them fail-fast, preserving listing order.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use whip_core::entities::{Bill, Legislator, SessionKey};

use crate::error::{CorpusError, RecordKind};

/// Handle to a corpus export for one state.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    state: String,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>, state: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            state: state.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Directory holding every bill of one session and chamber.
    #[must_use]
    pub fn bill_dir(&self, key: &SessionKey) -> PathBuf {
        self.root
            .join("bills")
            .join(&self.state)
            .join(&key.session)
            .join(&key.chamber)
    }

    /// Path of a legislator document. The file has no extension.
    #[must_use]
    pub fn legislator_path(&self, leg_id: &str) -> PathBuf {
        self.root.join("legislators").join(leg_id)
    }

    /// File names of every bill in a session, sorted. Hidden files are skipped.
    pub async fn list_bill_files(&self, key: &SessionKey) -> Result<Vec<String>, CorpusError> {
        let dir = self.bill_dir(key);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|source| io_error(RecordKind::SessionDirectory, &dir, source))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| io_error(RecordKind::SessionDirectory, &dir, source))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|source| io_error(RecordKind::Bill, &entry.path(), source))?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            files.push(name);
        }

        files.sort();
        Ok(files)
    }

    /// Read and parse one bill document.
    pub async fn load_bill(&self, key: &SessionKey, file: &str) -> Result<Bill, CorpusError> {
        check_file_name(file)?;
        read_json(RecordKind::Bill, &self.bill_dir(key).join(file)).await
    }

    /// Load every bill of a session concurrently, in listing order.
    pub async fn load_session_bills(&self, key: &SessionKey) -> Result<Vec<Bill>, CorpusError> {
        let files = self.list_bill_files(key).await?;
        tracing::debug!(session = %key, bills = files.len(), "loading session bills");
        try_join_all(files.iter().map(|file| self.load_bill(key, file))).await
    }

    /// Read and parse one legislator document.
    ///
    /// A document without `leg_id` gets the requested id.
    pub async fn load_legislator(&self, leg_id: &str) -> Result<Legislator, CorpusError> {
        check_id(leg_id)?;
        let mut legislator: Legislator =
            read_json(RecordKind::Legislator, &self.legislator_path(leg_id)).await?;
        if legislator.leg_id.is_empty() {
            legislator.leg_id = leg_id.to_string();
        }
        Ok(legislator)
    }
}

/// Bill file names come from `read_dir`, so only the special entries need rejecting.
fn check_file_name(name: &str) -> Result<(), CorpusError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(CorpusError::InvalidId(name.to_string()));
    }
    Ok(())
}

fn check_id(id: &str) -> Result<(), CorpusError> {
    if id.is_empty() || id == "." || id.contains(['/', '\\']) || id.contains("..") {
        return Err(CorpusError::InvalidId(id.to_string()));
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(kind: RecordKind, path: &Path) -> Result<T, CorpusError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| io_error(kind, path, source))?;
    serde_json::from_slice(&bytes).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn io_error(kind: RecordKind, path: &Path, source: std::io::Error) -> CorpusError {
    if source.kind() == ErrorKind::NotFound {
        CorpusError::NotFound {
            kind,
            path: path.to_path_buf(),
        }
    } else {
        CorpusError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().expect("path has parent")).expect("dirs create");
        std::fs::write(path, contents).expect("file writes");
    }

    fn key() -> SessionKey {
        SessionKey::new("85R", "house")
    }

    #[test]
    fn paths_follow_corpus_layout() {
        let corpus = Corpus::new("/data", "tx");
        assert_eq!(
            corpus.bill_dir(&key()),
            PathBuf::from("/data/bills/tx/85R/house")
        );
        assert_eq!(
            corpus.legislator_path("TXL000484"),
            PathBuf::from("/data/legislators/TXL000484")
        );
    }

    #[tokio::test]
    async fn lists_sorted_visible_files_only() {
        let temp = TempDir::new().expect("tempdir should create");
        write(temp.path(), "bills/tx/85R/house/HB2", "{}");
        write(temp.path(), "bills/tx/85R/house/HB1", "{}");
        write(temp.path(), "bills/tx/85R/house/.DS_Store", "");
        std::fs::create_dir_all(temp.path().join("bills/tx/85R/house/nested")).unwrap();

        let corpus = Corpus::new(temp.path(), "tx");
        let files = corpus.list_bill_files(&key()).await.expect("listing works");
        assert_eq!(files, vec!["HB1".to_string(), "HB2".to_string()]);
    }

    #[tokio::test]
    async fn missing_session_directory_is_not_found() {
        let temp = TempDir::new().expect("tempdir should create");
        let corpus = Corpus::new(temp.path(), "tx");

        let err = corpus.list_bill_files(&key()).await.unwrap_err();
        assert!(matches!(
            err,
            CorpusError::NotFound {
                kind: RecordKind::SessionDirectory,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn malformed_bill_is_a_parse_error() {
        let temp = TempDir::new().expect("tempdir should create");
        write(temp.path(), "bills/tx/85R/house/HB1", "{\"bill_id\": ");

        let corpus = Corpus::new(temp.path(), "tx");
        let err = corpus.load_session_bills(&key()).await.unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
    }

    #[tokio::test]
    async fn session_bills_keep_listing_order() {
        let temp = TempDir::new().expect("tempdir should create");
        write(temp.path(), "bills/tx/85R/house/b", r#"{"bill_id": "HB 2"}"#);
        write(temp.path(), "bills/tx/85R/house/a", r#"{"bill_id": "HB 1", "votes": []}"#);

        let corpus = Corpus::new(temp.path(), "tx");
        let bills = corpus.load_session_bills(&key()).await.expect("bills load");
        let ids: Vec<_> = bills.iter().map(|bill| bill.bill_id.as_str()).collect();
        assert_eq!(ids, vec!["HB 1", "HB 2"]);
    }

    #[tokio::test]
    async fn legislator_id_defaults_to_file_name() {
        let temp = TempDir::new().expect("tempdir should create");
        write(
            temp.path(),
            "legislators/TXL000484",
            r#"{"party": "Republican", "chamber": "house", "roles": [{"term": "85R"}]}"#,
        );

        let corpus = Corpus::new(temp.path(), "tx");
        let legislator = corpus.load_legislator("TXL000484").await.expect("loads");
        assert_eq!(legislator.leg_id, "TXL000484");
        assert_eq!(legislator.roles.len(), 1);
    }

    #[tokio::test]
    async fn missing_legislator_is_not_found() {
        let temp = TempDir::new().expect("tempdir should create");
        let corpus = Corpus::new(temp.path(), "tx");

        let err = corpus.load_legislator("TXL999999").await.unwrap_err();
        assert!(matches!(
            err,
            CorpusError::NotFound {
                kind: RecordKind::Legislator,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn dotted_bill_file_names_load() {
        let temp = TempDir::new().expect("tempdir should create");
        let key = SessionKey::new("85R", "house");
        let dir = temp.path().join("bills/tx/85R/house");
        std::fs::create_dir_all(&dir).expect("dirs create");
        std::fs::write(dir.join("HB1..json"), r#"{"bill_id": "HB 1", "votes": []}"#)
            .expect("file writes");

        let corpus = Corpus::new(temp.path(), "tx");
        let bills = corpus.load_session_bills(&key).await.expect("session loads");
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].bill_id, "HB 1");

        let err = corpus.load_bill(&key, "../HB1..json").await.unwrap_err();
        assert!(matches!(err, CorpusError::InvalidId(_)));
    }

    #[tokio::test]
    async fn path_traversal_ids_are_rejected() {
        let corpus = Corpus::new("/data", "tx");
        for id in ["../secrets", "a/b", "", ".."] {
            let err = corpus.load_legislator(id).await.unwrap_err();
            assert!(matches!(err, CorpusError::InvalidId(_)), "id {id:?}");
        }
    }
}
