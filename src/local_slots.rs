use crate::{
    backend::{decode_feed, SlotBackend},
    error::FetchError,
    types::Slot,
};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Serves the slot feed from a JSON file in the upstream format. The file is
/// re-read on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct LocalSlots {
    path: PathBuf,
}

impl LocalSlots {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SlotBackend for LocalSlots {
    async fn fetch_slots(&self) -> Result<Vec<Slot>, FetchError> {
        let contents = fs::read(&self.path).await?;
        decode_feed(&contents)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_slots_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"start": "2024-08-20T10:00:00Z", "tags": ["18holes"]}},
                {{"start": "2024-08-21T08:15:00Z"}}
            ]"#
        )
        .unwrap();

        let local_slots = LocalSlots::new(file.path());
        let slots = local_slots.fetch_slots().await.unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].tags, vec![String::from("18holes")]);
        assert!(slots[1].tags.is_empty());

        // picks up changes between calls
        std::fs::write(file.path(), "[]").unwrap();
        assert!(local_slots.fetch_slots().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let local_slots = LocalSlots::new(dir.path().join("slots.json"));

        let err = local_slots.fetch_slots().await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"slots": []}}"#).unwrap();

        let err = LocalSlots::new(file.path()).fetch_slots().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
