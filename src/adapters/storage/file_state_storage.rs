//! File-based State Storage Adapter
//!
//! Stores each user's game state as a YAML file under a table directory:
//!
//! ```text
//! <data_dir>/<table>/<encoded user id>.yaml
//! ```

use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::UserId;
use crate::domain::game::{GameState, GameStateRecord};
use crate::ports::{PersistenceError, PersistentStateStore};

/// File-based storage for per-user game state
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    table_dir: PathBuf,
}

impl FileStateStorage {
    /// Create a new file storage rooted at a table directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data/cat-facts");
    /// ```
    pub fn new<P: AsRef<Path>>(table_dir: P) -> Self {
        Self {
            table_dir: table_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory that holds the user records
    pub fn table_dir(&self) -> &Path {
        &self.table_dir
    }

    /// Get the record path for a user
    fn record_path(&self, user_id: &UserId) -> PathBuf {
        self.table_dir
            .join(format!("{}.yaml", encode_file_stem(user_id.as_str())))
    }
}

/// Platform user ids contain dots and may contain other characters that are
/// unsafe in file names; everything outside `[A-Za-z0-9_-]` is written as `%xx`.
fn encode_file_stem(raw: &str) -> String {
    let mut stem = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            let _ = write!(stem, "%{:02x}", byte);
        }
    }
    stem
}

#[async_trait]
impl PersistentStateStore for FileStateStorage {
    async fn load(&self, user_id: &UserId) -> Result<Option<GameState>, PersistenceError> {
        let file_path = self.record_path(user_id);

        let yaml = match fs::read_to_string(&file_path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistenceError::Io(e.to_string())),
        };

        let record: GameStateRecord = serde_yaml::from_str(&yaml)
            .map_err(|e| PersistenceError::Deserialization(e.to_string()))?;

        let state = GameState::try_from(record).map_err(|source| PersistenceError::CorruptRecord {
            user_id: user_id.clone(),
            source,
        })?;

        Ok(Some(state))
    }

    async fn save(&self, user_id: &UserId, state: &GameState) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.table_dir)
            .await
            .map_err(|e| PersistenceError::Io(e.to_string()))?;

        let yaml = serde_yaml::to_string(state)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        // Write to a sibling temp file, then rename over the record
        let file_path = self.record_path(user_id);
        let tmp_path = file_path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml)
            .await
            .map_err(|e| PersistenceError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| PersistenceError::Io(e.to_string()))?;

        tracing::debug!(path = %file_path.display(), "Wrote game state record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facts::{FactCatalog, FactNumber};
    use crate::domain::game::FactsIndex;
    use tempfile::TempDir;

    fn test_user() -> UserId {
        UserId::new("amzn1.ask.account.TEST/USER").unwrap()
    }

    fn played_state() -> GameState {
        let mut state = GameState::new();
        state.jump_to(FactNumber::try_new(4).unwrap(), &FactCatalog::cat_facts());
        state.record_play();
        state
    }

    #[tokio::test]
    async fn save_and_load_state() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path().join("table"));

        let state = played_state();
        storage.save(&test_user(), &state).await.unwrap();

        let loaded = storage.load(&test_user()).await.unwrap();
        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn load_missing_user_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path());

        assert_eq!(storage.load(&test_user()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn record_file_name_is_path_safe() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path());

        storage.save(&test_user(), &GameState::new()).await.unwrap();

        let expected = temp_dir
            .path()
            .join("amzn1%2eask%2eaccount%2eTEST%2fUSER.yaml");
        assert!(expected.exists());
        assert!(!expected.with_extension("yaml.tmp").exists());
    }

    #[tokio::test]
    async fn record_is_human_readable_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path());
        storage.save(&test_user(), &played_state()).await.unwrap();

        let yaml = std::fs::read_to_string(storage.record_path(&test_user())).unwrap();
        assert!(yaml.contains("times_played: 1"));
        assert!(yaml.contains("facts_index: 3"));
    }

    #[tokio::test]
    async fn legacy_exhausted_record_loads() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path());
        std::fs::write(
            storage.record_path(&test_user()),
            "times_played: 3\nfacts_index: 10\n",
        )
        .unwrap();

        let state = storage.load(&test_user()).await.unwrap().unwrap();
        assert!(state.is_exhausted());
        assert_eq!(state.facts_index(), FactsIndex::LAST);
        assert_eq!(state.times_played(), 3);
    }

    #[tokio::test]
    async fn out_of_range_record_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path());
        std::fs::write(
            storage.record_path(&test_user()),
            "times_played: 0\nfacts_index: 42\n",
        )
        .unwrap();

        let result = storage.load(&test_user()).await;
        assert!(matches!(result, Err(PersistenceError::CorruptRecord { .. })));
    }

    #[tokio::test]
    async fn malformed_yaml_is_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStateStorage::new(temp_dir.path());
        std::fs::write(storage.record_path(&test_user()), "facts_index: [").unwrap();

        let result = storage.load(&test_user()).await;
        assert!(matches!(result, Err(PersistenceError::Deserialization(_))));
    }

    #[test]
    fn encode_file_stem_keeps_safe_characters() {
        assert_eq!(encode_file_stem("user_01-A"), "user_01-A");
        assert_eq!(encode_file_stem("../x"), "%2e%2e%2fx");
    }
}
