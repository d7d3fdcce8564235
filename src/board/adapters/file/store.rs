//! JSON file store for the serialized board.
//!
//! The board is written as an envelope carrying a format version, a SHA-256
//! digest of the state and the state itself. Writes go to a temporary file
//! in the same directory which is then renamed over the target, so readers
//! never observe a half-written board. A digest mismatch on load is
//! reported as corruption.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use tracing::debug;

use crate::board::{
    domain::BoardSnapshot,
    ports::{BoardPersistence, PersistenceError, PersistenceResult},
};

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "board.json";

const FORMAT_VERSION: u32 = 1;

/// Board store keeping one JSON file in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileBoardStore {
    directory: Utf8PathBuf,
    file_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    digest: String,
    state: Value,
}

impl JsonFileBoardStore {
    /// Creates a store writing [`DEFAULT_FILE_NAME`] inside `directory`.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_name: DEFAULT_FILE_NAME.to_owned(),
        }
    }

    /// Sets the file name used inside the directory.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Returns the full path of the board file.
    #[must_use]
    pub fn path(&self) -> Utf8PathBuf {
        self.directory.join(&self.file_name)
    }

    fn temporary_name(&self) -> String {
        format!(".{}.tmp", self.file_name)
    }
}

fn digest_of(state: &Value) -> PersistenceResult<String> {
    let encoded = serde_json::to_vec(state)?;
    Ok(Sha256::digest(&encoded)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect())
}

fn read_payload(directory: &Utf8Path, file_name: &str) -> PersistenceResult<Option<String>> {
    let dir = match Dir::open_ambient_dir(directory, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(PersistenceError::backend(err)),
    };
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(PersistenceError::backend(err)),
    }
}

fn write_payload(
    directory: &Utf8Path,
    file_name: &str,
    temporary_name: &str,
    payload: &[u8],
) -> PersistenceResult<()> {
    Dir::create_ambient_dir_all(directory, ambient_authority())
        .map_err(PersistenceError::backend)?;
    let dir =
        Dir::open_ambient_dir(directory, ambient_authority()).map_err(PersistenceError::backend)?;
    dir.write(temporary_name, payload)
        .map_err(PersistenceError::backend)?;
    dir.rename(temporary_name, &dir, file_name)
        .map_err(PersistenceError::backend)
}

fn decode(payload: &str) -> PersistenceResult<BoardSnapshot> {
    let envelope: Envelope = serde_json::from_str(payload)
        .map_err(|err| PersistenceError::Corrupt(format!("unreadable envelope: {err}")))?;
    if envelope.version != FORMAT_VERSION {
        return Err(PersistenceError::Corrupt(format!(
            "unsupported format version {}",
            envelope.version
        )));
    }
    let expected = digest_of(&envelope.state)?;
    if expected != envelope.digest {
        return Err(PersistenceError::Corrupt(
            "digest does not match stored state".to_owned(),
        ));
    }
    serde_json::from_value(envelope.state)
        .map_err(|err| PersistenceError::Corrupt(format!("unreadable board state: {err}")))
}

#[async_trait]
impl BoardPersistence for JsonFileBoardStore {
    #[tracing::instrument(skip(self), fields(path = %self.path()))]
    async fn load(&self) -> PersistenceResult<Option<BoardSnapshot>> {
        let directory = self.directory.clone();
        let file_name = self.file_name.clone();
        debug!("loading board file");
        let payload = tokio::task::spawn_blocking(move || read_payload(&directory, &file_name))
            .await
            .map_err(PersistenceError::backend)??;
        payload.as_deref().map(decode).transpose()
    }

    #[tracing::instrument(skip(self, snapshot), fields(path = %self.path()))]
    async fn save(&self, snapshot: &BoardSnapshot) -> PersistenceResult<()> {
        let state = serde_json::to_value(snapshot)?;
        let digest = digest_of(&state)?;
        let payload = serde_json::to_vec_pretty(&Envelope {
            version: FORMAT_VERSION,
            digest,
            state,
        })?;

        let directory = self.directory.clone();
        let file_name = self.file_name.clone();
        let temporary_name = self.temporary_name();
        debug!(bytes = payload.len(), "writing board file");
        tokio::task::spawn_blocking(move || {
            write_payload(&directory, &file_name, &temporary_name, &payload)
        })
        .await
        .map_err(PersistenceError::backend)?
    }
}
