//! JSON documents on the local filesystem backing the configuration and feedback repos.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, warn};

use crate::{
    application::repos::{ConfigRepo, FeedbackRepo, RepoError},
    config::StorageSettings,
    domain::{feedback::FeedbackEvent, portfolio::PortfolioConfig},
};

const CONFIG_DOCUMENT: &str = "configuration";
const FEEDBACK_DOCUMENT: &str = "feedback log";

/// File-backed store holding one configuration document and one feedback array.
#[derive(Debug)]
pub struct JsonFileStore {
    config_path: PathBuf,
    feedback_path: PathBuf,
    append_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(config_path: PathBuf, feedback_path: PathBuf) -> Self {
        Self {
            config_path,
            feedback_path,
            append_lock: Mutex::new(()),
        }
    }

    pub fn from_settings(storage: &StorageSettings) -> Self {
        Self::new(storage.config_path(), storage.feedback_path())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn feedback_path(&self) -> &Path {
        &self.feedback_path
    }
}

#[async_trait]
impl ConfigRepo for JsonFileStore {
    async fn load_config(&self) -> Result<Option<PortfolioConfig>, RepoError> {
        let Some(raw) = read_optional(&self.config_path).await? else {
            return Ok(None);
        };
        let config = PortfolioConfig::from_json(&raw)
            .map_err(|err| RepoError::corrupt(CONFIG_DOCUMENT, err))?;
        Ok(Some(config))
    }

    async fn save_config(&self, config: &PortfolioConfig) -> Result<(), RepoError> {
        write_json(&self.config_path, config).await?;
        debug!(
            target: "vitrine::store",
            path = %self.config_path.display(),
            "configuration saved"
        );
        Ok(())
    }
}

#[async_trait]
impl FeedbackRepo for JsonFileStore {
    async fn append_event(&self, event: &FeedbackEvent) -> Result<(), RepoError> {
        let _guard = self.append_lock.lock().await;

        let mut entries = match read_entries(&self.feedback_path).await {
            Ok(entries) => entries,
            Err(RepoError::Corrupt { message, .. }) => {
                let aside = set_aside(&self.feedback_path).await?;
                warn!(
                    target: "vitrine::store",
                    path = %self.feedback_path.display(),
                    moved_to = %aside.display(),
                    error = %message,
                    "feedback log is not a JSON array; starting a new one"
                );
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        entries.push(serde_json::to_value(event).map_err(RepoError::from_persistence)?);
        write_json(&self.feedback_path, &entries).await
    }

    async fn list_events(&self) -> Result<Vec<FeedbackEvent>, RepoError> {
        let entries = read_entries(&self.feedback_path).await?;
        let total = entries.len();
        let events: Vec<FeedbackEvent> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        if events.len() < total {
            warn!(
                target: "vitrine::store",
                path = %self.feedback_path.display(),
                skipped = total - events.len(),
                "feedback log holds entries that are not events"
            );
        }
        Ok(events)
    }
}

/// The log as raw JSON entries. Only a document that is not an array is corrupt.
async fn read_entries(path: &Path) -> Result<Vec<Value>, RepoError> {
    match read_optional(path).await? {
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|err| RepoError::corrupt(FEEDBACK_DOCUMENT, err))
        }
        None => Ok(Vec::new()),
    }
}

/// Move an unreadable document to `<name>.corrupt` so a fresh one can take its place.
async fn set_aside(path: &Path) -> Result<PathBuf, RepoError> {
    let aside = sibling_path(path, ".corrupt");
    fs::rename(path, &aside)
        .await
        .map_err(|err| io_failure("set aside", path, err))?;
    Ok(aside)
}

async fn read_optional(path: &Path) -> Result<Option<String>, RepoError> {
    match fs::read_to_string(path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(RepoError::from_persistence(format!(
            "failed to read `{}`: {err}",
            path.display()
        ))),
    }
}

/// Write pretty JSON to a sibling temporary file, then rename it over `path`.
async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), RepoError> {
    let mut payload = serde_json::to_vec_pretty(value).map_err(RepoError::from_persistence)?;
    payload.push(b'\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| io_failure("create directory", parent, err))?;
    }

    let staging = sibling_path(path, ".tmp");
    let mut file = fs::File::create(&staging)
        .await
        .map_err(|err| io_failure("create", &staging, err))?;
    file.write_all(&payload)
        .await
        .map_err(|err| io_failure("write", &staging, err))?;
    file.sync_all()
        .await
        .map_err(|err| io_failure("sync", &staging, err))?;
    drop(file);

    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(io_failure("replace", path, err));
    }
    Ok(())
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> RepoError {
    RepoError::from_persistence(format!("failed to {action} `{}`: {err}", path.display()))
}
